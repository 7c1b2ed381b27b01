//! Location: postal address and GPS position of the house.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A GPS position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsCoordinates {
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

impl GpsCoordinates {
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when latitude is outside `[-90, 90]`,
    /// longitude outside `[-180, 180]`, or altitude is not finite.
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Result<Self, ValidationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::LongitudeOutOfRange(longitude));
        }
        if !altitude.is_finite() {
            return Err(ValidationError::InvalidAltitude(altitude));
        }
        Ok(Self {
            latitude,
            longitude,
            altitude,
        })
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[must_use]
    pub fn altitude(&self) -> f64 {
        self.altitude
    }
}

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    postal_code: String,
    city: String,
    country: String,
}

impl Address {
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyAddressField`] for the first blank field.
    pub fn new(
        street: &str,
        postal_code: &str,
        city: &str,
        country: &str,
    ) -> Result<Self, ValidationError> {
        for (field, value) in [
            ("street", street),
            ("postal code", postal_code),
            ("city", city),
            ("country", country),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyAddressField { field });
            }
        }
        Ok(Self {
            street: street.to_string(),
            postal_code: postal_code.to_string(),
            city: city.to_string(),
            country: country.to_string(),
        })
    }

    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    #[must_use]
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }
}

/// Where the house is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: Address,
    pub coordinates: GpsCoordinates,
}
