//! Measuring sensors: one implementation per sensor functionality.
//!
//! Every sensor stores the last accepted reading. The value is created
//! through the value factory on the first successful `record`.

use smarthome_domain::catalogue::Catalogue;
use smarthome_domain::component::Sensor;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::functionality::SensorFunctionality;
use smarthome_domain::name::validate_name;
use smarthome_domain::value::{Measurement, MeasurementValue, SharedValueFactory};

/// A sensor holding the latest reading for its functionality.
#[derive(Debug)]
pub struct MeasuringSensor {
    name: String,
    functionality: SensorFunctionality,
    factory: SharedValueFactory,
    reading: Option<MeasurementValue>,
}

impl MeasuringSensor {
    fn empty_value(&self) -> MeasurementValue {
        match self.functionality {
            SensorFunctionality::Temperature => self.factory.celsius(),
            SensorFunctionality::Humidity => self.factory.percentage(),
            SensorFunctionality::Power => self.factory.watt(),
            SensorFunctionality::Energy => self.factory.watt_hour(),
            SensorFunctionality::SolarIrradiance => self.factory.irradiance(),
            SensorFunctionality::Wind => self.factory.wind(),
        }
    }
}

impl Sensor for MeasuringSensor {
    fn name(&self) -> &str {
        &self.name
    }

    fn functionality(&self) -> SensorFunctionality {
        self.functionality
    }

    fn reading(&self) -> Option<&MeasurementValue> {
        self.reading.as_ref()
    }

    fn record(&mut self, raw: &str) -> bool {
        let mut value = match &self.reading {
            Some(current) => current.clone(),
            None => self.empty_value(),
        };
        if !value.set_value(raw) {
            return false;
        }
        self.reading = Some(value);
        true
    }
}

fn measuring(
    catalogue: &Catalogue,
    name: &str,
    factory: SharedValueFactory,
    functionality: SensorFunctionality,
) -> Result<Box<dyn Sensor>, SmartHomeError> {
    let name = validate_name(name)?;
    catalogue.resolve_functionality(functionality)?;
    Ok(Box::new(MeasuringSensor {
        name,
        functionality,
        factory,
        reading: None,
    }))
}

/// Ambient temperature in degrees Celsius.
///
/// # Errors
///
/// Fails when `name` is blank or the catalogue does not enable
/// `Temperature`.
pub fn temperature(
    catalogue: &Catalogue,
    name: &str,
    factory: SharedValueFactory,
) -> Result<Box<dyn Sensor>, SmartHomeError> {
    measuring(catalogue, name, factory, SensorFunctionality::Temperature)
}

/// Relative humidity in percent.
///
/// # Errors
///
/// Fails when `name` is blank or the catalogue does not enable `Humidity`.
pub fn humidity(
    catalogue: &Catalogue,
    name: &str,
    factory: SharedValueFactory,
) -> Result<Box<dyn Sensor>, SmartHomeError> {
    measuring(catalogue, name, factory, SensorFunctionality::Humidity)
}

/// Instantaneous power draw in watts.
///
/// # Errors
///
/// Fails when `name` is blank or the catalogue does not enable `Power`.
pub fn power(
    catalogue: &Catalogue,
    name: &str,
    factory: SharedValueFactory,
) -> Result<Box<dyn Sensor>, SmartHomeError> {
    measuring(catalogue, name, factory, SensorFunctionality::Power)
}

/// Consumed energy in watt-hours.
///
/// # Errors
///
/// Fails when `name` is blank or the catalogue does not enable `Energy`.
pub fn energy(
    catalogue: &Catalogue,
    name: &str,
    factory: SharedValueFactory,
) -> Result<Box<dyn Sensor>, SmartHomeError> {
    measuring(catalogue, name, factory, SensorFunctionality::Energy)
}

/// Solar irradiance in W/m².
///
/// # Errors
///
/// Fails when `name` is blank or the catalogue does not enable
/// `SolarIrradiance`.
pub fn solar_irradiance(
    catalogue: &Catalogue,
    name: &str,
    factory: SharedValueFactory,
) -> Result<Box<dyn Sensor>, SmartHomeError> {
    measuring(catalogue, name, factory, SensorFunctionality::SolarIrradiance)
}

/// Wind speed and direction.
///
/// # Errors
///
/// Fails when `name` is blank or the catalogue does not enable `Wind`.
pub fn wind(
    catalogue: &Catalogue,
    name: &str,
    factory: SharedValueFactory,
) -> Result<Box<dyn Sensor>, SmartHomeError> {
    measuring(catalogue, name, factory, SensorFunctionality::Wind)
}
