//! Measurement values: unit-tagged readings and settings with validation.
//!
//! Every value accepts new input as text through
//! [`Measurement::set_value`]. Invalid text is rejected with `false` and
//! leaves the previous value untouched; the `Display` form is the value
//! followed by its fixed unit.

mod bounded;
mod factory;
mod scalar;
mod wind;

use std::fmt;

pub use bounded::{BoundedDecimal, BoundedInteger};
pub use factory::{SharedValueFactory, StandardValueFactory, ValueFactory};
pub use scalar::{Celsius, Irradiance, Percentage, Watt, WattHour};
pub use wind::Wind;

/// Common behaviour of every measurement value.
pub trait Measurement: fmt::Display {
    /// The fixed unit this value is expressed in (may be empty).
    fn unit(&self) -> &'static str;

    /// Validate `raw` and, if it is acceptable, store it.
    ///
    /// Returns `false` (and keeps the current value) when `raw` is malformed
    /// or out of range.
    fn set_value(&mut self, raw: &str) -> bool;
}

/// A reading or setting held by a sensor or actuator.
#[derive(Debug, Clone, PartialEq)]
pub enum MeasurementValue {
    Temperature(Celsius),
    Percentage(Percentage),
    Power(Watt),
    Energy(WattHour),
    Irradiance(Irradiance),
    Integer(BoundedInteger),
    Decimal(BoundedDecimal),
    Wind(Wind),
}

impl Measurement for MeasurementValue {
    fn unit(&self) -> &'static str {
        match self {
            Self::Temperature(v) => v.unit(),
            Self::Percentage(v) => v.unit(),
            Self::Power(v) => v.unit(),
            Self::Energy(v) => v.unit(),
            Self::Irradiance(v) => v.unit(),
            Self::Integer(v) => v.unit(),
            Self::Decimal(v) => v.unit(),
            Self::Wind(v) => v.unit(),
        }
    }

    fn set_value(&mut self, raw: &str) -> bool {
        match self {
            Self::Temperature(v) => v.set_value(raw),
            Self::Percentage(v) => v.set_value(raw),
            Self::Power(v) => v.set_value(raw),
            Self::Energy(v) => v.set_value(raw),
            Self::Irradiance(v) => v.set_value(raw),
            Self::Integer(v) => v.set_value(raw),
            Self::Decimal(v) => v.set_value(raw),
            Self::Wind(v) => v.set_value(raw),
        }
    }
}

impl fmt::Display for MeasurementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature(v) => v.fmt(f),
            Self::Percentage(v) => v.fmt(f),
            Self::Power(v) => v.fmt(f),
            Self::Energy(v) => v.fmt(f),
            Self::Irradiance(v) => v.fmt(f),
            Self::Integer(v) => v.fmt(f),
            Self::Decimal(v) => v.fmt(f),
            Self::Wind(v) => v.fmt(f),
        }
    }
}

/// Parse a plain decimal: optional sign, digits, optional `.` and digits.
///
/// Exponents, `NaN`, `inf` and empty fractions are rejected, as are digit
/// strings too long to stay finite.
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let unsigned = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    let (integral, fraction) = match unsigned.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (unsigned, None),
    };
    if !is_digits(integral) || fraction.is_some_and(|f| !is_digits(f)) {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a plain integer: optional sign followed by digits.
#[must_use]
pub fn parse_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let unsigned = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    if !is_digits(unsigned) {
        return None;
    }
    raw.parse().ok()
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
