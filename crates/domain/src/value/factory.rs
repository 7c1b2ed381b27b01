//! Value factory: the capability components use to create their readings.

use std::fmt;
use std::sync::Arc;

use super::{
    BoundedDecimal, BoundedInteger, Celsius, Irradiance, MeasurementValue, Percentage, Watt,
    WattHour, Wind,
};

/// Creates fresh [`MeasurementValue`]s of each variant.
///
/// Components receive a factory at construction time and call it the first
/// time they need to hold a value.
pub trait ValueFactory: fmt::Debug + Send + Sync {
    fn celsius(&self) -> MeasurementValue;

    fn percentage(&self) -> MeasurementValue;

    fn watt(&self) -> MeasurementValue;

    fn watt_hour(&self) -> MeasurementValue;

    fn irradiance(&self) -> MeasurementValue;

    fn wind(&self) -> MeasurementValue;

    /// Returns `None` when `lower > upper`.
    fn bounded_integer(&self, lower: i64, upper: i64) -> Option<MeasurementValue>;

    /// Returns `None` when the bounds are not finite or `lower > upper`.
    fn bounded_decimal(&self, lower: f64, upper: f64) -> Option<MeasurementValue>;
}

/// Factory handle shared between a service and the components it creates.
pub type SharedValueFactory = Arc<dyn ValueFactory>;

/// Factory producing zero-valued scalars and bounded values at their lower bound.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardValueFactory;

impl StandardValueFactory {
    /// Wrap a new factory in a [`SharedValueFactory`] handle.
    #[must_use]
    pub fn shared() -> SharedValueFactory {
        Arc::new(Self)
    }
}

impl ValueFactory for StandardValueFactory {
    fn celsius(&self) -> MeasurementValue {
        MeasurementValue::Temperature(Celsius::default())
    }

    fn percentage(&self) -> MeasurementValue {
        MeasurementValue::Percentage(Percentage::default())
    }

    fn watt(&self) -> MeasurementValue {
        MeasurementValue::Power(Watt::default())
    }

    fn watt_hour(&self) -> MeasurementValue {
        MeasurementValue::Energy(WattHour::default())
    }

    fn irradiance(&self) -> MeasurementValue {
        MeasurementValue::Irradiance(Irradiance::default())
    }

    fn wind(&self) -> MeasurementValue {
        MeasurementValue::Wind(Wind::default())
    }

    fn bounded_integer(&self, lower: i64, upper: i64) -> Option<MeasurementValue> {
        BoundedInteger::new(lower, upper).map(MeasurementValue::Integer)
    }

    fn bounded_decimal(&self, lower: f64, upper: f64) -> Option<MeasurementValue> {
        BoundedDecimal::new(lower, upper).map(MeasurementValue::Decimal)
    }
}
