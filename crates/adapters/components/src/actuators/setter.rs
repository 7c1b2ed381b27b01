//! Range setters: unitless actuators with reconfigurable limits.
//!
//! Both setters start with [`DEFAULT_LIMITS`]. Changing the limits keeps the
//! current setting when it still fits, otherwise the setting moves to the new
//! lower bound.

use smarthome_domain::catalogue::Catalogue;
use smarthome_domain::component::Actuator;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::functionality::ActuatorFunctionality;
use smarthome_domain::name::validate_name;
use smarthome_domain::value::{
    Measurement, MeasurementValue, SharedValueFactory, parse_decimal, parse_integer,
};

/// Inclusive range used until `set_limits` is called.
pub const DEFAULT_LIMITS: (i64, i64) = (0, 100);

/// Actuator holding an integer within configurable limits.
#[derive(Debug)]
pub struct IntegerSetter {
    name: String,
    factory: SharedValueFactory,
    limits: (i64, i64),
    setting: Option<MeasurementValue>,
}

impl IntegerSetter {
    fn empty_value(&self) -> Option<MeasurementValue> {
        self.factory.bounded_integer(self.limits.0, self.limits.1)
    }
}

impl Actuator for IntegerSetter {
    fn name(&self) -> &str {
        &self.name
    }

    fn functionality(&self) -> ActuatorFunctionality {
        ActuatorFunctionality::IntegerSetter
    }

    fn setting(&self) -> Option<&MeasurementValue> {
        self.setting.as_ref()
    }

    fn apply(&mut self, raw: &str) -> bool {
        let Some(mut value) = self.setting.clone().or_else(|| self.empty_value()) else {
            return false;
        };
        if !value.set_value(raw) {
            return false;
        }
        self.setting = Some(value);
        true
    }

    fn set_limits(&mut self, lower: &str, upper: &str) -> bool {
        let (Some(lower), Some(upper)) = (parse_integer(lower), parse_integer(upper)) else {
            return false;
        };
        let Some(mut fresh) = self.factory.bounded_integer(lower, upper) else {
            return false;
        };
        if let Some(current) = self.setting.as_ref().map(ToString::to_string) {
            if fresh.set_value(&current) {
                self.setting = Some(fresh);
            } else {
                self.setting = self.factory.bounded_integer(lower, upper);
            }
        }
        self.limits = (lower, upper);
        true
    }
}

/// Actuator holding a decimal within configurable limits.
#[derive(Debug)]
pub struct DecimalSetter {
    name: String,
    factory: SharedValueFactory,
    limits: (f64, f64),
    setting: Option<MeasurementValue>,
}

impl DecimalSetter {
    fn empty_value(&self) -> Option<MeasurementValue> {
        self.factory.bounded_decimal(self.limits.0, self.limits.1)
    }
}

impl Actuator for DecimalSetter {
    fn name(&self) -> &str {
        &self.name
    }

    fn functionality(&self) -> ActuatorFunctionality {
        ActuatorFunctionality::DecimalSetter
    }

    fn setting(&self) -> Option<&MeasurementValue> {
        self.setting.as_ref()
    }

    fn apply(&mut self, raw: &str) -> bool {
        let Some(mut value) = self.setting.clone().or_else(|| self.empty_value()) else {
            return false;
        };
        if !value.set_value(raw) {
            return false;
        }
        self.setting = Some(value);
        true
    }

    fn set_limits(&mut self, lower: &str, upper: &str) -> bool {
        let (Some(lower), Some(upper)) = (parse_decimal(lower), parse_decimal(upper)) else {
            return false;
        };
        let Some(mut fresh) = self.factory.bounded_decimal(lower, upper) else {
            return false;
        };
        if let Some(current) = self.setting.as_ref().map(ToString::to_string) {
            if fresh.set_value(&current) {
                self.setting = Some(fresh);
            } else {
                self.setting = self.factory.bounded_decimal(lower, upper);
            }
        }
        self.limits = (lower, upper);
        true
    }
}

/// # Errors
///
/// Fails when `name` is blank or the catalogue does not enable
/// `IntegerSetter`.
pub fn integer_setter(
    catalogue: &Catalogue,
    name: &str,
    factory: SharedValueFactory,
) -> Result<Box<dyn Actuator>, SmartHomeError> {
    let name = validate_name(name)?;
    catalogue.resolve_functionality(ActuatorFunctionality::IntegerSetter)?;
    Ok(Box::new(IntegerSetter {
        name,
        factory,
        limits: DEFAULT_LIMITS,
        setting: None,
    }))
}

/// # Errors
///
/// Fails when `name` is blank or the catalogue does not enable
/// `DecimalSetter`.
pub fn decimal_setter(
    catalogue: &Catalogue,
    name: &str,
    factory: SharedValueFactory,
) -> Result<Box<dyn Actuator>, SmartHomeError> {
    let name = validate_name(name)?;
    catalogue.resolve_functionality(ActuatorFunctionality::DecimalSetter)?;
    #[allow(clippy::cast_precision_loss)]
    let limits = (DEFAULT_LIMITS.0 as f64, DEFAULT_LIMITS.1 as f64);
    Ok(Box::new(DecimalSetter {
        name,
        factory,
        limits,
        setting: None,
    }))
}
