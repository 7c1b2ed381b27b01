//! Actuators driving a unit-tagged level: blinds position and thermostat target.

use smarthome_domain::catalogue::Catalogue;
use smarthome_domain::component::Actuator;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::functionality::ActuatorFunctionality;
use smarthome_domain::name::validate_name;
use smarthome_domain::value::{Measurement, MeasurementValue, SharedValueFactory};

/// An actuator whose setting is a scalar with a fixed unit.
///
/// Blinds take a position in percent (0 closed, 100 open); a thermostat takes
/// a target temperature in degrees Celsius.
#[derive(Debug)]
pub struct LevelActuator {
    name: String,
    functionality: ActuatorFunctionality,
    factory: SharedValueFactory,
    setting: Option<MeasurementValue>,
}

impl LevelActuator {
    fn empty_value(&self) -> Option<MeasurementValue> {
        match self.functionality {
            ActuatorFunctionality::Blinds => Some(self.factory.percentage()),
            ActuatorFunctionality::Thermostat => Some(self.factory.celsius()),
            ActuatorFunctionality::OnOff
            | ActuatorFunctionality::IntegerSetter
            | ActuatorFunctionality::DecimalSetter => None,
        }
    }
}

impl Actuator for LevelActuator {
    fn name(&self) -> &str {
        &self.name
    }

    fn functionality(&self) -> ActuatorFunctionality {
        self.functionality
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
}

fn level(
    catalogue: &Catalogue,
    name: &str,
    factory: SharedValueFactory,
    functionality: ActuatorFunctionality,
) -> Result<Box<dyn Actuator>, SmartHomeError> {
    let name = validate_name(name)?;
    catalogue.resolve_functionality(functionality)?;
    Ok(Box::new(LevelActuator {
        name,
        functionality,
        factory,
        setting: None,
    }))
}

/// # Errors
///
/// Fails when `name` is blank or the catalogue does not enable `Blinds`.
pub fn blinds(
    catalogue: &Catalogue,
    name: &str,
    factory: SharedValueFactory,
) -> Result<Box<dyn Actuator>, SmartHomeError> {
    level(catalogue, name, factory, ActuatorFunctionality::Blinds)
}

/// # Errors
///
/// Fails when `name` is blank or the catalogue does not enable `Thermostat`.
pub fn thermostat(
    catalogue: &Catalogue,
    name: &str,
    factory: SharedValueFactory,
) -> Result<Box<dyn Actuator>, SmartHomeError> {
    level(catalogue, name, factory, ActuatorFunctionality::Thermostat)
}
