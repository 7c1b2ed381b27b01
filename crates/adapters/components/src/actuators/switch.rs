//! On/off switch backed by a `0..=1` bounded integer.

use smarthome_domain::catalogue::Catalogue;
use smarthome_domain::component::Actuator;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::functionality::ActuatorFunctionality;
use smarthome_domain::name::validate_name;
use smarthome_domain::value::{Measurement, MeasurementValue, SharedValueFactory};

/// A two-state switch. Accepts `0`/`1` and the words `off`/`on`.
#[derive(Debug)]
pub struct Switch {
    name: String,
    factory: SharedValueFactory,
    setting: Option<MeasurementValue>,
}

impl Actuator for Switch {
    fn name(&self) -> &str {
        &self.name
    }

    fn functionality(&self) -> ActuatorFunctionality {
        ActuatorFunctionality::OnOff
    }

    fn setting(&self) -> Option<&MeasurementValue> {
        self.setting.as_ref()
    }

    fn apply(&mut self, raw: &str) -> bool {
        let raw = match raw.trim().to_ascii_lowercase().as_str() {
            "on" => "1".to_string(),
            "off" => "0".to_string(),
            other => other.to_string(),
        };
        let Some(mut value) = self
            .setting
            .clone()
            .or_else(|| self.factory.bounded_integer(0, 1))
        else {
            return false;
        };
        if !value.set_value(&raw) {
            return false;
        }
        self.setting = Some(value);
        true
    }
}

/// # Errors
///
/// Fails when `name` is blank or the catalogue does not enable `OnOff`.
pub fn switch(
    catalogue: &Catalogue,
    name: &str,
    factory: SharedValueFactory,
) -> Result<Box<dyn Actuator>, SmartHomeError> {
    let name = validate_name(name)?;
    catalogue.resolve_functionality(ActuatorFunctionality::OnOff)?;
    Ok(Box::new(Switch {
        name,
        factory,
        setting: None,
    }))
}
