//! Test doubles: minimal components and a catalogue wired to them.

use crate::catalogue::{Catalogue, CatalogueConfig, ComponentRegistry};
use crate::component::{Actuator, Sensor};
use crate::error::SmartHomeError;
use crate::functionality::{ActuatorFunctionality, SensorFunctionality};
use crate::name::validate_name;
use crate::value::{Measurement, MeasurementValue, SharedValueFactory};

pub const TEMPERATURE_IMPL: &str = "test.temperature";
pub const HUMIDITY_IMPL: &str = "test.humidity";
pub const SWITCH_IMPL: &str = "test.switch";

pub const TEMPERATURE_MODEL: &str = "TS-1";
pub const HUMIDITY_MODEL: &str = "HS-1";
pub const SWITCH_MODEL: &str = "SW-1";

#[derive(Debug)]
pub struct FakeSensor {
    name: String,
    functionality: SensorFunctionality,
    factory: SharedValueFactory,
    reading: Option<MeasurementValue>,
}

impl Sensor for FakeSensor {
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
        let mut value = self.reading.clone().unwrap_or_else(|| match self.functionality {
            SensorFunctionality::Humidity => self.factory.percentage(),
            _ => self.factory.celsius(),
        });
        if !value.set_value(raw) {
            return false;
        }
        self.reading = Some(value);
        true
    }
}

#[derive(Debug)]
pub struct FakeSwitch {
    name: String,
    setting: Option<MeasurementValue>,
    factory: SharedValueFactory,
}

impl Actuator for FakeSwitch {
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
        let Some(mut value) = self
            .setting
            .clone()
            .or_else(|| self.factory.bounded_integer(0, 1))
        else {
            return false;
        };
        if !value.set_value(raw) {
            return false;
        }
        self.setting = Some(value);
        true
    }
}

fn fake_sensor(
    catalogue: &Catalogue,
    name: &str,
    factory: SharedValueFactory,
    functionality: SensorFunctionality,
) -> Result<Box<dyn Sensor>, SmartHomeError> {
    let name = validate_name(name)?;
    catalogue.resolve_functionality(functionality)?;
    Ok(Box::new(FakeSensor {
        name,
        functionality,
        factory,
        reading: None,
    }))
}

pub fn temperature_sensor(
    catalogue: &Catalogue,
    name: &str,
    factory: SharedValueFactory,
) -> Result<Box<dyn Sensor>, SmartHomeError> {
    fake_sensor(catalogue, name, factory, SensorFunctionality::Temperature)
}

pub fn humidity_sensor(
    catalogue: &Catalogue,
    name: &str,
    factory: SharedValueFactory,
) -> Result<Box<dyn Sensor>, SmartHomeError> {
    fake_sensor(catalogue, name, factory, SensorFunctionality::Humidity)
}

pub fn switch(
    catalogue: &Catalogue,
    name: &str,
    factory: SharedValueFactory,
) -> Result<Box<dyn Actuator>, SmartHomeError> {
    let name = validate_name(name)?;
    catalogue.resolve_functionality(ActuatorFunctionality::OnOff)?;
    Ok(Box::new(FakeSwitch {
        name,
        setting: None,
        factory,
    }))
}

pub fn registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    registry.register_sensor(
        TEMPERATURE_IMPL,
        SensorFunctionality::Temperature,
        temperature_sensor,
    );
    registry.register_sensor(HUMIDITY_IMPL, SensorFunctionality::Humidity, humidity_sensor);
    registry.register_actuator(SWITCH_IMPL, ActuatorFunctionality::OnOff, switch);
    registry
}

pub fn catalogue_config() -> CatalogueConfig {
    CatalogueConfig::default()
        .with_model(TEMPERATURE_MODEL, TEMPERATURE_IMPL)
        .with_model(HUMIDITY_MODEL, HUMIDITY_IMPL)
        .with_model(SWITCH_MODEL, SWITCH_IMPL)
        .with_functionality("Temperature", true)
        .with_functionality("Humidity", true)
        .with_functionality("OnOff", true)
}

pub fn catalogue() -> Catalogue {
    Catalogue::new(&catalogue_config(), &registry()).unwrap()
}
