//! # smarthome-adapter-components
//!
//! Built-in sensor and actuator implementations.
//!
//! ## Provided implementations
//!
//! | Implementation id | Kind | Functionality | Value |
//! |-------------------|------|---------------|-------|
//! | `sensor.temperature` | sensor | `Temperature` | °C |
//! | `sensor.humidity` | sensor | `Humidity` | % |
//! | `sensor.power` | sensor | `Power` | W |
//! | `sensor.energy` | sensor | `Energy` | Wh |
//! | `sensor.solar_irradiance` | sensor | `SolarIrradiance` | W/m² |
//! | `sensor.wind` | sensor | `Wind` | km/h + direction |
//! | `actuator.switch` | actuator | `OnOff` | integer `0..=1` |
//! | `actuator.blinds` | actuator | `Blinds` | % |
//! | `actuator.thermostat` | actuator | `Thermostat` | °C |
//! | `actuator.integer_setter` | actuator | `IntegerSetter` | bounded integer |
//! | `actuator.decimal_setter` | actuator | `DecimalSetter` | bounded decimal |
//!
//! ## Dependency rule
//!
//! Depends on `smarthome-domain` only.

pub mod actuators;
pub mod sensors;

use smarthome_domain::catalogue::{CatalogueConfig, ComponentRegistry};
use smarthome_domain::functionality::{
    ActuatorFunctionality, Functionality, SensorFunctionality,
};

/// Registry keys of the built-in implementations.
pub mod ids {
    pub const TEMPERATURE: &str = "sensor.temperature";
    pub const HUMIDITY: &str = "sensor.humidity";
    pub const POWER: &str = "sensor.power";
    pub const ENERGY: &str = "sensor.energy";
    pub const SOLAR_IRRADIANCE: &str = "sensor.solar_irradiance";
    pub const WIND: &str = "sensor.wind";
    pub const SWITCH: &str = "actuator.switch";
    pub const BLINDS: &str = "actuator.blinds";
    pub const THERMOSTAT: &str = "actuator.thermostat";
    pub const INTEGER_SETTER: &str = "actuator.integer_setter";
    pub const DECIMAL_SETTER: &str = "actuator.decimal_setter";
}

/// Registry holding every built-in implementation.
#[must_use]
pub fn builtin_registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();

    registry.register_sensor(
        ids::TEMPERATURE,
        SensorFunctionality::Temperature,
        sensors::temperature,
    );
    registry.register_sensor(ids::HUMIDITY, SensorFunctionality::Humidity, sensors::humidity);
    registry.register_sensor(ids::POWER, SensorFunctionality::Power, sensors::power);
    registry.register_sensor(ids::ENERGY, SensorFunctionality::Energy, sensors::energy);
    registry.register_sensor(
        ids::SOLAR_IRRADIANCE,
        SensorFunctionality::SolarIrradiance,
        sensors::solar_irradiance,
    );
    registry.register_sensor(ids::WIND, SensorFunctionality::Wind, sensors::wind);

    registry.register_actuator(ids::SWITCH, ActuatorFunctionality::OnOff, actuators::switch);
    registry.register_actuator(ids::BLINDS, ActuatorFunctionality::Blinds, actuators::blinds);
    registry.register_actuator(
        ids::THERMOSTAT,
        ActuatorFunctionality::Thermostat,
        actuators::thermostat,
    );
    registry.register_actuator(
        ids::INTEGER_SETTER,
        ActuatorFunctionality::IntegerSetter,
        actuators::integer_setter,
    );
    registry.register_actuator(
        ids::DECIMAL_SETTER,
        ActuatorFunctionality::DecimalSetter,
        actuators::decimal_setter,
    );

    registry
}

/// Catalogue used when no catalogue file is configured: one model per
/// built-in implementation and every functionality enabled.
#[must_use]
pub fn default_catalogue_config() -> CatalogueConfig {
    let models = [
        ("TS-100", ids::TEMPERATURE),
        ("HS-200", ids::HUMIDITY),
        ("PM-300", ids::POWER),
        ("EM-310", ids::ENERGY),
        ("SI-400", ids::SOLAR_IRRADIANCE),
        ("WS-500", ids::WIND),
        ("SW-10", ids::SWITCH),
        ("BL-20", ids::BLINDS),
        ("TH-30", ids::THERMOSTAT),
        ("IS-40", ids::INTEGER_SETTER),
        ("DS-50", ids::DECIMAL_SETTER),
    ];

    let functionalities = SensorFunctionality::ALL
        .into_iter()
        .map(Functionality::from)
        .chain(ActuatorFunctionality::ALL.into_iter().map(Functionality::from));

    let config = models
        .into_iter()
        .fold(CatalogueConfig::default(), |config, (model, id)| {
            config.with_model(model, id)
        });
    functionalities.fold(config, |config, functionality| {
        config.with_functionality(functionality.as_str(), true)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarthome_domain::catalogue::Catalogue;
    use smarthome_domain::component::{Component, ComponentKind};
    use smarthome_domain::value::StandardValueFactory;

    fn catalogue() -> Catalogue {
        Catalogue::new(&default_catalogue_config(), &builtin_registry()).unwrap()
    }

    #[test]
    fn should_register_eleven_implementations() {
        assert_eq!(builtin_registry().len(), 11);
    }

    #[test]
    fn should_load_default_catalogue() {
        let catalogue = catalogue();
        assert_eq!(catalogue.models(ComponentKind::Sensor).count(), 6);
        assert_eq!(catalogue.models(ComponentKind::Actuator).count(), 5);
        for functionality in SensorFunctionality::ALL {
            assert!(catalogue.is_enabled(functionality));
        }
        for functionality in ActuatorFunctionality::ALL {
            assert!(catalogue.is_enabled(functionality));
        }
    }

    #[test]
    fn should_build_components_matching_registered_functionality() {
        let registry = builtin_registry();
        let catalogue = catalogue();
        let factory = StandardValueFactory::shared();

        for implementation in registry.implementations() {
            let model = default_catalogue_config()
                .models
                .into_iter()
                .find(|(_, id)| id == implementation.id())
                .map(|(model, _)| model)
                .unwrap();
            let component = catalogue
                .instantiate(&model, implementation.kind(), "probe", factory.clone())
                .unwrap()
                .unwrap();
            assert_eq!(
                component.functionality(),
                implementation.functionality(),
                "{}",
                implementation.id()
            );
            assert_eq!(component.kind(), implementation.kind());
        }
    }

    #[test]
    fn should_not_build_sensor_from_actuator_model() {
        let catalogue = catalogue();
        let component = catalogue
            .instantiate(
                "SW-10",
                ComponentKind::Sensor,
                "relay",
                StandardValueFactory::shared(),
            )
            .unwrap();
        assert!(component.is_none());
    }

    #[test]
    fn should_build_fresh_instance_on_every_call() {
        let catalogue = catalogue();
        let factory = StandardValueFactory::shared();
        let Some(Component::Sensor(mut first)) = catalogue
            .instantiate("TS-100", ComponentKind::Sensor, "a", factory.clone())
            .unwrap()
        else {
            panic!("expected a sensor");
        };
        let second = catalogue
            .instantiate_sensor("TS-100", "b", factory)
            .unwrap()
            .unwrap();
        assert!(first.record("20"));
        assert!(second.reading().is_none());
    }
}
