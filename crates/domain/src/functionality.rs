//! Functionality: closed classification of what a component measures or controls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogueError;

/// What a [`Sensor`](crate::component::Sensor) measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorFunctionality {
    Temperature,
    Humidity,
    Power,
    Energy,
    SolarIrradiance,
    Wind,
}

impl SensorFunctionality {
    /// Every sensor functionality, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Temperature,
        Self::Humidity,
        Self::Power,
        Self::Energy,
        Self::SolarIrradiance,
        Self::Wind,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::Power => "Power",
            Self::Energy => "Energy",
            Self::SolarIrradiance => "SolarIrradiance",
            Self::Wind => "Wind",
        }
    }
}

/// What an [`Actuator`](crate::component::Actuator) controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActuatorFunctionality {
    OnOff,
    Blinds,
    Thermostat,
    IntegerSetter,
    DecimalSetter,
}

impl ActuatorFunctionality {
    /// Every actuator functionality, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::OnOff,
        Self::Blinds,
        Self::Thermostat,
        Self::IntegerSetter,
        Self::DecimalSetter,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnOff => "OnOff",
            Self::Blinds => "Blinds",
            Self::Thermostat => "Thermostat",
            Self::IntegerSetter => "IntegerSetter",
            Self::DecimalSetter => "DecimalSetter",
        }
    }
}

/// Either kind of functionality, as declared in the catalogue configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Functionality {
    Sensor(SensorFunctionality),
    Actuator(ActuatorFunctionality),
}

impl Functionality {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sensor(f) => f.as_str(),
            Self::Actuator(f) => f.as_str(),
        }
    }
}

impl From<SensorFunctionality> for Functionality {
    fn from(value: SensorFunctionality) -> Self {
        Self::Sensor(value)
    }
}

impl From<ActuatorFunctionality> for Functionality {
    fn from(value: ActuatorFunctionality) -> Self {
        Self::Actuator(value)
    }
}

impl fmt::Display for SensorFunctionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ActuatorFunctionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Functionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Functionality {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SensorFunctionality::ALL
            .into_iter()
            .map(Self::Sensor)
            .chain(ActuatorFunctionality::ALL.into_iter().map(Self::Actuator))
            .find(|f| f.as_str() == s)
            .ok_or_else(|| CatalogueError::UnknownFunctionality(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_sensor_functionality_from_name() {
        let parsed: Functionality = "Humidity".parse().unwrap();
        assert_eq!(parsed, Functionality::Sensor(SensorFunctionality::Humidity));
    }

    #[test]
    fn should_parse_actuator_functionality_from_name() {
        let parsed: Functionality = "OnOff".parse().unwrap();
        assert_eq!(parsed, Functionality::Actuator(ActuatorFunctionality::OnOff));
    }

    #[test]
    fn should_reject_unknown_functionality_name() {
        let result = "Teleport".parse::<Functionality>();
        assert_eq!(
            result,
            Err(CatalogueError::UnknownFunctionality("Teleport".to_string()))
        );
    }

    #[test]
    fn should_reject_functionality_name_with_wrong_case() {
        assert!("temperature".parse::<Functionality>().is_err());
    }

    #[test]
    fn should_display_declared_name() {
        assert_eq!(SensorFunctionality::SolarIrradiance.to_string(), "SolarIrradiance");
        assert_eq!(ActuatorFunctionality::DecimalSetter.to_string(), "DecimalSetter");
    }

    #[test]
    fn should_roundtrip_every_name_through_from_str() {
        for f in SensorFunctionality::ALL {
            assert_eq!(f.as_str().parse::<Functionality>().unwrap(), f.into());
        }
        for f in ActuatorFunctionality::ALL {
            assert_eq!(f.as_str().parse::<Functionality>().unwrap(), f.into());
        }
    }

    #[test]
    fn should_serialize_as_plain_name() {
        let json = serde_json::to_string(&Functionality::from(SensorFunctionality::Wind)).unwrap();
        assert_eq!(json, "\"Wind\"");
    }
}
