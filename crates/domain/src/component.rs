//! Component contracts: sensors and actuators attached to a device.
//!
//! Concrete implementations live outside this crate. They are registered in a
//! [`ComponentRegistry`](crate::catalogue::ComponentRegistry) and only ever
//! constructed through the [`Catalogue`](crate::catalogue::Catalogue).

use std::fmt;

use crate::functionality::{ActuatorFunctionality, Functionality, SensorFunctionality};
use crate::value::MeasurementValue;

/// A component that measures something.
pub trait Sensor: fmt::Debug {
    fn name(&self) -> &str;

    fn functionality(&self) -> SensorFunctionality;

    /// The last accepted reading, or `None` before the first one.
    fn reading(&self) -> Option<&MeasurementValue>;

    /// Store a new reading given as text.
    ///
    /// Returns `false` and keeps the previous reading when `raw` is invalid.
    fn record(&mut self, raw: &str) -> bool;
}

/// A component that controls something.
pub trait Actuator: fmt::Debug {
    fn name(&self) -> &str;

    fn functionality(&self) -> ActuatorFunctionality;

    /// The current setting, or `None` before the first one.
    fn setting(&self) -> Option<&MeasurementValue>;

    /// Apply a new setting given as text.
    ///
    /// Returns `false` and keeps the previous setting when `raw` is invalid.
    fn apply(&mut self, raw: &str) -> bool;

    /// Change the accepted range of a range-bounded actuator.
    ///
    /// Actuators without a configurable range reject every call.
    fn set_limits(&mut self, _lower: &str, _upper: &str) -> bool {
        false
    }
}

/// Which of the two component families an implementation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Sensor,
    Actuator,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor => f.write_str("sensor"),
            Self::Actuator => f.write_str("actuator"),
        }
    }
}

/// A freshly instantiated component of either kind.
#[derive(Debug)]
pub enum Component {
    Sensor(Box<dyn Sensor>),
    Actuator(Box<dyn Actuator>),
}

impl Component {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Sensor(s) => s.name(),
            Self::Actuator(a) => a.name(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Sensor(_) => ComponentKind::Sensor,
            Self::Actuator(_) => ComponentKind::Actuator,
        }
    }

    #[must_use]
    pub fn functionality(&self) -> Functionality {
        match self {
            Self::Sensor(s) => s.functionality().into(),
            Self::Actuator(a) => a.functionality().into(),
        }
    }

    #[must_use]
    pub fn into_sensor(self) -> Option<Box<dyn Sensor>> {
        match self {
            Self::Sensor(s) => Some(s),
            Self::Actuator(_) => None,
        }
    }

    #[must_use]
    pub fn into_actuator(self) -> Option<Box<dyn Actuator>> {
        match self {
            Self::Actuator(a) => Some(a),
            Self::Sensor(_) => None,
        }
    }
}
