//! Device: an appliance in a room carrying sensors and actuators.
//!
//! Components are never added directly: the device asks the
//! [`Catalogue`] to build them from a model name and only stores the result
//! when no component of the same family already uses that name
//! (case-insensitively).

use crate::catalogue::Catalogue;
use crate::component::{Actuator, Sensor};
use crate::error::{SmartHomeError, ValidationError};
use crate::functionality::{ActuatorFunctionality, SensorFunctionality};
use crate::name::{same_name, validate_name};
use crate::value::SharedValueFactory;

/// An appliance with an activation flag and two component collections.
#[derive(Debug)]
pub struct Device {
    name: String,
    model: String,
    active: bool,
    sensors: Vec<Box<dyn Sensor>>,
    actuators: Vec<Box<dyn Actuator>>,
}

/// Why a component was not added to a device.
#[derive(Debug, thiserror::Error)]
pub enum AddComponentError {
    #[error("a component named {0} already exists on this device")]
    Duplicate(String),

    #[error("model {0} is not in the catalogue")]
    UnknownModel(String),

    #[error("component construction failed")]
    Construction(#[source] SmartHomeError),
}

impl Device {
    /// Create an inactive device with no components.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] when `name` or `model` is blank.
    pub fn new(name: &str, model: &str) -> Result<Self, SmartHomeError> {
        let name = validate_name(name)?;
        if model.trim().is_empty() {
            return Err(ValidationError::EmptyModel.into());
        }
        Ok(Self {
            name,
            model: model.to_string(),
            active: false,
            sensors: Vec::new(),
            actuators: Vec::new(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Set the activation flag.
    ///
    /// Returns `true` only when the flag actually changed.
    pub fn switch_device(&mut self, target: bool) -> bool {
        if self.active == target {
            return false;
        }
        self.active = target;
        true
    }

    /// Build a sensor from `model` and attach it, explaining any rejection.
    ///
    /// # Errors
    ///
    /// - [`AddComponentError::Duplicate`] when a sensor named `name` exists
    /// - [`AddComponentError::UnknownModel`] when the catalogue has no sensor
    ///   implementation for `model`
    /// - [`AddComponentError::Construction`] when the implementation refuses
    ///   its arguments
    pub fn try_add_sensor(
        &mut self,
        model: &str,
        name: &str,
        catalogue: &Catalogue,
        value_factory: SharedValueFactory,
    ) -> Result<&dyn Sensor, AddComponentError> {
        if self.sensor_exists(name) {
            return Err(AddComponentError::Duplicate(name.to_string()));
        }
        let sensor = catalogue
            .instantiate_sensor(model, name, value_factory)
            .map_err(AddComponentError::Construction)?
            .ok_or_else(|| AddComponentError::UnknownModel(model.to_string()))?;
        self.sensors.push(sensor);
        let index = self.sensors.len() - 1;
        Ok(&*self.sensors[index])
    }

    /// Build a sensor from `model` and attach it.
    ///
    /// Returns `None` when the model is unknown, construction fails, or the
    /// name is already taken.
    pub fn add_sensor(
        &mut self,
        model: &str,
        name: &str,
        catalogue: &Catalogue,
        value_factory: SharedValueFactory,
    ) -> Option<&dyn Sensor> {
        self.try_add_sensor(model, name, catalogue, value_factory).ok()
    }

    /// Actuator counterpart of [`try_add_sensor`](Self::try_add_sensor).
    ///
    /// # Errors
    ///
    /// Same cases as [`try_add_sensor`](Self::try_add_sensor), checked
    /// against the actuator collection.
    pub fn try_add_actuator(
        &mut self,
        model: &str,
        name: &str,
        catalogue: &Catalogue,
        value_factory: SharedValueFactory,
    ) -> Result<&dyn Actuator, AddComponentError> {
        if self.actuator_exists(name) {
            return Err(AddComponentError::Duplicate(name.to_string()));
        }
        let actuator = catalogue
            .instantiate_actuator(model, name, value_factory)
            .map_err(AddComponentError::Construction)?
            .ok_or_else(|| AddComponentError::UnknownModel(model.to_string()))?;
        self.actuators.push(actuator);
        let index = self.actuators.len() - 1;
        Ok(&*self.actuators[index])
    }

    /// Actuator counterpart of [`add_sensor`](Self::add_sensor).
    pub fn add_actuator(
        &mut self,
        model: &str,
        name: &str,
        catalogue: &Catalogue,
        value_factory: SharedValueFactory,
    ) -> Option<&dyn Actuator> {
        self.try_add_actuator(model, name, catalogue, value_factory).ok()
    }

    /// Exact-case lookup.
    #[must_use]
    pub fn sensor(&self, name: &str) -> Option<&dyn Sensor> {
        self.sensors
            .iter()
            .find(|s| s.name() == name)
            .map(|s| &**s)
    }

    /// Exact-case lookup.
    pub fn sensor_mut(&mut self, name: &str) -> Option<&mut dyn Sensor> {
        self.sensors
            .iter_mut()
            .find(|s| s.name() == name)
            .map(|s| &mut **s as &mut dyn Sensor)
    }

    /// Exact-case lookup.
    #[must_use]
    pub fn actuator(&self, name: &str) -> Option<&dyn Actuator> {
        self.actuators
            .iter()
            .find(|a| a.name() == name)
            .map(|a| &**a)
    }

    /// Exact-case lookup.
    pub fn actuator_mut(&mut self, name: &str) -> Option<&mut dyn Actuator> {
        self.actuators
            .iter_mut()
            .find(|a| a.name() == name)
            .map(|a| &mut **a as &mut dyn Actuator)
    }

    /// Whether a sensor with this name exists, ignoring case.
    #[must_use]
    pub fn sensor_exists(&self, name: &str) -> bool {
        self.sensors.iter().any(|s| same_name(s.name(), name))
    }

    /// Whether an actuator with this name exists, ignoring case.
    #[must_use]
    pub fn actuator_exists(&self, name: &str) -> bool {
        self.actuators.iter().any(|a| same_name(a.name(), name))
    }

    /// Attached sensors in insertion order, collected into a new vector.
    #[must_use]
    pub fn sensors(&self) -> Vec<&dyn Sensor> {
        self.sensors.iter().map(|s| &**s).collect()
    }

    /// Attached actuators in insertion order, collected into a new vector.
    #[must_use]
    pub fn actuators(&self) -> Vec<&dyn Actuator> {
        self.actuators.iter().map(|a| &**a).collect()
    }

    #[must_use]
    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }

    #[must_use]
    pub fn actuator_count(&self) -> usize {
        self.actuators.len()
    }

    /// Every sensor functionality a device can support.
    ///
    /// This is the full enumeration; it does not depend on the sensors
    /// currently attached.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn sensor_functionalities(&self) -> Vec<SensorFunctionality> {
        SensorFunctionality::ALL.to_vec()
    }

    /// Every actuator functionality a device can support.
    ///
    /// This is the full enumeration; it does not depend on the actuators
    /// currently attached.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn actuator_functionalities(&self) -> Vec<ActuatorFunctionality> {
        ActuatorFunctionality::ALL.to_vec()
    }
}
