//! Component registry: the static table of constructible implementations.

use std::collections::BTreeMap;

use crate::catalogue::Catalogue;
use crate::component::{Actuator, ComponentKind, Sensor};
use crate::error::SmartHomeError;
use crate::functionality::{ActuatorFunctionality, Functionality, SensorFunctionality};
use crate::value::SharedValueFactory;

/// Uniform sensor constructor: `(catalogue, component name, value factory)`.
pub type SensorConstructor =
    fn(&Catalogue, &str, SharedValueFactory) -> Result<Box<dyn Sensor>, SmartHomeError>;

/// Uniform actuator constructor: `(catalogue, component name, value factory)`.
pub type ActuatorConstructor =
    fn(&Catalogue, &str, SharedValueFactory) -> Result<Box<dyn Actuator>, SmartHomeError>;

/// Constructor of either component family.
#[derive(Debug, Clone, Copy)]
pub enum Constructor {
    Sensor(SensorConstructor),
    Actuator(ActuatorConstructor),
}

/// A registered implementation: its id, declared functionality and constructor.
#[derive(Debug, Clone)]
pub struct Implementation {
    id: String,
    functionality: Functionality,
    constructor: Constructor,
}

impl Implementation {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn functionality(&self) -> Functionality {
        self.functionality
    }

    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        match self.constructor {
            Constructor::Sensor(_) => ComponentKind::Sensor,
            Constructor::Actuator(_) => ComponentKind::Actuator,
        }
    }

    #[must_use]
    pub fn constructor(&self) -> Constructor {
        self.constructor
    }
}

/// Implementation ids mapped to their constructors.
///
/// Adding a component type means registering one more constructor here and
/// pointing a model at it from the catalogue configuration.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    implementations: BTreeMap<String, Implementation>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sensor implementation, replacing any previous one with the same id.
    pub fn register_sensor(
        &mut self,
        id: impl Into<String>,
        functionality: SensorFunctionality,
        constructor: SensorConstructor,
    ) {
        self.insert(id.into(), functionality.into(), Constructor::Sensor(constructor));
    }

    /// Register an actuator implementation, replacing any previous one with the same id.
    pub fn register_actuator(
        &mut self,
        id: impl Into<String>,
        functionality: ActuatorFunctionality,
        constructor: ActuatorConstructor,
    ) {
        self.insert(
            id.into(),
            functionality.into(),
            Constructor::Actuator(constructor),
        );
    }

    fn insert(&mut self, id: String, functionality: Functionality, constructor: Constructor) {
        self.implementations.insert(
            id.clone(),
            Implementation {
                id,
                functionality,
                constructor,
            },
        );
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Implementation> {
        self.implementations.get(id)
    }

    /// Iterate over registered implementations, ordered by id.
    pub fn implementations(&self) -> impl Iterator<Item = &Implementation> {
        self.implementations.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.implementations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.implementations.is_empty()
    }
}
