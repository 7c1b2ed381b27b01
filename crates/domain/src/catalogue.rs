//! Catalogue: configuration-driven mapping from component models to implementations.
//!
//! A catalogue is built once from a [`CatalogueConfig`] and a
//! [`ComponentRegistry`]. The configuration decides which model names exist
//! and which functionalities are enabled; the registry supplies the
//! constructors. After construction the catalogue is read-only.

mod config;
mod registry;

use std::collections::{BTreeMap, HashSet};

pub use config::CatalogueConfig;
pub use registry::{
    ActuatorConstructor, ComponentRegistry, Constructor, Implementation, SensorConstructor,
};

use crate::component::{Actuator, Component, ComponentKind, Sensor};
use crate::error::{CatalogueError, NotFoundError, SmartHomeError};
use crate::functionality::Functionality;
use crate::value::SharedValueFactory;

/// Resolves model names to implementations and instantiates them.
#[derive(Debug, Clone)]
pub struct Catalogue {
    models: BTreeMap<String, Implementation>,
    functionalities: HashSet<Functionality>,
}

impl Catalogue {
    /// Load a catalogue from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Catalogue`] when a model points at an
    /// implementation id missing from `registry`, or a functionality name is
    /// not part of the closed enumeration.
    pub fn new(
        config: &CatalogueConfig,
        registry: &ComponentRegistry,
    ) -> Result<Self, SmartHomeError> {
        let mut functionalities = HashSet::new();
        for (name, enabled) in &config.functionalities {
            let functionality: Functionality = name.parse()?;
            if *enabled {
                functionalities.insert(functionality);
            }
        }

        let mut models = BTreeMap::new();
        for (model, implementation) in &config.models {
            let found = registry.get(implementation).ok_or_else(|| {
                CatalogueError::UnknownImplementation {
                    model: model.clone(),
                    implementation: implementation.clone(),
                }
            })?;
            models.insert(model.clone(), found.clone());
        }

        Ok(Self {
            models,
            functionalities,
        })
    }

    /// Confirm that the configuration declares and enables `functionality`.
    ///
    /// Component constructors call this before building themselves.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the functionality is absent
    /// or disabled.
    pub fn resolve_functionality(
        &self,
        functionality: impl Into<Functionality>,
    ) -> Result<Functionality, SmartHomeError> {
        let functionality = functionality.into();
        if self.functionalities.contains(&functionality) {
            Ok(functionality)
        } else {
            Err(NotFoundError {
                entity: "Functionality",
                id: functionality.to_string(),
            }
            .into())
        }
    }

    /// Instantiate the implementation behind `model`.
    ///
    /// `kind` restricts the lookup to one component family: a model that
    /// resolves to the other family is treated like an unknown model.
    ///
    /// Returns `Ok(None)` for unknown models. Every call builds a new
    /// component.
    ///
    /// # Errors
    ///
    /// Propagates construction failures from the implementation, such as a
    /// blank `name` or a functionality the catalogue does not enable.
    pub fn instantiate(
        &self,
        model: &str,
        kind: ComponentKind,
        name: &str,
        value_factory: SharedValueFactory,
    ) -> Result<Option<Component>, SmartHomeError> {
        let Some(implementation) = self.models.get(model) else {
            return Ok(None);
        };
        match (kind, implementation.constructor()) {
            (ComponentKind::Sensor, Constructor::Sensor(construct)) => {
                construct(self, name, value_factory).map(|s| Some(Component::Sensor(s)))
            }
            (ComponentKind::Actuator, Constructor::Actuator(construct)) => {
                construct(self, name, value_factory).map(|a| Some(Component::Actuator(a)))
            }
            _ => Ok(None),
        }
    }

    /// [`instantiate`](Self::instantiate) restricted to sensors.
    ///
    /// # Errors
    ///
    /// See [`instantiate`](Self::instantiate).
    pub fn instantiate_sensor(
        &self,
        model: &str,
        name: &str,
        value_factory: SharedValueFactory,
    ) -> Result<Option<Box<dyn Sensor>>, SmartHomeError> {
        self.instantiate(model, ComponentKind::Sensor, name, value_factory)
            .map(|c| c.and_then(Component::into_sensor))
    }

    /// [`instantiate`](Self::instantiate) restricted to actuators.
    ///
    /// # Errors
    ///
    /// See [`instantiate`](Self::instantiate).
    pub fn instantiate_actuator(
        &self,
        model: &str,
        name: &str,
        value_factory: SharedValueFactory,
    ) -> Result<Option<Box<dyn Actuator>>, SmartHomeError> {
        self.instantiate(model, ComponentKind::Actuator, name, value_factory)
            .map(|c| c.and_then(Component::into_actuator))
    }

    /// Functionality declared by the implementation `model` resolves to.
    #[must_use]
    pub fn functionality_of(&self, model: &str) -> Option<Functionality> {
        self.models.get(model).map(Implementation::functionality)
    }

    /// Implementation `model` resolves to.
    #[must_use]
    pub fn implementation_of(&self, model: &str) -> Option<&Implementation> {
        self.models.get(model)
    }

    /// Known model names of one component family, sorted.
    pub fn models(&self, kind: ComponentKind) -> impl Iterator<Item = &str> {
        self.models
            .iter()
            .filter(move |(_, implementation)| implementation.kind() == kind)
            .map(|(model, _)| model.as_str())
    }

    #[must_use]
    pub fn is_enabled(&self, functionality: impl Into<Functionality>) -> bool {
        self.resolve_functionality(functionality).is_ok()
    }
}
