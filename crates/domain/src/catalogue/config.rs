//! Catalogue configuration: the two tables a catalogue is loaded from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Declarative catalogue contents, usually deserialized from a TOML file.
///
/// ```toml
/// [models]
/// "TS-100" = "sensor.temperature"
///
/// [functionalities]
/// Temperature = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogueConfig {
    /// Model identifier → implementation id.
    pub models: BTreeMap<String, String>,
    /// Functionality name → enabled.
    pub functionalities: BTreeMap<String, bool>,
}

impl CatalogueConfig {
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>, implementation: impl Into<String>) -> Self {
        self.models.insert(model.into(), implementation.into());
        self
    }

    #[must_use]
    pub fn with_functionality(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.functionalities.insert(name.into(), enabled);
        self
    }
}
