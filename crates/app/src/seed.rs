//! Declarative house description used to populate a [`HouseService`].
//!
//! ```toml
//! [location]
//! street = "Main Street 1"
//! postal_code = "1000"
//! city = "Springfield"
//! country = "USA"
//! latitude = 39.8
//! longitude = -89.6
//!
//! [[rooms]]
//! name = "Kitchen"
//! floor = "Ground"
//! height = 2.5
//! width = 3.0
//! length = 4.0
//!
//! [[rooms.devices]]
//! name = "Fridge"
//! model = "FR-1"
//! active = true
//! sensors = [{ name = "inside", model = "TS-100", value = "4" }]
//! ```
//!
//! [`HouseService`]: crate::services::house_service::HouseService

use serde::{Deserialize, Serialize};

use crate::dto::LocationDto;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HouseSeed {
    pub location: Option<LocationDto>,
    pub rooms: Vec<RoomSeed>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoomSeed {
    pub name: String,
    #[serde(default)]
    pub floor: String,
    pub height: f64,
    pub width: f64,
    pub length: f64,
    #[serde(default)]
    pub devices: Vec<DeviceSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceSeed {
    pub name: String,
    pub model: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub sensors: Vec<ComponentSeed>,
    #[serde(default)]
    pub actuators: Vec<ComponentSeed>,
}

/// A component to build from a catalogue model, with an optional initial value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComponentSeed {
    pub name: String,
    pub model: String,
    /// Initial reading (sensors) or setting (actuators), as text.
    pub value: Option<String>,
    /// `[lower, upper]` for range-bounded actuators, applied before `value`.
    pub limits: Option<(String, String)>,
}

/// What [`apply_seed`] did.
///
/// [`apply_seed`]: crate::services::house_service::HouseService::apply_seed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub rooms: usize,
    pub devices: usize,
    pub sensors: usize,
    pub actuators: usize,
    /// Entries that were rejected: duplicates, unknown models, bad values.
    pub skipped: usize,
}
