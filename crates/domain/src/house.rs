//! House: the root aggregate owning every room.

use crate::error::SmartHomeError;
use crate::location::Location;
use crate::name::same_name;
use crate::report::{DevicesByFunctionality, FunctionalityReport};
use crate::room::{Dimensions, Room};

/// A house: an optional location and uniquely named rooms.
#[derive(Debug, Default)]
pub struct House {
    location: Option<Location>,
    rooms: Vec<Room>,
}

impl House {
    /// Create an empty house without a location.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Set or replace the house location.
    pub fn configure_location(&mut self, location: Location) {
        self.location = Some(location);
    }

    /// Create a room and add it to the house.
    ///
    /// Returns `Ok(false)` when a room with the same name (ignoring case)
    /// already exists.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] when `name` is blank.
    pub fn add_room(
        &mut self,
        name: &str,
        floor: &str,
        dimensions: Dimensions,
    ) -> Result<bool, SmartHomeError> {
        let room = Room::new(name, floor, dimensions)?;
        if self.room_exists(name) {
            return Ok(false);
        }
        self.rooms.push(room);
        Ok(true)
    }

    #[must_use]
    pub fn room_exists(&self, name: &str) -> bool {
        self.rooms.iter().any(|r| same_name(r.name(), name))
    }

    /// Case-insensitive lookup.
    #[must_use]
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| same_name(r.name(), name))
    }

    /// Case-insensitive lookup.
    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| same_name(r.name(), name))
    }

    /// Rooms in insertion order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Group every device of the house by the functionality of its sensors.
    ///
    /// See [`DevicesByFunctionality`] for when this is `None`.
    #[must_use]
    pub fn devices_by_functionality(&self) -> Option<FunctionalityReport> {
        DevicesByFunctionality::new(&self.rooms).generate()
    }
}
