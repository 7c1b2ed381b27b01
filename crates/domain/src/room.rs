//! Room: a named space on a floor holding devices.

use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::error::{SmartHomeError, ValidationError};
use crate::name::{same_name, validate_name};

/// Interior measurements of a room, each strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    height: f64,
    width: f64,
    length: f64,
}

impl Dimensions {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDimension`] for the first dimension
    /// that is zero, negative, or `NaN`.
    pub fn new(height: f64, width: f64, length: f64) -> Result<Self, ValidationError> {
        for (dimension, value) in [("height", height), ("width", width), ("length", length)] {
            // NaN fails the comparison too.
            if !(value > 0.0) {
                return Err(ValidationError::InvalidDimension { dimension, value });
            }
        }
        Ok(Self {
            height,
            width,
            length,
        })
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }
}

/// A room and the devices placed in it.
#[derive(Debug)]
pub struct Room {
    name: String,
    floor: String,
    dimensions: Dimensions,
    devices: Vec<Device>,
}

impl Room {
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] when `name` is blank.
    pub fn new(
        name: &str,
        floor: impl Into<String>,
        dimensions: Dimensions,
    ) -> Result<Self, SmartHomeError> {
        Ok(Self {
            name: validate_name(name)?,
            floor: floor.into(),
            dimensions,
            devices: Vec::new(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn floor(&self) -> &str {
        &self.floor
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Create a device and place it in this room.
    ///
    /// Returns `Ok(false)` when a device with the same name (ignoring case)
    /// is already here.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] when `name` or `model` is blank.
    pub fn add_device(&mut self, name: &str, model: &str) -> Result<bool, SmartHomeError> {
        let device = Device::new(name, model)?;
        if self.device_exists(name) {
            return Ok(false);
        }
        self.devices.push(device);
        Ok(true)
    }

    #[must_use]
    pub fn device_exists(&self, name: &str) -> bool {
        self.devices.iter().any(|d| same_name(d.name(), name))
    }

    /// Case-insensitive lookup.
    #[must_use]
    pub fn device(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|d| same_name(d.name(), name))
    }

    /// Case-insensitive lookup.
    pub fn device_mut(&mut self, name: &str) -> Option<&mut Device> {
        self.devices.iter_mut().find(|d| same_name(d.name(), name))
    }

    /// Devices in insertion order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }
}
