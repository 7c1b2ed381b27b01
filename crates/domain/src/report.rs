//! Devices grouped by the functionality of their sensors.
//!
//! The report is recomputed from the rooms on every call. It is `None` when
//! there are no rooms at all, and also as soon as the scan meets a room
//! without devices, even if every other room is populated.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::functionality::SensorFunctionality;
use crate::room::Room;

/// Bucket holding devices that carry no sensor at all.
pub const WITHOUT_FUNCTIONALITY: &str = "Without functionality";

/// Where a device was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevicePlacement {
    pub device: String,
    pub room: String,
}

impl DevicePlacement {
    fn of(device: &Device, room: &Room) -> Self {
        Self {
            device: device.name().to_string(),
            room: room.name().to_string(),
        }
    }
}

/// Functionality name → devices, in functionality declaration order with
/// [`WITHOUT_FUNCTIONALITY`] last. Empty buckets are omitted.
pub type FunctionalityReport = IndexMap<String, Vec<DevicePlacement>>;

/// Read-only scan over a snapshot of rooms.
#[derive(Debug, Clone, Copy)]
pub struct DevicesByFunctionality<'a> {
    rooms: &'a [Room],
}

impl<'a> DevicesByFunctionality<'a> {
    #[must_use]
    pub fn new(rooms: &'a [Room]) -> Self {
        Self { rooms }
    }

    /// Build the report.
    ///
    /// A device is listed once per matching sensor, so a device with two
    /// temperature sensors appears twice under `Temperature`.
    #[must_use]
    pub fn generate(&self) -> Option<FunctionalityReport> {
        if self.rooms.is_empty() {
            return None;
        }

        let mut report = FunctionalityReport::new();
        for functionality in SensorFunctionality::ALL {
            let mut placements = Vec::new();
            for room in self.rooms {
                if room.devices().is_empty() {
                    return None;
                }
                for device in room.devices() {
                    for sensor in device.sensors() {
                        if sensor.functionality() == functionality {
                            placements.push(DevicePlacement::of(device, room));
                        }
                    }
                }
            }
            if !placements.is_empty() {
                report.insert(functionality.to_string(), placements);
            }
        }

        let without: Vec<DevicePlacement> = self
            .rooms
            .iter()
            .flat_map(|room| {
                room.devices()
                    .iter()
                    .filter(|device| device.sensor_count() == 0)
                    .map(move |device| DevicePlacement::of(device, room))
            })
            .collect();
        if !without.is_empty() {
            report.insert(WITHOUT_FUNCTIONALITY.to_string(), without);
        }

        Some(report)
    }
}
