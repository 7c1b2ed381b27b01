//! Serializable views of the house aggregates.
//!
//! The domain types own trait objects and enforce invariants through their
//! constructors, so callers outside the application layer only ever see
//! these plain snapshots.

use serde::{Deserialize, Serialize};
use smarthome_domain::component::{Actuator, Sensor};
use smarthome_domain::device::Device;
use smarthome_domain::error::ValidationError;
use smarthome_domain::location::{Address, GpsCoordinates, Location};
use smarthome_domain::report::{DevicePlacement, FunctionalityReport};
use smarthome_domain::room::Room;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomDto {
    pub name: String,
    pub floor: String,
    pub height: f64,
    pub width: f64,
    pub length: f64,
    pub devices: usize,
}

impl From<&Room> for RoomDto {
    fn from(room: &Room) -> Self {
        let dimensions = room.dimensions();
        Self {
            name: room.name().to_string(),
            floor: room.floor().to_string(),
            height: dimensions.height(),
            width: dimensions.width(),
            length: dimensions.length(),
            devices: room.devices().len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceDto {
    pub name: String,
    pub model: String,
    pub active: bool,
    pub sensors: usize,
    pub actuators: usize,
}

impl From<&Device> for DeviceDto {
    fn from(device: &Device) -> Self {
        Self {
            name: device.name().to_string(),
            model: device.model().to_string(),
            active: device.is_active(),
            sensors: device.sensor_count(),
            actuators: device.actuator_count(),
        }
    }
}

/// A sensor or actuator with its current value rendered with its unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentDto {
    pub name: String,
    pub functionality: String,
    pub value: Option<String>,
}

impl From<&dyn Sensor> for ComponentDto {
    fn from(sensor: &dyn Sensor) -> Self {
        Self {
            name: sensor.name().to_string(),
            functionality: sensor.functionality().to_string(),
            value: sensor.reading().map(ToString::to_string),
        }
    }
}

impl From<&dyn Actuator> for ComponentDto {
    fn from(actuator: &dyn Actuator) -> Self {
        Self {
            name: actuator.name().to_string(),
            functionality: actuator.functionality().to_string(),
            value: actuator.setting().map(ToString::to_string),
        }
    }
}

/// Flat location description, as found in seed files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDto {
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: f64,
}

impl TryFrom<LocationDto> for Location {
    type Error = ValidationError;

    fn try_from(dto: LocationDto) -> Result<Self, Self::Error> {
        Ok(Self {
            address: Address::new(&dto.street, &dto.postal_code, &dto.city, &dto.country)?,
            coordinates: GpsCoordinates::new(dto.latitude, dto.longitude, dto.altitude)?,
        })
    }
}

impl From<&Location> for LocationDto {
    fn from(location: &Location) -> Self {
        Self {
            street: location.address.street().to_string(),
            postal_code: location.address.postal_code().to_string(),
            city: location.address.city().to_string(),
            country: location.address.country().to_string(),
            latitude: location.coordinates.latitude(),
            longitude: location.coordinates.longitude(),
            altitude: location.coordinates.altitude(),
        }
    }
}

/// One report bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntryDto {
    pub functionality: String,
    pub devices: Vec<DevicePlacement>,
}

/// The devices-by-functionality report, buckets in report order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDto {
    pub entries: Vec<ReportEntryDto>,
}

impl ReportDto {
    /// Devices listed under `functionality`, if that bucket exists.
    #[must_use]
    pub fn devices(&self, functionality: &str) -> Option<&[DevicePlacement]> {
        self.entries
            .iter()
            .find(|entry| entry.functionality == functionality)
            .map(|entry| entry.devices.as_slice())
    }
}

impl From<FunctionalityReport> for ReportDto {
    fn from(report: FunctionalityReport) -> Self {
        Self {
            entries: report
                .into_iter()
                .map(|(functionality, devices)| ReportEntryDto {
                    functionality,
                    devices,
                })
                .collect(),
        }
    }
}
