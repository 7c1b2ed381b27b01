//! House service: use-cases addressing rooms, devices and components by name.

use smarthome_domain::catalogue::Catalogue;
use smarthome_domain::device::Device;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::house::House;
use smarthome_domain::location::Location;
use smarthome_domain::room::Dimensions;
use smarthome_domain::value::SharedValueFactory;

use crate::dto::{ComponentDto, DeviceDto, LocationDto, ReportDto, RoomDto};
use crate::seed::{ComponentSeed, DeviceSeed, HouseSeed, SeedSummary};

/// Application service owning a house and the catalogue its components come from.
#[derive(Debug)]
pub struct HouseService {
    house: House,
    catalogue: Catalogue,
    value_factory: SharedValueFactory,
}

fn find_device<'h>(house: &'h House, room: &str, device: &str) -> Option<&'h Device> {
    house.room(room).and_then(|r| r.device(device))
}

fn find_device_mut<'h>(house: &'h mut House, room: &str, device: &str) -> Option<&'h mut Device> {
    house.room_mut(room).and_then(|r| r.device_mut(device))
}

impl HouseService {
    /// Create a service over an empty house.
    #[must_use]
    pub fn new(catalogue: Catalogue, value_factory: SharedValueFactory) -> Self {
        Self {
            house: House::new(),
            catalogue,
            value_factory,
        }
    }

    #[must_use]
    pub fn house(&self) -> &House {
        &self.house
    }

    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Add a room. Returns `Ok(false)` when the name is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] for a blank name or a
    /// non-positive dimension.
    #[tracing::instrument(skip(self))]
    pub fn add_room(
        &mut self,
        name: &str,
        floor: &str,
        height: f64,
        width: f64,
        length: f64,
    ) -> Result<bool, SmartHomeError> {
        let dimensions = Dimensions::new(height, width, length)?;
        let added = self.house.add_room(name, floor, dimensions)?;
        if !added {
            tracing::debug!("room already exists");
        }
        Ok(added)
    }

    #[must_use]
    pub fn rooms(&self) -> Vec<RoomDto> {
        self.house.rooms().iter().map(RoomDto::from).collect()
    }

    /// Add a device to a room.
    ///
    /// Returns `Ok(false)` when the room does not exist or already has a
    /// device with that name.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] for a blank name or model.
    #[tracing::instrument(skip(self))]
    pub fn add_device(&mut self, room: &str, name: &str, model: &str) -> Result<bool, SmartHomeError> {
        let Some(target) = self.house.room_mut(room) else {
            tracing::warn!("room not found");
            return Ok(false);
        };
        let added = target.add_device(name, model)?;
        if !added {
            tracing::debug!("device already exists");
        }
        Ok(added)
    }

    /// Devices of `room`, empty when the room does not exist.
    #[must_use]
    pub fn devices(&self, room: &str) -> Vec<DeviceDto> {
        self.house
            .room(room)
            .map(|r| r.devices().iter().map(DeviceDto::from).collect())
            .unwrap_or_default()
    }

    /// Build a sensor from `model` and attach it to a device.
    #[tracing::instrument(skip(self))]
    pub fn add_sensor(&mut self, room: &str, device: &str, model: &str, name: &str) -> bool {
        let Some(target) = find_device_mut(&mut self.house, room, device) else {
            tracing::warn!("device not found");
            return false;
        };
        match target.try_add_sensor(model, name, &self.catalogue, self.value_factory.clone()) {
            Ok(_) => true,
            Err(reason) => {
                tracing::warn!(%reason, "sensor rejected");
                false
            }
        }
    }

    /// Build an actuator from `model` and attach it to a device.
    #[tracing::instrument(skip(self))]
    pub fn add_actuator(&mut self, room: &str, device: &str, model: &str, name: &str) -> bool {
        let Some(target) = find_device_mut(&mut self.house, room, device) else {
            tracing::warn!("device not found");
            return false;
        };
        match target.try_add_actuator(model, name, &self.catalogue, self.value_factory.clone()) {
            Ok(_) => true,
            Err(reason) => {
                tracing::warn!(%reason, "actuator rejected");
                false
            }
        }
    }

    #[must_use]
    pub fn sensors(&self, room: &str, device: &str) -> Vec<ComponentDto> {
        find_device(&self.house, room, device)
            .map(|d| d.sensors().into_iter().map(ComponentDto::from).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn actuators(&self, room: &str, device: &str) -> Vec<ComponentDto> {
        find_device(&self.house, room, device)
            .map(|d| d.actuators().into_iter().map(ComponentDto::from).collect())
            .unwrap_or_default()
    }

    /// Store a reading on a sensor. Returns `false` when the sensor is
    /// missing or the value is invalid.
    #[tracing::instrument(skip(self))]
    pub fn record_reading(&mut self, room: &str, device: &str, sensor: &str, raw: &str) -> bool {
        let Some(target) =
            find_device_mut(&mut self.house, room, device).and_then(|d| d.sensor_mut(sensor))
        else {
            tracing::warn!("sensor not found");
            return false;
        };
        let accepted = target.record(raw);
        if !accepted {
            tracing::debug!("reading rejected");
        }
        accepted
    }

    /// Apply a setting on an actuator. Returns `false` when the actuator is
    /// missing or the value is invalid.
    #[tracing::instrument(skip(self))]
    pub fn apply_setting(&mut self, room: &str, device: &str, actuator: &str, raw: &str) -> bool {
        let Some(target) =
            find_device_mut(&mut self.house, room, device).and_then(|d| d.actuator_mut(actuator))
        else {
            tracing::warn!("actuator not found");
            return false;
        };
        let accepted = target.apply(raw);
        if !accepted {
            tracing::debug!("setting rejected");
        }
        accepted
    }

    /// Change the accepted range of a range-bounded actuator.
    #[tracing::instrument(skip(self))]
    pub fn set_actuator_limits(
        &mut self,
        room: &str,
        device: &str,
        actuator: &str,
        lower: &str,
        upper: &str,
    ) -> bool {
        find_device_mut(&mut self.house, room, device)
            .and_then(|d| d.actuator_mut(actuator))
            .is_some_and(|a| a.set_limits(lower, upper))
    }

    /// Returns `true` only when the device exists and its state changed.
    #[tracing::instrument(skip(self))]
    pub fn switch_device(&mut self, room: &str, device: &str, state: bool) -> bool {
        find_device_mut(&mut self.house, room, device).is_some_and(|d| d.switch_device(state))
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] when the address has a blank
    /// field or the coordinates are out of range.
    #[tracing::instrument(skip(self, location), fields(city = %location.city))]
    pub fn configure_location(&mut self, location: LocationDto) -> Result<(), SmartHomeError> {
        let location = Location::try_from(location)?;
        self.house.configure_location(location);
        Ok(())
    }

    #[must_use]
    pub fn location(&self) -> Option<LocationDto> {
        self.house.location().map(LocationDto::from)
    }

    /// The devices-by-functionality report.
    ///
    /// `None` when the house has no rooms or any room has no devices.
    #[tracing::instrument(skip(self))]
    pub fn devices_by_functionality(&self) -> Option<ReportDto> {
        let report = self.house.devices_by_functionality();
        if report.is_none() {
            tracing::debug!(rooms = self.house.rooms().len(), "no report: empty house or empty room");
        }
        report.map(ReportDto::from)
    }

    /// Populate the house from a seed.
    ///
    /// Entries that would be refused (duplicate names, unknown rooms or
    /// models, invalid values) are skipped and counted. A duplicate room is
    /// skipped together with its devices, each counted once.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] when the seed contains a blank
    /// name, a non-positive dimension or an invalid location.
    #[tracing::instrument(skip_all, fields(rooms = seed.rooms.len()))]
    pub fn apply_seed(&mut self, seed: HouseSeed) -> Result<SeedSummary, SmartHomeError> {
        let mut summary = SeedSummary::default();

        if let Some(location) = seed.location {
            self.configure_location(location)?;
        }

        for room in &seed.rooms {
            if !self.add_room(&room.name, &room.floor, room.height, room.width, room.length)? {
                summary.skipped += 1 + room.devices.len();
                continue;
            }
            summary.rooms += 1;
            for device in &room.devices {
                self.seed_device(&room.name, device, &mut summary)?;
            }
        }

        tracing::info!(
            rooms = summary.rooms,
            devices = summary.devices,
            sensors = summary.sensors,
            actuators = summary.actuators,
            skipped = summary.skipped,
            "house seeded"
        );
        Ok(summary)
    }

    fn seed_device(
        &mut self,
        room: &str,
        device: &DeviceSeed,
        summary: &mut SeedSummary,
    ) -> Result<(), SmartHomeError> {
        if !self.add_device(room, &device.name, &device.model)? {
            summary.skipped += 1;
            return Ok(());
        }
        summary.devices += 1;
        if device.active {
            self.switch_device(room, &device.name, true);
        }

        for sensor in &device.sensors {
            if !self.add_sensor(room, &device.name, &sensor.model, &sensor.name) {
                summary.skipped += 1;
                continue;
            }
            summary.sensors += 1;
            if let Some(value) = &sensor.value {
                if !self.record_reading(room, &device.name, &sensor.name, value) {
                    summary.skipped += 1;
                }
            }
        }

        for actuator in &device.actuators {
            if !self.add_actuator(room, &device.name, &actuator.model, &actuator.name) {
                summary.skipped += 1;
                continue;
            }
            summary.actuators += 1;
            summary.skipped += self.seed_actuator_state(room, &device.name, actuator);
        }
        Ok(())
    }

    /// Apply seeded limits then value, returning how many of them were refused.
    fn seed_actuator_state(&mut self, room: &str, device: &str, actuator: &ComponentSeed) -> usize {
        let mut refused = 0;
        if let Some((lower, upper)) = &actuator.limits {
            if !self.set_actuator_limits(room, device, &actuator.name, lower, upper) {
                refused += 1;
            }
        }
        if let Some(value) = &actuator.value {
            if !self.apply_setting(room, device, &actuator.name, value) {
                refused += 1;
            }
        }
        refused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::RoomSeed;
    use smarthome_domain::catalogue::{CatalogueConfig, ComponentRegistry};
    use smarthome_domain::component::{Actuator, Sensor};
    use smarthome_domain::error::ValidationError;
    use smarthome_domain::functionality::{ActuatorFunctionality, SensorFunctionality};
    use smarthome_domain::name::validate_name;
    use smarthome_domain::report::WITHOUT_FUNCTIONALITY;
    use smarthome_domain::value::{Measurement, MeasurementValue, StandardValueFactory};

    #[derive(Debug)]
    struct Thermometer {
        name: String,
        factory: SharedValueFactory,
        reading: Option<MeasurementValue>,
    }

    impl Sensor for Thermometer {
        fn name(&self) -> &str {
            &self.name
        }

        fn functionality(&self) -> SensorFunctionality {
            SensorFunctionality::Temperature
        }

        fn reading(&self) -> Option<&MeasurementValue> {
            self.reading.as_ref()
        }

        fn record(&mut self, raw: &str) -> bool {
            let mut value = self.reading.clone().unwrap_or_else(|| self.factory.celsius());
            let accepted = value.set_value(raw);
            if accepted {
                self.reading = Some(value);
            }
            accepted
        }
    }

    #[derive(Debug)]
    struct Dimmer {
        name: String,
        range: (i64, i64),
        factory: SharedValueFactory,
        setting: Option<MeasurementValue>,
    }

    impl Actuator for Dimmer {
        fn name(&self) -> &str {
            &self.name
        }

        fn functionality(&self) -> ActuatorFunctionality {
            ActuatorFunctionality::IntegerSetter
        }

        fn setting(&self) -> Option<&MeasurementValue> {
            self.setting.as_ref()
        }

        fn apply(&mut self, raw: &str) -> bool {
            let Some(mut value) = self.setting.clone().or_else(|| {
                self.factory.bounded_integer(self.range.0, self.range.1)
            }) else {
                return false;
            };
            let accepted = value.set_value(raw);
            if accepted {
                self.setting = Some(value);
            }
            accepted
        }

        fn set_limits(&mut self, lower: &str, upper: &str) -> bool {
            match (lower.parse(), upper.parse()) {
                (Ok(lower), Ok(upper)) if lower <= upper => {
                    self.range = (lower, upper);
                    self.setting = None;
                    true
                }
                _ => false,
            }
        }
    }

    fn thermometer(
        catalogue: &Catalogue,
        name: &str,
        factory: SharedValueFactory,
    ) -> Result<Box<dyn Sensor>, SmartHomeError> {
        let name = validate_name(name)?;
        catalogue.resolve_functionality(SensorFunctionality::Temperature)?;
        Ok(Box::new(Thermometer {
            name,
            factory,
            reading: None,
        }))
    }

    fn dimmer(
        catalogue: &Catalogue,
        name: &str,
        factory: SharedValueFactory,
    ) -> Result<Box<dyn Actuator>, SmartHomeError> {
        let name = validate_name(name)?;
        catalogue.resolve_functionality(ActuatorFunctionality::IntegerSetter)?;
        Ok(Box::new(Dimmer {
            name,
            range: (0, 100),
            factory,
            setting: None,
        }))
    }

    fn make_service() -> HouseService {
        let mut registry = ComponentRegistry::new();
        registry.register_sensor("fake.thermometer", SensorFunctionality::Temperature, thermometer);
        registry.register_actuator("fake.dimmer", ActuatorFunctionality::IntegerSetter, dimmer);
        let config = CatalogueConfig::default()
            .with_model("TH-1", "fake.thermometer")
            .with_model("DM-1", "fake.dimmer")
            .with_functionality("Temperature", true)
            .with_functionality("IntegerSetter", true);
        let catalogue = Catalogue::new(&config, &registry).unwrap();
        HouseService::new(catalogue, StandardValueFactory::shared())
    }

    fn service_with_device() -> HouseService {
        let mut service = make_service();
        service.add_room("Kitchen", "Ground", 2.5, 3.0, 4.0).unwrap();
        service.add_device("Kitchen", "Oven", "OV-1").unwrap();
        service
    }

    fn location_dto() -> LocationDto {
        LocationDto {
            street: "Main Street 1".to_string(),
            postal_code: "1000".to_string(),
            city: "Springfield".to_string(),
            country: "USA".to_string(),
            latitude: 39.8,
            longitude: -89.6,
            altitude: 0.0,
        }
    }

    #[test]
    fn should_add_room_and_list_it() {
        let mut service = make_service();
        assert!(service.add_room("Kitchen", "Ground", 2.5, 3.0, 4.0).unwrap());
        let rooms = service.rooms();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].name, "Kitchen");
        assert_eq!(rooms[0].devices, 0);
    }

    #[test]
    fn should_return_false_when_room_name_is_taken() {
        let mut service = make_service();
        service.add_room("Kitchen", "Ground", 2.5, 3.0, 4.0).unwrap();
        assert!(!service.add_room("KITCHEN", "First", 2.5, 3.0, 4.0).unwrap());
    }

    #[test]
    fn should_fail_when_dimension_is_not_positive() {
        let mut service = make_service();
        let result = service.add_room("Kitchen", "Ground", 0.0, 3.0, 4.0);
        assert!(matches!(
            result,
            Err(SmartHomeError::Validation(ValidationError::InvalidDimension { .. }))
        ));
    }

    #[test]
    fn should_return_false_when_adding_device_to_missing_room() {
        let mut service = make_service();
        assert!(!service.add_device("Nowhere", "Oven", "OV-1").unwrap());
    }

    #[test]
    fn should_list_devices_of_room() {
        let service = service_with_device();
        let devices = service.devices("kitchen");
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].name, "Oven");
        assert!(!devices[0].active);
        assert!(service.devices("Garage").is_empty());
    }

    #[test]
    fn should_attach_sensor_and_record_reading() {
        let mut service = service_with_device();
        assert!(service.add_sensor("Kitchen", "Oven", "TH-1", "probe"));
        assert!(service.record_reading("Kitchen", "Oven", "probe", "180"));
        assert!(!service.record_reading("Kitchen", "Oven", "probe", "hot"));

        let sensors = service.sensors("Kitchen", "Oven");
        assert_eq!(
            sensors,
            vec![ComponentDto {
                name: "probe".to_string(),
                functionality: "Temperature".to_string(),
                value: Some("180 \u{b0}C".to_string()),
            }]
        );
    }

    #[test]
    fn should_reject_unknown_model_and_duplicate_component() {
        let mut service = service_with_device();
        assert!(!service.add_sensor("Kitchen", "Oven", "XX-9", "probe"));
        assert!(service.add_sensor("Kitchen", "Oven", "TH-1", "probe"));
        assert!(!service.add_sensor("Kitchen", "Oven", "TH-1", "PROBE"));
        assert!(!service.add_sensor("Kitchen", "Oven", "DM-1", "other"));
        assert_eq!(service.sensors("Kitchen", "Oven").len(), 1);
    }

    #[test]
    fn should_attach_actuator_and_apply_setting() {
        let mut service = service_with_device();
        assert!(service.add_actuator("Kitchen", "Oven", "DM-1", "power"));
        assert!(service.apply_setting("Kitchen", "Oven", "power", "75"));
        assert!(!service.apply_setting("Kitchen", "Oven", "power", "175"));
        assert!(service.set_actuator_limits("Kitchen", "Oven", "power", "0", "200"));
        assert!(service.apply_setting("Kitchen", "Oven", "power", "175"));
        assert_eq!(
            service.actuators("Kitchen", "Oven")[0].value.as_deref(),
            Some("175")
        );
    }

    #[test]
    fn should_return_false_for_components_of_missing_device() {
        let mut service = service_with_device();
        assert!(!service.add_sensor("Kitchen", "Fridge", "TH-1", "probe"));
        assert!(!service.record_reading("Kitchen", "Oven", "missing", "1"));
        assert!(!service.apply_setting("Kitchen", "Oven", "missing", "1"));
        assert!(service.sensors("Kitchen", "Fridge").is_empty());
    }

    #[test]
    fn should_switch_device_only_on_change() {
        let mut service = service_with_device();
        assert!(service.switch_device("Kitchen", "Oven", true));
        assert!(!service.switch_device("Kitchen", "Oven", true));
        assert!(service.devices("Kitchen")[0].active);
        assert!(!service.switch_device("Kitchen", "Fridge", true));
    }

    #[test]
    fn should_configure_location() {
        let mut service = make_service();
        service.configure_location(location_dto()).unwrap();
        assert_eq!(service.location(), Some(location_dto()));
    }

    #[test]
    fn should_reject_invalid_location() {
        let mut service = make_service();
        let dto = LocationDto {
            country: String::new(),
            ..location_dto()
        };
        assert!(service.configure_location(dto).is_err());
        assert!(service.location().is_none());
    }

    #[test]
    fn should_report_devices_by_functionality() {
        let mut service = service_with_device();
        service.add_sensor("Kitchen", "Oven", "TH-1", "probe");
        service.add_device("Kitchen", "Lamp", "LP-1").unwrap();

        let report = service.devices_by_functionality().unwrap();
        assert_eq!(report.devices("Temperature").unwrap()[0].device, "Oven");
        assert_eq!(report.devices(WITHOUT_FUNCTIONALITY).unwrap()[0].device, "Lamp");
    }

    #[test]
    fn should_have_no_report_when_a_room_is_empty() {
        let mut service = service_with_device();
        service.add_room("Hall", "Ground", 2.5, 1.0, 4.0).unwrap();
        assert!(service.devices_by_functionality().is_none());
    }

    #[test]
    fn should_apply_seed_and_count_skipped_entries() {
        let mut service = make_service();
        let seed = HouseSeed {
            location: Some(location_dto()),
            rooms: vec![
                RoomSeed {
                    name: "Kitchen".to_string(),
                    floor: "Ground".to_string(),
                    height: 2.5,
                    width: 3.0,
                    length: 4.0,
                    devices: vec![
                        DeviceSeed {
                            name: "Oven".to_string(),
                            model: "OV-1".to_string(),
                            active: true,
                            sensors: vec![
                                ComponentSeed {
                                    name: "probe".to_string(),
                                    model: "TH-1".to_string(),
                                    value: Some("200".to_string()),
                                    limits: None,
                                },
                                ComponentSeed {
                                    name: "ghost".to_string(),
                                    model: "XX-9".to_string(),
                                    value: None,
                                    limits: None,
                                },
                            ],
                            actuators: vec![ComponentSeed {
                                name: "power".to_string(),
                                model: "DM-1".to_string(),
                                value: Some("250".to_string()),
                                limits: Some(("0".to_string(), "300".to_string())),
                            }],
                        },
                        DeviceSeed {
                            name: "oven".to_string(),
                            model: "OV-2".to_string(),
                            active: false,
                            sensors: Vec::new(),
                            actuators: Vec::new(),
                        },
                    ],
                },
                RoomSeed {
                    name: "kitchen".to_string(),
                    floor: "First".to_string(),
                    height: 2.5,
                    width: 3.0,
                    length: 4.0,
                    devices: Vec::new(),
                },
            ],
        };

        let summary = service.apply_seed(seed).unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                rooms: 1,
                devices: 1,
                sensors: 1,
                actuators: 1,
                skipped: 3,
            }
        );
        assert!(service.devices("Kitchen")[0].active);
        assert_eq!(
            service.actuators("Kitchen", "Oven")[0].value.as_deref(),
            Some("250")
        );
        assert!(service.location().is_some());
    }

    #[test]
    fn should_skip_devices_of_duplicate_room() {
        let mut service = make_service();
        let room = |name: &str, device: &str| RoomSeed {
            name: name.to_string(),
            floor: "Ground".to_string(),
            height: 2.5,
            width: 3.0,
            length: 4.0,
            devices: vec![DeviceSeed {
                name: device.to_string(),
                model: "OV-1".to_string(),
                active: false,
                sensors: Vec::new(),
                actuators: Vec::new(),
            }],
        };
        let seed = HouseSeed {
            location: None,
            rooms: vec![room("Kitchen", "Oven"), room("kitchen", "Bed")],
        };

        let summary = service.apply_seed(seed).unwrap();
        assert_eq!(summary.rooms, 1);
        assert_eq!(summary.devices, 1);
        assert_eq!(summary.skipped, 2);
        let names: Vec<_> = service.devices("Kitchen").into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Oven".to_string()]);
    }

    #[test]
    fn should_fail_seed_with_blank_room_name() {
        let mut service = make_service();
        let seed = HouseSeed {
            location: None,
            rooms: vec![RoomSeed {
                name: " ".to_string(),
                floor: "Ground".to_string(),
                height: 2.5,
                width: 3.0,
                length: 4.0,
                devices: Vec::new(),
            }],
        };
        assert!(service.apply_seed(seed).is_err());
    }
}
