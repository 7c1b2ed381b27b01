//! # smarthomed
//!
//! Composition root that wires the catalogue, the built-in components and
//! the house service together.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialize logging
//! - Load the component catalogue against the built-in registry
//! - Seed the house from its description
//! - Print the rooms and the devices-by-functionality report as JSON
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer, no domain logic belongs here.

mod config;

use smarthome_adapter_components::builtin_registry;
use smarthome_app::services::house_service::HouseService;
use smarthome_domain::catalogue::Catalogue;
use smarthome_domain::component::ComponentKind;
use smarthome_domain::value::StandardValueFactory;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    // Catalogue
    let catalogue = Catalogue::new(&config.catalogue_config()?, &builtin_registry())?;
    tracing::info!(
        sensors = catalogue.models(ComponentKind::Sensor).count(),
        actuators = catalogue.models(ComponentKind::Actuator).count(),
        "catalogue loaded"
    );

    // House
    let mut service = HouseService::new(catalogue, StandardValueFactory::shared());
    let summary = service.apply_seed(config.house_seed()?)?;

    let report = service.devices_by_functionality();
    if report.is_none() {
        tracing::warn!("no functionality report: the house has no rooms or a room without devices");
    }

    let output = serde_json::json!({
        "summary": summary,
        "location": service.location(),
        "rooms": service.rooms(),
        "report": report,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
