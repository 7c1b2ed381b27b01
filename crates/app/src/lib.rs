//! # smarthome-app
//!
//! Application layer: use-cases over the house aggregate.
//!
//! ## Responsibilities
//! - Provide the [`HouseService`](services::house_service::HouseService)
//!   use-cases: rooms, devices, components, readings, settings, location
//!   and the devices-by-functionality report
//! - Translate domain aggregates into serializable [`dto`]s
//! - Populate a house from a declarative [`seed`] description
//! - Log rejected operations; the domain itself stays silent
//!
//! ## Dependency rule
//! Depends on `smarthome-domain` only.
//! Never imports adapter crates. Component implementations reach the service
//! through the catalogue it is given.

pub mod dto;
pub mod seed;
pub mod services;
