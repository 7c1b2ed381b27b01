//! # smarthome-domain
//!
//! Pure domain model for the smarthome household system.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, functionality enumerations
//! - Define **Measurement Values** (unit-tagged readings and settings) and the
//!   [`ValueFactory`](value::ValueFactory) capability that creates them
//! - Define the **Sensor** and **Actuator** component contracts
//! - Define the **Catalogue**: configuration-driven mapping from a component
//!   model to a registered implementation
//! - Define the **Device**, **Room** and **House** aggregates and their
//!   name-uniqueness invariants
//! - Produce the **devices-by-functionality** report
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Configuration is parsed elsewhere and handed in as plain values.

pub mod error;
pub mod functionality;
pub mod name;
pub mod value;

pub mod catalogue;
pub mod component;
pub mod device;
pub mod house;
pub mod location;
pub mod report;
pub mod room;

#[cfg(test)]
pub(crate) mod testing;
