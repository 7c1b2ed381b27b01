//! Application services: use-case implementations.
//!
//! Services receive their collaborators (catalogue, value factory) at
//! construction time, keeping this layer decoupled from concrete components.

pub mod house_service;
