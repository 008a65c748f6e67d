//! Garage Core - Data model for the vehicle catalog
//!
//! This crate provides the record types, the seed dataset and the
//! relationship resolver shared by the storage and GraphQL layers.

pub mod catalog;
pub mod limits;
pub mod manufacturer;
pub mod resolver;
pub mod vehicle;

pub use catalog::Catalog;
pub use manufacturer::{Manufacturer, ManufacturerId, NewManufacturer};
pub use vehicle::{NewVehicle, Vehicle, VehicleId};
