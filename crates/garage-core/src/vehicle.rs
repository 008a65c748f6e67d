//! Vehicle records

use crate::manufacturer::ManufacturerId;
use serde::{Deserialize, Serialize};

/// Identifier of a vehicle, unique within the vehicle sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub i32);

impl VehicleId {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for VehicleId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vehicle built by a manufacturer
///
/// `manufacturer_id` is a plain reference: nothing guarantees that a
/// manufacturer with that id exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Unique identifier, assigned at creation
    pub id: VehicleId,

    /// Display name
    pub name: String,

    /// Owning manufacturer
    pub manufacturer_id: ManufacturerId,
}

impl Vehicle {
    pub fn new(
        id: impl Into<VehicleId>,
        name: impl Into<String>,
        manufacturer_id: impl Into<ManufacturerId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            manufacturer_id: manufacturer_id.into(),
        }
    }
}

/// Data for creating a new vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub name: String,
    pub manufacturer_id: ManufacturerId,
}

impl NewVehicle {
    pub fn new(name: impl Into<String>, manufacturer_id: impl Into<ManufacturerId>) -> Self {
        Self {
            name: name.into(),
            manufacturer_id: manufacturer_id.into(),
        }
    }

    /// Build the stored record once an id has been assigned
    pub fn into_vehicle(self, id: VehicleId) -> Vehicle {
        Vehicle {
            id,
            name: self.name,
            manufacturer_id: self.manufacturer_id,
        }
    }
}
