//! Relationship resolution between vehicles and manufacturers
//!
//! Every function here is a linear scan over the slice it is given. Results
//! follow slice order and nothing is cached, so callers always observe the
//! current contents of the store.

use crate::manufacturer::{Manufacturer, ManufacturerId};
use crate::vehicle::{Vehicle, VehicleId};

/// First vehicle with the given id
pub fn find_vehicle(vehicles: &[Vehicle], id: VehicleId) -> Option<&Vehicle> {
    vehicles.iter().find(|v| v.id == id)
}

/// First manufacturer with the given id
pub fn find_manufacturer(manufacturers: &[Manufacturer], id: ManufacturerId) -> Option<&Manufacturer> {
    manufacturers.iter().find(|m| m.id == id)
}

/// The manufacturer a vehicle references, if one exists
pub fn manufacturer_of<'a>(
    vehicle: &Vehicle,
    manufacturers: &'a [Manufacturer],
) -> Option<&'a Manufacturer> {
    find_manufacturer(manufacturers, vehicle.manufacturer_id)
}

/// All vehicles referencing a manufacturer id
pub fn vehicles_of(manufacturer_id: ManufacturerId, vehicles: &[Vehicle]) -> Vec<&Vehicle> {
    vehicles
        .iter()
        .filter(|v| v.manufacturer_id == manufacturer_id)
        .collect()
}
