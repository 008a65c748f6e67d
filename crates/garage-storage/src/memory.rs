//! In-memory entity store

use crate::error::{StorageError, StorageResult};
use crate::traits::CatalogStore;
use async_trait::async_trait;
use garage_core::resolver;
use garage_core::{
    Catalog, Manufacturer, ManufacturerId, NewManufacturer, NewVehicle, Vehicle, VehicleId,
};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::RwLock;

/// In-memory entity store
///
/// Holds the two record sequences for the lifetime of the process. Ids
/// come from per-sequence atomic counters that start at the highest id
/// already present, so concurrent appends never hand out the same id.
pub struct MemoryStorage {
    vehicles: RwLock<Vec<Vehicle>>,
    manufacturers: RwLock<Vec<Manufacturer>>,
    last_vehicle_id: AtomicI32,
    last_manufacturer_id: AtomicI32,
}

impl MemoryStorage {
    /// Empty store
    pub fn new() -> Self {
        Self::from_catalog(Catalog::new())
    }

    /// Store populated with the seed dataset
    pub fn seeded() -> Self {
        Self::from_catalog(Catalog::seed())
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        let last_vehicle_id = catalog.vehicles.iter().map(|v| v.id.get()).max().unwrap_or(0);
        let last_manufacturer_id = catalog
            .manufacturers
            .iter()
            .map(|m| m.id.get())
            .max()
            .unwrap_or(0);

        Self {
            vehicles: RwLock::new(catalog.vehicles),
            manufacturers: RwLock::new(catalog.manufacturers),
            last_vehicle_id: AtomicI32::new(last_vehicle_id),
            last_manufacturer_id: AtomicI32::new(last_manufacturer_id),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Reserve the id after `counter`, failing instead of wrapping around
fn next_id(counter: &AtomicI32, kind: &'static str) -> StorageResult<i32> {
    counter
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
        .map(|last| last + 1)
        .map_err(|_| StorageError::IdExhausted(kind))
}

#[async_trait]
impl CatalogStore for MemoryStorage {
    async fn health_check(&self) -> StorageResult<bool> {
        Ok(true)
    }

    // Vehicle operations

    async fn list_vehicles(&self) -> StorageResult<Vec<Vehicle>> {
        let vehicles = self
            .vehicles
            .read()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(vehicles.clone())
    }

    async fn append_vehicle(&self, vehicle: NewVehicle) -> StorageResult<Vehicle> {
        let mut vehicles = self
            .vehicles
            .write()
            .map_err(|e| StorageError::Lock(e.to_string()))?;

        let id = next_id(&self.last_vehicle_id, "vehicles")?;
        let vehicle = vehicle.into_vehicle(VehicleId(id));
        vehicles.push(vehicle.clone());

        tracing::debug!(
            "Appended vehicle {} ({}) for manufacturer {}",
            vehicle.id,
            vehicle.name,
            vehicle.manufacturer_id
        );
        Ok(vehicle)
    }

    async fn get_vehicle(&self, id: VehicleId) -> StorageResult<Option<Vehicle>> {
        let vehicles = self
            .vehicles
            .read()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(resolver::find_vehicle(&vehicles, id).cloned())
    }

    // Manufacturer operations

    async fn list_manufacturers(&self) -> StorageResult<Vec<Manufacturer>> {
        let manufacturers = self
            .manufacturers
            .read()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(manufacturers.clone())
    }

    async fn append_manufacturer(
        &self,
        manufacturer: NewManufacturer,
    ) -> StorageResult<Manufacturer> {
        let mut manufacturers = self
            .manufacturers
            .write()
            .map_err(|e| StorageError::Lock(e.to_string()))?;

        let id = next_id(&self.last_manufacturer_id, "manufacturers")?;
        let manufacturer = manufacturer.into_manufacturer(ManufacturerId(id));
        manufacturers.push(manufacturer.clone());

        tracing::debug!("Appended manufacturer {} ({})", manufacturer.id, manufacturer.name);
        Ok(manufacturer)
    }

    async fn get_manufacturer(&self, id: ManufacturerId) -> StorageResult<Option<Manufacturer>> {
        let manufacturers = self
            .manufacturers
            .read()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(resolver::find_manufacturer(&manufacturers, id).cloned())
    }

    // Relationship operations

    async fn manufacturer_of(&self, vehicle: &Vehicle) -> StorageResult<Option<Manufacturer>> {
        let manufacturers = self
            .manufacturers
            .read()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(resolver::manufacturer_of(vehicle, &manufacturers).cloned())
    }

    async fn vehicles_of(&self, manufacturer_id: ManufacturerId) -> StorageResult<Vec<Vehicle>> {
        let vehicles = self
            .vehicles
            .read()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(resolver::vehicles_of(manufacturer_id, &vehicles)
            .into_iter()
            .cloned()
            .collect())
    }
}
