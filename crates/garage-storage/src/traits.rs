//! Store trait definitions

use crate::error::StorageResult;
use async_trait::async_trait;
use garage_core::resolver;
use garage_core::{
    Catalog, Manufacturer, ManufacturerId, NewManufacturer, NewVehicle, Vehicle, VehicleId,
};

/// Trait for entity store implementations
///
/// Records are only ever appended. Reads return owned copies so callers
/// never hold on to store internals.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Health check
    async fn health_check(&self) -> StorageResult<bool>;

    // ─────────────────────────────────────────────────────────────────────────
    // Vehicle Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// All vehicles, in insertion order
    async fn list_vehicles(&self) -> StorageResult<Vec<Vehicle>>;

    /// Assign the next vehicle id and append the record
    async fn append_vehicle(&self, vehicle: NewVehicle) -> StorageResult<Vehicle>;

    /// Get a vehicle by id
    async fn get_vehicle(&self, id: VehicleId) -> StorageResult<Option<Vehicle>> {
        let vehicles = self.list_vehicles().await?;
        Ok(resolver::find_vehicle(&vehicles, id).cloned())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Manufacturer Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// All manufacturers, in insertion order
    async fn list_manufacturers(&self) -> StorageResult<Vec<Manufacturer>>;

    /// Assign the next manufacturer id and append the record
    async fn append_manufacturer(&self, manufacturer: NewManufacturer)
        -> StorageResult<Manufacturer>;

    /// Get a manufacturer by id
    async fn get_manufacturer(&self, id: ManufacturerId) -> StorageResult<Option<Manufacturer>> {
        let manufacturers = self.list_manufacturers().await?;
        Ok(resolver::find_manufacturer(&manufacturers, id).cloned())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Relationship Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// The manufacturer a vehicle references, `None` for a dangling reference
    async fn manufacturer_of(&self, vehicle: &Vehicle) -> StorageResult<Option<Manufacturer>> {
        let manufacturers = self.list_manufacturers().await?;
        Ok(resolver::manufacturer_of(vehicle, &manufacturers).cloned())
    }

    /// Vehicles owned by a manufacturer, empty when there are none
    async fn vehicles_of(&self, manufacturer_id: ManufacturerId) -> StorageResult<Vec<Vehicle>> {
        let vehicles = self.list_vehicles().await?;
        Ok(resolver::vehicles_of(manufacturer_id, &vehicles)
            .into_iter()
            .cloned()
            .collect())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Bulk Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Copy of both sequences
    async fn snapshot(&self) -> StorageResult<Catalog> {
        let manufacturers = self.list_manufacturers().await?;
        let vehicles = self.list_vehicles().await?;
        Ok(Catalog {
            manufacturers,
            vehicles,
        })
    }
}
