//! GraphQL object types
//!
//! Relationship fields are resolved against the store each time they are
//! selected, so nesting is bounded only by the query document (and the
//! schema's depth limit).

use async_graphql::{Context, Object, Result};
use garage_core::{Manufacturer, Vehicle};

use crate::schema::SharedStore;

/// List field shape `[T]`: both the list and its items are nullable
pub type NullableList<T> = Option<Vec<Option<T>>>;

/// Wrap resolved records in the `[T]` list shape
pub(crate) fn nullable_list<T, O: From<T>>(items: Vec<T>) -> NullableList<O> {
    Some(items.into_iter().map(|item| Some(O::from(item))).collect())
}

/// GraphQL view of a [`Vehicle`]
#[derive(Debug, Clone)]
pub struct VehicleObject(pub Vehicle);

impl From<Vehicle> for VehicleObject {
    fn from(vehicle: Vehicle) -> Self {
        Self(vehicle)
    }
}

/// This represents a vehicle manufactured by a manufacturer
#[Object(name = "Vehicle")]
impl VehicleObject {
    async fn id(&self) -> i32 {
        self.0.id.get()
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn manufacturer_id(&self) -> i32 {
        self.0.manufacturer_id.get()
    }

    /// Manufacturer referenced by `manufacturerId`, null if it does not exist
    async fn manufacturer(&self, ctx: &Context<'_>) -> Result<Option<ManufacturerObject>> {
        let store = ctx.data::<SharedStore>()?;
        let manufacturer = store.manufacturer_of(&self.0).await?;
        Ok(manufacturer.map(ManufacturerObject::from))
    }
}

/// GraphQL view of a [`Manufacturer`]
#[derive(Debug, Clone)]
pub struct ManufacturerObject(pub Manufacturer);

impl From<Manufacturer> for ManufacturerObject {
    fn from(manufacturer: Manufacturer) -> Self {
        Self(manufacturer)
    }
}

/// This represents a manufacturer of a vehicle
#[Object(name = "Manufacturer")]
impl ManufacturerObject {
    async fn id(&self) -> i32 {
        self.0.id.get()
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn revenue(&self) -> Option<&str> {
        self.0.revenue.as_deref()
    }

    /// Vehicles built by this manufacturer, empty when there are none
    async fn vehicles(&self, ctx: &Context<'_>) -> Result<NullableList<VehicleObject>> {
        let store = ctx.data::<SharedStore>()?;
        let vehicles = store.vehicles_of(self.0.id).await?;
        Ok(nullable_list(vehicles))
    }
}
