//! Schema roots and construction

use std::sync::Arc;

use async_graphql::extensions::Tracing;
use async_graphql::{Context, EmptySubscription, Object, Result, Schema};
use garage_core::limits::{DEFAULT_MAX_QUERY_COMPLEXITY, DEFAULT_MAX_QUERY_DEPTH};
use garage_core::{ManufacturerId, NewManufacturer, NewVehicle, VehicleId};
use garage_storage::CatalogStore;

use crate::types::{nullable_list, ManufacturerObject, NullableList, VehicleObject};

/// Store handle shared by every resolver through the schema data
pub type SharedStore = Arc<dyn CatalogStore>;

/// The complete catalog schema
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Caps applied to every incoming document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaLimits {
    pub max_depth: usize,
    pub max_complexity: usize,
}

impl Default for SchemaLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_QUERY_DEPTH,
            max_complexity: DEFAULT_MAX_QUERY_COMPLEXITY,
        }
    }
}

/// Build the schema over a store
pub fn build_schema(store: SharedStore, limits: SchemaLimits) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .limit_depth(limits.max_depth)
        .limit_complexity(limits.max_complexity)
        .extension(Tracing)
        .finish()
}

/// Root Query
#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// A single Vehicle
    async fn vehicle(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<VehicleObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = ctx.data::<SharedStore>()?;
        let vehicle = store.get_vehicle(VehicleId(id)).await?;
        Ok(vehicle.map(VehicleObject::from))
    }

    /// List of All Vehicles
    async fn vehicles(&self, ctx: &Context<'_>) -> Result<NullableList<VehicleObject>> {
        let store = ctx.data::<SharedStore>()?;
        let vehicles = store.list_vehicles().await?;
        Ok(nullable_list(vehicles))
    }

    /// A single manufacturer
    async fn manufacturer(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> Result<Option<ManufacturerObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = ctx.data::<SharedStore>()?;
        let manufacturer = store.get_manufacturer(ManufacturerId(id)).await?;
        Ok(manufacturer.map(ManufacturerObject::from))
    }

    /// Return a list of all car manufacturers
    async fn manufacturers(&self, ctx: &Context<'_>) -> Result<NullableList<ManufacturerObject>> {
        let store = ctx.data::<SharedStore>()?;
        let manufacturers = store.list_manufacturers().await?;
        Ok(nullable_list(manufacturers))
    }
}

/// Root Mutation
#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a vehicle
    ///
    /// The manufacturer reference is not checked.
    async fn add_vehicle(
        &self,
        ctx: &Context<'_>,
        name: String,
        manufacturer_id: i32,
    ) -> Result<Option<VehicleObject>> {
        let store = ctx.data::<SharedStore>()?;
        let vehicle = store
            .append_vehicle(NewVehicle::new(name, manufacturer_id))
            .await?;
        tracing::info!("Added vehicle {} ({})", vehicle.id, vehicle.name);
        Ok(Some(vehicle.into()))
    }

    /// Add a manufacturer
    async fn add_manufacturer(
        &self,
        ctx: &Context<'_>,
        name: String,
        revenue: Option<String>,
    ) -> Result<Option<ManufacturerObject>> {
        let store = ctx.data::<SharedStore>()?;
        let mut manufacturer = NewManufacturer::new(name);
        if let Some(revenue) = revenue {
            manufacturer = manufacturer.with_revenue(revenue);
        }
        let manufacturer = store.append_manufacturer(manufacturer).await?;
        tracing::info!("Added manufacturer {} ({})", manufacturer.id, manufacturer.name);
        Ok(Some(manufacturer.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::{Request, Variables};
    use garage_storage::MemoryStorage;
    use serde_json::json;

    fn seeded_schema() -> CatalogSchema {
        build_schema(Arc::new(MemoryStorage::seeded()), SchemaLimits::default())
    }

    async fn run(schema: &CatalogSchema, document: &str) -> serde_json::Value {
        let response = schema.execute(document).await;
        assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
        response.data.into_json().unwrap()
    }

    #[tokio::test]
    async fn test_vehicle_with_manufacturer() {
        let schema = seeded_schema();

        let data = run(
            &schema,
            "{ vehicle(id: 2) { id name manufacturerId manufacturer { id name revenue } } }",
        )
        .await;

        assert_eq!(
            data,
            json!({
                "vehicle": {
                    "id": 2,
                    "name": "3.0 CS Alpina",
                    "manufacturerId": 3,
                    "manufacturer": { "id": 3, "name": "BMW", "revenue": "€104.210 billion" }
                }
            })
        );
    }

    #[tokio::test]
    async fn test_missing_ids_resolve_to_null() {
        let schema = seeded_schema();

        let data = run(
            &schema,
            "{ a: vehicle(id: 0) { id } b: vehicle(id: -1) { id } c: vehicle { id } d: manufacturer(id: 42) { id } }",
        )
        .await;

        assert_eq!(data, json!({ "a": null, "b": null, "c": null, "d": null }));
    }

    #[tokio::test]
    async fn test_list_queries_follow_seed_order() {
        let schema = seeded_schema();

        let data = run(&schema, "{ vehicles { id } manufacturers { name } }").await;

        let ids: Vec<i64> = data["vehicles"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());

        assert_eq!(
            data["manufacturers"],
            json!([
                { "name": "Ferrari" },
                { "name": "Lamborghini" },
                { "name": "BMW" },
                { "name": "Mitsubishi Motors" },
                { "name": "TVR" },
                { "name": "Nissan" }
            ])
        );
    }

    #[tokio::test]
    async fn test_manufacturer_vehicles() {
        let schema = seeded_schema();

        let data = run(&schema, "{ manufacturer(id: 3) { vehicles { name } } }").await;
        assert_eq!(
            data,
            json!({
                "manufacturer": {
                    "vehicles": [
                        { "name": "3.0 CS Alpina" },
                        { "name": "E36 M3" },
                        { "name": "E38 750i" }
                    ]
                }
            })
        );
    }

    #[tokio::test]
    async fn test_add_vehicle() {
        let schema = seeded_schema();

        let data = run(
            &schema,
            r#"mutation { addVehicle(name: "Test Car", manufacturerId: 1) { id name manufacturerId } }"#,
        )
        .await;
        assert_eq!(
            data,
            json!({ "addVehicle": { "id": 11, "name": "Test Car", "manufacturerId": 1 } })
        );

        let data = run(&schema, "{ manufacturer(id: 1) { vehicles { id name } } }").await;
        assert_eq!(
            data["manufacturer"]["vehicles"],
            json!([
                { "id": 9, "name": "550 Maranello" },
                { "id": 11, "name": "Test Car" }
            ])
        );
    }

    #[tokio::test]
    async fn test_add_manufacturer_keeps_revenue() {
        let schema = seeded_schema();

        let request = Request::new(
            "mutation Add($name: String!, $revenue: String) { addManufacturer(name: $name, revenue: $revenue) { id } }",
        )
        .variables(Variables::from_json(json!({ "name": "TestCo", "revenue": "€1" })));
        let response = schema.execute(request).await;
        assert!(response.errors.is_empty(), "errors: {:?}", response.errors);

        let data = run(&schema, "{ manufacturer(id: 7) { id name revenue vehicles { id } } }").await;
        assert_eq!(
            data,
            json!({
                "manufacturer": { "id": 7, "name": "TestCo", "revenue": "€1", "vehicles": [] }
            })
        );
    }

    #[tokio::test]
    async fn test_dangling_reference_resolves_to_null() {
        let schema = seeded_schema();

        let data = run(
            &schema,
            r#"mutation { addVehicle(name: "Orphan", manufacturerId: 99) { id manufacturer { name } } }"#,
        )
        .await;
        assert_eq!(data, json!({ "addVehicle": { "id": 11, "manufacturer": null } }));
    }

    #[tokio::test]
    async fn test_syntax_error() {
        let schema = seeded_schema();

        let response = schema.execute("{ vehicle(id: 1) { name }").await;
        assert!(!response.errors.is_empty());
    }

    #[tokio::test]
    async fn test_argument_type_mismatch() {
        let schema = seeded_schema();

        let response = schema.execute(r#"{ vehicle(id: "one") { name } }"#).await;
        assert!(!response.errors.is_empty());

        let response = schema
            .execute(r#"mutation { addVehicle(name: "No Maker") { id } }"#)
            .await;
        assert!(!response.errors.is_empty());
    }

    #[tokio::test]
    async fn test_depth_limit() {
        let schema = build_schema(
            Arc::new(MemoryStorage::seeded()),
            SchemaLimits {
                max_depth: 3,
                ..SchemaLimits::default()
            },
        );

        let response = schema
            .execute("{ vehicles { manufacturer { vehicles { manufacturer { name } } } } }")
            .await;
        assert!(!response.errors.is_empty());

        let response = schema.execute("{ vehicles { manufacturer { name } } }").await;
        assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
    }

    /// Render an introspected type reference in SDL notation
    fn render_type(ty: &serde_json::Value) -> String {
        match ty["kind"].as_str() {
            Some("NON_NULL") => format!("{}!", render_type(&ty["ofType"])),
            Some("LIST") => format!("[{}]", render_type(&ty["ofType"])),
            _ => ty["name"].as_str().unwrap_or_default().to_string(),
        }
    }

    async fn field_types(schema: &CatalogSchema, type_name: &str) -> Vec<(String, String)> {
        let document = format!(
            r#"{{ __type(name: "{}") {{ fields {{ name args {{ name type {{ ...TypeRef }} }} type {{ ...TypeRef }} }} }} }}
            fragment TypeRef on __Type {{ kind name ofType {{ kind name ofType {{ kind name ofType {{ kind name }} }} }} }}"#,
            type_name
        );
        let data = run(schema, &document).await;

        data["__type"]["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|field| {
                let args: Vec<String> = field["args"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|arg| format!("{}: {}", arg["name"].as_str().unwrap(), render_type(&arg["type"])))
                    .collect();
                let name = if args.is_empty() {
                    field["name"].as_str().unwrap().to_string()
                } else {
                    format!("{}({})", field["name"].as_str().unwrap(), args.join(", "))
                };
                (name, render_type(&field["type"]))
            })
            .collect()
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(name, ty)| (name.to_string(), ty.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_introspected_field_types() {
        let schema = seeded_schema();

        assert_eq!(
            field_types(&schema, "Vehicle").await,
            pairs(&[
                ("id", "Int!"),
                ("name", "String!"),
                ("manufacturerId", "Int!"),
                ("manufacturer", "Manufacturer"),
            ])
        );
        assert_eq!(
            field_types(&schema, "Manufacturer").await,
            pairs(&[
                ("id", "Int!"),
                ("name", "String!"),
                ("revenue", "String"),
                ("vehicles", "[Vehicle]"),
            ])
        );
        assert_eq!(
            field_types(&schema, "Query").await,
            pairs(&[
                ("vehicle(id: Int)", "Vehicle"),
                ("vehicles", "[Vehicle]"),
                ("manufacturer(id: Int)", "Manufacturer"),
                ("manufacturers", "[Manufacturer]"),
            ])
        );
        assert_eq!(
            field_types(&schema, "Mutation").await,
            pairs(&[
                ("addVehicle(name: String!, manufacturerId: Int!)", "Vehicle"),
                ("addManufacturer(name: String!, revenue: String)", "Manufacturer"),
            ])
        );
    }

    #[test]
    fn test_sdl_field_lines() {
        let sdl = seeded_schema().sdl();
        let lines: Vec<&str> = sdl.lines().map(str::trim).collect();

        for expected in [
            "type Vehicle {",
            "manufacturerId: Int!",
            "manufacturer: Manufacturer",
            "type Manufacturer {",
            "revenue: String",
            "vehicles: [Vehicle]",
            "manufacturers: [Manufacturer]",
            "vehicle(id: Int): Vehicle",
            "type Mutation {",
        ] {
            assert!(lines.contains(&expected), "missing `{}` in:\n{}", expected, sdl);
        }
        assert!(!sdl.contains("[Vehicle!]"));
    }
}
