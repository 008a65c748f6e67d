//! Garage GraphQL - Query language surface for the vehicle catalog
//!
//! Exposes the catalog as a GraphQL schema and serves it over HTTP.
//!
//! ## Schema
//!
//! - **Queries**: `vehicle`, `vehicles`, `manufacturer`, `manufacturers`
//! - **Mutations**: `addVehicle`, `addManufacturer`
//!
//! ## Endpoints
//!
//! - `POST /graphql` executes a query or mutation document
//! - `GET /graphql` serves the GraphiQL explorer
//! - `GET /health` reports store health and record counts

pub mod http;
pub mod schema;
pub mod types;

pub use http::{bind_listener, create_router, run_http_server, serve_http, server_url, HttpState};
pub use schema::{build_schema, CatalogSchema, MutationRoot, QueryRoot, SchemaLimits, SharedStore};
pub use types::{ManufacturerObject, NullableList, VehicleObject};
