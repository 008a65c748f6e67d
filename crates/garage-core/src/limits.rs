//! Resource limits for query execution and the HTTP transport

/// Default maximum selection depth of a query document (16)
///
/// Relationship fields form a cycle (vehicle -> manufacturer -> vehicles -> ...),
/// so nesting has to be capped somewhere.
pub const DEFAULT_MAX_QUERY_DEPTH: usize = 16;

/// Default maximum complexity score of a query document (512)
pub const DEFAULT_MAX_QUERY_COMPLEXITY: usize = 512;

/// Maximum request body size (1MB)
pub const MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024;

/// Port used when nothing else is configured
pub const DEFAULT_PORT: u16 = 4000;

/// Host used when nothing else is configured
pub const DEFAULT_HOST: &str = "0.0.0.0";
