pub mod defaults;
pub mod envvars;
pub mod params;
pub mod routes;

/// Contract generation spoken by every request and response in this crate.
pub const API_VERSION: &str = "v2";

pub const CORRELATION_HEADER: &str = "X-Correlation-ID";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";
