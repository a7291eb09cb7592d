//! Library exports for reuse in benchmarks and tests.
/// Backend client and wire types.
pub mod api;
/// Application directory resolution.
pub mod app_dirs;
/// TOML configuration.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Editable feature values.
pub mod features;
pub(crate) mod http_client;
/// Tracing setup.
pub mod logging;
/// Field schema, grouping and search.
pub mod schema;
