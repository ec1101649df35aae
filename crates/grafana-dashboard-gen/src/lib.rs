// Numan Thabit 2025
//! grafana-dashboard-gen: emits the CPU usage Grafana dashboard as JSON.

/// Dashboard tree assembly.
pub mod builder;
/// Generator settings and TOML loading.
pub mod config;
/// Library error type.
pub mod error;
/// Typed dashboard document.
pub mod model;
/// Serialization and atomic file output.
pub mod output;

pub use builder::DashboardBuilder;
pub use config::{DatasourceConfig, GeneratorConfig};
pub use error::DashboardError;
pub use output::{generate, serialize, write_atomic};
