//! heatmap-migrate: legacy heatmap panel option migration.
//!
//! Converts the loosely-typed option bag of pre-migration heatmap panels into
//! typed [`core::HeatmapOptions`]. The conversion is pure and never fails;
//! errors only surface at the JSON boundaries (config files, dashboards).

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{LegacyConversion, MigrationConfig, PanelMigration, PanelModel, convert, migrate};
pub use error::{MigrationError, MigrationResult};
