pub mod converter;
pub mod dashboard;
pub mod json_contract;
pub mod migration_config;
pub mod panel_migration;

pub use converter::{LegacyConversion, convert};
pub use dashboard::{DashboardMigrationReport, PanelOutcome, migrate_dashboard};
pub use json_contract::{MIGRATION_CONFIG_JSON_SCHEMA_V1, MigrationConfigJsonContractV1};
pub use migration_config::{MigrationConfig, YCountSource};
pub use panel_migration::{PanelMigration, PanelModel, migrate, migrate_panels, panel_type_changed};
