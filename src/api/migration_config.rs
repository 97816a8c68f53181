use serde::{Deserialize, Serialize};

use crate::core::{HeatmapOptions, SchemeCatalog};
use crate::error::{MigrationError, MigrationResult};

/// Field gating the Y-axis bucket-count branch of the conversion.
///
/// Legacy conversion tested the X-axis bucket count before copying the Y-axis
/// one. That gate is kept as the default so migrated dashboards stay identical
/// to what the panel editor produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YCountSource {
    #[default]
    XBucketNumber,
    YBucketNumber,
}

/// Inputs the conversion reads besides the legacy panel itself.
///
/// This type is serializable so tooling can run migrations against alternate
/// defaults or scheme catalogs without recompiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationConfig {
    #[serde(default)]
    pub defaults: HeatmapOptions,
    #[serde(default = "default_schemes")]
    pub schemes: SchemeCatalog,
    #[serde(default = "default_heatmap_plugin_id")]
    pub heatmap_plugin_id: String,
    #[serde(default)]
    pub y_count_source: YCountSource,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            defaults: HeatmapOptions::default(),
            schemes: default_schemes(),
            heatmap_plugin_id: default_heatmap_plugin_id(),
            y_count_source: YCountSource::default(),
        }
    }
}

impl MigrationConfig {
    /// Sets the baseline options the conversion starts from.
    #[must_use]
    pub fn with_defaults(mut self, defaults: HeatmapOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Sets the catalog consulted for legacy spectrum schemes.
    #[must_use]
    pub fn with_schemes(mut self, schemes: SchemeCatalog) -> Self {
        self.schemes = schemes;
        self
    }

    /// Sets the plugin id identifying heatmap panels in dashboards.
    #[must_use]
    pub fn with_heatmap_plugin_id(mut self, plugin_id: impl Into<String>) -> Self {
        self.heatmap_plugin_id = plugin_id.into();
        self
    }

    /// Sets the field gating the Y-axis bucket-count branch.
    #[must_use]
    pub fn with_y_count_source(mut self, source: YCountSource) -> Self {
        self.y_count_source = source;
        self
    }

    pub fn validate(&self) -> MigrationResult<()> {
        if self.heatmap_plugin_id.trim().is_empty() {
            return Err(MigrationError::InvalidConfig(
                "heatmap plugin id must not be empty".to_owned(),
            ));
        }
        if self.defaults.color.scheme.is_empty() {
            return Err(MigrationError::InvalidConfig(
                "default color scheme must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> MigrationResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MigrationError::InvalidJson(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> MigrationResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| MigrationError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_schemes() -> SchemeCatalog {
    SchemeCatalog::builtin()
}

fn default_heatmap_plugin_id() -> String {
    "heatmap".to_owned()
}
