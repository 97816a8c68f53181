use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};

#[cfg(feature = "parallel-migration")]
use rayon::prelude::*;

use crate::core::{FieldConfigSource, LegacyConfig};
use crate::error::{MigrationError, MigrationResult};

use super::{LegacyConversion, MigrationConfig, convert};

/// Panel descriptor as stored in dashboard JSON.
///
/// Fields other than the three the migration inspects are kept in `extra`;
/// for pre-migration panels these carry the legacy option bag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_version: Option<String>,
    #[serde(default)]
    pub options: Map<String, Value>,
    #[serde(default)]
    pub field_config: FieldConfigSource,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Outcome of [`migrate`].
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMigration {
    /// The panel held legacy state and was converted.
    Converted(LegacyConversion),
    /// The panel is already on the current schema; its options are returned verbatim.
    Unchanged(Map<String, Value>),
}

impl PanelMigration {
    #[must_use]
    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted(_))
    }

    /// Options as the JSON object a host assigns onto the panel.
    pub fn into_options_value(self) -> MigrationResult<Value> {
        match self {
            Self::Converted(conversion) => serde_json::to_value(&conversion.options).map_err(|e| {
                MigrationError::InvalidJson(format!("failed to serialize heatmap options: {e}"))
            }),
            Self::Unchanged(options) => Ok(Value::Object(options)),
        }
    }
}

impl PanelModel {
    /// Reads a panel from a dashboard JSON value.
    pub fn from_json_value(value: Value) -> MigrationResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| MigrationError::InvalidJson(format!("failed to parse panel: {e}")))
    }

    pub fn to_json_value(&self) -> MigrationResult<Value> {
        serde_json::to_value(self)
            .map_err(|e| MigrationError::InvalidJson(format!("failed to serialize panel: {e}")))
    }

    /// Whether the panel still holds pre-migration state: no stored plugin
    /// version and no options.
    #[must_use]
    pub fn is_pre_migration(&self) -> bool {
        self.plugin_version.as_deref().is_none_or(str::is_empty) && self.options.is_empty()
    }

    #[must_use]
    pub fn plugin_id(&self) -> Option<&str> {
        self.extra.get("type").and_then(Value::as_str)
    }

    /// Assigns migrated options onto the panel.
    ///
    /// The caller-held `field_config` is left untouched; the conversion's own
    /// (always empty) field config is not authoritative. Consumed legacy keys
    /// are removed from `extra`.
    pub fn apply_migration(&mut self, migration: PanelMigration) -> MigrationResult<()> {
        let PanelMigration::Converted(_) = &migration else {
            return Ok(());
        };
        let Value::Object(options) = migration.into_options_value()? else {
            return Err(MigrationError::InvalidJson(
                "heatmap options did not serialize to an object".to_owned(),
            ));
        };
        self.options = options;
        for key in LegacyConfig::FIELD_NAMES {
            self.extra.remove(key);
        }
        Ok(())
    }
}

/// Migrates a panel loaded with the heatmap plugin.
///
/// Pre-migration panels are converted using their own fields as the legacy
/// source; anything else returns its options unchanged, which makes the
/// migration idempotent.
#[must_use]
pub fn migrate(panel: &PanelModel, config: &MigrationConfig) -> PanelMigration {
    if !panel.is_pre_migration() {
        trace!(
            plugin_version = panel.plugin_version.as_deref().unwrap_or_default(),
            "panel already migrated"
        );
        return PanelMigration::Unchanged(panel.options.clone());
    }

    let legacy = LegacyConfig::from_json_map(&panel.extra);
    PanelMigration::Converted(convert(&legacy, &panel.field_config, config))
}

/// Handles a panel switching plugin type.
///
/// Returns a conversion only when the previous plugin was the legacy heatmap
/// and its options carry the `angular` option bag.
#[must_use]
pub fn panel_type_changed(
    prev_plugin_id: &str,
    prev_options: &Map<String, Value>,
    prev_field_config: &FieldConfigSource,
    config: &MigrationConfig,
) -> Option<LegacyConversion> {
    if prev_plugin_id != config.heatmap_plugin_id {
        return None;
    }
    let angular = prev_options.get("angular")?.as_object()?;
    debug!(prev_plugin_id, "converting legacy options on plugin change");
    Some(convert(
        &LegacyConfig::from_json_map(angular),
        prev_field_config,
        config,
    ))
}

/// Migrates a batch of panels, preserving input order.
#[must_use]
pub fn migrate_panels(panels: &[PanelModel], config: &MigrationConfig) -> Vec<PanelMigration> {
    #[cfg(feature = "parallel-migration")]
    {
        panels
            .par_iter()
            .map(|panel| migrate(panel, config))
            .collect()
    }

    #[cfg(not(feature = "parallel-migration"))]
    {
        panels.iter().map(|panel| migrate(panel, config)).collect()
    }
}
