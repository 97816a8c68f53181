use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{MigrationError, MigrationResult};

use super::{MigrationConfig, PanelModel, migrate};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PanelOutcome {
    Converted,
    Unchanged,
    Skipped { reason: String },
}

/// Per-panel record of a dashboard migration.
///
/// Panels are keyed by their JSON path (`panels[2].panels[0]`); `IndexMap`
/// keeps them in document order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardMigrationReport {
    pub panels: IndexMap<String, PanelOutcome>,
    pub converted: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

impl DashboardMigrationReport {
    fn record(&mut self, path: String, outcome: PanelOutcome) {
        match outcome {
            PanelOutcome::Converted => self.converted += 1,
            PanelOutcome::Unchanged => self.unchanged += 1,
            PanelOutcome::Skipped { .. } => self.skipped += 1,
        }
        self.panels.insert(path, outcome);
    }

    pub fn to_json_pretty(&self) -> MigrationResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MigrationError::InvalidJson(format!("failed to serialize report: {e}")))
    }
}

/// Migrates every heatmap panel of a dashboard document in place.
///
/// Walks the top-level `panels`, panels nested in row panels, and the
/// `rows[].panels` layout of older dashboards.
pub fn migrate_dashboard(
    dashboard: &mut Value,
    config: &MigrationConfig,
) -> MigrationResult<DashboardMigrationReport> {
    let root = dashboard.as_object_mut().ok_or_else(|| {
        MigrationError::InvalidDashboard("dashboard root must be a json object".to_owned())
    })?;

    let mut report = DashboardMigrationReport::default();

    match root.get_mut("panels") {
        None | Some(Value::Null) => {}
        Some(Value::Array(panels)) => walk_panels(panels, "panels", config, &mut report),
        Some(_) => {
            return Err(MigrationError::InvalidDashboard(
                "`panels` must be an array".to_owned(),
            ));
        }
    }

    if let Some(Value::Array(rows)) = root.get_mut("rows") {
        for (row_index, row) in rows.iter_mut().enumerate() {
            if let Some(Value::Array(panels)) = row.get_mut("panels") {
                walk_panels(
                    panels,
                    &format!("rows[{row_index}].panels"),
                    config,
                    &mut report,
                );
            }
        }
    }

    debug!(
        converted = report.converted,
        unchanged = report.unchanged,
        skipped = report.skipped,
        "migrated dashboard"
    );
    Ok(report)
}

fn walk_panels(
    panels: &mut [Value],
    path: &str,
    config: &MigrationConfig,
    report: &mut DashboardMigrationReport,
) {
    for (index, panel) in panels.iter_mut().enumerate() {
        let panel_path = format!("{path}[{index}]");

        if let Some(Value::Array(children)) = panel.get_mut("panels") {
            walk_panels(children, &format!("{panel_path}.panels"), config, report);
        }

        let is_heatmap = panel
            .get("type")
            .and_then(Value::as_str)
            .is_some_and(|plugin_id| plugin_id == config.heatmap_plugin_id);
        if !is_heatmap {
            continue;
        }

        let outcome = migrate_panel_value(panel, config).unwrap_or_else(|err| {
            warn!(path = %panel_path, error = %err, "skipping heatmap panel");
            PanelOutcome::Skipped {
                reason: err.to_string(),
            }
        });
        report.record(panel_path, outcome);
    }
}

fn migrate_panel_value(panel: &mut Value, config: &MigrationConfig) -> MigrationResult<PanelOutcome> {
    let mut model = PanelModel::from_json_value(panel.clone())?;
    let migration = migrate(&model, config);
    if !migration.is_converted() {
        return Ok(PanelOutcome::Unchanged);
    }
    model.apply_migration(migration)?;
    *panel = model.to_json_value()?;
    Ok(PanelOutcome::Converted)
}
