use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    CalculationAxis, FieldConfigSource, HeatmapCalculationMode, HeatmapCalculationOptions,
    HeatmapColorMode, HeatmapColorOptions, HeatmapColorScale, HeatmapLegend, HeatmapMode,
    HeatmapOptions, HeatmapTooltip, LegacyConfig, LegacyScalar, MIGRATED_COLOR_STEPS,
    ScaleDistributionConfig, VisibilityMode, as_number, truthy,
};

use super::{MigrationConfig, YCountSource};

/// Result of converting a legacy option bag.
///
/// `field_config` is always empty: the conversion does not derive per-field
/// settings, and callers keep whatever field config they already hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyConversion {
    pub field_config: FieldConfigSource,
    pub options: HeatmapOptions,
}

const AGGREGATED_DATA_FORMAT: &str = "tsbuckets";

/// Converts a legacy heatmap option bag into current heatmap options.
///
/// Never fails: missing or malformed legacy fields fall back to absent values
/// or to `config.defaults`. `_legacy_field_config` is accepted for symmetry with
/// the panel contract and is not transformed.
///
/// When the Y-axis count branch fires without a legacy `yBucketNumber`, the
/// resulting count axis carries no `value` rather than a placeholder string.
/// Explicit `null` color bounds stay unset.
#[must_use]
pub fn convert(
    legacy: &LegacyConfig,
    _legacy_field_config: &FieldConfigSource,
    config: &MigrationConfig,
) -> LegacyConversion {
    let defaults = &config.defaults;

    let mode = match legacy.data_format.as_ref().and_then(LegacyScalar::as_text) {
        Some(AGGREGATED_DATA_FORMAT) => HeatmapMode::Aggregated,
        _ => HeatmapMode::Calculate,
    };

    let mut calculate = defaults.calculate.clone();
    if mode == HeatmapMode::Calculate {
        apply_bucket_axes(&mut calculate, legacy, config.y_count_source);
    }

    let mut options = HeatmapOptions {
        mode,
        calculate,
        color: HeatmapColorOptions {
            steps: MIGRATED_COLOR_STEPS,
            ..defaults.color.clone()
        },
        cell_gap: as_number(legacy.card_padding()),
        cell_size: as_number(legacy.card_round()),
        y_axis_labels: legacy
            .y_bucket_bound
            .as_ref()
            .and_then(LegacyScalar::as_text)
            .map(str::to_owned),
        y_axis_reverse: legacy
            .reverse_y_buckets
            .as_ref()
            .and_then(legacy_flag),
        legend: HeatmapLegend {
            show: truthy(legacy.legend_show()),
        },
        show_value: VisibilityMode::Never,
        tooltip: HeatmapTooltip {
            show: truthy(legacy.tooltip_show()),
            y_histogram: truthy(legacy.tooltip_show_histogram()),
        },
        exemplars: defaults.exemplars.clone(),
        filter_values: None,
    };

    if truthy(legacy.hide_zero_buckets.as_ref()) {
        options.filter_values = defaults.filter_values;
    }

    apply_color(&mut options.color, legacy, config);

    debug!(
        mode = ?options.mode,
        color_mode = ?options.color.mode,
        scheme = %options.color.scheme,
        "converted legacy heatmap options"
    );

    LegacyConversion {
        field_config: FieldConfigSource::default(),
        options,
    }
}

fn apply_bucket_axes(
    calculate: &mut HeatmapCalculationOptions,
    legacy: &LegacyConfig,
    y_count_source: YCountSource,
) {
    if let Some(size) = legacy.x_bucket_size.as_ref().filter(|v| v.is_truthy()) {
        calculate.x_axis = Some(CalculationAxis::size(size.to_display_string()));
    } else if let Some(count) = legacy.x_bucket_number.as_ref().filter(|v| v.is_truthy()) {
        calculate.x_axis = Some(CalculationAxis::count(count.to_display_string()));
    }

    let y_count_gate = match y_count_source {
        YCountSource::XBucketNumber => legacy.x_bucket_number.as_ref(),
        YCountSource::YBucketNumber => legacy.y_bucket_number.as_ref(),
    };
    if let Some(size) = legacy.y_bucket_size.as_ref().filter(|v| v.is_truthy()) {
        calculate.y_axis = Some(CalculationAxis::size(size.to_display_string()));
    } else if truthy(y_count_gate) {
        calculate.y_axis = Some(CalculationAxis {
            mode: HeatmapCalculationMode::Count,
            value: legacy
                .y_bucket_number
                .as_ref()
                .map(LegacyScalar::to_display_string),
            scale: None,
        });
    }

    // A missing log base reads as 1, i.e. linear.
    let log_base = legacy
        .y_axis_log_base()
        .map_or(1.0, LegacyScalar::to_number);
    if log_base > 1.0 {
        let split_factor = legacy.y_axis_split_factor();
        let value = split_factor
            .filter(|factor| factor.to_number() > 0.0)
            .map(LegacyScalar::to_display_string);
        trace!(log_base, ?value, "log y axis overrides bucket settings");
        calculate.y_axis = Some(CalculationAxis {
            mode: HeatmapCalculationMode::Count,
            value,
            scale: Some(ScaleDistributionConfig::log(log_base)),
        });
    }

    trace!(
        x_axis = ?calculate.x_axis,
        y_axis = ?calculate.y_axis,
        "resolved bucket axes"
    );
}

fn apply_color(color: &mut HeatmapColorOptions, legacy: &LegacyConfig, config: &MigrationConfig) {
    let legacy_color = legacy.color.as_ref();

    match legacy.color_mode() {
        Some("spectrum") => {
            color.mode = HeatmapColorMode::Scheme;
            let resolved = legacy_color
                .and_then(|c| c.color_scheme.as_ref())
                .and_then(LegacyScalar::as_text)
                .and_then(|name| config.schemes.resolve(name));
            color.scheme = match resolved {
                Some(scheme) => scheme.name.clone(),
                None => config.defaults.color.scheme.clone(),
            };
        }
        Some("opacity") => {
            color.mode = HeatmapColorMode::Opacity;
            color.scale = legacy_color
                .and_then(|c| c.scale.as_ref())
                .and_then(LegacyScalar::as_text)
                .map(parse_color_scale);
        }
        Some(other) => {
            warn!(mode = other, "unrecognized legacy color mode; keeping defaults");
        }
        None => {}
    }

    color.min = legacy_color.and_then(|c| color_bound(c.min.as_ref()));
    color.max = legacy_color.and_then(|c| color_bound(c.max.as_ref()));
}

// `null` marks an open bound, unlike card sizes where it coerces to 0.
fn color_bound(value: Option<&LegacyScalar>) -> Option<f64> {
    as_number(value.filter(|v| **v != LegacyScalar::Null))
}

fn legacy_flag(value: &LegacyScalar) -> Option<bool> {
    match value {
        LegacyScalar::Null => None,
        LegacyScalar::Bool(flag) => Some(*flag),
        other => Some(other.is_truthy()),
    }
}

fn parse_color_scale(name: &str) -> HeatmapColorScale {
    match name {
        "linear" => HeatmapColorScale::Linear,
        "exponential" => HeatmapColorScale::Exponential,
        other => HeatmapColorScale::Other(other.to_owned()),
    }
}
