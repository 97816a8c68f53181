use serde::{Deserialize, Serialize};

/// How incoming frames are turned into heatmap cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatmapMode {
    /// Data arrives already bucketed.
    #[default]
    Aggregated,
    /// Buckets are computed from raw values at render time.
    Calculate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatmapCalculationMode {
    /// `value` is a bucket width.
    Size,
    /// `value` is a bucket count.
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleDistribution {
    Linear,
    Log,
    Ordinal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleDistributionConfig {
    #[serde(rename = "type")]
    pub kind: ScaleDistribution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<f64>,
}

impl ScaleDistributionConfig {
    #[must_use]
    pub fn log(base: f64) -> Self {
        Self {
            kind: ScaleDistribution::Log,
            log: Some(base),
        }
    }
}

/// Bucketing rule for one axis of a calculated heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationAxis {
    pub mode: HeatmapCalculationMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleDistributionConfig>,
}

impl CalculationAxis {
    #[must_use]
    pub fn size(value: impl Into<String>) -> Self {
        Self {
            mode: HeatmapCalculationMode::Size,
            value: Some(value.into()),
            scale: None,
        }
    }

    #[must_use]
    pub fn count(value: impl Into<String>) -> Self {
        Self {
            mode: HeatmapCalculationMode::Count,
            value: Some(value.into()),
            scale: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCalculationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<CalculationAxis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<CalculationAxis>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatmapColorMode {
    Opacity,
    #[default]
    Scheme,
}

/// Opacity ramp of the color block.
///
/// Legacy panels stored free-form scale names (`sqrt`), which are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatmapColorScale {
    Linear,
    Exponential,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapColorOptions {
    pub mode: HeatmapColorMode,
    pub scheme: String,
    pub fill: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<HeatmapColorScale>,
    pub exponent: f64,
    pub steps: u32,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Default for HeatmapColorOptions {
    fn default() -> Self {
        Self {
            mode: HeatmapColorMode::Scheme,
            scheme: DEFAULT_COLOR_SCHEME.to_owned(),
            fill: "dark-orange".to_owned(),
            scale: Some(HeatmapColorScale::Exponential),
            exponent: 0.5,
            steps: 64,
            reverse: false,
            min: None,
            max: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityMode {
    #[default]
    Auto,
    Never,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapLegend {
    pub show: bool,
}

impl Default for HeatmapLegend {
    fn default() -> Self {
        Self { show: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapTooltip {
    pub show: bool,
    #[serde(default)]
    pub y_histogram: bool,
}

impl Default for HeatmapTooltip {
    fn default() -> Self {
        Self {
            show: true,
            y_histogram: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemplarConfig {
    pub color: String,
}

impl Default for ExemplarConfig {
    fn default() -> Self {
        Self {
            color: "rgba(255,0,255,0.7)".to_owned(),
        }
    }
}

/// Cells whose value falls outside this range are hidden.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

pub const DEFAULT_COLOR_SCHEME: &str = "Oranges";
pub const MIGRATED_COLOR_STEPS: u32 = 128;
pub const ZERO_BUCKET_FILTER_MIN: f64 = 1e-9;

/// Current heatmap panel options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapOptions {
    #[serde(default)]
    pub mode: HeatmapMode,
    #[serde(default)]
    pub calculate: HeatmapCalculationOptions,
    #[serde(default)]
    pub color: HeatmapColorOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_gap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_labels: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_reverse: Option<bool>,
    #[serde(default)]
    pub legend: HeatmapLegend,
    #[serde(default)]
    pub show_value: VisibilityMode,
    #[serde(default)]
    pub tooltip: HeatmapTooltip,
    #[serde(default)]
    pub exemplars: ExemplarConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_values: Option<FilterValueRange>,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            mode: HeatmapMode::Aggregated,
            calculate: HeatmapCalculationOptions::default(),
            color: HeatmapColorOptions::default(),
            cell_gap: Some(1.0),
            cell_size: None,
            y_axis_labels: None,
            y_axis_reverse: None,
            legend: HeatmapLegend::default(),
            show_value: VisibilityMode::Auto,
            tooltip: HeatmapTooltip::default(),
            exemplars: ExemplarConfig::default(),
            filter_values: Some(FilterValueRange {
                min: Some(ZERO_BUCKET_FILTER_MIN),
                max: None,
            }),
        }
    }
}
