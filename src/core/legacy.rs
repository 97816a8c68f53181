use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::primitives::{LegacyScalar, lenient};

/// Option bag of a pre-migration heatmap panel.
///
/// Every field is optional and read leniently: legacy dashboards were edited by
/// hand and by several generations of the editor, so a field holding an
/// unexpected JSON shape is treated as absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyConfig {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub data_format: Option<LegacyScalar>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub x_bucket_size: Option<LegacyScalar>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub x_bucket_number: Option<LegacyScalar>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub y_bucket_size: Option<LegacyScalar>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub y_bucket_number: Option<LegacyScalar>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<LegacyYAxis>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cards: Option<LegacyCards>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hide_zero_buckets: Option<LegacyScalar>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub reverse_y_buckets: Option<LegacyScalar>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub y_bucket_bound: Option<LegacyScalar>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegacyVisibility>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<LegacyTooltip>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub color: Option<LegacyColor>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyYAxis {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub log_base: Option<LegacyScalar>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub split_factor: Option<LegacyScalar>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyCards {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub card_padding: Option<LegacyScalar>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub card_round: Option<LegacyScalar>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegacyVisibility {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub show: Option<LegacyScalar>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyTooltip {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub show: Option<LegacyScalar>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub show_histogram: Option<LegacyScalar>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyColor {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub mode: Option<LegacyScalar>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<LegacyScalar>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub min: Option<LegacyScalar>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub max: Option<LegacyScalar>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub scale: Option<LegacyScalar>,
}

impl LegacyConfig {
    /// Top-level panel keys consumed by the conversion.
    pub const FIELD_NAMES: [&'static str; 13] = [
        "dataFormat",
        "xBucketSize",
        "xBucketNumber",
        "yBucketSize",
        "yBucketNumber",
        "yAxis",
        "cards",
        "hideZeroBuckets",
        "reverseYBuckets",
        "yBucketBound",
        "legend",
        "tooltip",
        "color",
    ];

    /// Reads the legacy option bag out of arbitrary panel fields.
    ///
    /// Unknown keys are ignored and mismatched shapes degrade to absent fields,
    /// so this never fails.
    #[must_use]
    pub fn from_json_map(fields: &Map<String, Value>) -> Self {
        Self::from_json_value(&Value::Object(fields.clone()))
    }

    /// Same as [`LegacyConfig::from_json_map`]; non-object values yield an empty config.
    #[must_use]
    pub fn from_json_value(value: &Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value.clone()).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn y_axis_log_base(&self) -> Option<&LegacyScalar> {
        self.y_axis.as_ref().and_then(|axis| axis.log_base.as_ref())
    }

    #[must_use]
    pub fn y_axis_split_factor(&self) -> Option<&LegacyScalar> {
        self.y_axis.as_ref().and_then(|axis| axis.split_factor.as_ref())
    }

    #[must_use]
    pub fn card_padding(&self) -> Option<&LegacyScalar> {
        self.cards.as_ref().and_then(|cards| cards.card_padding.as_ref())
    }

    #[must_use]
    pub fn card_round(&self) -> Option<&LegacyScalar> {
        self.cards.as_ref().and_then(|cards| cards.card_round.as_ref())
    }

    #[must_use]
    pub fn legend_show(&self) -> Option<&LegacyScalar> {
        self.legend.as_ref().and_then(|legend| legend.show.as_ref())
    }

    #[must_use]
    pub fn tooltip_show(&self) -> Option<&LegacyScalar> {
        self.tooltip.as_ref().and_then(|tooltip| tooltip.show.as_ref())
    }

    #[must_use]
    pub fn tooltip_show_histogram(&self) -> Option<&LegacyScalar> {
        self.tooltip
            .as_ref()
            .and_then(|tooltip| tooltip.show_histogram.as_ref())
    }

    #[must_use]
    pub fn color_mode(&self) -> Option<&str> {
        self.color
            .as_ref()
            .and_then(|color| color.mode.as_ref())
            .and_then(LegacyScalar::as_text)
    }
}
