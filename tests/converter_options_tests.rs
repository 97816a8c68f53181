use approx::assert_relative_eq;
use heatmap_migrate::api::{MigrationConfig, convert};
use heatmap_migrate::core::{
    FieldConfigSource, FilterValueRange, HeatmapOptions, LegacyConfig, VisibilityMode,
    ZERO_BUCKET_FILTER_MIN,
};
use serde_json::{Value, json};

fn convert_json(legacy: Value) -> HeatmapOptions {
    let legacy = LegacyConfig::from_json_value(&legacy);
    convert(&legacy, &FieldConfigSource::default(), &MigrationConfig::default()).options
}

#[test]
fn card_padding_and_round_are_coerced_to_numbers() {
    let options = convert_json(json!({ "cards": { "cardPadding": "3.5", "cardRound": 2 } }));
    assert_relative_eq!(options.cell_gap.expect("cell gap"), 3.5);
    assert_relative_eq!(options.cell_size.expect("cell size"), 2.0);
}

#[test]
fn unparseable_card_values_become_absent() {
    let options = convert_json(json!({ "cards": { "cardPadding": "abc" } }));
    assert_eq!(options.cell_gap, None);
    assert_eq!(options.cell_size, None);

    let options = convert_json(json!({}));
    assert_eq!(options.cell_gap, None);
    assert_eq!(options.cell_size, None);
}

#[test]
fn null_card_value_coerces_to_zero() {
    let options = convert_json(json!({ "cards": { "cardPadding": null, "cardRound": "" } }));
    assert_eq!(options.cell_gap, Some(0.0));
    assert_eq!(options.cell_size, Some(0.0));
}

#[test]
fn y_axis_labels_and_reverse_are_copied() {
    let options = convert_json(json!({ "yBucketBound": "upper", "reverseYBuckets": true }));
    assert_eq!(options.y_axis_labels.as_deref(), Some("upper"));
    assert_eq!(options.y_axis_reverse, Some(true));

    let options = convert_json(json!({}));
    assert_eq!(options.y_axis_labels, None);
    assert_eq!(options.y_axis_reverse, None);
}

#[test]
fn reverse_y_buckets_uses_truthiness() {
    let options = convert_json(json!({ "reverseYBuckets": "true" }));
    assert_eq!(options.y_axis_reverse, Some(true));

    let options = convert_json(json!({ "reverseYBuckets": 0 }));
    assert_eq!(options.y_axis_reverse, Some(false));

    let options = convert_json(json!({ "reverseYBuckets": null }));
    assert_eq!(options.y_axis_reverse, None);
}

#[test]
fn legend_and_tooltip_flags_use_truthiness() {
    let options = convert_json(json!({
        "legend": { "show": 1 },
        "tooltip": { "show": "yes", "showHistogram": 0 }
    }));
    assert!(options.legend.show);
    assert!(options.tooltip.show);
    assert!(!options.tooltip.y_histogram);
}

#[test]
fn missing_legend_and_tooltip_are_hidden() {
    let options = convert_json(json!({}));
    assert!(!options.legend.show);
    assert!(!options.tooltip.show);
    assert!(!options.tooltip.y_histogram);
}

#[test]
fn show_value_is_always_never() {
    assert_eq!(convert_json(json!({})).show_value, VisibilityMode::Never);
}

#[test]
fn exemplars_come_from_defaults() {
    let config = MigrationConfig::default();
    let legacy = LegacyConfig::from_json_value(&json!({ "exemplars": { "color": "red" } }));
    let options = convert(&legacy, &FieldConfigSource::default(), &config).options;
    assert_eq!(options.exemplars, config.defaults.exemplars);
}

#[test]
fn hide_zero_buckets_attaches_default_filter() {
    let options = convert_json(json!({ "hideZeroBuckets": true }));
    assert_eq!(
        options.filter_values,
        Some(FilterValueRange {
            min: Some(ZERO_BUCKET_FILTER_MIN),
            max: None,
        })
    );
}

#[test]
fn filter_values_absent_unless_hiding_zero_buckets() {
    for legacy in [json!({ "hideZeroBuckets": false }), json!({})] {
        let options = convert_json(legacy);
        assert_eq!(options.filter_values, None);
        let value = serde_json::to_value(&options).expect("options serialize");
        assert!(value.get("filterValues").is_none());
    }
}

#[test]
fn field_config_result_is_always_empty() {
    let legacy_field_config: FieldConfigSource = serde_json::from_value(json!({
        "defaults": { "unit": "ms" },
        "overrides": [{ "matcher": { "id": "byName", "options": "p99" } }]
    }))
    .expect("field config");

    let conversion = convert(
        &LegacyConfig::default(),
        &legacy_field_config,
        &MigrationConfig::default(),
    );
    assert!(conversion.field_config.is_empty());
}

#[test]
fn mistyped_nested_objects_degrade_to_defaults() {
    let options = convert_json(json!({
        "yAxis": "log",
        "cards": [1, 2],
        "legend": true,
        "tooltip": 7,
        "xBucketSize": { "value": 10 }
    }));
    assert_eq!(options.calculate.x_axis, None);
    assert_eq!(options.calculate.y_axis, None);
    assert_eq!(options.cell_gap, None);
    assert!(!options.legend.show);
    assert!(!options.tooltip.show);
}

#[test]
fn converted_options_serialize_with_camel_case_keys() {
    let options = convert_json(json!({
        "xBucketSize": 10,
        "cards": { "cardPadding": 1 },
        "tooltip": { "show": true, "showHistogram": true }
    }));
    let value = serde_json::to_value(&options).expect("options serialize");

    assert_eq!(value["mode"], json!("calculate"));
    assert_eq!(value["calculate"]["xAxis"], json!({ "mode": "size", "value": "10" }));
    assert_eq!(value["cellGap"], json!(1.0));
    assert_eq!(value["showValue"], json!("never"));
    assert_eq!(value["tooltip"]["yHistogram"], json!(true));
    assert_eq!(value["color"]["steps"], json!(128));
    assert!(value.get("cellSize").is_none());
}
