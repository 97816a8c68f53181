use heatmap_migrate::api::{MigrationConfig, convert};
use heatmap_migrate::core::{
    ColorScheme, DEFAULT_COLOR_SCHEME, FieldConfigSource, HeatmapColorMode, HeatmapColorScale,
    HeatmapOptions, LegacyConfig, MIGRATED_COLOR_STEPS, SchemeCatalog, SchemeInvert,
};
use serde_json::{Value, json};

fn convert_json_with(legacy: Value, config: &MigrationConfig) -> HeatmapOptions {
    let legacy = LegacyConfig::from_json_value(&legacy);
    convert(&legacy, &FieldConfigSource::default(), config).options
}

fn convert_json(legacy: Value) -> HeatmapOptions {
    convert_json_with(legacy, &MigrationConfig::default())
}

#[test]
fn spectrum_resolves_scheme_by_substring() {
    let options = convert_json(json!({
        "color": { "mode": "spectrum", "colorScheme": "interpolateOranges" }
    }));
    assert_eq!(options.color.mode, HeatmapColorMode::Scheme);
    assert_eq!(options.color.scheme, "Oranges");
}

#[test]
fn spectrum_prefers_exact_match_over_substring() {
    let config = MigrationConfig::default().with_schemes(SchemeCatalog::new(vec![
        ColorScheme::new("Blue", SchemeInvert::Dark),
        ColorScheme::new("Blues", SchemeInvert::Dark),
    ]));

    let options = convert_json_with(
        json!({ "color": { "mode": "spectrum", "colorScheme": "Blues" } }),
        &config,
    );
    assert_eq!(options.color.scheme, "Blues");
}

#[test]
fn spectrum_substring_match_follows_catalog_order() {
    let config = MigrationConfig::default().with_schemes(SchemeCatalog::new(vec![
        ColorScheme::new("Gn", SchemeInvert::Dark),
        ColorScheme::new("YlGn", SchemeInvert::Dark),
    ]));

    let options = convert_json_with(
        json!({ "color": { "mode": "spectrum", "colorScheme": "interpolateYlGn" } }),
        &config,
    );
    assert_eq!(options.color.scheme, "Gn");
}

#[test]
fn spectrum_falls_back_to_default_scheme() {
    let options = convert_json(json!({
        "color": { "mode": "spectrum", "colorScheme": "interpolateRainbow" }
    }));
    assert_eq!(options.color.mode, HeatmapColorMode::Scheme);
    assert_eq!(options.color.scheme, DEFAULT_COLOR_SCHEME);

    let options = convert_json(json!({ "color": { "mode": "spectrum" } }));
    assert_eq!(options.color.scheme, DEFAULT_COLOR_SCHEME);
}

#[test]
fn spectrum_fallback_uses_injected_default_scheme() {
    let mut defaults = HeatmapOptions::default();
    defaults.color.scheme = "Viridis".to_owned();
    let config = MigrationConfig::default()
        .with_defaults(defaults)
        .with_schemes(SchemeCatalog::default());

    let options = convert_json_with(
        json!({ "color": { "mode": "spectrum", "colorScheme": "interpolateOranges" } }),
        &config,
    );
    assert_eq!(options.color.scheme, "Viridis");
}

#[test]
fn opacity_mode_copies_scale_verbatim() {
    let options = convert_json(json!({ "color": { "mode": "opacity", "scale": "sqrt" } }));
    assert_eq!(options.color.mode, HeatmapColorMode::Opacity);
    assert_eq!(
        options.color.scale,
        Some(HeatmapColorScale::Other("sqrt".to_owned()))
    );

    let options = convert_json(json!({ "color": { "mode": "opacity", "scale": "linear" } }));
    assert_eq!(options.color.scale, Some(HeatmapColorScale::Linear));

    let options = convert_json(json!({ "color": { "mode": "opacity" } }));
    assert_eq!(options.color.scale, None);
}

#[test]
fn unknown_color_mode_keeps_default_color_block() {
    let defaults = MigrationConfig::default().defaults.color;
    for legacy in [
        json!({ "color": { "mode": "rainbow", "colorScheme": "interpolateBlues" } }),
        json!({ "color": {} }),
        json!({}),
    ] {
        let options = convert_json(legacy);
        assert_eq!(options.color.mode, defaults.mode);
        assert_eq!(options.color.scheme, defaults.scheme);
        assert_eq!(options.color.scale, defaults.scale);
    }
}

#[test]
fn color_bounds_are_always_overwritten() {
    let mut defaults = HeatmapOptions::default();
    defaults.color.min = Some(-5.0);
    defaults.color.max = Some(5.0);
    let config = MigrationConfig::default().with_defaults(defaults);

    let options = convert_json_with(json!({ "color": { "mode": "opacity", "min": 1 } }), &config);
    assert_eq!(options.color.min, Some(1.0));
    assert_eq!(options.color.max, None);

    let options = convert_json_with(json!({}), &config);
    assert_eq!(options.color.min, None);
    assert_eq!(options.color.max, None);
}

#[test]
fn null_color_bounds_stay_unset() {
    let options = convert_json(json!({
        "color": {
            "mode": "spectrum",
            "colorScheme": "interpolateOranges",
            "min": null,
            "max": null
        }
    }));
    assert_eq!(options.color.min, None);
    assert_eq!(options.color.max, None);

    let options = convert_json(json!({ "color": { "min": null, "max": 0 } }));
    assert_eq!(options.color.min, None);
    assert_eq!(options.color.max, Some(0.0));
}

#[test]
fn color_steps_are_forced_to_migrated_value() {
    assert_eq!(MIGRATED_COLOR_STEPS, 128);
    let mut defaults = HeatmapOptions::default();
    defaults.color.steps = 16;
    let config = MigrationConfig::default().with_defaults(defaults);

    for legacy in [
        json!({}),
        json!({ "color": { "mode": "spectrum", "colorScheme": "Reds" } }),
        json!({ "color": { "mode": "opacity", "steps": 4 } }),
    ] {
        assert_eq!(convert_json_with(legacy, &config).color.steps, 128);
    }
}

#[test]
fn non_object_color_is_treated_as_absent() {
    let options = convert_json(json!({ "color": "spectrum" }));
    assert_eq!(options.color.mode, HeatmapColorMode::Scheme);
    assert_eq!(options.color.scheme, DEFAULT_COLOR_SCHEME);
    assert_eq!(options.color.min, None);
}
