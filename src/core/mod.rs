pub mod field_config;
pub mod legacy;
pub mod options;
pub mod palette;
pub mod primitives;

pub use field_config::FieldConfigSource;
pub use legacy::{LegacyCards, LegacyColor, LegacyConfig, LegacyTooltip, LegacyVisibility, LegacyYAxis};
pub use options::{
    CalculationAxis, DEFAULT_COLOR_SCHEME, ExemplarConfig, FilterValueRange,
    HeatmapCalculationMode, HeatmapCalculationOptions, HeatmapColorMode, HeatmapColorOptions,
    HeatmapColorScale, HeatmapLegend, HeatmapMode, HeatmapOptions, HeatmapTooltip,
    MIGRATED_COLOR_STEPS, ScaleDistribution, ScaleDistributionConfig, VisibilityMode,
    ZERO_BUCKET_FILTER_MIN,
};
pub use palette::{ColorScheme, SchemeCatalog, SchemeInvert};
pub use primitives::{LegacyScalar, as_number, format_number, truthy};
