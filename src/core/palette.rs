use serde::{Deserialize, Serialize};

/// Theme condition under which a scheme is rendered inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeInvert {
    Always,
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,
    #[serde(default)]
    pub invert: SchemeInvert,
}

impl ColorScheme {
    #[must_use]
    pub fn new(name: impl Into<String>, invert: SchemeInvert) -> Self {
        Self {
            name: name.into(),
            invert,
        }
    }
}

/// Ordered list of named color gradients available to heatmap panels.
///
/// Order is significant: lookups return the first matching entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeCatalog {
    schemes: Vec<ColorScheme>,
}

const BUILTIN_SCHEMES: &[(&str, SchemeInvert)] = &[
    // Diverging
    ("BrBG", SchemeInvert::Always),
    ("PiYG", SchemeInvert::Always),
    ("PRGn", SchemeInvert::Always),
    ("PuOr", SchemeInvert::Always),
    ("RdBu", SchemeInvert::Always),
    ("RdGy", SchemeInvert::Always),
    ("RdYlBu", SchemeInvert::Always),
    ("RdYlGn", SchemeInvert::Always),
    ("Spectral", SchemeInvert::Always),
    // Sequential, single hue
    ("Blues", SchemeInvert::Dark),
    ("Greens", SchemeInvert::Dark),
    ("Greys", SchemeInvert::Dark),
    ("Oranges", SchemeInvert::Dark),
    ("Purples", SchemeInvert::Dark),
    ("Reds", SchemeInvert::Dark),
    // Sequential, multi hue
    ("Turbo", SchemeInvert::Light),
    ("Cividis", SchemeInvert::Light),
    ("Viridis", SchemeInvert::Light),
    ("Magma", SchemeInvert::Light),
    ("Inferno", SchemeInvert::Light),
    ("Plasma", SchemeInvert::Light),
    ("Warm", SchemeInvert::Light),
    ("Cool", SchemeInvert::Light),
    ("CubehelixDefault", SchemeInvert::Light),
    ("BuGn", SchemeInvert::Dark),
    ("BuPu", SchemeInvert::Dark),
    ("GnBu", SchemeInvert::Dark),
    ("OrRd", SchemeInvert::Dark),
    ("PuBuGn", SchemeInvert::Dark),
    ("PuBu", SchemeInvert::Dark),
    ("PuRd", SchemeInvert::Dark),
    ("RdPu", SchemeInvert::Dark),
    ("YlGnBu", SchemeInvert::Dark),
    ("YlGn", SchemeInvert::Dark),
    ("YlOrBr", SchemeInvert::Dark),
    ("YlOrRd", SchemeInvert::Dark),
];

impl SchemeCatalog {
    #[must_use]
    pub fn new(schemes: Vec<ColorScheme>) -> Self {
        Self { schemes }
    }

    /// The d3 scale-chromatic schemes shipped with the heatmap panel.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_SCHEMES
                .iter()
                .map(|(name, invert)| ColorScheme::new(*name, *invert))
                .collect(),
        )
    }

    #[must_use]
    pub fn schemes(&self) -> &[ColorScheme] {
        &self.schemes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    #[must_use]
    pub fn find_exact(&self, name: &str) -> Option<&ColorScheme> {
        self.schemes.iter().find(|scheme| scheme.name == name)
    }

    /// Resolves a legacy scheme name such as `interpolateOranges`.
    ///
    /// Exact match wins; otherwise the first entry whose name occurs inside
    /// `legacy_name` is returned.
    #[must_use]
    pub fn resolve(&self, legacy_name: &str) -> Option<&ColorScheme> {
        self.find_exact(legacy_name).or_else(|| {
            self.schemes
                .iter()
                .find(|scheme| legacy_name.contains(scheme.name.as_str()))
        })
    }
}
