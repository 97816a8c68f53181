use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-field display configuration attached to a panel.
///
/// The migration treats it as an opaque pass-through container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldConfigSource {
    #[serde(default)]
    pub defaults: Map<String, Value>,
    #[serde(default)]
    pub overrides: Vec<Value>,
}

impl FieldConfigSource {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty() && self.overrides.is_empty()
    }
}
