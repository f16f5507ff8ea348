use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Client-facing configuration object served by `/config`.
///
/// Only `global` is interpreted. Any other top-level key a client posts is
/// kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub global: GlobalSettings,

    /// Per-country overrides. The shape of each entry belongs to the client
    /// application, so it is stored as free-form JSON.
    #[serde(default)]
    pub countries: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    pub enabled: bool,
    pub mode: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: "youtube".to_string(),
            extra: Map::new(),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            global: GlobalSettings::default(),
            countries: Map::new(),
            extra: Map::new(),
        }
    }
}
