use serde::{Deserialize, Serialize};

fn default_max_selection_chars() -> usize {
    500
}

fn default_auto_dismiss_ms() -> u64 {
    15_000
}

fn default_margin() -> f64 {
    10.0
}

fn default_anchor_offset() -> f64 {
    5.0
}

fn default_loading_text() -> String {
    "Translating...".to_string()
}

fn default_failure_message() -> String {
    "Translation failed. Check network connection.".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PopupConfig {
    /// Longer selections are treated as accidental and ignored
    #[serde(default = "default_max_selection_chars")]
    pub max_selection_chars: usize,
    #[serde(default = "default_auto_dismiss_ms")]
    pub auto_dismiss_ms: u64,
    /// Minimum distance kept between the popup and the viewport edges
    #[serde(default = "default_margin")]
    pub margin: f64,
    /// Gap between the bottom of the selection and the popup
    #[serde(default = "default_anchor_offset")]
    pub anchor_offset: f64,
    #[serde(default = "default_loading_text")]
    pub loading_text: String,
    #[serde(default = "default_failure_message")]
    pub failure_message: String,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            max_selection_chars: default_max_selection_chars(),
            auto_dismiss_ms: default_auto_dismiss_ms(),
            margin: default_margin(),
            anchor_offset: default_anchor_offset(),
            loading_text: default_loading_text(),
            failure_message: default_failure_message(),
        }
    }
}
