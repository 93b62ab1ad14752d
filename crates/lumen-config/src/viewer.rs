use serde::{Deserialize, Serialize};

fn default_viewport_width() -> f64 {
    1280.0
}

fn default_viewport_height() -> f64 {
    800.0
}

fn default_same_origin() -> bool {
    true
}

fn default_has_toolbar() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ViewerConfig {
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f64,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,
    /// Offset of the viewer frame within the host page
    #[serde(default)]
    pub surface_left: f64,
    #[serde(default)]
    pub surface_top: f64,
    /// Whether the viewer document can be reached from the host page
    #[serde(default = "default_same_origin")]
    pub same_origin: bool,
    /// Whether the viewer exposes a toolbar for the brightness slider
    #[serde(default = "default_has_toolbar")]
    pub has_toolbar: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            surface_left: 0.0,
            surface_top: 0.0,
            same_origin: default_same_origin(),
            has_toolbar: default_has_toolbar(),
        }
    }
}
