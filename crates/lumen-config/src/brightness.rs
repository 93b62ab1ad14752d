use serde::{Deserialize, Serialize};

fn default_max() -> u8 {
    80
}

fn default_step() -> u8 {
    5
}

/// Slider range for the darkening overlay, in percent
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BrightnessConfig {
    #[serde(default)]
    pub min: u8,
    #[serde(default = "default_max")]
    pub max: u8,
    #[serde(default = "default_step")]
    pub step: u8,
    #[serde(default)]
    pub initial: u8,
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: default_max(),
            step: default_step(),
            initial: 0,
        }
    }
}
