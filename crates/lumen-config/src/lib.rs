use std::env;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::brightness::BrightnessConfig;
use self::popup::PopupConfig;
use self::translator::TranslatorConfig;
use self::viewer::ViewerConfig;

pub mod brightness;
pub mod popup;
pub mod translator;
pub mod viewer;

pub use translator::ProviderKind;

fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub popup: PopupConfig,
    pub brightness: BrightnessConfig,
    pub viewer: ViewerConfig,

    /// Capacity of the app and popup command channels
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translator: TranslatorConfig::default(),
            popup: PopupConfig::default(),
            brightness: BrightnessConfig::default(),
            viewer: ViewerConfig::default(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl Config {
    pub fn from_reader(reader: impl Read) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Override selected fields from `lookup`; unparsable values are ignored
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(lang) = lookup("LUMEN_FROM_LANG").filter(|v| !v.is_empty()) {
            self.translator.from_lang = lang;
        }

        if let Some(lang) = lookup("LUMEN_TO_LANG").filter(|v| !v.is_empty()) {
            self.translator.to_lang = lang;
        }

        if let Some(ms) = lookup("LUMEN_AUTO_DISMISS_MS").and_then(|v| v.parse().ok()) {
            self.popup.auto_dismiss_ms = ms;
        }

        if let Some(chars) = lookup("LUMEN_MAX_SELECTION_CHARS").and_then(|v| v.parse().ok()) {
            self.popup.max_selection_chars = chars;
        }
    }
}
