use std::path::{Path, PathBuf};

use anyhow::Context;
use lumen_config::Config;

const DEFAULT_CONFIG_FILE: &str = "lumen.json";

/// Resolve which config file to read, if any
fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            local.exists().then_some(local)
        }
    }
}

/// Defaults, then the config file, then environment overrides
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = match config_path(explicit) {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            Config::from_file(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?
        }
        None => {
            tracing::info!("No config file, using defaults");
            Config::default()
        }
    };

    config.apply_env();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn explicit_file_is_loaded() {
        let path = std::env::temp_dir().join(format!("lumen-profile-{}.json", std::process::id()));
        fs::write(&path, r#"{ "popup": { "margin": 24.0 } }"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.popup.margin, 24.0);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = Path::new("/definitely/not/here/lumen.json");

        let err = load_config(Some(path)).unwrap_err();

        assert!(err.to_string().contains("Failed to load config"));
    }
}
