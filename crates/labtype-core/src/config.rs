//! labtype configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::session::SessionOptions;

/// Top-level labtype configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabtypeConfig {
    /// Fixed seed for question order and random fill.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Enables the random-fill debug trigger.
    #[serde(default)]
    pub debug: bool,
    /// Where exported result cards are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Export formats: svg, html, json, text.
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
    /// Best-effort limit on image capture before falling back to text.
    #[serde(default = "default_capture_timeout")]
    pub capture_timeout_ms: u64,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./labtype-results")
}
fn default_formats() -> Vec<String> {
    vec!["svg".into(), "html".into(), "json".into()]
}
fn default_capture_timeout() -> u64 {
    3000
}

impl Default for LabtypeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            debug: false,
            output_dir: default_output_dir(),
            formats: default_formats(),
            capture_timeout_ms: default_capture_timeout(),
        }
    }
}

impl LabtypeConfig {
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            seed: self.seed,
            debug_fill: self.debug,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `labtype.toml` in the current directory
/// 2. `~/.config/labtype/config.toml`
///
/// Environment variable override: `LABTYPE_SEED`.
pub fn load_config_from(path: Option<&Path>) -> Result<LabtypeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("labtype.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => parse_config_file(&path)?,
        None => LabtypeConfig::default(),
    };

    if let Ok(raw) = std::env::var("LABTYPE_SEED") {
        let seed = raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("LABTYPE_SEED is not a number: {raw:?}"))?;
        config.seed = Some(seed);
    }

    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<LabtypeConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = toml::from_str::<LabtypeConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("labtype"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = LabtypeConfig::default();
        assert_eq!(config.seed, None);
        assert!(!config.debug);
        assert_eq!(config.formats, vec!["svg", "html", "json"]);
        assert_eq!(config.capture_timeout_ms, 3000);
        assert_eq!(config.session_options(), SessionOptions::default());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
seed = 42
debug = true
output_dir = "out"
formats = ["text"]
capture_timeout_ms = 500
"#;
        let config: LabtypeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.seed, Some(42));
        assert!(config.debug);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.formats, vec!["text"]);
        let options = config.session_options();
        assert_eq!(options.seed, Some(42));
        assert!(options.debug_fill);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config: LabtypeConfig = toml::from_str("debug = true").unwrap();
        assert!(config.debug);
        assert_eq!(config.output_dir, PathBuf::from("./labtype-results"));
        assert_eq!(config.capture_timeout_ms, 3000);
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load_config_from(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn parse_file_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labtype.toml");
        std::fs::write(&path, "seed = \"not a number\"").unwrap();
        let err = parse_config_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));

        std::fs::write(&path, "seed = 9\nformats = [\"svg\"]").unwrap();
        let config = parse_config_file(&path).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.formats, vec!["svg"]);
    }
}
