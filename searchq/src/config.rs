//! Configuration for searchq front ends.
//!
//! SEARCHQ_ROOT resolution order:
//! 1. Explicit path passed to Config::load_from()
//! 2. SEARCHQ_ROOT environment variable
//! 3. Platform config directory (e.g. ~/.config/searchq)
//!
//! The parser never reads configuration; these settings only shape how
//! results are presented.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How parsed nodes are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[{key [v1 v2] false}]`
    #[default]
    Text,
    /// JSON array of `{key, values, negative}` objects
    Json,
    /// Rust debug representation
    Debug,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "debug" => Ok(OutputFormat::Debug),
            other => Err(Error::Config(format!(
                "Unknown output format '{}' (expected text, json or debug)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Debug => write!(f, "debug"),
        }
    }
}

/// searchq configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding config.toml.
    #[serde(skip)]
    pub root: PathBuf,

    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[serde(default)]
    pub pretty: bool,
}

impl Config {
    /// Create a default config rooted at the given directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            format: OutputFormat::default(),
            pretty: false,
        }
    }

    /// Load config from SEARCHQ_ROOT/config.toml, or use defaults.
    pub fn load() -> Result<Self> {
        let root = resolve_root()?;
        Self::load_from(&root)
    }

    /// Load config from a specific root directory.
    pub fn load_from(root: &Path) -> Result<Self> {
        let config_path = root.join("config.toml");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let mut config: Config = toml::from_str(&contents)
                .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
            config.root = root.to_path_buf();
            Ok(config)
        } else {
            Ok(Self::with_root(root))
        }
    }

    /// Save config to SEARCHQ_ROOT/config.toml, creating the directory.
    pub fn save(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(self.config_path(), contents)?;
        Ok(())
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }
}

/// Resolve SEARCHQ_ROOT using the standard resolution order.
fn resolve_root() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("SEARCHQ_ROOT") {
        return Ok(PathBuf::from(path));
    }

    if let Some(proj_dirs) = ProjectDirs::from("", "", "searchq") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    let home = std::env::var("HOME")
        .map_err(|_| Error::Config("Could not determine home directory".to_string()))?;
    Ok(PathBuf::from(home).join(".config/searchq"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_with_root() {
        let config = Config::with_root("/tmp/test-searchq");
        assert_eq!(config.root, PathBuf::from("/tmp/test-searchq"));
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.pretty);
        assert_eq!(config.config_path(), PathBuf::from("/tmp/test-searchq/config.toml"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_from(tmp.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.root, tmp.path().to_path_buf());
    }

    #[test]
    fn test_config_save_load() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("nested");

        let mut config = Config::with_root(&root);
        config.format = OutputFormat::Json;
        config.pretty = true;
        config.save().unwrap();

        let loaded = Config::load_from(&root).unwrap();
        assert_eq!(loaded.format, OutputFormat::Json);
        assert!(loaded.pretty);
    }

    #[test]
    fn test_partial_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "pretty = true\n").unwrap();
        let config = Config::load_from(tmp.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.pretty);
    }

    #[test]
    fn test_invalid_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "format = \"yaml\"\n").unwrap();
        let err = Config::load_from(tmp.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("debug".parse::<OutputFormat>().unwrap(), OutputFormat::Debug);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
