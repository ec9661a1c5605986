use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_BASE_URL;

/// Environment variable that overrides `api.base_url`
pub const BASE_URL_ENV: &str = "SCRIPTBLOX_API_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root of the API, without the `/script/fetch` path
    pub base_url: String,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// How `fetch` prints results
    pub output: OutputFormat,

    /// Colorize status lines
    pub use_colors: bool,

    /// Titles longer than this are truncated in the table view
    pub max_title_width: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("scriptblox-cli/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Table,
            use_colors: true,
            max_title_width: 48,
        }
    }
}

impl Config {
    /// Load config from the default location, falling back to defaults
    /// when no file exists yet
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Write the commented default file, replacing whatever is there
    pub fn write_default_to(path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, Self::create_default_with_comments())
            .with_context(|| format!("writing config file {}", path.display()))?;

        Ok(())
    }

    /// Apply `SCRIPTBLOX_API_URL` on top of the file values
    pub fn apply_env(&mut self) {
        self.apply_base_url_override(std::env::var(BASE_URL_ENV).ok());
    }

    fn apply_base_url_override(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("scriptblox").join("config.toml"))
    }

    /// Create a default config file with comments
    pub fn create_default_with_comments() -> String {
        format!(
            r#"# ScriptBlox CLI Configuration File
# Location: ~/.config/scriptblox/config.toml (Linux)
#           ~/Library/Application Support/scriptblox/config.toml (macOS)
#           %APPDATA%\scriptblox\config.toml (Windows)

[api]
# Root of the API. SCRIPTBLOX_API_URL and --base-url take precedence.
base_url = "{DEFAULT_BASE_URL}"

# User-Agent header sent with every request
user_agent = "scriptblox-cli/{version}"

[display]
# Output format for `fetch`: "table" or "json"
output = "table"

# Colorize status lines
use_colors = true

# Truncate script titles longer than this in the table view
max_title_width = 48
"#,
            version = env!("CARGO_PKG_VERSION")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.display.output, OutputFormat::Table);
        assert!(config.display.use_colors);
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.display.output = OutputFormat::Json;
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.display.output, OutputFormat::Json);
        assert_eq!(parsed.api.base_url, config.api.base_url);
    }

    #[test]
    fn test_commented_default_parses_to_defaults() {
        let parsed: Config = toml::from_str(&Config::create_default_with_comments()).unwrap();
        let defaults = Config::default();
        assert_eq!(parsed.api.base_url, defaults.api.base_url);
        assert_eq!(parsed.api.user_agent, defaults.api.user_agent);
        assert_eq!(parsed.display.max_title_width, defaults.display.max_title_width);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let parsed: Config = toml::from_str("[display]\noutput = \"json\"\n").unwrap();
        assert_eq!(parsed.display.output, OutputFormat::Json);
        assert_eq!(parsed.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_write_default_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::write_default_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(loaded.display.output, OutputFormat::Table);
    }

    #[test]
    fn test_load_from_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api\nbase_url = 1").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config file"));
    }

    #[test]
    fn test_base_url_override() {
        let mut config = Config::default();
        config.apply_base_url_override(Some("  ".to_string()));
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);

        config.apply_base_url_override(Some("http://mirror.test/api".to_string()));
        assert_eq!(config.api.base_url, "http://mirror.test/api");
    }
}
