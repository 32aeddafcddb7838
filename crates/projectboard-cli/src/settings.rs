//! Fetcher configuration loading
//!
//! Sources, lowest to highest precedence:
//! 1. TOML file (default `<config dir>/projectboard/config.toml`, optional)
//! 2. `PROJECTBOARD_*` environment variables (e.g. `PROJECTBOARD_ENDPOINT`)
//! 3. The `GITHUB_AUTH` token
//! 4. Command-line overrides applied by the caller

use std::path::PathBuf;

use config::{Config, Environment, File};
use projectboard_github::FetcherConfig;
use tracing::debug;

use crate::error::CliResult;

/// Environment variable holding the GitHub bearer token
pub const TOKEN_ENV_VAR: &str = "GITHUB_AUTH";

/// Prefix of the environment overrides
pub const ENV_PREFIX: &str = "PROJECTBOARD";

/// Settings loader
pub struct SettingsLoader {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl SettingsLoader {
    /// Create a loader for the default config path
    pub fn new() -> Self {
        Self::with_path(Self::default_config_path())
    }

    /// Create with custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Get default config path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("projectboard")
            .join("config.toml")
    }

    /// Load settings, taking the token from `GITHUB_AUTH`
    pub fn load(&self) -> CliResult<FetcherConfig> {
        self.load_with_token(std::env::var(TOKEN_ENV_VAR).ok())
    }

    /// Load settings with an explicit token; `None` leaves the file's token
    /// (or the empty default) in place
    pub fn load_with_token(&self, token: Option<String>) -> CliResult<FetcherConfig> {
        debug!(path = %self.config_path.display(), "Loading settings");

        let settings = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(Environment::with_prefix(&self.env_prefix))
            .set_override_option("token", token)?
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use projectboard_github::DEFAULT_ENDPOINT;
    use serial_test::serial;

    fn clear_board_env() {
        for (key, _) in std::env::vars() {
            if key.starts_with("PROJECTBOARD_") || key == TOKEN_ENV_VAR {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_missing_file_gives_defaults() {
        clear_board_env();
        let dir = tempfile::tempdir().unwrap();
        let loader = SettingsLoader::with_path(dir.path().join("absent.toml"));

        let config = loader.load_with_token(None).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.token, "");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.proxy.is_none());
    }

    #[test]
    #[serial]
    fn test_file_values_loaded() {
        clear_board_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "token = \"file-token\"\ndefault_project_id = \"PVT_file\"\ntimeout_secs = 5\nproxy = \"http://proxy.internal:3128\"\n",
        )
        .unwrap();

        let config = SettingsLoader::with_path(path).load_with_token(None).unwrap();
        assert_eq!(config.token, "file-token");
        assert_eq!(config.default_project_id.as_deref(), Some("PVT_file"));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(
            config.http_config().proxy.as_deref(),
            Some("http://proxy.internal:3128")
        );
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_board_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout_secs = 5\n").unwrap();

        std::env::set_var("PROJECTBOARD_TIMEOUT_SECS", "7");
        std::env::set_var("PROJECTBOARD_PROXY", "http://envproxy:8080");
        std::env::set_var(TOKEN_ENV_VAR, "env-token");

        let result = SettingsLoader::with_path(path).load();
        clear_board_env();

        let config = result.unwrap();
        assert_eq!(config.timeout_secs, 7);
        assert_eq!(config.proxy.as_deref(), Some("http://envproxy:8080"));
        assert_eq!(config.token, "env-token");
    }

    #[test]
    #[serial]
    fn test_token_override_wins_over_file() {
        clear_board_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "token = \"file-token\"\n").unwrap();

        let config = SettingsLoader::with_path(path)
            .load_with_token(Some("env-token".to_string()))
            .unwrap();
        assert_eq!(config.token, "env-token");
    }

    #[test]
    #[serial]
    fn test_invalid_file_is_an_error() {
        clear_board_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout_secs = \"soon\"\n").unwrap();

        assert!(SettingsLoader::with_path(path).load_with_token(None).is_err());
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        let path = SettingsLoader::default_config_path();
        assert!(path.ends_with("projectboard/config.toml"));
    }
}
