// CLI error types

use projectboard_github::GitHubError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),
}

impl From<config::ConfigError> for CliError {
    fn from(e: config::ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::Config(msg) => {
                format!(
                    "Configuration error: {}\n\nCheck your config file and PROJECTBOARD_* environment variables.",
                    msg
                )
            }
            CliError::GitHub(e) => format!("GitHub error: {}", e),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_for_config_error() {
        let err = CliError::Config("bad endpoint".to_string());
        let message = err.user_message();
        assert!(message.starts_with("Configuration error: bad endpoint"));
        assert!(message.contains("PROJECTBOARD_"));
    }

    #[test]
    fn test_user_message_for_github_error() {
        let err = CliError::from(GitHubError::config_error("Timeout must be greater than 0"));
        assert_eq!(
            err.user_message(),
            "GitHub error: Invalid configuration: Timeout must be greater than 0"
        );
    }

    #[test]
    fn test_config_crate_error_converts() {
        let err: CliError = config::ConfigError::NotFound("token".to_string()).into();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.user_message().starts_with("Configuration error:"));
    }

    #[test]
    fn test_github_error_converts() {
        let err: CliError = GitHubError::config_error("Timeout must be greater than 0").into();
        assert!(matches!(err, CliError::GitHub(_)));
    }
}
