//! projectboard CLI
//!
//! Loads fetcher settings, fetches one project board and hands back the JSON
//! (or `Error: ...` string) for the binary to print.

pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod settings;

use projectboard_github::{FetcherConfig, ProjectFetcher, RenderStyle};
use tracing::debug;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use settings::{SettingsLoader, ENV_PREFIX, TOKEN_ENV_VAR};

/// Result of one board fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Text to print on stdout
    pub output: String,
    /// Whether `output` is an `Error:` message instead of board JSON
    pub is_error: bool,
}

impl RunOutcome {
    fn from_output(output: String) -> Self {
        let is_error = output.starts_with("Error:");
        Self { output, is_error }
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        if self.is_error {
            1
        } else {
            0
        }
    }
}

fn settings_loader(cli: &Cli) -> SettingsLoader {
    match &cli.config {
        Some(path) => SettingsLoader::with_path(path.clone()),
        None => SettingsLoader::new(),
    }
}

fn apply_flags(cli: &Cli, mut config: FetcherConfig) -> FetcherConfig {
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    config
}

/// Build the fetcher settings from the config file, environment, the given
/// token and the flags
pub fn resolve_config(cli: &Cli, token: Option<String>) -> CliResult<FetcherConfig> {
    let config = settings_loader(cli).load_with_token(token)?;
    Ok(apply_flags(cli, config))
}

/// Fetch the board with already-resolved settings
pub async fn run_with_config(cli: &Cli, config: FetcherConfig) -> CliResult<RunOutcome> {
    let fetcher = ProjectFetcher::new(config)?;
    let style = if cli.pretty {
        RenderStyle::Pretty
    } else {
        RenderStyle::Compact
    };

    let output = fetcher
        .fetch_project_with(cli.project_id.as_deref(), style)
        .await;
    let outcome = RunOutcome::from_output(output);
    debug!(is_error = outcome.is_error, "Fetch finished");
    Ok(outcome)
}

/// Resolve settings (token from `GITHUB_AUTH`) and fetch the board
pub async fn run(cli: &Cli) -> CliResult<RunOutcome> {
    let config = apply_flags(cli, settings_loader(cli).load()?);
    run_with_config(cli, config).await
}
