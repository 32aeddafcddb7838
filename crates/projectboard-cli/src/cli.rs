// Command-line arguments

use std::path::PathBuf;

use clap::Parser;

/// Print a GitHub project board as JSON, grouped by status
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project (v2) node id; falls back to `default_project_id` from config
    #[arg(short, long, value_name = "ID")]
    pub project_id: Option<String>,

    /// Config file (default: <config dir>/projectboard/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// GraphQL endpoint override
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "pboard",
            "--project-id",
            "PVT_1",
            "--config",
            "/tmp/board.toml",
            "--endpoint",
            "http://localhost:9000/graphql",
            "--pretty",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.project_id.as_deref(), Some("PVT_1"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/board.toml")));
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:9000/graphql"));
        assert!(cli.pretty);
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pboard"]).unwrap();
        assert!(cli.project_id.is_none());
        assert!(!cli.pretty);
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["pboard", "-v", "-q"]).is_err());
    }
}
