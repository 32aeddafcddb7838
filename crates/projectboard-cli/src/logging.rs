// Logging and verbosity control

use tracing_subscriber::EnvFilter;

/// Verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Quiet mode - warnings and errors only
    Quiet,
    /// Normal mode - run summary
    Normal,
    /// Verbose mode - per-card and per-request detail
    Verbose,
}

impl VerbosityLevel {
    /// Pick a level from the `-q` / `-v` flags; quiet wins
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            VerbosityLevel::Quiet
        } else if verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }

    /// Filter directive for this level
    pub fn directive(&self) -> &'static str {
        match self {
            VerbosityLevel::Quiet => "warn",
            VerbosityLevel::Normal => "info",
            VerbosityLevel::Verbose => "debug",
        }
    }
}

/// Initialize logging based on CLI flags.
///
/// `RUST_LOG` takes precedence over the flags. Logs go to stderr so stdout
/// carries only the board JSON.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = VerbosityLevel::from_flags(verbose, quiet);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(level == VerbosityLevel::Verbose)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(VerbosityLevel::from_flags(false, false), VerbosityLevel::Normal);
        assert_eq!(VerbosityLevel::from_flags(true, false), VerbosityLevel::Verbose);
        assert_eq!(VerbosityLevel::from_flags(false, true), VerbosityLevel::Quiet);
        assert_eq!(VerbosityLevel::from_flags(true, true), VerbosityLevel::Quiet);
    }

    #[test]
    fn test_directives() {
        assert_eq!(VerbosityLevel::Quiet.directive(), "warn");
        assert_eq!(VerbosityLevel::Normal.directive(), "info");
        assert_eq!(VerbosityLevel::Verbose.directive(), "debug");
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(false, true);
        init_logging(true, false);
    }
}
