// projectboard CLI entry point

use anyhow::Context;
use clap::Parser;
use projectboard_cli::{logging, output, run, Cli, CliError};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    match try_main(&cli).await {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            let message = match e.downcast_ref::<CliError>() {
                Some(cli_error) => format!("{}: {}", e, cli_error.user_message()),
                None => format!("{:#}", e),
            };
            output::print_error(&message);
            std::process::exit(2);
        }
    }
}

/// Fetch and print the board; returns the process exit code
async fn try_main(cli: &Cli) -> anyhow::Result<i32> {
    let outcome = run(cli)
        .await
        .context("Could not start the board fetch")?;

    println!("{}", outcome.output);
    Ok(outcome.exit_code())
}
