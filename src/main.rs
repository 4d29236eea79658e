use std::process::ExitCode;

use clap::Parser;

use commit_classify::cli::{orchestration, Cli};
use commit_classify::ui;

fn main() -> ExitCode {
    // Logs go to stderr so they never mix with classification output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match orchestration::run(cli) {
        Ok(code) => code,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
