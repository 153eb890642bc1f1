//! seqview — Interactive Fibonacci sequence explorer.

use std::process::ExitCode;

use seqview_lib::{app, config, errors, output, version};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    tracing::debug!("{} starting", version::full_version());

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&format!("{err:#}"));
            ExitCode::from(errors::exit_code_for(&err))
        }
    }
}
