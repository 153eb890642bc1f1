//! Application entry point and dispatch.

use anyhow::Result;
use tracing::info;

use seqview_core::{generate_sequence, SequenceKind, TermCount};
use seqview_present::sequence_text;

use crate::config::AppConfig;
use crate::output;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        output::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    // Print mode
    if config.wants_print() {
        return run_print(config);
    }

    // Interactive TUI
    run_tui(config)
}

fn run_print(config: &AppConfig) -> Result<()> {
    let kind = parse_kind(&config.kind)?;
    let values = generate_sequence(kind, config.terms)?;
    info!(kind = %kind, terms = config.terms, len = values.len(), "sequence generated");

    let text = sequence_text(&values);

    if config.json {
        let report = output::JsonReport::new(kind, config.terms, &values);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if config.quiet {
        println!("{text}");
    } else {
        output::print_success(&format!("{}: {}", kind.title(), text));
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        output::write_to_file(path, &text)?;
    }

    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let kind = parse_kind(&config.kind)?;
    let mut app = seqview_tui::TuiApp::new(kind, TermCount::new(config.terms));
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;
    Ok(())
}

fn parse_kind(name: &str) -> Result<SequenceKind> {
    Ok(name.parse::<SequenceKind>()?)
}
