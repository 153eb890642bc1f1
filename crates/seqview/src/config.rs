//! Application configuration from CLI flags and environment.

use clap::Parser;

/// seqview — Interactive Fibonacci sequence explorer.
#[derive(Parser, Debug)]
#[command(name = "seqview", version, about)]
pub struct AppConfig {
    /// Number of terms to generate.
    #[arg(
        short,
        long,
        default_value = "10",
        env = "SEQVIEW_TERMS",
        allow_negative_numbers = true
    )]
    pub terms: i64,

    /// Sequence kind: fibonacci, arithmetic, geometric, or word.
    #[arg(long, default_value = "fibonacci")]
    pub kind: String,

    /// Print the sequence to stdout instead of launching the TUI.
    #[arg(short, long)]
    pub print: bool,

    /// Quiet mode (only output the sequence; implies --print).
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit a JSON report (implies --print).
    #[arg(long)]
    pub json: bool,

    /// Write the rendered sequence to a file (implies --print).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Whether any flag requests print mode instead of the TUI.
    #[must_use]
    pub fn wants_print(&self) -> bool {
        self.print || self.quiet || self.json || self.output.is_some()
    }
}
