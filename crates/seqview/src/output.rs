//! CLI output formatting, file writing, and shell completion.

use std::io::{self, Write};

use clap::Command;
use clap_complete::{generate, Shell};
use console::style;
use num_bigint::BigUint;
use serde::Serialize;

use seqview_core::SequenceKind;
use seqview_present::PlotBounds;

/// JSON report for a generated sequence.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub kind: String,
    pub terms: i64,
    pub values: Vec<String>,
    pub plot_lower: f64,
    pub plot_upper: f64,
}

impl JsonReport {
    /// Build a report from generated values.
    #[must_use]
    pub fn new(kind: SequenceKind, terms: i64, values: &[BigUint]) -> Self {
        let bounds = PlotBounds::from_values(values);
        Self {
            kind: kind.label().to_string(),
            terms,
            values: values.iter().map(ToString::to_string).collect(),
            plot_lower: bounds.lower,
            plot_upper: bounds.upper,
        }
    }
}

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a success message.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("[OK] {text}");
    } else {
        println!("{} {text}", style("[OK]").green().bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

/// Write the rendered sequence to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, text: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write!(file, "{text}")?;
    Ok(())
}

/// Generate shell completion script.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    generate(shell, cmd, "seqview", out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqview_core::fibonacci;

    #[test]
    fn json_report_fields() {
        let values = fibonacci::generate(5);
        let report = JsonReport::new(SequenceKind::Fibonacci, 5, &values);
        assert_eq!(report.kind, "Fibonacci");
        assert_eq!(report.terms, 5);
        assert_eq!(report.values, vec!["0", "1", "1", "2", "3"]);
        assert!(report.plot_lower < 0.0);
        assert!(report.plot_upper > 3.0);
    }

    #[test]
    fn json_report_empty_sequence_uses_unit_bounds() {
        let report = JsonReport::new(SequenceKind::Fibonacci, 0, &[]);
        assert!(report.values.is_empty());
        assert!((report.plot_lower - 0.0).abs() < f64::EPSILON);
        assert!((report.plot_upper - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn json_report_serializes() {
        let values = fibonacci::generate(3);
        let report = JsonReport::new(SequenceKind::Fibonacci, 3, &values);
        let rendered = serde_json::to_string(&report).unwrap();
        assert!(rendered.contains("\"kind\":\"Fibonacci\""));
        assert!(rendered.contains("\"values\":[\"0\",\"1\",\"1\"]"));
    }

    #[test]
    fn color_check_does_not_panic() {
        let _ = is_color_disabled();
    }

    #[test]
    fn print_success_does_not_panic() {
        print_success("Fibonacci Sequence: [0, 1]");
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("something went wrong");
    }

    #[test]
    fn write_to_file_round_trip() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("seq.txt");
        write_to_file(path.to_str().unwrap(), "[0, 1, 1, 2, 3]").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[0, 1, 1, 2, 3]");
    }

    #[test]
    fn generate_bash_completion() {
        let mut cmd = Command::new("seqview");
        let mut buf = Vec::new();
        generate_completion(&mut cmd, Shell::Bash, &mut buf);
        assert!(!buf.is_empty());
    }
}
