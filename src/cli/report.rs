//! Summary output for CLI runs.
//!
//! Kept apart from execution so the rewritten code and the human-facing
//! summary never share a stream: when code goes to stdout the summary goes
//! to stderr (and only in verbose mode), otherwise to stdout.

use std::io::{self, Write};

use colored::Colorize;

use super::run::RunOutcome;

/// Success mark for consistent output formatting.
const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(outcome: &RunOutcome, verbose: bool) {
    if outcome.wrote_stdout {
        if verbose {
            print_to(outcome, verbose, &mut io::stderr().lock());
        }
    } else {
        print_to(outcome, verbose, &mut io::stdout().lock());
    }
}

/// Print the run summary to a custom writer.
fn print_to<W: Write>(outcome: &RunOutcome, verbose: bool, writer: &mut W) {
    if verbose {
        for file in &outcome.files {
            let _ = writeln!(
                writer,
                "  {}: {} directive {}",
                file.label,
                file.blocks,
                plural(file.blocks, "block", "blocks")
            );
        }
    }

    let total: usize = outcome.files.iter().map(|file| file.blocks).sum();
    let msg = format!(
        "Processed {} {}, resolved {} directive {}",
        outcome.files.len(),
        plural(outcome.files.len(), "input", "inputs"),
        total,
        plural(total, "block", "blocks")
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
