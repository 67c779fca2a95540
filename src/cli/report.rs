//! Report printing.
//!
//! Separate from core logic to allow clean-wording to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::{args::ReportMode, run::RunOutcome};

/// Print the outcome of a run to stdout.
pub fn print(outcome: &RunOutcome) {
    print_to(outcome, &mut io::stdout().lock());
}

/// Print the outcome to a custom writer: one key per line, then the total.
pub fn print_to<W: Write>(outcome: &RunOutcome, writer: &mut W) {
    for key in outcome.keys.iter() {
        let _ = writeln!(writer, "{}", key);
    }
    let _ = writeln!(
        writer,
        "{} {}  {}",
        "TOTAL".bold(),
        outcome.keys.len(),
        mode_label(outcome.mode).dimmed()
    );
}

fn mode_label(mode: ReportMode) -> &'static str {
    match mode {
        ReportMode::AllProjectKeys => "project keys",
        ReportMode::AllFileKeys => "file keys",
        ReportMode::OrphanProjectKeys => "project keys missing from file",
        ReportMode::OrphanFileKeys => "file keys unused in project",
    }
}
