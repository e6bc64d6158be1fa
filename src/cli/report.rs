//! Report formatting and printing.
//!
//! The comparison report and sync progress go to stdout. Progress notes and
//! warnings go to stderr. The report is printed before any catalog is written,
//! and each synchronized locale is printed as soon as it is saved.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{LocaleDiff, LocaleSyncOutcome, PipelineOutcome};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Maximum number of missing keys listed per locale.
const MAX_MISSING_DISPLAY: usize = 10;

const REPORT_HEADER: &str = "================== KEY COMPARISON REPORT ==================";

/// Print the comparison report to stdout.
pub fn print(outcome: &PipelineOutcome, sync_requested: bool) {
    print_to(outcome, sync_requested, &mut io::stdout().lock());
}

/// Print the comparison report to a custom writer.
///
/// Without `sync_requested` the report ends with a hint about `--sync`.
pub fn print_to<W: Write>(outcome: &PipelineOutcome, sync_requested: bool, writer: &mut W) {
    if !outcome.scan.dynamic_prefixes.is_empty() {
        let prefixes: Vec<&str> = outcome
            .scan
            .dynamic_prefixes
            .iter()
            .map(String::as_str)
            .collect();
        let _ = writeln!(writer, "Found dynamic prefixes: {}", prefixes.join(", "));
    }

    let _ = writeln!(writer, "\n{}", REPORT_HEADER.bold());
    let _ = writeln!(
        writer,
        "Total Unique Keys Found in Source Code (Static): {}",
        outcome.reconciliation.static_count
    );
    let _ = writeln!(
        writer,
        "Total Preserved Dynamic Keys: {}",
        outcome.reconciliation.preserved_count
    );

    for diff in &outcome.reconciliation.locales {
        print_locale_diff(diff, diff.locale == outcome.reference_locale, writer);
    }

    if !sync_requested {
        let _ = writeln!(
            writer,
            "\nRun with {} to automatically strip unused keys and add missing ones.",
            "--sync".cyan()
        );
    }
}

fn print_locale_diff<W: Write>(diff: &LocaleDiff, is_reference: bool, writer: &mut W) {
    let title = format!("--- LOCALE: {} ---", diff.locale.to_uppercase());
    if is_reference {
        let _ = writeln!(writer, "\n{} {}", title.bold(), "(reference)".dimmed());
    } else {
        let _ = writeln!(writer, "\n{}", title.bold());
    }

    let missing_count = diff.missing.len();
    let missing = if missing_count > 0 {
        missing_count.to_string().red()
    } else {
        missing_count.to_string().green()
    };
    let _ = writeln!(
        writer,
        "Missing Keys (Used in code, missing in {}): {}",
        diff.locale, missing
    );

    for key in diff.missing.iter().take(MAX_MISSING_DISPLAY) {
        let _ = writeln!(writer, "  - {}", key);
    }
    if missing_count > MAX_MISSING_DISPLAY {
        let _ = writeln!(
            writer,
            "  ... and {} more",
            missing_count - MAX_MISSING_DISPLAY
        );
    }

    let unused_count = diff.unused.len();
    let unused = if unused_count > 0 {
        unused_count.to_string().yellow()
    } else {
        unused_count.to_string().green()
    };
    let _ = writeln!(
        writer,
        "Unused Keys (In {}, not found in code): {}",
        diff.locale, unused
    );
}

pub fn print_sync_started<W: Write>(writer: &mut W) {
    let _ = writeln!(
        writer,
        "\nSynchronizing locale files by strictly enforcing used keys..."
    );
}

/// One line per saved locale.
pub fn print_locale_synced<W: Write>(outcome: &LocaleSyncOutcome, writer: &mut W) {
    let stats = &outcome.stats;
    let _ = writeln!(
        writer,
        "{} {}: {} {} written to {} ({} kept, {} from reference, {} placeholders, {} removed)",
        SUCCESS_MARK.green(),
        outcome.locale.bold(),
        stats.total(),
        if stats.total() == 1 { "key" } else { "keys" },
        outcome.target,
        stats.kept,
        stats.from_reference,
        stats.placeholders,
        stats.removed
    );
}

pub fn print_sync_completed<W: Write>(writer: &mut W) {
    let _ = writeln!(writer, "{}", "Synchronization completed.".green());
}

/// Print a warning to stderr.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}

/// Print a verbose-only note to stderr.
pub fn print_note(message: &str, verbose: bool) {
    if verbose {
        eprintln!("{} {}", "note:".bold().cyan(), message);
    }
}
