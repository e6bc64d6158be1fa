use std::{
    env,
    io::{self, Write},
};

use anyhow::{Context, Result, bail};

use super::{args::Arguments, exit_status::ExitStatus, report};
use crate::{
    config::{Config, load_config},
    core::{FsCatalogStore, Pipeline, PipelineOptions, PipelineOutcome, scanner::WalkOptions},
};

/// Run keysync with parsed arguments.
///
/// Settings are merged as CLI > config file > defaults. The report is printed
/// before any catalog is written, so a failed save still leaves it on stdout.
pub fn run(args: Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to read the current directory")?;
    let loaded = load_config(args.config.as_deref(), &cwd)?;

    match &loaded.source {
        Some(path) => report::print_note(
            &format!("Using config file {}", path.display()),
            args.verbose,
        ),
        None => report::print_note(
            "No .keysyncrc.json found, using default configuration",
            args.verbose,
        ),
    }

    let options = build_options(&args, &loaded.config)?;
    let store = FsCatalogStore::new(&args.locales, &loaded.config.catalog_file);

    eprintln!("Extracting used keys from '{}'...", args.src.display());
    let outcome = Pipeline::run(&options, &store)?;
    print_scan_notes(&outcome, args.verbose);

    report::print(&outcome, args.sync);

    if args.sync {
        let mut stdout = io::stdout().lock();
        report::print_sync_started(&mut stdout);
        outcome.synchronize(&store, |saved| report::print_locale_synced(saved, &mut stdout))?;
        report::print_sync_completed(&mut stdout);
        let _ = stdout.flush();
    }

    Ok(ExitStatus::from_check(args.check, outcome.reconciliation.has_drift()))
}

fn build_options(args: &Arguments, config: &Config) -> Result<PipelineOptions> {
    let requested = args.lang_list().unwrap_or_else(|| config.locales.clone());

    let mut locales: Vec<String> = Vec::with_capacity(requested.len());
    for locale in requested {
        let locale = locale.trim().to_string();
        if !locale.is_empty() && !locales.contains(&locale) {
            locales.push(locale);
        }
    }
    if locales.is_empty() {
        bail!("No locales given. Pass --langs (e.g. --langs en,it,fr,de) or set 'locales' in the config file.");
    }

    let mut preserve = config.preserve.clone();
    preserve.extend(args.preserve_list());

    Ok(PipelineOptions {
        source_root: args.src.clone(),
        locales,
        preserve,
        walk: WalkOptions::new(&config.ignores, &config.extensions)?,
    })
}

fn print_scan_notes(outcome: &PipelineOutcome, verbose: bool) {
    let scan = &outcome.scan;
    report::print_note(
        &format!(
            "Scanned {} source {}, reference locale '{}'",
            scan.files_scanned,
            if scan.files_scanned == 1 { "file" } else { "files" },
            outcome.reference_locale
        ),
        verbose,
    );
    for path in &scan.binary_skipped {
        report::print_note(&format!("Skipped binary file {}", path.display()), verbose);
    }

    if scan.static_keys.is_empty() && scan.dynamic_prefixes.is_empty() {
        report::print_warning("No translation keys found in source. A sync would empty every catalog.");
    }
}
