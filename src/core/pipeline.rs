//! The end-to-end run: scan, load, reconcile, then optionally synchronize.
//!
//! [`Pipeline::run`] stops after reconciliation so the caller can print the
//! report before any catalog is written. Synchronization is a separate step on
//! the outcome. Any error aborts the run.

use std::{collections::BTreeSet, path::PathBuf};

use anyhow::{Result, bail};

use super::{
    catalog::{CatalogStore, FlatCatalog, flatten},
    reconcile::{Reconciliation, UsedKeySet, reconcile},
    scanner::{ScanResult, WalkOptions, scan_sources},
    sync::{LocaleInput, LocaleSyncOutcome, synchronize},
};

/// Inputs of a run, already merged from CLI and config file.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub source_root: PathBuf,
    /// Locale codes in order; the first one is the reference locale.
    pub locales: Vec<String>,
    /// Prefixes preserved in addition to the ones found in source.
    pub preserve: Vec<String>,
    pub walk: WalkOptions,
}

impl PipelineOptions {
    pub fn reference_locale(&self) -> Option<&str> {
        self.locales.first().map(String::as_str)
    }
}

/// Everything the analysis produced, for reporting and synchronizing.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub scan: ScanResult,
    pub reference_locale: String,
    pub used: UsedKeySet,
    pub reconciliation: Reconciliation,
    /// Flat catalogs as loaded, in locale order.
    pub catalogs: Vec<(String, FlatCatalog)>,
}

impl PipelineOutcome {
    /// Rewrite every catalog so it holds exactly the used keys.
    pub fn synchronize<S, F>(&self, store: &S, on_saved: F) -> Result<Vec<LocaleSyncOutcome>>
    where
        S: CatalogStore + ?Sized,
        F: FnMut(&LocaleSyncOutcome),
    {
        let inputs: Vec<LocaleInput<'_>> = self
            .catalogs
            .iter()
            .map(|(locale, flat)| LocaleInput {
                locale: locale.as_str(),
                flat,
            })
            .collect();
        synchronize(store, &self.used, &inputs, on_saved)
    }
}

pub struct Pipeline;

impl Pipeline {
    pub fn run<S: CatalogStore + ?Sized>(
        options: &PipelineOptions,
        store: &S,
    ) -> Result<PipelineOutcome> {
        let Some(reference_locale) = options.reference_locale() else {
            bail!("At least one locale must be configured.");
        };

        // Scan
        let scan = scan_sources(&options.source_root, &options.walk)?;

        // Load
        let mut flats: Vec<(String, FlatCatalog)> = Vec::with_capacity(options.locales.len());
        for locale in &options.locales {
            let tree = store.load(locale)?;
            flats.push((locale.clone(), flatten(&tree)));
        }

        // Reconcile
        let preserved: BTreeSet<String> = options
            .preserve
            .iter()
            .chain(scan.dynamic_prefixes.iter())
            .cloned()
            .collect();
        let reference_flat = &flats[0].1;
        let used = UsedKeySet::build(&scan.static_keys, &preserved, reference_flat);
        let reconciliation = reconcile(
            &used,
            flats.iter().map(|(locale, flat)| (locale.as_str(), flat)),
        );

        Ok(PipelineOutcome {
            reference_locale: reference_locale.to_string(),
            scan,
            used,
            reconciliation,
            catalogs: flats,
        })
    }
}
