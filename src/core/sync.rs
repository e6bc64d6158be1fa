//! Catalog synchronization.
//!
//! Rebuilds every locale so it holds exactly the used keys. This is the only
//! place where keys are removed and placeholder values are written.

use anyhow::{Context, Result};

use super::catalog::{CatalogStore, FlatCatalog, Tree, unflatten};
use super::reconcile::UsedKeySet;

/// Where each value in a rebuilt catalog came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Existing non-empty values kept as they were.
    pub kept: usize,
    /// Values copied from the reference locale.
    pub from_reference: usize,
    /// Keys filled with their last segment.
    pub placeholders: usize,
    /// Keys dropped because nothing uses them.
    pub removed: usize,
}

impl SyncStats {
    pub fn total(&self) -> usize {
        self.kept + self.from_reference + self.placeholders
    }
}

/// Outcome of synchronizing one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSyncOutcome {
    pub locale: String,
    pub target: String,
    pub stats: SyncStats,
}

/// A locale and its current flattened catalog.
#[derive(Debug, Clone, Copy)]
pub struct LocaleInput<'a> {
    pub locale: &'a str,
    pub flat: &'a FlatCatalog,
}

/// Final `.`-delimited segment of a key, used when no translation exists.
pub fn placeholder_for(key: &str) -> &str {
    key.rsplit('.').next().unwrap_or(key)
}

fn non_empty<'a>(flat: &'a FlatCatalog, key: &str) -> Option<&'a str> {
    flat.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

/// Rebuild one locale's catalog from the used-key set.
///
/// Each key resolves, in order, to this locale's own non-empty value, the
/// reference locale's non-empty value (for other locales only) or the key's
/// last segment.
pub fn rebuild_locale(
    used: &UsedKeySet,
    current: &FlatCatalog,
    reference: Option<&FlatCatalog>,
) -> (Tree, SyncStats) {
    let mut stats = SyncStats::default();
    let mut rebuilt = FlatCatalog::new();

    for key in used.iter() {
        let value = if let Some(own) = non_empty(current, key) {
            stats.kept += 1;
            own
        } else if let Some(fallback) = reference.and_then(|r| non_empty(r, key)) {
            stats.from_reference += 1;
            fallback
        } else {
            stats.placeholders += 1;
            placeholder_for(key)
        };
        rebuilt.insert(key.to_string(), value.to_string());
    }

    stats.removed = current.keys().filter(|key| !used.contains(key)).count();

    (unflatten(&rebuilt, used.iter()), stats)
}

/// Rebuild and save every locale, in order.
///
/// The first locale is the reference. `on_saved` is called right after each
/// locale is written. A failure stops the run; locales that were already saved
/// stay saved.
pub fn synchronize<S, F>(
    store: &S,
    used: &UsedKeySet,
    locales: &[LocaleInput<'_>],
    mut on_saved: F,
) -> Result<Vec<LocaleSyncOutcome>>
where
    S: CatalogStore + ?Sized,
    F: FnMut(&LocaleSyncOutcome),
{
    let Some(reference) = locales.first() else {
        return Ok(Vec::new());
    };

    let mut outcomes = Vec::with_capacity(locales.len());
    for (index, input) in locales.iter().enumerate() {
        let fallback = if index == 0 {
            None
        } else {
            Some(reference.flat)
        };
        let (tree, stats) = rebuild_locale(used, input.flat, fallback);

        store.save(input.locale, &tree).with_context(|| {
            format!("Failed to synchronize locale '{}'", input.locale)
        })?;

        let outcome = LocaleSyncOutcome {
            locale: input.locale.to_string(),
            target: store.describe(input.locale),
            stats,
        };
        on_saved(&outcome);
        outcomes.push(outcome);
    }

    Ok(outcomes)
}
