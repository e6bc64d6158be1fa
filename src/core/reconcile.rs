//! Used-key computation and per-locale drift.
//!
//! Everything here is pure: inputs are key sets and flattened catalogs that
//! were loaded beforehand.

use std::collections::BTreeSet;

use super::catalog::FlatCatalog;

/// The keys every locale must contain after synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedKeySet {
    keys: BTreeSet<String>,
    static_count: usize,
    preserved_count: usize,
}

impl UsedKeySet {
    /// Union of the static keys and every reference key that starts with a
    /// preserved prefix.
    pub fn build<'a, S, P>(static_keys: S, preserved_prefixes: P, reference: &FlatCatalog) -> Self
    where
        S: IntoIterator<Item = &'a String>,
        P: IntoIterator<Item = &'a String>,
    {
        let mut keys: BTreeSet<String> = static_keys.into_iter().cloned().collect();
        let static_count = keys.len();

        let prefixes: Vec<&String> = preserved_prefixes
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();

        let preserved: Vec<&String> = reference
            .keys()
            .filter(|key| prefixes.iter().any(|p| key.starts_with(p.as_str())))
            .collect();
        let preserved_count = preserved.len();
        keys.extend(preserved.into_iter().cloned());

        Self {
            keys,
            static_count,
            preserved_count,
        }
    }

    /// Number of distinct keys referenced literally in source.
    pub fn static_count(&self) -> usize {
        self.static_count
    }

    /// Number of reference keys kept because of a preserved prefix.
    pub fn preserved_count(&self) -> usize {
        self.preserved_count
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

/// Drift of one locale against the used-key set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDiff {
    pub locale: String,
    /// Used but not defined, sorted.
    pub missing: Vec<String>,
    /// Defined but not used, sorted.
    pub unused: Vec<String>,
}

impl LocaleDiff {
    pub fn compute(locale: &str, used: &UsedKeySet, flat: &FlatCatalog) -> Self {
        let missing = used
            .iter()
            .filter(|key| !flat.contains_key(*key))
            .map(str::to_string)
            .collect();

        let unused = flat
            .keys()
            .filter(|key| !used.contains(key))
            .cloned()
            .collect();

        Self {
            locale: locale.to_string(),
            missing,
            unused,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unused.is_empty()
    }
}

/// Drift of every configured locale, in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub static_count: usize,
    pub preserved_count: usize,
    pub locales: Vec<LocaleDiff>,
}

impl Reconciliation {
    pub fn has_drift(&self) -> bool {
        self.locales.iter().any(|diff| !diff.is_clean())
    }
}

/// Compare each locale against the used-key set.
pub fn reconcile<'a, I>(used: &UsedKeySet, locales: I) -> Reconciliation
where
    I: IntoIterator<Item = (&'a str, &'a FlatCatalog)>,
{
    Reconciliation {
        static_count: used.static_count(),
        preserved_count: used.preserved_count(),
        locales: locales
            .into_iter()
            .map(|(locale, flat)| LocaleDiff::compute(locale, used, flat))
            .collect(),
    }
}
