use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

// Matches a literal key passed to `t`: t('home.title'), t("home.title"), t(`home.title`)
// `\b` requires a non-word character (or start of line) before `t` without consuming it,
// so `format_t(...)` is ignored and nested calls still match.
static STATIC_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bt\(['"`]([A-Za-z0-9_.-]+)['"`]"#).expect("static key pattern is valid")
});

// Matches the literal head of a templated call: t(`reports.${id}`) -> "reports."
static DYNAMIC_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bt\(`([A-Za-z0-9_.-]+)\$\{"#).expect("dynamic prefix pattern is valid")
});

/// Keys and prefixes found in a piece of source text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Literal keys, sorted and deduplicated.
    pub static_keys: BTreeSet<String>,
    /// Heads of templated keys, sorted and deduplicated.
    pub dynamic_prefixes: BTreeSet<String>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.static_keys.is_empty() && self.dynamic_prefixes.is_empty()
    }

    pub fn merge(&mut self, other: Extraction) {
        self.static_keys.extend(other.static_keys);
        self.dynamic_prefixes.extend(other.dynamic_prefixes);
    }
}

/// Extract translation keys from raw source text.
///
/// This is a lexical scan, not a parser. Each physical line is matched on its
/// own, so a call split across lines is not detected.
pub fn extract_keys(source: &str) -> Extraction {
    let mut result = Extraction::default();

    for line in source.lines() {
        // Cheap pre-filter: every match contains "t("
        if !line.contains("t(") {
            continue;
        }

        for captures in STATIC_KEY_REGEX.captures_iter(line) {
            if let Some(key) = captures.get(1) {
                result.static_keys.insert(key.as_str().to_string());
            }
        }

        for captures in DYNAMIC_PREFIX_REGEX.captures_iter(line) {
            if let Some(prefix) = captures.get(1) {
                result.dynamic_prefixes.insert(prefix.as_str().to_string());
            }
        }
    }

    result
}
