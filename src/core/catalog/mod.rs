//! Locale catalog codec.
//!
//! A catalog lives on disk as a nested JSON document (the [`Tree`] form) and
//! is compared and rebuilt as a map of dot-delimited key paths (the
//! [`FlatCatalog`] form).

pub mod store;

use std::collections::BTreeMap;

use serde_json::{Map, Value};

pub use store::{CatalogStore, FsCatalogStore, MemoryCatalogStore};

/// Nested catalog. Key order is insertion order.
pub type Tree = Map<String, Value>;

/// Catalog keyed by full key path (`"home.title"`).
pub type FlatCatalog = BTreeMap<String, String>;

/// Flatten a tree into key paths.
///
/// Only string leaves are copied. Numbers, booleans, null and arrays have no
/// textual value and are left out.
pub fn flatten(tree: &Tree) -> FlatCatalog {
    let mut flat = FlatCatalog::new();
    flatten_into(tree, "", &mut flat);
    flat
}

fn flatten_into(tree: &Tree, prefix: &str, flat: &mut FlatCatalog) {
    for (key, value) in tree {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::Object(map) => flatten_into(map, &path, flat),
            Value::String(s) => {
                flat.insert(path, s.clone());
            }
            _ => {}
        }
    }
}

/// Rebuild a tree from key paths, inserting them in `order`.
///
/// Keys in `order` that are not in `flat` are skipped. When a path needs an
/// object where an earlier path left a string, the string is replaced.
pub fn unflatten<'a, I>(flat: &FlatCatalog, order: I) -> Tree
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tree = Tree::new();
    for key in order {
        if let Some(value) = flat.get(key) {
            let parts: Vec<&str> = key.split('.').collect();
            insert_nested(&mut tree, &parts, Value::String(value.clone()));
        }
    }
    tree
}

/// Insert a value at a nested path, creating intermediate objects as needed.
fn insert_nested(root: &mut Tree, path: &[&str], value: Value) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };

    if rest.is_empty() {
        root.insert(first.to_string(), value);
        return;
    }

    let next_level = root
        .entry(first.to_string())
        .or_insert_with(|| Value::Object(Map::new()));

    if !next_level.is_object() {
        *next_level = Value::Object(Map::new());
    }

    if let Value::Object(inner) = next_level {
        insert_nested(inner, rest, value);
    }
}
