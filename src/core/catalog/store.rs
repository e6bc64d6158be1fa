//! Catalog persistence.
//!
//! Reconciliation and synchronization only see the [`CatalogStore`] trait, so
//! they can run against [`MemoryCatalogStore`] in tests and against
//! [`FsCatalogStore`] for real.

use std::{
    cell::RefCell,
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::{Value, ser::PrettyFormatter};

use super::Tree;

/// Indentation used for every written catalog.
const INDENT: &[u8] = b"    ";

/// Read and write one catalog per locale.
pub trait CatalogStore {
    /// Load a locale's catalog. A catalog that does not exist yet is empty.
    fn load(&self, locale: &str) -> Result<Tree>;

    /// Replace a locale's catalog.
    fn save(&self, locale: &str, tree: &Tree) -> Result<()>;

    /// Human-readable location of a locale's catalog, for messages.
    fn describe(&self, locale: &str) -> String {
        locale.to_string()
    }
}

/// Catalogs stored as `<root>/<locale>/<catalog_file>`.
#[derive(Debug, Clone)]
pub struct FsCatalogStore {
    root: PathBuf,
    catalog_file: String,
}

impl FsCatalogStore {
    pub fn new(root: impl Into<PathBuf>, catalog_file: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            catalog_file: catalog_file.into(),
        }
    }

    pub fn path_for(&self, locale: &str) -> PathBuf {
        self.root.join(locale).join(&self.catalog_file)
    }
}

impl CatalogStore for FsCatalogStore {
    fn load(&self, locale: &str) -> Result<Tree> {
        load_tree(&self.path_for(locale))
    }

    fn save(&self, locale: &str, tree: &Tree) -> Result<()> {
        save_tree(&self.path_for(locale), tree)
    }

    fn describe(&self, locale: &str) -> String {
        self.path_for(locale).display().to_string()
    }
}

/// Read a catalog document. A missing file yields an empty tree; a file that
/// exists but is not a JSON object is an error.
pub fn load_tree(path: &Path) -> Result<Tree> {
    if !path.exists() {
        return Ok(Tree::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => bail!("Root of catalog file must be an object: {}", path.display()),
    }
}

/// Render a tree the way it is written to disk: 4-space indent, unescaped
/// UTF-8, trailing newline.
pub fn render_tree(tree: &Tree) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    tree.serialize(&mut serializer)
        .context("Failed to serialize catalog")?;
    buf.push(b'\n');
    String::from_utf8(buf).context("Serialized catalog is not valid UTF-8")
}

/// Write a catalog document, creating parent directories as needed.
pub fn save_tree(path: &Path, tree: &Tree) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = render_tree(tree)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write catalog file: {}", path.display()))?;

    Ok(())
}

/// In-memory catalogs keyed by locale.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    catalogs: RefCell<HashMap<String, Tree>>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(self, locale: &str, tree: Tree) -> Self {
        self.catalogs.borrow_mut().insert(locale.to_string(), tree);
        self
    }

    pub fn get(&self, locale: &str) -> Option<Tree> {
        self.catalogs.borrow().get(locale).cloned()
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn load(&self, locale: &str) -> Result<Tree> {
        Ok(self.get(locale).unwrap_or_default())
    }

    fn save(&self, locale: &str, tree: &Tree) -> Result<()> {
        self.catalogs
            .borrow_mut()
            .insert(locale.to_string(), tree.clone());
        Ok(())
    }
}
