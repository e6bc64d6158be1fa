use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use walkdir::WalkDir;

/// Filters applied while walking the source tree.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Glob patterns matched against the full path of every entry.
    pub ignores: Vec<Pattern>,
    /// File extensions to keep (without the dot). Empty keeps every file.
    pub extensions: Vec<String>,
}

impl WalkOptions {
    pub fn new(ignores: &[String], extensions: &[String]) -> Result<Self> {
        let ignores = ignores
            .iter()
            .map(|p| {
                Pattern::new(p).with_context(|| format!("Invalid ignore pattern: \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;

        let extensions = extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();

        Ok(Self {
            ignores,
            extensions,
        })
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.ignores.iter().any(|p| p.matches(&path_str))
    }

    fn has_wanted_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted == ext))
    }
}

/// Collect every file under `root`, sorted by path.
///
/// Any traversal error is returned; no path is skipped silently.
pub fn collect_source_files(root: &Path, options: &WalkOptions) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        bail!("Source directory '{}' does not exist.", root.display());
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !options.is_ignored(entry.path()));

    for entry in walker {
        let entry = entry.with_context(|| {
            format!("Failed to scan source directory '{}'", root.display())
        })?;
        let path = entry.path();

        if entry.file_type().is_file() && options.has_wanted_extension(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}
