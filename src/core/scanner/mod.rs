//! Key pattern scanner.
//!
//! Walks the source tree and extracts translation keys with a narrow lexical
//! pattern (see [`patterns::extract_keys`]). Source text is never parsed.
//!
//! ## Module Structure
//!
//! - `patterns`: line-oriented key and prefix extraction from raw text
//! - `walk`: source tree traversal and file filters

pub mod patterns;
pub mod walk;

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;

pub use patterns::{Extraction, extract_keys};
pub use walk::{WalkOptions, collect_source_files};

/// Number of leading bytes inspected when deciding whether a file is binary.
const BINARY_SNIFF_LEN: usize = 8000;

/// Keys found across the whole source tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub static_keys: BTreeSet<String>,
    pub dynamic_prefixes: BTreeSet<String>,
    pub files_scanned: usize,
    pub binary_skipped: Vec<PathBuf>,
}

enum FileScan {
    Text(Extraction),
    Binary,
}

/// Scan every text file under `root` for translation keys.
///
/// Files are read in parallel; results are merged into sorted sets so the
/// outcome does not depend on scheduling. A tree without a single match is a
/// valid, empty result.
pub fn scan_sources(root: &Path, options: &WalkOptions) -> Result<ScanResult> {
    let files = collect_source_files(root, options)?;

    let scans = files
        .par_iter()
        .map(|path| scan_file(path).map(|scan| (path, scan)))
        .collect::<Result<Vec<_>>>()?;

    let mut result = ScanResult::default();
    let mut merged = Extraction::default();
    for (path, scan) in scans {
        match scan {
            FileScan::Text(extraction) => {
                result.files_scanned += 1;
                merged.merge(extraction);
            }
            FileScan::Binary => result.binary_skipped.push(path.clone()),
        }
    }

    result.static_keys = merged.static_keys;
    result.dynamic_prefixes = merged.dynamic_prefixes;
    Ok(result)
}

fn scan_file(path: &Path) -> Result<FileScan> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read source file: {}", path.display()))?;

    if is_binary(&bytes) {
        return Ok(FileScan::Binary);
    }

    Ok(FileScan::Text(extract_keys(&String::from_utf8_lossy(&bytes))))
}

/// A NUL byte near the start of the content marks the file as binary.
fn is_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(BINARY_SNIFF_LEN).any(|b| *b == 0)
}
