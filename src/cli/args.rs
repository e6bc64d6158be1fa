//! CLI argument definitions using clap.
//!
//! Keysync has a single command: scan the source tree, report catalog drift,
//! and with `--sync` rewrite every catalog to the used keys.

use std::path::PathBuf;

use clap::Parser;

use crate::config::split_csv;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Source directory to scan for translation keys (e.g. frontend/src)
    #[arg(long, value_name = "PATH")]
    pub src: PathBuf,

    /// Locales directory holding <locale>/<catalog file> (e.g. frontend/src/locales)
    #[arg(long, value_name = "PATH")]
    pub locales: PathBuf,

    /// Apply synchronization (remove unused keys, add missing ones with fallbacks)
    #[arg(long)]
    pub sync: bool,

    /// Comma-separated locale codes; the first is the reference locale
    /// [default: en,it,fr,de]
    #[arg(long, value_name = "CODES")]
    pub langs: Option<String>,

    /// Comma-separated key prefixes to always keep
    #[arg(long, value_name = "PREFIXES")]
    pub preserve: Option<String>,

    /// Exit with status 1 when any locale has missing or unused keys
    #[arg(long, conflicts_with = "sync")]
    pub check: bool,

    /// Config file (default: search for .keysyncrc.json upward from the current directory)
    #[arg(long, value_name = "FILE", env = "KEYSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Locale codes given on the command line, if any.
    pub fn lang_list(&self) -> Option<Vec<String>> {
        self.langs.as_deref().map(split_csv)
    }

    /// Extra preserved prefixes given on the command line.
    pub fn preserve_list(&self) -> Vec<String> {
        self.preserve.as_deref().map(split_csv).unwrap_or_default()
    }
}
