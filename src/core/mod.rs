//! Core engine: key discovery and catalog reconciliation.
//!
//! ## Module Structure
//!
//! - `scanner`: Finds `t('key')` and `t(`prefix.${...}`)` references in source text
//! - `catalog`: Converts nested catalogs to flat key paths and back, plus storage
//! - `reconcile`: Builds the used-key set and per-locale missing/unused keys
//! - `sync`: Rewrites catalogs to exactly the used keys with fallbacks
//! - `pipeline`: Runs the stages in order

pub mod catalog;
pub mod pipeline;
pub mod reconcile;
pub mod scanner;
pub mod sync;

pub use catalog::{CatalogStore, FlatCatalog, FsCatalogStore, MemoryCatalogStore, Tree};
pub use pipeline::{Pipeline, PipelineOptions, PipelineOutcome};
pub use reconcile::{LocaleDiff, Reconciliation, UsedKeySet};
pub use sync::{LocaleSyncOutcome, SyncStats};
