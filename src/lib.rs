//! Keysync - keep i18n catalogs in lockstep with source code
//!
//! Keysync scans application source text for literal `t('key')` calls and
//! templated `t(`prefix.${...}`)` calls, compares every locale catalog
//! against that reference set, reports the drift and can rewrite each
//! catalog so it holds exactly the keys the code uses.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, report printing, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanner, catalog codec, reconciliation and synchronization

pub mod cli;
pub mod config;
pub mod core;
