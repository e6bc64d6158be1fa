//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `exit_status`: process exit codes
//! - `report`: stdout report and stderr notes
//! - `run`: merges CLI and config, then drives the pipeline

mod args;
mod exit_status;
pub mod report;
mod run;

use anyhow::Result;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args)
}
