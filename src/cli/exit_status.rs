use std::process::ExitCode;

/// How a keysync run ended.
///
/// Drift only fails the process under `--check`; a plain report or a sync
/// exits 0 whatever the catalogs looked like. Errors always exit 2.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Report printed, catalogs synchronized if asked.
    Success,
    /// `--check` found a missing or unused key in some locale.
    Failure,
    /// Scan, load, save or config failed.
    Error,
}

impl ExitStatus {
    /// Status of a run that reached the end of reconciliation.
    pub fn from_check(check: bool, has_drift: bool) -> Self {
        if check && has_drift {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        let code = match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        };
        ExitCode::from(code)
    }
}
