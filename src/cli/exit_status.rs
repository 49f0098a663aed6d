use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status for CLI commands, following common conventions for linter
/// tools.
///
/// - `Success` (0): Command completed, no denied warnings
/// - `Failure` (1): Command completed but warnings were denied
/// - `Error` (2): Command failed due to internal error (parse error, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but found denied warnings.
    Failure,
    /// Command failed due to internal error (parse error, config error, etc.)
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

pub fn from_result(result: &CommandResult) -> ExitStatus {
    if result.exit_on_warnings && result.warning_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
