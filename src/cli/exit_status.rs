use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and every FIXME was filed or already filed
/// - `Failure` (1): Command completed but some issues could not be filed
/// - `Error` (2): Command failed before filing anything (config, remote, credentials)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but some issues could not be filed.
    Failure,
    /// Command failed due to a fatal error.
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
