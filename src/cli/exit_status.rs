use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): all inputs processed and written
/// - `Error` (2): the command failed (I/O error, malformed context file, bad
///   flag combination)
///
/// There is no "issues found" status between the two: directive resolution
/// fails open, so a malformed directive never fails a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// All inputs processed and written.
    Success,
    /// The command failed before or while writing output.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
