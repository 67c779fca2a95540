use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): the report was printed
/// - `Usage` (1): no arguments or no config file given
/// - `Error` (2): the run failed (unreadable config, broken pattern, I/O, fetch)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Usage,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Usage => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
