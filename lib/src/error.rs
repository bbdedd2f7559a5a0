use std::io;
use std::process::ExitStatus;
use std::string::FromUtf8Error;

/// Everything that can stop a selection from producing a result.
///
/// No stage recovers locally: the first error is returned to the caller as-is,
/// since retrying an interactive pick on the user's behalf would be wrong.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No known picker program is installed and none was supplied.
    #[error("no executables found in PATH")]
    NoExecutablesFound,

    /// Pickers exist, but none of them fits the resolved session mode.
    #[error("no suitable executable found for {} mode", mode_name(*desktop))]
    NoSuitableExecutable { desktop: bool },

    /// The input pipe to the child could not be opened or written.
    #[error("picker stdin failed")]
    ProcessIoFailed(#[source] io::Error),

    /// The shell could not be spawned at all.
    #[error("unable to start picker")]
    ProcessStartFailed(#[source] io::Error),

    /// The child ran but did not produce a usable result.
    #[error("picker execution failed")]
    ProcessExecutionFailed(#[source] ExecutionFailure),
}

/// Why a started picker did not produce output.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionFailure {
    /// Non-zero exit, which is also how pickers report a cancelled selection.
    #[error("exited with {0}")]
    Status(ExitStatus),

    #[error("unable to capture output")]
    Capture(#[source] io::Error),

    #[error("output is not valid UTF-8")]
    Utf8(#[source] FromUtf8Error),
}

impl From<ExecutionFailure> for Error {
    fn from(failure: ExecutionFailure) -> Self {
        Self::ProcessExecutionFailed(failure)
    }
}

fn mode_name(desktop: bool) -> &'static str {
    if desktop {
        "desktop"
    } else {
        "terminal"
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
