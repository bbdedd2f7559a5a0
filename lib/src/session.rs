use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::panic;
use std::process::Command;
use std::process::Stdio;
use std::thread;

use tracing::debug;
use tracing::instrument;
use tracing::warn;

use crate::error::Error;
use crate::error::ExecutionFailure;
use crate::error::Result;
use crate::invocation::Invocation;

/// Runs one picker invocation through a shell, feeding its stdin from a
/// worker thread while the calling thread collects its stdout.
#[derive(Debug, Clone)]
pub struct PipeSession {
    shell: String,
}

impl PipeSession {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    /// Spawns `$shell -c "<program> <arguments>"` and returns everything it
    /// printed to stdout.
    ///
    /// `feeder` runs on its own thread and owns the child's stdin for its whole
    /// lifetime; the pipe is closed as soon as it returns. Meanwhile this thread
    /// blocks on draining stdout and waiting for exit, so neither side can fill
    /// a pipe buffer and stall the other. There is no timeout.
    ///
    /// A feeder that hits [`io::ErrorKind::BrokenPipe`] is not an error: the
    /// picker is allowed to exit before reading all of its input.
    ///
    /// # Errors
    ///
    /// - [`Error::ProcessStartFailed`] if the shell cannot be spawned
    /// - [`Error::ProcessIoFailed`] if stdin is unavailable or the feeder fails
    /// - [`Error::ProcessExecutionFailed`] on non-zero exit or capture failure
    #[instrument(skip_all, fields(shell = %self.shell, program = invocation.program(), class = %invocation.class()))]
    pub fn run<F>(&self, invocation: &Invocation, feeder: F) -> Result<String>
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()> + Send,
    {
        let command_line = invocation.command_line();
        debug!(%command_line, "spawning picker");

        // Stdout is piped for capture. Stderr stays inherited so the user sees
        // picker diagnostics, and pickers like fzf draw their UI on /dev/tty.
        let mut child = Command::new(&self.shell)
            .arg("-c")
            .arg(&command_line)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(Error::ProcessStartFailed)?;

        let Some(stdin) = child.stdin.take() else {
            if let Err(error) = child.kill().and_then(|()| child.wait().map(drop)) {
                warn!(?error, "unable to reap picker without stdin");
            }
            return Err(Error::ProcessIoFailed(io::Error::other(
                "child stdin was not captured",
            )));
        };

        let (output, fed) = thread::scope(|scope| {
            let writer = scope.spawn(move || {
                let mut stdin = BufWriter::new(stdin);
                let result = feeder(&mut stdin).and_then(|()| stdin.flush());
                // Dropping the writer closes the pipe, which is the child's EOF.
                drop(stdin);
                result
            });
            let output = child.wait_with_output();
            (output, writer.join())
        });

        let fed = fed.unwrap_or_else(|payload| panic::resume_unwind(payload));
        let output = output.map_err(ExecutionFailure::Capture)?;

        debug!(status = %output.status, bytes = output.stdout.len(), "picker exited");
        if !output.status.success() {
            return Err(ExecutionFailure::Status(output.status).into());
        }

        match fed {
            Err(error) if error.kind() == io::ErrorKind::BrokenPipe => {
                debug!("picker closed stdin before all candidates were written");
            }
            Err(error) => return Err(Error::ProcessIoFailed(error)),
            Ok(()) => {}
        }

        let stdout = String::from_utf8(output.stdout).map_err(ExecutionFailure::Utf8)?;
        Ok(stdout)
    }
}
