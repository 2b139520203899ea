use std::io::{self, Read, Write};
use std::process::{Child, ExitStatus, Stdio};
use std::thread;

use log::{debug, info, warn};

use crate::config::Shell;
use crate::error::{Error, Result};
use crate::options::RunConfig;

/// What a successful run leaves behind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    captured_stdout: Vec<u8>,
}

impl RunReport {
    /// Standard output collected from the child. Only filled when the config
    /// hides output; inherited streams are never seen by this process.
    #[must_use]
    pub fn captured_stdout(&self) -> &[u8] {
        &self.captured_stdout
    }
}

/// Runs the configured command through the default shell, printing the
/// success message to stdout or the error message to stderr.
///
/// # Errors
///
/// See [`run_command_with`].
pub fn run_command(config: &RunConfig) -> Result<RunReport> {
    run_command_with(
        config,
        &Shell::default(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// Runs the configured command through `shell`, writing the success message
/// to `out` or the error message to `err` once the child has exited.
///
/// Standard input is always inherited. Standard output and error are
/// inherited unless the config hides them, in which case stdout is captured
/// into the returned report and stderr is drained and dropped.
///
/// # Errors
///
/// - [`Error::CommandFailed`] if the child exits with a non-zero code.
/// - [`Error::SpawnError`] if the shell cannot be started, its streams cannot
///   be read, or it terminates without an exit code. No message is written.
/// - [`Error::Stdio`] if writing the message fails.
pub fn run_command_with<O: Write, E: Write>(
    config: &RunConfig,
    shell: &Shell,
    out: &mut O,
    err: &mut E,
) -> Result<RunReport> {
    let mut command = shell.command_for(config.executable(), config.arguments());
    command.stdin(Stdio::inherit());

    if config.hide() {
        info!("Output of the command is hidden");
        command.stdout(Stdio::piped()).stderr(Stdio::piped());
    } else {
        command.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    }

    debug!("Spawning {:?}", command);
    let mut child = command.spawn().map_err(Error::SpawnError)?;
    debug!("Command running with pid {}", child.id());

    let captured_stdout = match drain_streams(&mut child) {
        Ok(captured) => captured,
        Err(e) => {
            // Reading failed; don't leave the child behind.
            let _ = child.kill();
            let _ = child.wait();
            return Err(Error::SpawnError(e));
        }
    };

    let status = child.wait().map_err(Error::SpawnError)?;
    debug!("Command finished: {status}");

    match status.code() {
        Some(0) => {
            writeln!(out, "{}", config.success_message()).map_err(Error::Stdio)?;
            debug!("Captured {} bytes of stdout", captured_stdout.len());
            Ok(RunReport { captured_stdout })
        }
        Some(code) => {
            writeln!(err, "{}", config.error_message()).map_err(Error::Stdio)?;
            Err(Error::command_failed(code))
        }
        None => {
            warn!("Command was terminated without an exit code: {status}");
            Err(Error::SpawnError(abnormal_termination(status)))
        }
    }
}

/// Reads piped stdout to the end while a helper thread empties stderr, so a
/// chatty child can't stall on a full pipe. Does nothing for inherited streams.
fn drain_streams(child: &mut Child) -> io::Result<Vec<u8>> {
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let mut captured = Vec::new();

    thread::scope(|scope| {
        let stderr_drain = stderr.map(|mut stderr| {
            scope.spawn(move || io::copy(&mut stderr, &mut io::sink()))
        });

        if let Some(mut stdout) = stdout {
            stdout.read_to_end(&mut captured)?;
        }

        if let Some(handle) = stderr_drain {
            let discarded = handle
                .join()
                .map_err(|_| io::Error::other("stderr reader panicked"))??;
            debug!("Discarded {discarded} bytes of stderr");
        }

        Ok(captured)
    })
}

fn abnormal_termination(status: ExitStatus) -> io::Error {
    io::Error::other(format!("command terminated abnormally ({status})"))
}
