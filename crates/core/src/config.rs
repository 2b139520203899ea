//! Shell selection for command execution.
//!
//! Commands are handed to a shell as a single command line so that pipes,
//! redirections and `&&` behave the same as when typed interactively.

use std::process::Command;

use itertools::Itertools;

/// Default shell to use for command execution
#[cfg(not(windows))]
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Default shell to use for command execution
#[cfg(windows)]
pub const DEFAULT_SHELL: &str = "cmd.exe";

#[cfg(not(windows))]
const DEFAULT_SHELL_ARGS: &[&str] = &["-c"];

#[cfg(windows)]
const DEFAULT_SHELL_ARGS: &[&str] = &["/d", "/s", "/c"];

/// A shell program and the arguments that make it run the next argument as a
/// command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    program: String,
    args: Vec<String>,
}

impl Shell {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Builds the [`Command`] that runs `executable` with `arguments` through
    /// this shell. The tokens are joined with single spaces, so any quoting
    /// must already be present in them. On Windows the line is passed to the
    /// shell without further quoting.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipet_core::config::Shell;
    ///
    /// let shell = Shell::new("/bin/sh", ["-c"]);
    /// let command = shell.command_for("echo", &["hi".to_string()]);
    /// assert_eq!(command.get_program(), "/bin/sh");
    /// ```
    #[must_use]
    pub fn command_for(&self, executable: &str, arguments: &[String]) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        append_command_line(&mut command, command_line(executable, arguments));
        command
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL, DEFAULT_SHELL_ARGS.iter().copied())
    }
}

#[cfg(not(windows))]
fn append_command_line(command: &mut Command, line: String) {
    command.arg(line);
}

// cmd.exe does its own parsing and doesn't understand MSVCRT `\"` escapes,
// so the line has to reach it untouched.
#[cfg(windows)]
fn append_command_line(command: &mut Command, line: String) {
    use std::os::windows::process::CommandExt;

    command.raw_arg(line);
}

/// Joins the executable and its arguments into the line the shell will interpret.
#[must_use]
pub fn command_line(executable: &str, arguments: &[String]) -> String {
    std::iter::once(executable)
        .chain(arguments.iter().map(String::as_str))
        .join(" ")
}
