use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing command separator \"--\"")]
    MissingSeparator,

    #[error("No command specified")]
    EmptyCommand,

    #[error("Invalid option: {}", .0)]
    InvalidOption(String),

    #[error("Argument is not valid UTF-8: {}", .0)]
    NonUtf8Argument(String),

    #[error("--on-success is required")]
    MissingSuccessMessage,

    #[error("--on-error is required")]
    MissingErrorMessage,

    #[error("Command failed with exit code {}", .code)]
    CommandFailed { code: i32 },

    #[error("Error running command: {}", .0)]
    SpawnError(std::io::Error),

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),
}

impl Error {
    pub fn command_failed(code: i32) -> Self {
        Self::CommandFailed { code }
    }

    /// Returns the child's exit code if this error came from a non-zero exit.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { code } => Some(*code),
            _ => None,
        }
    }
}
