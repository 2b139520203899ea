//! The validated configuration for a single run.

use crate::error::{Error, Result};

/// Everything needed to run one command and report on it.
///
/// A `RunConfig` can only be obtained through [`RunConfig::new`], so a value
/// in hand always has a non-empty command and both messages set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    success_message: String,
    error_message: String,
    command: Vec<String>,
    hide: bool,
}

impl RunConfig {
    /// Builds a config, checking the command first and then each message.
    ///
    /// An empty message counts as missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCommand`], [`Error::MissingSuccessMessage`] or
    /// [`Error::MissingErrorMessage`], in that order of precedence.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipet_core::options::RunConfig;
    ///
    /// let config = RunConfig::new(
    ///     Some("Deployed".to_string()),
    ///     Some("Deploy failed".to_string()),
    ///     vec!["make".to_string(), "deploy".to_string()],
    ///     false,
    /// )?;
    /// assert_eq!(config.executable(), "make");
    /// # Ok::<(), pipet_core::error::Error>(())
    /// ```
    pub fn new(
        success_message: Option<String>,
        error_message: Option<String>,
        command: Vec<String>,
        hide: bool,
    ) -> Result<Self> {
        if command.is_empty() {
            return Err(Error::EmptyCommand);
        }

        let success_message = non_empty(success_message).ok_or(Error::MissingSuccessMessage)?;
        let error_message = non_empty(error_message).ok_or(Error::MissingErrorMessage)?;

        Ok(Self {
            success_message,
            error_message,
            command,
            hide,
        })
    }

    #[must_use]
    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    #[must_use]
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// First token of the command.
    #[must_use]
    pub fn executable(&self) -> &str {
        &self.command[0]
    }

    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.command[1..]
    }

    #[must_use]
    pub fn hide(&self) -> bool {
        self.hide
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
