//! Pipet Core Library
//!
//! This crate provides the core functionality for pipet, a wrapper that runs a
//! single shell command and reports its outcome with one of two fixed,
//! operator-defined messages instead of a raw exit code.
//!
//! # Key Features
//!
//! - **Validated Configuration**: [`options::RunConfig`] can only be built in a valid state
//! - **Shell Execution**: Commands run through a shell, so pipes and `&&` work as typed
//! - **Hidden Output**: Child stdout/stderr can be captured instead of forwarded
//! - **Error Handling**: One error type covering parse and run failures
//!
//! # Examples
//!
//! Running a command and reacting to the outcome:
//!
//! ```no_run
//! use pipet_core::execution::run_command;
//! use pipet_core::options::RunConfig;
//!
//! let config = RunConfig::new(
//!     Some("Tests passed".to_string()),
//!     Some("Tests failed".to_string()),
//!     vec!["cargo".to_string(), "test".to_string()],
//!     true,
//! )?;
//! run_command(&config)?;
//! # Ok::<(), pipet_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod options;
