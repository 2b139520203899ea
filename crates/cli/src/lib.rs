//! Pipet CLI Library
//!
//! This crate provides the command-line interface for pipet: it turns the raw
//! argument list into a validated [`pipet_core::options::RunConfig`] which the
//! `pipet` binary then hands to the core runner.
//!
//! # Examples
//!
//! ```bash
//! # Print a banner instead of relying on the exit code
//! pipet --on-success "Backup done" --on-error "Backup FAILED" -- rsync -a src/ dst/
//!
//! # Hide the command's own output; shell syntax is passed through
//! pipet --on-success "Clean" --on-error "Lint errors" --hide -- cargo clippy '2>&1' '|' tee lint.log
//! ```

pub mod cli_args;
