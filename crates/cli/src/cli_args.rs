//! Command-line argument parsing and validation.
//!
//! Everything before the first `--` is parsed with `clap` as pipet's own
//! options; everything after it is the command to run, taken verbatim.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;
use log::{debug, warn};
use pipet_core::error::{Error, Result};
use pipet_core::options::RunConfig;

/// The token separating pipet's options from the command.
pub const SEPARATOR: &str = "--";

const BIN_NAME: &str = "pipet";

/// Options accepted before the separator.
///
/// The command itself is not part of this struct; see [`parse_options`].
#[derive(Parser, Debug)] // requires `derive` feature
#[command(
    name = BIN_NAME,
    version,
    about = "Run a command and print a fixed message on success or failure.",
    override_usage = "pipet --on-success <TEXT> --on-error <TEXT> [--hide] -- <COMMAND> [ARGS]...",
    args_override_self = true,
    term_width = 0 // Just to make testing across clap features easier
)]
pub struct Args {
    /// Message printed to stdout when the command exits with code 0.
    #[arg(long, value_name = "TEXT")]
    pub on_success: Option<String>,

    /// Message printed to stderr when the command exits with a non-zero code.
    #[arg(long, value_name = "TEXT")]
    pub on_error: Option<String>,

    /// Capture the command's stdout and stderr instead of showing them.
    #[arg(long, action)]
    pub hide: bool,

    /// Bare words before the separator. Accepted and ignored.
    #[arg(hide = true, value_name = "IGNORED")]
    pub ignored: Vec<String>,
}

/// Parses a raw argument list (without the program name) into a [`RunConfig`].
///
/// Checks happen in a fixed order: the separator must exist, the command
/// after it must be non-empty, the options before it must parse, and then
/// both messages must be present. Bare words before the separator are
/// ignored; unknown options there are rejected.
///
/// # Errors
///
/// Returns [`Error::MissingSeparator`], [`Error::EmptyCommand`],
/// [`Error::InvalidOption`], [`Error::MissingSuccessMessage`] or
/// [`Error::MissingErrorMessage`].
///
/// # Examples
///
/// ```rust
/// use pipet_cli::cli_args::parse_options;
///
/// let args: Vec<String> = ["--on-success", "ok", "--on-error", "fail", "--", "make"]
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// let config = parse_options(&args)?;
/// assert_eq!(config.command(), ["make"]);
/// # Ok::<(), pipet_core::error::Error>(())
/// ```
pub fn parse_options(args: &[String]) -> Result<RunConfig> {
    let (options, command) = split_at_separator(args).ok_or(Error::MissingSeparator)?;

    if command.is_empty() {
        return Err(Error::EmptyCommand);
    }

    let parsed = parse_option_tokens(options).map_err(|e| Error::InvalidOption(describe(&e)))?;
    debug!("Parsed options: {parsed:?}");
    if !parsed.ignored.is_empty() {
        warn!("Ignoring words before the separator: {:?}", parsed.ignored);
    }

    RunConfig::new(parsed.on_success, parsed.on_error, command.to_vec(), parsed.hide)
}

/// Returns clap's help or version output when `-h`, `--help`, `-V` or
/// `--version` appears among pipet's own options.
///
/// The caller prints the returned value and exits successfully.
#[must_use]
pub fn informational_request(args: &[String]) -> Option<clap::Error> {
    let options = split_at_separator(args).map_or(args, |(options, _)| options);

    let asks_for_info = options
        .iter()
        .any(|arg| matches!(arg.as_str(), "-h" | "--help" | "-V" | "--version"));
    if !asks_for_info {
        return None;
    }

    match parse_option_tokens(options) {
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => Some(e),
        _ => None,
    }
}

/// Converts raw process arguments into strings without altering them.
///
/// # Errors
///
/// Returns [`Error::NonUtf8Argument`] for the first argument that is not
/// valid UTF-8, since a lossy conversion would change what the shell runs.
pub fn collect_args<I>(args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| Error::NonUtf8Argument(arg.to_string_lossy().into_owned()))
        })
        .collect()
}

fn split_at_separator(args: &[String]) -> Option<(&[String], &[String])> {
    let index = args.iter().position(|arg| arg == SEPARATOR)?;
    Some((&args[..index], &args[index + 1..]))
}

fn parse_option_tokens(options: &[String]) -> std::result::Result<Args, clap::Error> {
    Args::try_parse_from(std::iter::once(BIN_NAME).chain(options.iter().map(String::as_str)))
}

/// Flattens clap's multi-line rendering into the single line we report.
fn describe(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["pipet"]);

        assert!(args.on_success.is_none());
        assert!(args.on_error.is_none());
        assert!(!args.hide);
        assert!(args.ignored.is_empty());
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from(["pipet", "--on-success", "S", "--on-error=E", "--hide"]);

        assert_eq!(args.on_success, Some("S".to_string()));
        assert_eq!(args.on_error, Some("E".to_string()));
        assert!(args.hide);
    }

    #[test]
    fn test_args_last_occurrence_wins() {
        let args = Args::parse_from(["pipet", "--on-success", "first", "--on-success", "second"]);
        assert_eq!(args.on_success, Some("second".to_string()));
    }

    #[test]
    fn test_args_collects_bare_words() {
        let args = Args::parse_from(["pipet", "stray", "--hide", "words"]);
        assert_eq!(args.ignored, ["stray", "words"]);
        assert!(args.hide);
    }

    #[test]
    fn test_help_does_not_list_ignored_words() {
        let help = Args::command().render_help().to_string();
        assert!(!help.contains("IGNORED"));
    }

    #[test]
    fn test_collect_args_keeps_utf8_verbatim() {
        let args = collect_args(["--hide", "--", "echo", "grüße"].map(OsString::from)).unwrap();
        assert_eq!(args, ["--hide", "--", "echo", "grüße"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_args_rejects_non_utf8() {
        use std::os::unix::ffi::OsStringExt;

        let latin1 = OsString::from_vec(b"caf\xe9.txt".to_vec());
        let result = collect_args([OsString::from("--"), OsString::from("cat"), latin1]);

        match result {
            Err(Error::NonUtf8Argument(lossy)) => assert!(lossy.starts_with("caf")),
            other => panic!("Expected NonUtf8Argument, got {other:?}"),
        }
    }

    #[test]
    fn test_split_at_first_separator_only() {
        let args = strings(&["--hide", "--", "a", "--", "b"]);
        let (options, command) = split_at_separator(&args).unwrap();

        assert_eq!(options, ["--hide"]);
        assert_eq!(command, ["a", "--", "b"]);
    }

    #[test]
    fn test_split_without_separator() {
        assert!(split_at_separator(&strings(&["--hide"])).is_none());
    }

    #[test]
    fn test_describe_is_single_line() {
        let error = parse_option_tokens(&strings(&["--bogus"])).unwrap_err();
        let description = describe(&error);

        assert!(!description.contains('\n'));
        assert!(description.contains("--bogus"));
        assert!(!description.starts_with("error:"));
    }

    #[test]
    fn test_informational_request_help() {
        let request = informational_request(&strings(&["--help"])).unwrap();
        assert_eq!(request.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_informational_request_version() {
        let request = informational_request(&strings(&["-V", "--", "ls"])).unwrap();
        assert_eq!(request.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_help_after_separator_belongs_to_command() {
        let args = strings(&["--on-success", "S", "--on-error", "E", "--", "ls", "--help"]);
        assert!(informational_request(&args).is_none());
    }

    #[test]
    fn test_no_informational_request_for_normal_args() {
        let args = strings(&["--on-success", "S", "--on-error", "E", "--", "ls"]);
        assert!(informational_request(&args).is_none());
    }
}
