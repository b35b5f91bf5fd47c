//! Command-line tokens
//!
//! The tool has no flags of its own. Every token is a settings override:
//! `key=value` sets a value, a bare `flag` sets that key to `true`.
//! Tokens are taken verbatim, including a literal `--`.

use clap::Parser;
use std::ffi::OsString;

/// Video Tools - the video workflow helper
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "video-tools")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliArgs {
    /// Settings overrides (`key=value` or `flag`)
    #[arg(
        value_name = "KEY=VALUE|FLAG",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,
}

impl CliArgs {
    /// Parse the process arguments
    pub fn from_env() -> Self {
        Self::from_args(std::env::args_os())
    }

    /// Parse `args`, the first being the program name.
    ///
    /// An escape is placed ahead of the user's tokens so clap treats every
    /// one of them, `--` included, as a value.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_else(|| OsString::from("video-tools"));
        let escaped = std::iter::once(program)
            .chain(std::iter::once(OsString::from("--")))
            .chain(args);
        Self::parse_from(escaped)
    }
}
