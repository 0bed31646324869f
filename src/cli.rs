// SPDX-License-Identifier: MPL-2.0
//! Command-line parsing.

use crate::error::{Error, Result};
use crate::media::DecodeFailurePolicy;
use std::ffi::OsStr;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: iced_peek [OPTIONS] <file.webp> [more files...]

Options:
  --config-dir <DIR>           Read settings.toml from DIR
  --decode-failure <POLICY>    abort (default) or placeholder
  --no-probe                   Do not print pixel values under the cursor
  -h, --help                   Print this help

Keys: Right/PageDown/wheel down = next, Left/PageUp/wheel up = previous,
      Home = first, End = last, Esc = quit";

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, PartialEq)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_PEEK_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
    /// Overrides `[loading] decode_failure` from the config file.
    pub decode_failure: Option<DecodeFailurePolicy>,
    pub no_probe: bool,
    pub help: bool,
    /// Input files, in display order.
    pub paths: Vec<PathBuf>,
}

/// Parses flags; at least one path is required unless help was requested.
///
/// # Errors
///
/// Returns [`Error::Usage`] for malformed options, unknown flags, or a
/// missing file list.
pub fn parse(mut args: pico_args::Arguments) -> Result<Flags> {
    let help = args.contains(["-h", "--help"]);
    let no_probe = args.contains("--no-probe");
    let decode_failure = args.opt_value_from_str("--decode-failure")?;
    let config_dir = args.opt_value_from_os_str("--config-dir", |s: &OsStr| {
        Ok::<PathBuf, String>(PathBuf::from(s))
    })?;

    let mut paths = Vec::new();
    for arg in args.finish() {
        if arg.to_string_lossy().starts_with("--") {
            return Err(Error::Usage(format!(
                "unknown option: {}",
                arg.to_string_lossy()
            )));
        }
        paths.push(PathBuf::from(arg));
    }

    if paths.is_empty() && !help {
        return Err(Error::Usage("no input files".into()));
    }

    Ok(Flags {
        config_dir,
        decode_failure,
        no_probe,
        help,
        paths,
    })
}
