use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use bob2anki::types::DEFAULT_LAST_TIME;

/// Long flags that older invocations spell with a single dash.
const LEGACY_LONG_FLAGS: [&str; 3] = ["filePath", "lastTime", "lt"];

#[derive(Parser, Debug)]
#[command(
    name = "bob2anki",
    version,
    about = "Export review history spreadsheets to an Anki import file (output.txt)"
)]
pub struct CliArgs {
    /// Review-history spreadsheet to read
    #[arg(short = 'f', long = "filePath")]
    pub file_path: PathBuf,

    /// Only export rows strictly after this local time (YYYY-MM-DD HH:MM:SS)
    #[arg(long = "lastTime", visible_alias = "lt", default_value = DEFAULT_LAST_TIME)]
    pub last_time: String,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

/// Rewrite `-lt`, `-lastTime` and `-filePath` (with or without `=value`)
/// to their double-dash form. Everything after a bare `--` is left alone.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut end_of_flags = false;
    args.into_iter()
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || end_of_flags {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                end_of_flags = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split('=').next().unwrap_or(rest);
                    if LEGACY_LONG_FLAGS.contains(&name) {
                        OsString::from(format!("-{}", text))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}
