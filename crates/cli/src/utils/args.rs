use std::ffi::OsString;

/// Single-dash spelling of the log flag, kept for muscle memory.
const SHORT_LOG_FLAG: &str = "-log";

/// Flag whose values run to the end of the command line.
const EDIT_FLAG: &str = "-e";

/// Rewrite `-log` to `--log` so clap does not read it as `-l -o -g`.
///
/// Only leading flags are rewritten. Once a name or `-e` shows up, the
/// remaining arguments are topic tokens and pass through untouched.
pub fn normalize_args<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut in_flags = true;

    for arg in args {
        if in_flags {
            if arg == SHORT_LOG_FLAG {
                normalized.push(OsString::from("--log"));
                continue;
            }
            let is_flag = arg.to_str().is_some_and(|a| a.starts_with('-'));
            if !is_flag || arg == EDIT_FLAG || arg == "--" {
                in_flags = false;
            }
        }
        normalized.push(arg);
    }

    normalized
}
