//! Single-dash long flag compatibility.
//!
//! The tool has always accepted `-spf example.com`, `-plain` and `-verbose`.
//! `clap` treats `-spf` as a cluster of short flags, so those spellings are
//! rewritten to their `--` forms before parsing.

const LONG_FLAGS: &[&str] = &["spf", "plain", "verbose", "log-level", "log-format"];

/// Rewrites `-flag` and `-flag=value` to `--flag` / `--flag=value` for known long flags.
///
/// Everything after a bare `--` is passed through untouched, as are unknown
/// arguments (so a target file literally named `-plainish` still works after `--`).
pub fn normalize_flag_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            match arg.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') && is_long_flag(rest) => format!("-{arg}"),
                _ => arg,
            }
        })
        .collect()
}

fn is_long_flag(flag: &str) -> bool {
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}
