//! Logger initialization.
//!
//! Diagnostics go to stderr so they never mix with the result table on stdout.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Installs the process-wide logger for whoispf diagnostics.
///
/// `RUST_LOG` is read first and `level` is applied on top, so `--log-level`
/// always wins for whoispf's own modules. hickory's resolver is capped at
/// warnings and its protocol layer at errors.
///
/// `Plain` prints an emoji, the module and a coloured level per line; `Json`
/// prints one object per line (`ts`, `level`, `target`, `msg`) for log shippers.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Trace which include: domains an SPF expansion visits
/// whoispf -spf example.com --log-level debug
///
/// # Machine-readable diagnostics, table still on stdout
/// whoispf 192.0.2.1 --log-format json 2> whoispf.log
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("hickory_resolver", LevelFilter::Warn);
    builder.filter_module("whoispf", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = serde_json::json!({
                    "ts": chrono::Utc::now().timestamp_millis(),
                    "level": record.level().as_str(),
                    "target": record.target(),
                    "msg": record.args().to_string(),
                });
                writeln!(buf, "{line}")
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let (emoji, level) = level_style(record.level());
                writeln!(
                    buf,
                    "{emoji} {} [{level}] {}",
                    record.target().cyan(),
                    record.args()
                )
            });
        }
    }

    builder.try_init()?;
    Ok(())
}

fn level_style(level: log::Level) -> (&'static str, ColoredString) {
    let name = level.as_str();
    match level {
        log::Level::Error => ("❌", name.red()),
        log::Level::Warn => ("⚠️", name.yellow()),
        log::Level::Info => ("✔️", name.green()),
        log::Level::Debug => ("🔍", name.blue()),
        log::Level::Trace => ("🔬", name.purple()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_initialization_is_an_error_not_a_panic() {
        // Only one logger per process: whichever call comes first may win,
        // but the second is guaranteed to be rejected.
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }

    #[test]
    fn test_level_style_keeps_level_name() {
        let (emoji, level) = level_style(log::Level::Warn);
        assert_eq!(emoji, "⚠️");
        assert!(level.to_string().contains("WARN"));
    }
}
