use std::env;

/// Verbosity threshold for console output, parsed from `RUST_LOG`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

/// True when output at `event_level` passes the `RUST_LOG` threshold.
/// Used to gate the verbose sections of headless output.
pub fn should_log_with_env(event_level: LogLevel) -> bool {
    let threshold = get_rust_log_level();
    should_log(event_level, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_levels_parse() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("WARN"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("warning"), LogLevel::Warn);
    }

    #[test]
    fn module_scoped_directives_parse() {
        assert_eq!(parse_rust_log_level("cardioscope=trace"), LogLevel::Trace);
        assert_eq!(
            parse_rust_log_level("error,reqwest=debug"),
            LogLevel::Error
        );
    }

    #[test]
    fn unknown_levels_default_to_info() {
        assert_eq!(parse_rust_log_level("verbose"), LogLevel::Info);
        assert_eq!(parse_rust_log_level(""), LogLevel::Info);
    }

    #[test]
    fn threshold_comparison_orders_levels() {
        assert!(should_log(LogLevel::Error, LogLevel::Info));
        assert!(!should_log(LogLevel::Debug, LogLevel::Info));
        assert!(should_log(LogLevel::Info, LogLevel::Info));
    }
}
