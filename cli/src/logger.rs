use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level picked from `-v` occurrences, if any were given.
fn verbosity_level(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::INFO),
        2 => Some(LevelFilter::DEBUG),
        _ => Some(LevelFilter::TRACE),
    }
}

/// Filter directive in order of precedence: `RUST_LOG`, `-v` flags, then `logging.level`.
fn filter_directive(rust_log: Option<String>, verbose: u8, configured: &str) -> String {
    rust_log
        .or_else(|| verbosity_level(verbose).map(|level| level.to_string()))
        .unwrap_or_else(|| configured.to_string())
}

/// Installs a stderr subscriber so logs never mix with command output.
pub fn init_logger(verbose: u8, configured: &str) {
    let directive = filter_directive(std::env::var(EnvFilter::DEFAULT_ENV).ok(), verbose, configured);
    let env_filter = EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!(
            "invalid log filter '{}', falling back to level '{}' - {}",
            directive,
            LevelFilter::WARN,
            err,
        );
        EnvFilter::new(LevelFilter::WARN.to_string())
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins() {
        assert_eq!(
            filter_directive(Some("routetree_core=trace".into()), 2, "warn"),
            "routetree_core=trace"
        );
    }

    #[test]
    fn verbosity_beats_config() {
        assert_eq!(filter_directive(None, 1, "error"), "info");
        assert_eq!(filter_directive(None, 5, "error"), "trace");
        assert_eq!(filter_directive(None, 0, "error"), "error");
    }
}
