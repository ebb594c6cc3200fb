//! Process-wide logging setup.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogFormat};

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Installs the global tracing subscriber.
///
/// Runs at most once per process; later calls return the first outcome
/// without touching the subscriber. Returns `false` if another subscriber
/// was already set by someone else.
pub fn init(config: &Config) -> bool {
    *INSTALLED.get_or_init(|| install(config))
}

fn install(config: &Config) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match config.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        let config = Config::default();
        let first = init(&config);
        let json = Config {
            log_format: LogFormat::Json,
            ..Config::default()
        };
        assert_eq!(init(&json), first);
        assert_eq!(init(&config), first);
    }
}
