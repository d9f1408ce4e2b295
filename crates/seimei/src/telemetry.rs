use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(
                    f,
                    "invalid log level/filter '{}': unable to build EnvFilter",
                    value
                )
            }
            TelemetryError::Subscriber(err) => write!(f, "telemetry error: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Crates whose events a bare level applies to; everything else stays at `warn`.
const OWN_TARGETS: [&str; 2] = ["seimei", "seimei_finder"];

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
/// Logs go to stderr so stdout carries only results.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => configured_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

fn configured_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(filter_directives(log_level)).map_err(|source| TelemetryError::EnvFilter {
        value: log_level.to_string(),
        source,
    })
}

/// A bare level such as `debug` is scoped to this tool's crates. Full
/// directive lists are passed through untouched.
fn filter_directives(log_level: &str) -> String {
    let level = log_level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }

    let mut directives = String::from("warn");
    for target in OWN_TARGETS {
        directives.push_str(&format!(",{target}={level}"));
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_is_scoped_to_own_crates() {
        assert_eq!(
            filter_directives("debug"),
            "warn,seimei=debug,seimei_finder=debug"
        );
        assert_eq!(
            filter_directives(" info "),
            "warn,seimei=info,seimei_finder=info"
        );
    }

    #[test]
    fn explicit_directives_pass_through() {
        assert_eq!(filter_directives("rayon=trace"), "rayon=trace");
        assert_eq!(filter_directives("info,seimei=trace"), "info,seimei=trace");
    }

    #[test]
    fn configured_filter_builds_for_levels_and_rejects_garbage() {
        assert!(configured_filter("info").is_ok());
        assert!(configured_filter("seimei=debug").is_ok());
        match configured_filter("seimei=loud") {
            Err(TelemetryError::EnvFilter { value, .. }) => assert_eq!(value, "seimei=loud"),
            other => panic!("expected filter error, got {other:?}"),
        }
    }
}
