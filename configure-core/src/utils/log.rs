use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

/// Builds a subscriber filtered by `level_regex`, an `EnvFilter` directive such as
/// `"configure_core=trace"`. A directive that does not parse falls back to `debug` and the
/// parse error is handed back.
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber + Send + Sync, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::builder().parse("debug").unwrap()
        });
    (get_subscriber(filter), parse_err)
}

fn get_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
}

/// Installs the subscriber for `config`'s log level as the global default.
///
/// # Errors
///
/// Fails if a global subscriber was already set.
pub fn setup_logging(
    config: &impl crate::Config,
) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let (subscriber, parse_err) = parse_log_level(config.log_level());
    tracing::subscriber::set_global_default(subscriber)?;
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log level {:?}, using debug: {}", config.log_level(), err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_directive_parses() {
        let (_, err) = parse_log_level("configure_core=trace,warn");
        assert!(err.is_none());
    }

    #[test]
    fn invalid_directive_falls_back() {
        let (_, err) = parse_log_level("configure_core=loud");
        assert!(err.is_some());
    }

    #[test]
    fn subscriber_collects_negotiation_events() {
        let (subscriber, _) = parse_log_level("trace");
        tracing::subscriber::with_default(subscriber, || {
            let mut queue = crate::ConfigurationQueue::new(1);
            queue.enqueue(crate::Configuration::for_empty());
        });
    }
}
