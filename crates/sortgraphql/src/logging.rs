use crate::Cli;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// The `LOG_LEVEL` values the CLI understands, shown in `--help`.
pub(crate) const LOG_LEVEL_HELP: &str =
    "Set the LOG_LEVEL environment variable to one of error, warn, info, \
    debug or trace to pick how much is logged (default: info). `verbose` is \
    accepted as an alias of debug. `--verbose` always logs at debug.";

/// Resolves the logging level from the `--verbose` flag and the raw
/// `LOG_LEVEL` value. An unrecognized value falls back to the default and
/// is returned alongside it so it can be reported once logging is up.
pub(crate) fn resolve_log_level(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }

    let Some(env_val) = env_val.map(str::trim) else {
        return (DEFAULT_LOG_LEVEL, None);
    };

    if env_val.eq_ignore_ascii_case("verbose") {
        return (tracing::Level::DEBUG, None);
    }
    match env_val.parse::<tracing::Level>() {
        Ok(level) => (level, None),
        Err(_) => (
            DEFAULT_LOG_LEVEL,
            Some(format!("Invalid `LOG_LEVEL` environment variable value: `{env_val}`")),
        ),
    }
}

pub(crate) fn setup_logger(cli: &Cli) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) = resolve_log_level(cli.verbose, env_val.as_deref());

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}
