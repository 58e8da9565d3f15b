use log::LevelFilter;
use std::fmt::Debug;

/// Configure `env_logger`. `RUST_LOG` wins over `level` when it is set.
pub fn init_logger(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);

    let mut builder = env_logger::Builder::new();
    builder.filter_level(filter);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    // A second init (tests, embedding binaries) keeps the first logger
    let _ = builder.format_timestamp_millis().try_init();
}

/// Standard format for activity logs: component - message: details
pub fn log_activity(component: &str, message: &str, details: Option<&str>) {
    let details_str = details.unwrap_or("");
    log::info!("{} - {}: {}", component, message, details_str);
}

/// Standard format for error logs: component - ERROR: message
pub fn log_error(component: &str, context: &str, err: &anyhow::Error) {
    log::error!("{} - ERROR - {}: {:#}", component, context, err);
}

/// Log debug information
pub fn log_debug<T: Debug>(component: &str, context: &str, details: &T) {
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("[{}] {} - Details: {:?}", component, context, details);
    }
}
