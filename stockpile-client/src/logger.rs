//! Logging Infrastructure
//!
//! The client only emits `tracing` events; hosting applications call
//! [`init_logger`] (or [`setup_environment`]) once to see them.

use tracing_subscriber::EnvFilter;

/// Initialize the logger
///
/// `RUST_LOG` wins over `default_level` when set.
pub fn init_logger(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init();
}

/// Load `.env` and initialize the logger at `info`
pub fn setup_environment() {
    // A missing .env file is normal outside development
    let _ = dotenv::dotenv();
    init_logger("info");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_is_idempotent() {
        init_logger("debug");
        init_logger("info");
        tracing::info!("logger initialized twice");
    }
}
