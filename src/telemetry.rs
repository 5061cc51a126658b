//! Tracing and metrics setup.

use metrics::{describe_counter, describe_histogram};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const ENV_DEV_LOG: &str = "SCORING_DEV_LOG";
pub const ENV_APP_ENV: &str = "APP_ENV";

/// True when dev logging was requested and the environment is a dev one
/// (debug build, or `APP_ENV` set to local/development/dev).
pub fn dev_logging_requested() -> bool {
    let dev_flag = std::env::var(ENV_DEV_LOG).ok().is_some_and(|v| v == "1");

    let is_dev_env = cfg!(debug_assertions)
        || matches!(
            std::env::var(ENV_APP_ENV)
                .unwrap_or_default()
                .to_ascii_lowercase()
                .as_str(),
            "local" | "development" | "dev"
        );

    dev_flag && is_dev_env
}

/// Install a compact fmt subscriber when dev logging is requested.
/// Safe to call more than once; returns whether a subscriber is active from this call.
pub fn init_tracing() -> bool {
    static INIT: OnceCell<bool> = OnceCell::new();
    *INIT.get_or_init(|| {
        if !dev_logging_requested() {
            return false;
        }
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("hallunot=info,warn"));
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .try_init()
            .is_ok()
    })
}

/// Register metric descriptions once per process.
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "scoring_versions_scored_total",
            "Library versions scored for confidence."
        );
        describe_counter!("scoring_models_scored_total", "Model capability scores computed.");
        describe_counter!("scoring_reports_total", "Score reports assembled.");
        describe_histogram!(
            "scoring_report_duration_ms",
            "Time to assemble one score report in milliseconds."
        );
    });
}
