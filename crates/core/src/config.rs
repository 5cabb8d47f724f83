//! Process configuration.
//!
//! Loaded once from the environment at startup and injected into each
//! component at construction; nothing reads ambient process state after init.

/// Quantity at or below which a committed change triggers a low-stock alert.
pub const DEFAULT_ALERT_THRESHOLD: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Credentials the administrative reset endpoint authenticates against.
    pub reset_username: String,
    pub reset_password: String,

    /// Path to the JSON seed file the reset operation reloads from.
    pub seed_path: String,

    /// Low-stock alert threshold (inclusive).
    pub alert_threshold: i64,

    /// Identities stamped on outbound low-stock alerts.
    pub alert_sender: String,
    pub alert_receiver: String,

    /// Socket address the HTTP server binds to.
    pub bind_addr: String,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to dev defaults.
    pub fn from_env() -> Self {
        Self {
            reset_username: env_or("LOGIN_USERNAME", "admin"),
            reset_password: env_or("LOGIN_PASSWORD", "dev-password"),
            seed_path: env_or("RESET_SEED_PATH", "reset_db_entries.json"),
            alert_threshold: parse_threshold(
                "THRESHOLD_FOR_ALERTS",
                std::env::var("THRESHOLD_FOR_ALERTS").ok(),
            ),
            alert_sender: env_or("ALERT_SENDER_EMAIL", "alerts@localhost"),
            alert_receiver: env_or("ALERT_RECEIVER_EMAIL", "ops@localhost"),
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:8080"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        tracing::warn!(key, default, "environment variable not set; using dev default");
        default.to_string()
    })
}

fn parse_threshold(key: &str, raw: Option<String>) -> i64 {
    match raw {
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!(
                key,
                value,
                default = DEFAULT_ALERT_THRESHOLD,
                "environment variable is not a valid integer; using default"
            );
            DEFAULT_ALERT_THRESHOLD
        }),
        None => {
            tracing::warn!(
                key,
                default = DEFAULT_ALERT_THRESHOLD,
                "environment variable not set; using dev default"
            );
            DEFAULT_ALERT_THRESHOLD
        }
    }
}
