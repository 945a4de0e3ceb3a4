// config.rs
use std::path::PathBuf;

use tracing_subscriber::filter::LevelFilter;

use crate::service::seed::AdminSeed;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory of JSON files; `None` keeps everything in memory.
    pub storage_dir: Option<PathBuf>,
    pub seed_defaults: bool,
    pub admin: Option<AdminSeed>,
    pub log_level: LevelFilter,
}

fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(value) => matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    pub fn init() -> Config {
        let storage_dir = non_empty_var("STORAGE_DIR").map(PathBuf::from);
        let seed_defaults = env_flag("SEED_DEFAULTS", true);

        // Bootstrap admin only when both credentials are present
        let admin = match (non_empty_var("ADMIN_EMAIL"), non_empty_var("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminSeed {
                name: non_empty_var("ADMIN_NAME").unwrap_or_else(|| "Administrator".to_string()),
                email,
                password,
            }),
            _ => None,
        };

        let log_level = non_empty_var("LOG_LEVEL")
            .and_then(|level| level.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::DEBUG);

        Config {
            storage_dir,
            seed_defaults,
            admin,
            log_level,
        }
    }
}
