use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct Config {
    // Seeded teacher account
    pub admin_id: u64,
    pub admin_name: String,
    pub admin_password: String,

    /// Students below this percentage get a warning on their dashboard
    pub low_attendance_threshold: f64,

    // Logging
    pub log_dir: String,
    pub log_file: String,
    pub log_level: tracing::Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for
    /// missing keys. A key that is present but does not parse is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            admin_id: parse_or(&lookup, "ADMIN_ID", 999)?,
            admin_name: lookup("ADMIN_NAME").unwrap_or_else(|| "Admin".to_string()),
            admin_password: lookup("ADMIN_PASSWORD").unwrap_or_else(|| "admin123".to_string()),

            low_attendance_threshold: parse_or(&lookup, "LOW_ATTENDANCE_THRESHOLD", 75.0)?,

            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
            log_file: lookup("LOG_FILE").unwrap_or_else(|| "attendance.log".to_string()),
            log_level: parse_or(&lookup, "LOG_LEVEL", tracing::Level::INFO)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
        None => Ok(default),
    }
}
