//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use time::Duration;

use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_CLUB_NAME: &str = "Riverside CC";
pub const DEFAULT_CELEBRATION_MS: i64 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory for the file store; `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
    /// Our club's name, used to pick the club roster over an opponent's.
    pub club_name: String,
    pub celebration: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_dir: None,
            club_name: DEFAULT_CLUB_NAME.to_string(),
            celebration: Duration::milliseconds(DEFAULT_CELEBRATION_MS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Unset or blank variables
    /// take their defaults; set-but-invalid ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let port = match var("SCOREBOOK_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!(
                    "SCOREBOOK_PORT must be a valid port number, got '{raw}'"
                ))
            })?,
            None => defaults.port,
        };

        let celebration = match var("SCOREBOOK_CELEBRATION_MS") {
            Some(raw) => match raw.parse::<i64>() {
                Ok(ms) if ms >= 0 => Duration::milliseconds(ms),
                _ => {
                    return Err(AppError::config(format!(
                        "SCOREBOOK_CELEBRATION_MS must be a non-negative integer, got '{raw}'"
                    )))
                }
            },
            None => defaults.celebration,
        };

        Ok(Self {
            host: var("SCOREBOOK_HOST").unwrap_or(defaults.host),
            port,
            data_dir: var("SCOREBOOK_DATA_DIR").map(PathBuf::from),
            club_name: var("SCOREBOOK_CLUB_NAME").unwrap_or(defaults.club_name),
            celebration,
        })
    }
}
