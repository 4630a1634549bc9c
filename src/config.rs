use std::str::FromStr;

use crate::errors::AppError;

pub const DEFAULT_TOTAL_ROUNDS: i32 = 18;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub admin_user: String,
    pub admin_pass: String,
    pub total_rounds: i32,
    pub db_max_connections: u32,
    pub public_dir: String,
    pub allowed_origins: Vec<String>,
    pub rate_limit_per_minute: u32,
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, AppError> {
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|_| AppError::EnvError(format!("{} has an invalid value: '{}'", key, raw))),
        _ => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so callers other than the
    /// process environment can supply values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::EnvError("DATABASE_URL must be set".into()))?;

        let total_rounds = parse_or(&lookup, "TOTAL_ROUNDS", DEFAULT_TOTAL_ROUNDS)?;
        if total_rounds < 1 {
            return Err(AppError::EnvError(format!(
                "TOTAL_ROUNDS must be at least 1, got {}",
                total_rounds
            )));
        }

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            database_url,
            port: parse_or(&lookup, "PORT", 3000)?,
            admin_user: lookup("ADMIN_USER").unwrap_or_else(|| "admin".to_string()),
            admin_pass: lookup("ADMIN_PASS").unwrap_or_else(|| "changeme".to_string()),
            total_rounds,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            public_dir: lookup("PUBLIC_DIR").unwrap_or_else(|| "public".to_string()),
            allowed_origins,
            rate_limit_per_minute: parse_or(&lookup, "RATE_LIMIT_PER_MINUTE", 1000)?,
        })
    }
}
