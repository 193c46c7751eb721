// src/config.rs

use std::env;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_COOKIE_NAME: &str = "session_token";
const DEFAULT_TTL_MINUTES: i64 = 30;
const DEFAULT_REMEMBER_DAYS: i64 = 10;
const MAX_TTL_MINUTES: i64 = 24 * 60;
const MAX_REMEMBER_DAYS: i64 = 365;
const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub cookie_name: String,
    pub ttl_minutes: i64,
    pub remember_days: i64,
    pub secure_cookie: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Every required key is
    /// checked here, so a `Config` value is always complete.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DatabaseConfig {
            host: required(&lookup, "DB_HOST")?,
            name: required(&lookup, "DB_NAME")?,
            user: required(&lookup, "DB_USER")?,
            password: required(&lookup, "DB_PASSWORD")?,
            port: parse("DB_PORT", required(&lookup, "DB_PORT")?)?,
            max_connections: optional(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
        };
        if database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                reason: "must be at least 1".into(),
            });
        }

        let secret = required(&lookup, "SESSION_SECRET")?;
        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "SESSION_SECRET",
                reason: format!("must be at least {} bytes", MIN_SECRET_LEN),
            });
        }

        let session = SessionConfig {
            secret,
            cookie_name: lookup("SESSION_COOKIE_NAME")
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string()),
            ttl_minutes: bounded(
                &lookup,
                "SESSION_TTL_MINUTES",
                DEFAULT_TTL_MINUTES,
                MAX_TTL_MINUTES,
            )?,
            remember_days: bounded(
                &lookup,
                "SESSION_REMEMBER_DAYS",
                DEFAULT_REMEMBER_DAYS,
                MAX_REMEMBER_DAYS,
            )?,
            secure_cookie: optional(&lookup, "COOKIE_SECURE", false)?,
        };

        Ok(Config {
            server_address: lookup("SERVER_ADDRESS")
                .filter(|addr| !addr.is_empty())
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            database,
            session,
        })
    }
}

// An empty value counts as missing.
fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn parse<T>(key: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

fn optional<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => parse(key, raw),
        _ => Ok(default),
    }
}

// Session lifetimes: 1..=max, so token expiry never overflows the clock.
fn bounded<F>(lookup: &F, key: &'static str, default: i64, max: i64) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = optional(lookup, key, default)?;
    if !(1..=max).contains(&value) {
        return Err(ConfigError::Invalid {
            key,
            reason: format!("must be between 1 and {}", max),
        });
    }
    Ok(value)
}
