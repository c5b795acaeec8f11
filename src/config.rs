// src/config.rs
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

use crate::derivation::DEFAULT_PAGE_SIZE;

/// Longest accepted token lifetime: one year.
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
    pub page_size: usize,
    pub token_ttl_hours: i64,
    pub allow_registration: bool,
    pub cors_origin: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{key} must be set"),
            ConfigError::Invalid { key, value } => write!(f, "{key} has an invalid value: {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;
        let host = parse_or(&lookup, "HOST", IpAddr::V4(Ipv4Addr::LOCALHOST))?;
        let port = parse_or(&lookup, "PORT", 3000u16)?;
        let page_size = parse_or(&lookup, "PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let token_ttl_hours = parse_or(&lookup, "TOKEN_TTL_HOURS", 8i64)?;
        let allow_registration = parse_or(&lookup, "ALLOW_REGISTRATION", false)?;
        let cors_origin = lookup("CORS_ORIGIN").filter(|v| !v.trim().is_empty());

        if page_size == 0 {
            return Err(ConfigError::Invalid { key: "PAGE_SIZE", value: "0".into() });
        }
        if !(1..=MAX_TOKEN_TTL_HOURS).contains(&token_ttl_hours) {
            return Err(ConfigError::Invalid {
                key: "TOKEN_TTL_HOURS",
                value: token_ttl_hours.to_string(),
            });
        }

        Ok(Self {
            database_url,
            jwt_secret,
            host,
            port,
            page_size,
            token_ttl_hours,
            allow_registration,
            cors_origin,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        _ => Ok(default),
    }
}
