use std::str::FromStr;

use crate::error::config::ConfigError;

/// Deployment mode, selected by `APP_ENVIRONMENT`.
///
/// Controls error detail verbosity and whether session cookies are marked
/// `Secure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!(
                "unknown environment {other:?}, expected \"development\" or \"production\""
            )),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub environment: Environment,
    pub database_url: String,
    pub session_secret: String,
    pub company_name: String,
    pub public_dir: String,
    pub auth_enabled: bool,
    pub session_ttl_hours: i64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` and `SESSION_SECRET` are required; there is no fallback
    /// secret, startup fails instead. Everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_or("PORT", 3000)?,
            environment: parse_or("APP_ENVIRONMENT", Environment::Development)?,
            database_url: required("DATABASE_URL")?,
            session_secret: validate_secret(required("SESSION_SECRET")?)?,
            company_name: std::env::var("COMPANY_NAME")
                .unwrap_or_else(|_| "🍕 Pizza Shack".to_string()),
            public_dir: std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
            auth_enabled: parse_or("AUTH_ENABLED", true)?,
            session_ttl_hours: parse_or("SESSION_TTL_HOURS", 24)?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn parse_or<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Session cookies are signed; the key derivation requires at least 64 bytes
/// of secret material.
fn validate_secret(secret: String) -> Result<String, ConfigError> {
    if secret.len() < 64 {
        return Err(ConfigError::InvalidEnvValue {
            var: "SESSION_SECRET".to_string(),
            reason: format!("must be at least 64 bytes, got {}", secret.len()),
        });
    }

    Ok(secret)
}
