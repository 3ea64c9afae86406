use std::{net::SocketAddr, str::FromStr, time::Duration};

use axum::http::HeaderValue;
use chrono_tz::Tz;
use finboard_connect::{PlaidConfig, PlaidEnvironment};
use finboard_core::constants::DEFAULT_PROVIDER_TIMEOUT_MS;
use finboard_notify::SmtpConfig;
use thiserror::Error;

const DEFAULT_DB_PATH: &str = "./db/finboard.db";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 60_000;
const DEFAULT_EMAIL_PORT: u16 = 587;
const DEFAULT_CLIENT_NAME: &str = "Finance Dashboard";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Bound on each aggregation provider call made during a refresh
    pub provider_timeout: Duration,
    /// Timezone whose calendar days bucket the balance history
    pub history_timezone: Tz,
    pub log_format: LogFormat,
    pub plaid: PlaidConfig,
    pub smtp: SmtpConfig,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let required = |name: &'static str| optional(name).ok_or(ConfigError::Missing(name));

        let listen_addr = parse_or(
            "FINBOARD_LISTEN_ADDR",
            optional("FINBOARD_LISTEN_ADDR"),
            SocketAddr::from(([0, 0, 0, 0], 8080)),
        )?;
        let db_path = optional("FINBOARD_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.into());

        let cors_allow: Vec<String> = optional("FINBOARD_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for origin in cors_allow.iter().filter(|o| o.as_str() != "*") {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                name: "FINBOARD_CORS_ALLOW_ORIGINS",
                reason: format!("{}: {}", origin, e),
            })?;
        }

        let request_timeout_ms = parse_or(
            "FINBOARD_REQUEST_TIMEOUT_MS",
            optional("FINBOARD_REQUEST_TIMEOUT_MS"),
            DEFAULT_REQUEST_TIMEOUT_MS,
        )?;
        let provider_timeout_ms = parse_or(
            "FINBOARD_PROVIDER_TIMEOUT_MS",
            optional("FINBOARD_PROVIDER_TIMEOUT_MS"),
            DEFAULT_PROVIDER_TIMEOUT_MS,
        )?;
        let history_timezone = parse_or(
            "FINBOARD_HISTORY_TIMEZONE",
            optional("FINBOARD_HISTORY_TIMEZONE"),
            Tz::UTC,
        )?;
        let log_format = match optional("FINBOARD_LOG_FORMAT") {
            Some(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(value) if value.eq_ignore_ascii_case("text") => LogFormat::Text,
            Some(value) => {
                return Err(ConfigError::Invalid {
                    name: "FINBOARD_LOG_FORMAT",
                    reason: format!("expected 'text' or 'json', got '{}'", value),
                })
            }
            None => LogFormat::Text,
        };

        let plaid = PlaidConfig {
            client_id: required("PLAID_CLIENT_ID")?,
            secret: required("PLAID_SECRET")?,
            environment: parse_or(
                "PLAID_ENV",
                optional("PLAID_ENV"),
                PlaidEnvironment::default(),
            )?,
            client_name: optional("PLAID_CLIENT_NAME")
                .unwrap_or_else(|| DEFAULT_CLIENT_NAME.into()),
        };

        let smtp = SmtpConfig {
            host: required("EMAIL_HOST")?,
            port: parse_or("EMAIL_PORT", optional("EMAIL_PORT"), DEFAULT_EMAIL_PORT)?,
            username: required("EMAIL_USER")?,
            password: required("EMAIL_PASSWORD")?,
            from: required("EMAIL_FROM")?,
            to: required("EMAIL_TO")?,
        };

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(request_timeout_ms),
            provider_timeout: Duration::from_millis(provider_timeout_ms),
            history_timezone,
            log_format,
            plaid,
            smtp,
        })
    }
}

fn parse_or<T>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
