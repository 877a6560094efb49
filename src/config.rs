// src/config.rs
use std::{collections::HashMap, env, path::PathBuf, time::Duration};
use thiserror::Error;

pub const MIN_SESSION_SECRET_LEN: usize = 32;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    session_secret: String,
    session_ttl: Duration,
    session_cookie_secure: bool,
    redis_url: Option<String>,
    public_dir: PathBuf,
    rate_limit_enabled: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://quire.db".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".into()
}

fn default_session_ttl() -> u64 {
    60 * 60 * 24
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{name} must be a boolean, got '{other}'"
        ))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads from a map.
    pub fn from_map(values: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| values.get(key).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let session_secret =
            lookup("SESSION_SECRET").ok_or(ConfigError::Missing("SESSION_SECRET"))?;
        if session_secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::Invalid(format!(
                "SESSION_SECRET must be at least {MIN_SESSION_SECRET_LEN} bytes"
            )));
        }

        let session_ttl_secs = match lookup("SESSION_TTL_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "SESSION_TTL_SECONDS must be a positive integer, got '{raw}'"
                    ))
                })?,
            None => default_session_ttl(),
        };

        let session_cookie_secure = lookup("SESSION_COOKIE_SECURE")
            .map(|v| parse_bool("SESSION_COOKIE_SECURE", &v))
            .transpose()?
            .unwrap_or(false);

        let rate_limit_enabled = lookup("RATE_LIMIT_ENABLED")
            .map(|v| parse_bool("RATE_LIMIT_ENABLED", &v))
            .transpose()?
            .unwrap_or(true);

        let redis_url = lookup("REDIS_URL").filter(|url| !url.trim().is_empty());
        let public_dir = lookup("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_public_dir);

        Ok(Self {
            database_url,
            listen_addr,
            session_secret,
            session_ttl: Duration::from_secs(session_ttl_secs),
            session_cookie_secure,
            redis_url,
            public_dir,
            rate_limit_enabled,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn session_secret(&self) -> &str {
        &self.session_secret
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    pub fn session_cookie_secure(&self) -> bool {
        self.session_cookie_secure
    }

    /// Redis connection string; when absent sessions live in process memory.
    pub fn redis_url(&self) -> Option<&str> {
        self.redis_url.as_deref()
    }

    pub fn public_dir(&self) -> &PathBuf {
        &self.public_dir
    }

    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }
}
