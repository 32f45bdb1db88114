use std::fmt;

use crate::ua::{UaPolicy, Version};

/// Runtime configuration, read once at startup and shared read-only with
/// every worker through `web::Data<AppConfig>`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub db_max_connections: u32,
    pub ua_policy: UaPolicy,
    pub max_feedback_length: usize,
    pub supported_locales: Vec<String>,
    pub default_locale: String,
    /// Host name of the mobile site. Without it every request is served the
    /// desktop pages and mobile forwarding is off.
    pub mobile_host: Option<String>,
}

#[derive(Debug)]
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

pub const DEFAULT_MAX_FEEDBACK_LENGTH: usize = 140;

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: String::new(),
            bind_addr: "127.0.0.1:8080".to_string(),
            db_max_connections: 8,
            ua_policy: UaPolicy {
                enforce: true,
                latest_firefox: Version::parse("4.0"),
                latest_mobile: Version::parse("4.0"),
            },
            max_feedback_length: DEFAULT_MAX_FEEDBACK_LENGTH,
            supported_locales: vec!["en-US".to_string()],
            default_locale: "en-US".to_string(),
            mobile_host: None,
        }
    }
}

impl AppConfig {
    /// Build the configuration from the process environment. Call
    /// `dotenvy::dotenv()` first to pick up a local `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let db_max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", value: v })?,
            None => defaults.db_max_connections,
        };

        let enforce = match get("ENFORCE_USER_AGENT") {
            Some(v) => parse_bool(&v).ok_or(ConfigError::Invalid { key: "ENFORCE_USER_AGENT", value: v })?,
            None => defaults.ua_policy.enforce,
        };

        let max_feedback_length = match get("MAX_FEEDBACK_LENGTH") {
            Some(v) => v
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid { key: "MAX_FEEDBACK_LENGTH", value: v })?,
            None => defaults.max_feedback_length,
        };

        let latest_firefox = get("LATEST_RELEASE_FIREFOX")
            .map(|v| Version::parse(&v))
            .unwrap_or(defaults.ua_policy.latest_firefox);
        let latest_mobile = get("LATEST_RELEASE_MOBILE")
            .map(|v| Version::parse(&v))
            .unwrap_or(defaults.ua_policy.latest_mobile);

        let supported_locales = match get("SUPPORTED_LOCALES") {
            Some(v) => {
                let locales: Vec<String> = v
                    .split(',')
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
                if locales.is_empty() {
                    return Err(ConfigError::Invalid { key: "SUPPORTED_LOCALES", value: v });
                }
                locales
            }
            None => defaults.supported_locales,
        };

        let default_locale = match get("DEFAULT_LOCALE") {
            Some(v) if supported_locales.contains(&v) => v,
            Some(v) => return Err(ConfigError::Invalid { key: "DEFAULT_LOCALE", value: v }),
            None => supported_locales[0].clone(),
        };

        Ok(AppConfig {
            database_url,
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            db_max_connections,
            ua_policy: UaPolicy {
                enforce,
                latest_firefox,
                latest_mobile,
            },
            max_feedback_length,
            supported_locales,
            default_locale,
            mobile_host: get("MOBILE_HOST").map(|h| h.to_ascii_lowercase()),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
