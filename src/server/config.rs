use axum::http::HeaderValue;

use crate::server::{
    error::{config::ConfigError, AppError},
    util::query::parse_bool,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_PROJECT_NAME: &str = "Oceans 1876";
const DEFAULT_API_V1_STR: &str = "/api/v1";
const DEFAULT_SERVER_HOST: &str = "http://localhost:8000";
/// Eight days.
const DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 60 * 24 * 8;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub project_name: String,
    /// Prefix every API route is nested under, e.g. `/api/v1`.
    pub api_v1_str: String,
    /// Public origin used to build pagination links.
    pub server_host: String,
    pub backend_cors_origins: Vec<String>,

    pub secret_key: String,
    pub access_token_expire_minutes: i64,
    /// Mounts the login and user management routes.
    pub enable_auth: bool,
    pub users_open_registration: bool,
    pub first_superuser: Option<String>,
    pub first_superuser_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `DATABASE_URL` wins over the `POSTGRES_*` variables. Empty values are
    /// treated as unset.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Complete configuration
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is malformed
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required =
            |key: &str| var(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let database_url = match var("DATABASE_URL") {
            Some(url) => url,
            None => format!(
                "postgres://{}:{}@{}/{}",
                required("POSTGRES_USER")?,
                required("POSTGRES_PASSWORD")?,
                required("POSTGRES_SERVER")?,
                required("POSTGRES_DB")?,
            ),
        };

        let api_v1_str = var("API_V1_STR").unwrap_or_else(|| DEFAULT_API_V1_STR.to_string());
        if !api_v1_str.starts_with('/') || api_v1_str.len() < 2 {
            return Err(ConfigError::InvalidEnvVar {
                name: "API_V1_STR".to_string(),
                reason: "must be a path starting with '/'".to_string(),
            }
            .into());
        }

        let access_token_expire_minutes = match var("ACCESS_TOKEN_EXPIRE_MINUTES") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "ACCESS_TOKEN_EXPIRE_MINUTES".to_string(),
                reason: format!("'{}' is not a whole number of minutes", value),
            })?,
            None => DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
        };

        Ok(Self {
            database_url,
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            project_name: var("PROJECT_NAME").unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
            api_v1_str: api_v1_str.trim_end_matches('/').to_string(),
            server_host: var("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            backend_cors_origins: var("BACKEND_CORS_ORIGINS")
                .map(|value| parse_origins(&value))
                .transpose()?
                .unwrap_or_default(),
            secret_key: required("SECRET_KEY")?,
            access_token_expire_minutes,
            enable_auth: parse_flag("ENABLE_AUTH", var("ENABLE_AUTH"))?,
            users_open_registration: parse_flag(
                "USERS_OPEN_REGISTRATION",
                var("USERS_OPEN_REGISTRATION"),
            )?,
            first_superuser: var("FIRST_SUPERUSER"),
            first_superuser_password: var("FIRST_SUPERUSER_PASSWORD"),
        })
    }
}

/// Parses CORS origins given either as a JSON list or comma separated.
fn parse_origins(value: &str) -> Result<Vec<String>, ConfigError> {
    let value = value.trim();
    let origins: Vec<String> = if value.starts_with('[') {
        serde_json::from_str(value).map_err(|e| ConfigError::InvalidEnvVar {
            name: "BACKEND_CORS_ORIGINS".to_string(),
            reason: e.to_string(),
        })?
    } else {
        value.split(',').map(str::to_string).collect()
    };

    origins
        .into_iter()
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            if origin == "*" || HeaderValue::from_str(&origin).is_err() {
                return Err(ConfigError::InvalidEnvVar {
                    name: "BACKEND_CORS_ORIGINS".to_string(),
                    reason: format!("'{}' is not an explicit origin", origin),
                });
            }
            Ok(origin)
        })
        .collect()
}

fn parse_flag(name: &str, value: Option<String>) -> Result<bool, ConfigError> {
    match value {
        None => Ok(false),
        Some(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("'{}' is not a boolean", value.trim()),
        }),
    }
}

#[cfg(test)]
impl Config {
    /// In-memory configuration with auth routes mounted.
    pub fn test() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            api_v1_str: DEFAULT_API_V1_STR.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            backend_cors_origins: Vec::new(),
            secret_key: "test-secret".to_string(),
            access_token_expire_minutes: 30,
            enable_auth: true,
            users_open_registration: false,
            first_superuser: Some("admin@example.com".to_string()),
            first_superuser_password: Some("changethis".to_string()),
        }
    }
}
