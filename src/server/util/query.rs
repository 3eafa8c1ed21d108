use std::str::FromStr;

use url::form_urlencoded;

use crate::server::error::AppError;

/// Decoded query string that keeps repeated keys.
///
/// Listing endpoints take `order_by` once per column
/// (`?order_by=fao_area&order_by=-date`), which the `Query` extractor cannot
/// express.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn parse(query: Option<&str>) -> Self {
        let pairs = query
            .map(|query| {
                form_urlencoded::parse(query.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();

        Self { pairs }
    }

    /// Last value given for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every non-empty value given for `key`, in request order.
    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// Parses the value of `key`, falling back to `default` when absent.
    ///
    /// # Returns
    /// - `Ok(T)` - Parsed value or the default
    /// - `Err(AppError::Unprocessable)` - Value present but not a valid `T`
    pub fn parse_or<T: FromStr>(&self, key: &str, default: T) -> Result<T, AppError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value.trim().parse().map_err(|_| {
                AppError::Unprocessable(format!(
                    "Invalid value for query parameter {}: '{}'",
                    key, value
                ))
            }),
        }
    }

    /// Reads a boolean flag, falling back to `default` when absent.
    ///
    /// Accepts the same spellings as boolean environment variables.
    pub fn flag_or(&self, key: &str, default: bool) -> Result<bool, AppError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => parse_bool(value).ok_or_else(|| {
                AppError::Unprocessable(format!(
                    "Invalid value for query parameter {}: '{}'",
                    key, value
                ))
            }),
        }
    }

    /// Value of a required parameter.
    pub fn require(&self, key: &str) -> Result<&str, AppError> {
        self.get(key).ok_or_else(|| {
            AppError::Unprocessable(format!("Missing required query parameter: {}", key))
        })
    }
}

/// `1`/`true`/`yes`/`on` or `0`/`false`/`no`/`off`, case-insensitive.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Paging and ordering shared by the listing endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct ListParams {
    pub skip: u64,
    pub limit: u64,
    /// Column names, `-` prefixed for descending order.
    pub order_by: Vec<String>,
}

impl ListParams {
    pub fn from_query(query: &QueryParams, default_limit: u64) -> Result<Self, AppError> {
        Ok(Self {
            skip: query.parse_or("skip", 0)?,
            limit: query.parse_or("limit", default_limit)?,
            order_by: query.get_all("order_by"),
        })
    }
}
