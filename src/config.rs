use chrono::NaiveDate;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_OUTPUT_FILE: &str = "linkedin_it_leads_filtered.csv";

/// Run settings. Credentials have no default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Authenticates search API requests.
    pub api_key: String,
    /// Selects the custom search engine scope.
    pub cse_id: String,
    pub date_threshold: NaiveDate,
    pub max_results_per_query: usize,
    pub max_queries: Option<usize>,
    pub output_file: String,
    pub page_delay: Duration,
    pub query_delay: Duration,
    pub lookup_timeout: Duration,
}

impl Config {
    /// Reads the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            var(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let date_threshold = match var("DATE_THRESHOLD") {
            Some(v) => NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").map_err(|_| {
                ConfigError::Invalid {
                    key: "DATE_THRESHOLD",
                    value: v,
                }
            })?,
            None => default_threshold(),
        };

        Ok(Config {
            api_key: required("GOOGLE_API_KEY")?,
            cse_id: required("GOOGLE_CSE_ID")?,
            date_threshold,
            max_results_per_query: parse_or(&var, "MAX_RESULTS_PER_QUERY", 10)?,
            max_queries: parse_opt(&var, "MAX_QUERIES")?,
            output_file: var("OUTPUT_FILE").unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string()),
            page_delay: Duration::from_millis(parse_or(&var, "PAGE_DELAY_MS", 1000)?),
            query_delay: Duration::from_millis(parse_or(&var, "QUERY_DELAY_MS", 2000)?),
            lookup_timeout: Duration::from_secs(parse_or(&var, "LOOKUP_TIMEOUT_SECS", 10)?),
        })
    }
}

fn default_threshold() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap_or_default()
}

fn parse_opt<F, T>(var: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match var(key) {
        Some(v) => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value: v }),
        None => Ok(None),
    }
}

fn parse_or<F, T>(var: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    Ok(parse_opt(var, key)?.unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            Config::from_vars(vars(&[("GOOGLE_API_KEY", "key"), ("GOOGLE_CSE_ID", "cx")])).unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.cse_id, "cx");
        assert_eq!(config.date_threshold, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        assert_eq!(config.max_results_per_query, 10);
        assert_eq!(config.max_queries, None);
        assert_eq!(config.output_file, DEFAULT_OUTPUT_FILE);
        assert_eq!(config.page_delay, Duration::from_secs(1));
        assert_eq!(config.query_delay, Duration::from_secs(2));
        assert_eq!(config.lookup_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[
            ("GOOGLE_API_KEY", "key"),
            ("GOOGLE_CSE_ID", "cx"),
            ("DATE_THRESHOLD", "2025-10-15"),
            ("MAX_RESULTS_PER_QUERY", "25"),
            ("MAX_QUERIES", "3"),
            ("OUTPUT_FILE", "out.csv"),
            ("PAGE_DELAY_MS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.date_threshold, NaiveDate::from_ymd_opt(2025, 10, 15).unwrap());
        assert_eq!(config.max_results_per_query, 25);
        assert_eq!(config.max_queries, Some(3));
        assert_eq!(config.output_file, "out.csv");
        assert_eq!(config.page_delay, Duration::ZERO);
    }

    #[test]
    fn test_missing_credentials() {
        let err = Config::from_vars(vars(&[("GOOGLE_CSE_ID", "cx")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("GOOGLE_API_KEY")));

        let err = Config::from_vars(vars(&[("GOOGLE_API_KEY", "key"), ("GOOGLE_CSE_ID", "  ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("GOOGLE_CSE_ID")));
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_vars(vars(&[
            ("GOOGLE_API_KEY", "key"),
            ("GOOGLE_CSE_ID", "cx"),
            ("DATE_THRESHOLD", "01/09/2025"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DATE_THRESHOLD", .. }));

        let err = Config::from_vars(vars(&[
            ("GOOGLE_API_KEY", "key"),
            ("GOOGLE_CSE_ID", "cx"),
            ("MAX_QUERIES", "lots"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "MAX_QUERIES", .. }));
    }
}
