// src/config.rs
// =============================================================================
// Process-wide configuration, built once at start-up and passed down.
//
// Values come from the environment (a .env file is loaded first if present):
//   GITHUB_TOKEN               optional API token
//   GITHUB_API_URL             default https://api.github.com
//   REPO_SCRAPER_TIMEOUT_SECS  default 30
//   REPO_SCRAPER_CONCURRENCY   default 4, at least 1
//
// Command-line flags can override the token and concurrency afterwards.
// =============================================================================

use std::env;
use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONCURRENCY: usize = 4;

#[derive(Debug)]
pub struct Config {
    /// Token sent as a bearer credential; None means anonymous requests
    pub github_token: Option<SecretString>,
    /// Base URL of the REST API, without trailing slash
    pub api_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// How many files to fetch at once
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Separated from from_env so tests don't have to touch the real environment
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let github_token = lookup("GITHUB_TOKEN")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .map(SecretString::from);

        let api_url = lookup("GITHUB_API_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match lookup("REPO_SCRAPER_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue("REPO_SCRAPER_TIMEOUT_SECS"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let concurrency = match lookup("REPO_SCRAPER_CONCURRENCY") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n >= 1)
                .ok_or(ConfigError::InvalidValue("REPO_SCRAPER_CONCURRENCY"))?,
            None => DEFAULT_CONCURRENCY,
        };

        Ok(Self {
            github_token,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
            concurrency,
        })
    }
}
