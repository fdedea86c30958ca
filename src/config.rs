use anyhow::{anyhow, Error};
use log::trace;
use serde::Deserialize;
use std::time::{Duration, Instant};

pub const DEFAULT_PATH: &str = "/api/v2/write";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);
pub const USER_AGENT_PREFIX: &str = "influx2lp-";
pub const UNKNOWN_HOST_USER_AGENT: &str = "influx2lp-unknown-host";

pub const HOST_ENV_VAR: &str = "influx_host";
pub const PATH_ENV_VAR: &str = "influx_path";
pub const ORG_ENV_VAR: &str = "influx_org";
pub const BUCKET_ENV_VAR: &str = "influx_bucket";
pub const TOKEN_ENV_VAR: &str = "influx_token";
pub const USER_AGENT_ENV_VAR: &str = "influx_user_agent";
pub const TIMEOUT_ENV_VAR: &str = "influx_timeout_seconds";

/// Routing and authentication settings for a write.
///
/// Built once with [`Config::new`], filled in by the caller, then handed to
/// each write. Writes never modify it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bucket: String,
    pub host: String,
    pub path: String,
    pub org: String,
    pub token: String,
    pub user_agent: String,
    #[serde(rename = "timeout_seconds", deserialize_with = "deserialize_seconds")]
    pub timeout: Duration,
}

impl Config {
    pub fn new() -> Self {
        Config {
            bucket: String::new(),
            host: String::new(),
            path: DEFAULT_PATH.to_string(),
            org: String::new(),
            token: String::new(),
            user_agent: default_user_agent(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_env() -> Result<Self, Error> {
        // Build a Config from the influx_* environment variables

        Config::from_env_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_env_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Defaults are kept for any variable that is not set

        let function_start = Instant::now();
        let mut config = Config::new();

        if let Some(host) = lookup(HOST_ENV_VAR) {
            config.host = host;
        }
        if let Some(path) = lookup(PATH_ENV_VAR) {
            config.path = path;
        }
        if let Some(org) = lookup(ORG_ENV_VAR) {
            config.org = org;
        }
        if let Some(bucket) = lookup(BUCKET_ENV_VAR) {
            config.bucket = bucket;
        }
        if let Some(token) = lookup(TOKEN_ENV_VAR) {
            config.token = token;
        }
        if let Some(user_agent) = lookup(USER_AGENT_ENV_VAR) {
            config.user_agent = user_agent;
        }
        if let Some(timeout) = lookup(TIMEOUT_ENV_VAR) {
            let seconds: u64 = timeout.trim().parse().map_err(|error| {
                anyhow!(
                    "{} must be a whole number of seconds, got {:?}: {}",
                    TIMEOUT_ENV_VAR,
                    timeout,
                    error
                )
            })?;
            config.timeout = Duration::from_secs(seconds);
        }

        trace!("from_env_lookup duration: {:?}", function_start.elapsed());
        Ok(config)
    }

    /// The write endpoint, built by plain concatenation.
    ///
    /// `org` and `bucket` are not URL-encoded, so reserved characters in either
    /// will produce a broken URI.
    pub fn write_uri(&self) -> String {
        format!(
            "{}{}?&org={}&bucket={}",
            self.host, self.path, self.org, self.bucket
        )
    }

    /// Builds an HTTP client that applies this config's timeout to every request.
    pub fn http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder().timeout(self.timeout).build()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

pub fn default_user_agent() -> String {
    // "influx2lp-<hostname>", or a fixed fallback when the hostname is unavailable

    match hostname::get().map(|name| name.into_string()) {
        Ok(Ok(host)) if !host.is_empty() => format!("{}{}", USER_AGENT_PREFIX, host),
        _ => UNKNOWN_HOST_USER_AGENT.to_string(),
    }
}

fn deserialize_seconds<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}

#[cfg(test)]
pub mod tests;
