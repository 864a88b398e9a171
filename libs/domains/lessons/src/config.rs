use core_config::{ConfigError, FromEnv, env_parse_or, env_required};
use reqwest::Url;
use std::time::Duration;

/// Location of the files-and-lessons service.
#[derive(Clone, Debug)]
pub struct DownstreamConfig {
    pub origin: Url,
    /// Upper bound for a single round trip
    pub timeout: Duration,
}

impl DownstreamConfig {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn new(origin: Url) -> Self {
        Self {
            origin,
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Parse and check an origin string: absolute, http or https.
    pub fn parse_origin(raw: &str) -> Result<Url, ConfigError> {
        let parse_error = |details: String| ConfigError::ParseError {
            key: "FILES_AND_LESSONS_ORIGIN".to_string(),
            details,
        };

        let url = Url::parse(raw.trim()).map_err(|e| parse_error(e.to_string()))?;
        match url.scheme() {
            "http" | "https" if url.has_host() => Ok(url),
            "http" | "https" => Err(parse_error("origin has no host".to_string())),
            other => Err(parse_error(format!("unsupported scheme '{other}'"))),
        }
    }
}

impl FromEnv for DownstreamConfig {
    /// - FILES_AND_LESSONS_ORIGIN: required
    /// - FILES_AND_LESSONS_TIMEOUT_SECS: defaults to 10
    fn from_env() -> Result<Self, ConfigError> {
        let origin = Self::parse_origin(&env_required("FILES_AND_LESSONS_ORIGIN")?)?;
        let timeout_secs: u64 =
            env_parse_or("FILES_AND_LESSONS_TIMEOUT_SECS", Self::DEFAULT_TIMEOUT_SECS)?;

        if timeout_secs == 0 {
            return Err(ConfigError::ParseError {
                key: "FILES_AND_LESSONS_TIMEOUT_SECS".to_string(),
                details: "must be greater than zero".to_string(),
            });
        }

        Ok(Self::new(origin).with_timeout(Duration::from_secs(timeout_secs)))
    }
}
