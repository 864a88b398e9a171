use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or};

/// Where statistics events go and how many may wait in memory.
#[derive(Clone, Debug)]
pub struct StatisticsConfig {
    /// NATS server URL; `None` means events are only logged.
    pub nats_url: Option<String>,
    pub subject: String,
    pub queue_capacity: usize,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            nats_url: None,
            subject: "statistics.events".to_string(),
            queue_capacity: 1024,
        }
    }
}

impl FromEnv for StatisticsConfig {
    /// - NATS_URL: optional
    /// - STATISTICS_SUBJECT: defaults to `statistics.events`
    /// - STATISTICS_QUEUE_CAPACITY: defaults to 1024, must be > 0
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let nats_url = std::env::var("NATS_URL")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        let subject = env_or_default("STATISTICS_SUBJECT", &defaults.subject);
        let queue_capacity = env_parse_or("STATISTICS_QUEUE_CAPACITY", defaults.queue_capacity)?;

        if queue_capacity == 0 {
            return Err(ConfigError::ParseError {
                key: "STATISTICS_QUEUE_CAPACITY".to_string(),
                details: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            nats_url,
            subject,
            queue_capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        temp_env::with_vars(
            [
                ("NATS_URL", None::<&str>),
                ("STATISTICS_SUBJECT", None),
                ("STATISTICS_QUEUE_CAPACITY", None),
            ],
            || {
                let config = StatisticsConfig::from_env().unwrap();
                assert!(config.nats_url.is_none());
                assert_eq!(config.subject, "statistics.events");
                assert_eq!(config.queue_capacity, 1024);
            },
        );
    }

    #[test]
    fn test_blank_nats_url_means_unset() {
        temp_env::with_var("NATS_URL", Some("  "), || {
            assert!(StatisticsConfig::from_env().unwrap().nats_url.is_none());
        });
    }

    #[test]
    fn test_zero_capacity_rejected() {
        temp_env::with_var("STATISTICS_QUEUE_CAPACITY", Some("0"), || {
            let err = StatisticsConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("STATISTICS_QUEUE_CAPACITY"));
        });
    }
}
