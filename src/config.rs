//! Where the services live, read from the environment.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::constants::{defaults, envvars};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: '{value}'")]
    InvalidUrl {
        var: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{var} must be a positive number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },
    #[error("unknown service '{0}', expected one of core-data, core-metadata, support-notifications, support-scheduler")]
    UnknownService(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Service {
    CoreData,
    CoreMetadata,
    SupportNotifications,
    SupportScheduler,
}

impl Service {
    pub fn as_str(self) -> &'static str {
        match self {
            Service::CoreData => "core-data",
            Service::CoreMetadata => "core-metadata",
            Service::SupportNotifications => "support-notifications",
            Service::SupportScheduler => "support-scheduler",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core-data" => Ok(Service::CoreData),
            "core-metadata" => Ok(Service::CoreMetadata),
            "support-notifications" => Ok(Service::SupportNotifications),
            "support-scheduler" => Ok(Service::SupportScheduler),
            other => Err(ConfigError::UnknownService(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub core_data_url: String,
    pub core_metadata_url: String,
    pub support_notifications_url: String,
    pub support_scheduler_url: String,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            core_data_url: defaults::CORE_DATA_URL.to_string(),
            core_metadata_url: defaults::CORE_METADATA_URL.to_string(),
            support_notifications_url: defaults::SUPPORT_NOTIFICATIONS_URL.to_string(),
            support_scheduler_url: defaults::SUPPORT_SCHEDULER_URL.to_string(),
            request_timeout: defaults::API_REQUEST_TIMEOUT,
        }
    }
}

fn url_from_env(var: &'static str, default: &str) -> Result<String, ConfigError> {
    match env::var(var) {
        Ok(value) => match Url::parse(&value) {
            Ok(_) => Ok(value),
            Err(source) => Err(ConfigError::InvalidUrl { var, value, source }),
        },
        Err(_) => Ok(default.to_string()),
    }
}

fn timeout_from_env(var: &'static str, default: Duration) -> Result<Duration, ConfigError> {
    let Ok(value) = env::var(var) else {
        return Ok(default);
    };
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout { var, value }),
    }
}

impl ClientConfig {
    /// Defaults overridden by whichever service URLs and timeout are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = ClientConfig {
            core_data_url: url_from_env(envvars::CORE_DATA_URL, defaults::CORE_DATA_URL)?,
            core_metadata_url: url_from_env(envvars::CORE_METADATA_URL, defaults::CORE_METADATA_URL)?,
            support_notifications_url: url_from_env(
                envvars::SUPPORT_NOTIFICATIONS_URL,
                defaults::SUPPORT_NOTIFICATIONS_URL,
            )?,
            support_scheduler_url: url_from_env(
                envvars::SUPPORT_SCHEDULER_URL,
                defaults::SUPPORT_SCHEDULER_URL,
            )?,
            request_timeout: timeout_from_env(
                envvars::REQUEST_TIMEOUT_SECS,
                defaults::API_REQUEST_TIMEOUT,
            )?,
        };
        log::debug!("Client configuration: {:?}", config);
        Ok(config)
    }

    pub fn url_for(&self, service: Service) -> &str {
        match service {
            Service::CoreData => &self.core_data_url,
            Service::CoreMetadata => &self.core_metadata_url,
            Service::SupportNotifications => &self.support_notifications_url,
            Service::SupportScheduler => &self.support_scheduler_url,
        }
    }
}
