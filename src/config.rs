//! Application configuration loaded from environment variables.

use serde::Deserialize;

use crate::error::{Result, ServiceError};
use crate::instance::{InstanceIdentity, ServiceVariant, DEFAULT_INSTANCE_NAME};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Identity ===
    /// Instance label reported by the instance-aware variant.
    #[serde(default = "default_instance_name")]
    pub instance_name: String,

    /// Payload shape: `plain` or `instance-aware`.
    #[serde(default)]
    pub service_variant: ServiceVariant,

    // === Server Configuration ===
    /// Bind address: an IP literal or a resolvable host name.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_instance_name() -> String {
    DEFAULT_INSTANCE_NAME.to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            instance_name: default_instance_name(),
            service_variant: ServiceVariant::default(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    /// Check if the configuration is valid.
    ///
    /// `INSTANCE_NAME` is accepted as is, including the empty string.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ServiceError::InvalidConfig(
                "HOST must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Host and port for the HTTP listener; host names are resolved at bind time.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    /// Identity to embed in responses, if this variant reports one.
    pub fn identity(&self) -> Option<InstanceIdentity> {
        self.service_variant
            .includes_instance()
            .then(|| InstanceIdentity::new(self.instance_name.clone()))
    }
}
