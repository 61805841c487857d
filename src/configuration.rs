use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use reqwest::Url;
use secrecy::Secret;
use serde::Deserialize;

use crate::domain::RegistrationValidator;
use crate::registration_client::HttpRegistrationClient;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub registration: RegistrationSettings,
    pub registration_service: ServiceSettings,
}

#[derive(Deserialize, Clone)]
pub struct RegistrationSettings {
    pub min_password_length: usize,
    pub submit_timeout_milliseconds: u64,
}

#[derive(Deserialize, Clone)]
pub struct ServiceSettings {
    pub base_url: String,
    pub api_token: Secret<String>,
    pub timeout_milliseconds: u64,
}

impl RegistrationSettings {
    pub fn validator(&self) -> RegistrationValidator {
        RegistrationValidator::new(self.min_password_length)
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_milliseconds)
    }
}

impl ServiceSettings {
    pub fn client(&self) -> Result<HttpRegistrationClient, anyhow::Error> {
        let base_url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid registration service URL: {}", self.base_url))?;
        HttpRegistrationClient::new(base_url, self.api_token.clone(), self.timeout())
            .context("Failed to build the registration service HTTP client")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

/// Reads `configuration/base.yaml`, then the optional `configuration/local.yaml`,
/// then `APP_`-prefixed environment variables (`APP_REGISTRATION__MIN_PASSWORD_LENGTH=6`).
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?
        .join("configuration");
    get_configuration_from(&base_path)
}

pub fn get_configuration_from(directory: &Path) -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(directory.join("base.yaml")).format(config::FileFormat::Yaml))
        .add_source(
            config::File::from(directory.join("local.yaml"))
                .format(config::FileFormat::Yaml)
                .required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
