use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use signed_token::{SECRET_ENV_VAR, TokenConfig};

use crate::error::CliError;

/// Settings file for the `signup-tokens` binary.
///
/// ```yaml
/// secret_env: SIGNED_TOKENS_SECRET
/// default_ttl_secs: 300
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Name of the environment variable holding the signing secret.
    pub secret_env: String,
    pub default_ttl_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            secret_env: SECRET_ENV_VAR.to_string(),
            default_ttl_secs: 300,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or fall back to defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_yaml(&contents)?;
        log::debug!("loaded settings from {:?}", path);
        Ok(settings)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, CliError> {
        let settings: Settings = serde_yaml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CliError> {
        if self.secret_env.trim().is_empty() {
            return Err(CliError::InvalidConfig(
                "secret_env must name an environment variable".to_string(),
            ));
        }
        if self.default_ttl_secs == 0 {
            return Err(CliError::InvalidConfig(
                "default_ttl_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the token configuration, reading the secret from the environment.
    pub fn token_config(&self) -> Result<TokenConfig, CliError> {
        let config = TokenConfig::from_env_var(&self.secret_env)?
            .with_default_ttl(Duration::from_secs(self.default_ttl_secs))?;
        Ok(config)
    }
}
