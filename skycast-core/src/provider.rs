use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::LookupError;
use crate::model::{Query, WeatherSnapshot};
use crate::provider::openweather::OpenWeatherProvider;
use crate::Config;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Perform exactly one lookup for the given query.
    async fn current_weather(&self, query: &Query) -> Result<WeatherSnapshot, LookupError>;
}

/// Construct the provider from config, resolving the API credential.
pub fn from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.resolved_api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No OpenWeather API key configured.\n\
             Hint: run `skycast configure` and enter your API key, or set {}.",
            crate::config::API_KEY_ENV
        )
    })?;

    Ok(Box::new(OpenWeatherProvider::new(api_key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_errors_without_api_key() {
        let cfg = Config::default();
        let err = from_config(&cfg).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No OpenWeather API key configured"));
        assert!(msg.contains("Hint: run `skycast configure`"));
    }

    #[test]
    fn from_config_builds_provider_when_key_present() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert!(from_config(&cfg).is_ok());
    }
}
