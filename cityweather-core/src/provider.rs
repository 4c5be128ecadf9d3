use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::{
    Config,
    model::{CityQuery, WeatherReport},
    provider::openweather::OpenWeatherClient,
};

pub mod openweather;

/// Failure modes of a single lookup.
///
/// Every variant degrades to the Error view state at the lookup boundary;
/// nothing is retried or escalated beyond display.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Empty or whitespace-only input, rejected before any network call.
    #[error("empty city name")]
    EmptyInput,

    /// The upstream service does not know the requested city.
    #[error("city not found")]
    NotFound,

    /// Non-success HTTP status with a human-readable detail.
    #[error("{0}")]
    RequestFailed(String),

    /// The request never completed (DNS, connect, read failures).
    #[error("network error: {0}")]
    Transport(String),

    /// The response body was malformed or missing expected fields.
    #[error("unexpected response shape: {0}")]
    Parse(String),
}

impl LookupError {
    /// The message shown in the Error view for this failure.
    ///
    /// The empty-input and not-found strings are fixed; everything else
    /// gets a generic prefix with the underlying detail appended.
    pub fn display_message(&self) -> String {
        match self {
            LookupError::EmptyInput => "Please enter a city name".to_string(),
            LookupError::NotFound => {
                "City not found. Please check the spelling and try again.".to_string()
            }
            other => format!("Failed to fetch weather data: {other}"),
        }
    }
}

/// A source of current weather conditions.
///
/// The production implementation is [`OpenWeatherClient`]; tests substitute
/// scripted fakes at this seam.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &CityQuery) -> Result<WeatherReport, LookupError>;
}

/// Construct the OpenWeather client from config, failing with a hint when
/// no API key has been configured yet.
pub fn client_from_config(config: &Config) -> anyhow::Result<OpenWeatherClient> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `cityweather configure` and enter your OpenWeatherMap API key."
        )
    })?;

    Ok(OpenWeatherClient::new(api_key.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_message_is_fixed() {
        assert_eq!(
            LookupError::EmptyInput.display_message(),
            "Please enter a city name"
        );
    }

    #[test]
    fn not_found_message_is_fixed() {
        assert_eq!(
            LookupError::NotFound.display_message(),
            "City not found. Please check the spelling and try again."
        );
    }

    #[test]
    fn other_failures_keep_the_underlying_detail() {
        let msg = LookupError::RequestFailed("server error".into()).display_message();
        assert!(msg.starts_with("Failed to fetch weather data:"));
        assert!(msg.contains("server error"));

        let msg = LookupError::Transport("connection refused".into()).display_message();
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn client_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = client_from_config(&cfg).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains("Hint: run `cityweather configure`"));
    }

    #[test]
    fn client_from_config_works_when_key_is_set() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert!(client_from_config(&cfg).is_ok());
    }
}
