use crate::{
    Config,
    model::{CurrentConditions, WeatherQuery, WeatherSample},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// Errors surfaced by a weather provider.
///
/// The HTTP statuses OpenWeather uses for the common user-facing failures get
/// their own variants so the CLI can phrase them; everything else is reported
/// with the raw status and a trimmed response body.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no match for city '{0}'")]
    LocationNotFound(String),

    #[error("the weather service rejected the configured API key")]
    Unauthorized,

    #[error("the weather service rate limit was exceeded, try again later")]
    RateLimited,

    #[error("weather request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to reach the weather service")]
    Transport(#[from] reqwest::Error),

    #[error("malformed weather payload")]
    MalformedPayload(#[from] serde_json::Error),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for the queried city.
    async fn current(&self, query: &WeatherQuery) -> Result<CurrentConditions, ProviderError>;

    /// The 3-hourly forecast feed for the queried city, in provider order.
    async fn forecast(&self, query: &WeatherQuery) -> Result<Vec<WeatherSample>, ProviderError>;
}

/// Construct the provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No OpenWeather API key configured.\n\
                 Hint: run `skycast configure` and enter your API key."
        )
    })?;

    Ok(Box::new(OpenWeatherProvider::new(api_key.to_owned())))
}
