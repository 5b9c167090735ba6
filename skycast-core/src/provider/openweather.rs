use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::model::{CurrentConditions, WeatherQuery, WeatherSample};

use super::{ProviderError, WeatherProvider};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
    base_url: String,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the provider at a different host. Tests use this to talk to a
    /// local mock server.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, ProviderError> {
        let url = format!("{}/{endpoint}", self.base_url);

        debug!(%endpoint, %city, "requesting OpenWeather data");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(classify_status(status, city, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, query: &WeatherQuery) -> Result<CurrentConditions, ProviderError> {
        let parsed: OwCurrentResponse = self.get_json("weather", &query.city).await?;
        Ok(map_current(parsed))
    }

    async fn forecast(&self, query: &WeatherQuery) -> Result<Vec<WeatherSample>, ProviderError> {
        let parsed: OwForecastResponse = self.get_json("forecast", &query.city).await?;
        Ok(map_samples(parsed.list))
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    icon: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

fn map_current(parsed: OwCurrentResponse) -> CurrentConditions {
    let (condition_code, condition_description) = primary_condition(parsed.weather);

    CurrentConditions {
        location_name: parsed.name,
        temperature_c: parsed.main.temp,
        condition_code,
        condition_description,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
        observation_time: unix_to_utc(parsed.dt).unwrap_or_else(Utc::now),
    }
}

fn map_samples(list: Vec<OwForecastEntry>) -> Vec<WeatherSample> {
    list.into_iter()
        .filter_map(|entry| {
            let timestamp = unix_to_utc(entry.dt)?;
            let (condition_code, condition_description) = primary_condition(entry.weather);

            Some(WeatherSample {
                timestamp,
                temperature_c: entry.main.temp,
                condition_code,
                condition_description,
            })
        })
        .collect()
}

/// The first element of the `weather` array is the primary condition; the
/// payload may omit the array entirely.
fn primary_condition(weather: Vec<OwWeather>) -> (String, String) {
    weather
        .into_iter()
        .next()
        .map(|w| (w.icon, w.description))
        .unwrap_or_else(|| (String::new(), "Unknown".to_string()))
}

fn classify_status(status: StatusCode, city: &str, body: &str) -> ProviderError {
    match status {
        StatusCode::UNAUTHORIZED => ProviderError::Unauthorized,
        StatusCode::NOT_FOUND => ProviderError::LocationNotFound(city.to_string()),
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited,
        _ => ProviderError::Status {
            status,
            body: truncate_body(body),
        },
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn classify_status_maps_user_facing_failures() {
        assert!(matches!(
            classify_status(StatusCode::NOT_FOUND, "Nowhere", "{}"),
            ProviderError::LocationNotFound(city) if city == "Nowhere"
        ));
        assert!(matches!(
            classify_status(StatusCode::UNAUTHORIZED, "Jhansi", "{}"),
            ProviderError::Unauthorized
        ));
        assert!(matches!(
            classify_status(StatusCode::TOO_MANY_REQUESTS, "Jhansi", "{}"),
            ProviderError::RateLimited
        ));
        assert!(matches!(
            classify_status(StatusCode::BAD_GATEWAY, "Jhansi", "oops"),
            ProviderError::Status { status, .. } if status == StatusCode::BAD_GATEWAY
        ));
    }

    #[test]
    fn truncate_body_caps_long_bodies() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);

        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn primary_condition_falls_back_when_weather_array_is_empty() {
        let (code, description) = primary_condition(vec![]);

        assert_eq!(code, "");
        assert_eq!(description, "Unknown");
    }

    #[test]
    fn map_current_reads_the_first_weather_element() {
        let parsed: OwCurrentResponse = serde_json::from_value(json!({
            "name": "Jhansi",
            "dt": 1_757_228_400,
            "main": { "temp": 24.6, "humidity": 64 },
            "weather": [
                { "icon": "01d", "description": "clear sky" },
                { "icon": "50d", "description": "mist" }
            ],
            "wind": { "speed": 3.5 }
        }))
        .expect("payload should parse");

        let current = map_current(parsed);

        assert_eq!(current.location_name, "Jhansi");
        assert_eq!(current.condition_code, "01d");
        assert_eq!(current.condition_description, "clear sky");
        assert_eq!(current.humidity_pct, 64);
        assert_eq!(current.observation_time.timestamp(), 1_757_228_400);
    }

    #[test]
    fn map_samples_preserves_provider_order() {
        let parsed: OwForecastResponse = serde_json::from_value(json!({
            "list": [
                {
                    "dt": 1_757_228_400,
                    "main": { "temp": 20.6, "humidity": 60 },
                    "weather": [{ "icon": "01d", "description": "clear sky" }]
                },
                {
                    "dt": 1_757_239_200,
                    "main": { "temp": 22.1, "humidity": 55 },
                    "weather": [{ "icon": "02d", "description": "few clouds" }]
                }
            ]
        }))
        .expect("payload should parse");

        let samples = map_samples(parsed.list);

        assert_eq!(samples.len(), 2);
        assert!(samples[0].timestamp < samples[1].timestamp);
        assert_eq!(samples[0].condition_code, "01d");
        assert_eq!(samples[1].temperature_c, 22.1);
    }
}
