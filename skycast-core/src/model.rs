use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A city lookup as typed by the user.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub city: String,
}

/// Current conditions for a location, already mapped out of the provider's
/// raw payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub location_name: String,
    pub temperature_c: f64,
    pub condition_code: String,
    pub condition_description: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub observation_time: DateTime<Utc>,
}

/// One 3-hourly forecast point as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub timestamp: DateTime<Utc>,
    pub temperature_c: f64,
    pub condition_code: String,
    pub condition_description: String,
}

/// One aggregated forecast record for a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// Short English weekday name, e.g. "Mon".
    pub weekday: String,
    /// Floor of the day's first sample temperature.
    pub temperature_c: i32,
    pub condition_code: String,
    pub condition_description: String,
}
