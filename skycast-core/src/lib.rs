//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider client
//! - Shared domain models (queries, conditions, forecast samples)
//! - The daily forecast aggregation routine
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod forecast;
pub mod model;
pub mod provider;

pub use config::Config;
pub use forecast::{MAX_OUTLOOK_DAYS, daily_outlook};
pub use model::{CurrentConditions, DailySummary, WeatherQuery, WeatherSample};
pub use provider::{ProviderError, WeatherProvider, provider_from_config};
