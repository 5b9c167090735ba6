use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use skycast_core::{Config, WeatherQuery, daily_outlook, provider_from_config};
use tracing::warn;

use crate::icons::IconStyle;
use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "City weather lookup with a 5-day outlook")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and an optional default city.
    Configure,

    /// Show current conditions and the 5-day outlook for a city.
    Show {
        /// City name; falls back to the configured default, then to a prompt.
        city: Option<String>,

        /// Icon glyph style used in the output.
        #[arg(long, value_enum, default_value_t = IconStyle::Unicode)]
        icons: IconStyle,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, icons } => show(city, icons).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }

    let default_city = inquire::Text::new("Default city (optional):")
        .with_initial_value(config.default_city().unwrap_or(""))
        .with_help_message("Looked up when `skycast show` is run without a city")
        .prompt()
        .context("Failed to read default city")?;

    config.set_api_key(api_key.trim().to_string());
    config.set_default_city(Some(default_city));
    config.save()?;

    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}

async fn show(city: Option<String>, icons: IconStyle) -> Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let city = match resolve_city(city, config.default_city()) {
        Some(city) => city,
        None => inquire::Text::new("Search city:")
            .prompt()
            .context("Failed to read city name")?,
    };

    let city = city.trim().to_string();
    if city.is_empty() {
        bail!("Enter a city name");
    }

    let query = WeatherQuery { city };

    let current = provider
        .current(&query)
        .await
        .with_context(|| format!("Could not fetch current weather for '{}'", query.city))?;

    // The outlook is best-effort: current conditions still render when the
    // forecast request fails.
    let outlook = match provider.forecast(&query).await {
        Ok(samples) => daily_outlook(&samples, Utc::now().date_naive(), &Utc),
        Err(err) => {
            warn!(city = %query.city, error = %err, "forecast request failed");
            Vec::new()
        }
    };

    print!("{}", render::weather_report(&current, &outlook, icons));

    Ok(())
}

fn resolve_city(arg: Option<String>, configured: Option<&str>) -> Option<String> {
    arg.or_else(|| configured.map(str::to_owned))
}
