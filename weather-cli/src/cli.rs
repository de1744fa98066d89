use std::{
    io::IsTerminal,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{ArgAction, Parser};
use inquire::Password;
use tracing::{debug, info};
use weather_core::{
    Config, Units, WeatherRequest,
    config::API_KEY_ENV,
    provider::provider_from_config,
};

use crate::display;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "gets weather and temperature information for a city"
)]
pub struct Cli {
    /// City name, e.g. `weather new york`.
    #[arg(required_unless_present = "configure", num_args = 1..)]
    pub city: Vec<String>,

    /// Display the temperature in imperial units.
    #[arg(short, long)]
    pub imperial: bool,

    /// Read the API key from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prompt for the OpenWeather API key and store it.
    #[arg(long, conflicts_with = "city")]
    pub configure: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// More log output (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        if self.configure {
            return configure(self.config.as_deref());
        }

        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        let provider = provider_from_config(&config, std::env::var(API_KEY_ENV).ok())?;

        let units = Units::from_imperial(self.imperial);
        let request = WeatherRequest::from_tokens(self.city.as_slice(), units)?;
        info!(city = %request.city, "looking up current weather");

        let current = provider.current_weather(&request).await?;

        let color = !self.no_color && std::io::stdout().is_terminal();
        println!("{}", display::render(&current, color));

        Ok(())
    }
}

/// Prompt for the API key and store it in `path`, or the default location.
fn configure(path: Option<&Path>) -> anyhow::Result<()> {
    let mut config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        anyhow::bail!("API key must not be empty");
    }

    config.set_api_key(api_key);

    let saved_to = match path {
        Some(path) => {
            config.save_to(path)?;
            path.to_path_buf()
        }
        None => {
            config.save()?;
            Config::config_file_path()?
        }
    };
    debug!(path = %saved_to.display(), "saved config");

    println!("Saved API key to {}", saved_to.display());
    Ok(())
}
