use chrono::Local;
use clap::{Parser, Subcommand};
use forecast_core::{Config, ForecastPresenter, LocationConfig, OpenMeteoProvider, RequestState};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "5-day weather forecast widget")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the forecast and render it as a row of per-day cards.
    Show {
        /// Latitude override in decimal degrees.
        #[arg(long)]
        lat: Option<f64>,

        /// Longitude override in decimal degrees.
        #[arg(long)]
        lon: Option<f64>,

        /// Display label for the location.
        #[arg(long)]
        label: Option<String>,

        /// Number of forecast days (1-16).
        #[arg(long)]
        days: Option<u8>,
    },

    /// Set the default location interactively.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show {
                lat,
                lon,
                label,
                days,
            } => show(lat, lon, label, days).await,
            Command::Configure => configure(),
        }
    }
}

async fn show(
    lat: Option<f64>,
    lon: Option<f64>,
    label: Option<String>,
    days: Option<u8>,
) -> anyhow::Result<()> {
    let config = Config::load()?;
    let mut query = config.query();

    if let Some(lat) = lat {
        query.latitude = lat;
    }
    if let Some(lon) = lon {
        query.longitude = lon;
    }
    if let Some(label) = label {
        query.location_label = label;
    }
    if let Some(days) = days {
        query.days = days.clamp(1, 16);
    }

    render::loading_notice(&query.location_label);

    let mut presenter = ForecastPresenter::new(Box::new(OpenMeteoProvider::new()));
    match presenter.load_forecast(&query).await {
        RequestState::Ready(result) => render::cards(result, Local::now().date_naive()),
        RequestState::Failed(message) => render::error_banner(message),
        RequestState::Loading => {}
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let latitude = inquire::CustomType::<f64>::new("Latitude:")
        .with_help_message("Decimal degrees, e.g. 40.7128")
        .prompt()?;

    let longitude = inquire::CustomType::<f64>::new("Longitude:")
        .with_help_message("Decimal degrees, e.g. -74.0060")
        .prompt()?;

    let label = inquire::Text::new("Location label:")
        .with_default("New York, NY")
        .prompt()?;

    let forecast_days = inquire::CustomType::<u8>::new("Forecast days:")
        .with_default(5)
        .with_help_message("Between 1 and 16")
        .prompt()?;

    config.location = Some(LocationConfig {
        latitude,
        longitude,
        label,
    });
    config.forecast_days = forecast_days.clamp(1, 16);
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}
