use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::info;
use weather_watch_core::{
    Config, FetchCoordinator, WeatherView, provider_from_config, render,
    view::{LOADING_TEXT, PLACEHOLDER, TITLE},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-watch", version, about = "Current weather for a city")]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Defaults to `interactive`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prompt for cities until Esc or Ctrl-C.
    Interactive,

    /// Show the current weather for one city.
    Show {
        /// City name, e.g. "London".
        city: String,
    },

    /// Store an OpenWeather API key.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Interactive => interactive().await.map(|()| ExitCode::SUCCESS),
            Command::Show { city } => show(city).await,
            Command::Configure => configure().map(|()| ExitCode::SUCCESS),
        }
    }
}

fn coordinator() -> anyhow::Result<FetchCoordinator> {
    let config = Config::load()?;
    Ok(FetchCoordinator::new(provider_from_config(&config)?))
}

async fn show(city: String) -> anyhow::Result<ExitCode> {
    let coordinator = coordinator()?;
    let mut view = WeatherView::new();
    view.set_city(city);
    coordinator.submit(&mut view).await;

    let screen = render(&view);
    if view.state().error().is_some() {
        eprintln!("{screen}");
        return Ok(ExitCode::FAILURE);
    }
    println!("{screen}");
    Ok(ExitCode::SUCCESS)
}

async fn interactive() -> anyhow::Result<()> {
    let coordinator = coordinator()?;
    let mut view = WeatherView::new();

    println!("{TITLE}\n");

    loop {
        let input = Text::new("City:")
            .with_placeholder(PLACEHOLDER)
            .with_initial_value(view.city())
            .prompt();

        let text = match input {
            Ok(text) => text,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city name"),
        };

        view.set_city(text);
        if let Some(ticket) = view.submit() {
            println!("{LOADING_TEXT}");
            let completion = coordinator.fetch(ticket).await;
            view.apply(completion);
        }

        println!("{}\n", render(&view));
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim().to_string();
    if api_key.is_empty() {
        bail!("API key must not be empty");
    }

    config.set_api_key(api_key);
    config.save()?;

    let path = Config::config_file_path()?;
    info!(path = %path.display(), "configuration saved");
    println!("Saved API key to {}", path.display());
    Ok(())
}
