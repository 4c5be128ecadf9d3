use clap::{Parser, Subcommand};
use inquire::InquireError;

use cityweather_core::{App, Config, FilePreferenceStore, provider};

use crate::screen::TerminalDisplay;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "City weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name. When omitted, the last searched city is restored and
        /// an interactive prompt follows.
        city: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => show(city).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let key = inquire::Text::new("OpenWeatherMap API key:").prompt()?;
    config.set_api_key(key.trim().to_string());
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: Option<String>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let client = provider::client_from_config(&config)?;
    let store = FilePreferenceStore::open_default()?;

    let mut app = App::new(client, store, TerminalDisplay);

    match city {
        // One-shot lookup; the last-city preference is still updated.
        Some(city) => app.submit(&city).await,

        // Interactive: restore the remembered city first, then prompt until
        // the user cancels (Esc / Ctrl-C).
        None => {
            let mut last = app.startup().await;

            loop {
                let mut prompt = inquire::Text::new("City name:");
                if let Some(city) = last.as_deref() {
                    prompt = prompt.with_initial_value(city);
                }

                match prompt.prompt() {
                    Ok(input) => {
                        app.submit(&input).await;
                        let trimmed = input.trim();
                        if !trimmed.is_empty() {
                            last = Some(trimmed.to_string());
                        }
                    }
                    Err(InquireError::OperationCanceled)
                    | Err(InquireError::OperationInterrupted) => break,
                    Err(err) => return Err(err.into()),
                }
            }
        }
    }

    Ok(())
}
