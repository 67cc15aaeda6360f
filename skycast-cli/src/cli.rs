use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fmt;

use skycast_core::{Config, IpLocator, WeatherApp, provider};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather lookup in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key used for lookups.
    Configure,

    /// Show current weather for a place name.
    Show {
        /// City or place name, e.g. "London" or "Jakarta".
        place: String,
    },

    /// Show current weather at this device's location.
    Here,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { place }) => {
                let mut app = build_app()?;
                app.submit_place_name(&place).await;
                render::draw(app.state());
                Ok(())
            }
            Some(Command::Here) => {
                let mut app = build_app()?;
                app.submit_current_location().await;
                render::draw(app.state());
                Ok(())
            }
            None => interactive().await,
        }
    }
}

fn build_app() -> anyhow::Result<WeatherApp> {
    let config = Config::load()?;
    let provider = provider::from_config(&config)?;
    let locator = Box::new(IpLocator::new());

    Ok(WeatherApp::new(provider, locator).with_share_footer(config.share_footer))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Search,
    Here,
    Share,
    Theme,
    Quit,
}

impl Action {
    const ALL: [Action; 5] = [
        Action::Search,
        Action::Here,
        Action::Share,
        Action::Theme,
        Action::Quit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Search => "Search by city",
            Action::Here => "Use my location",
            Action::Share => "Share last result",
            Action::Theme => "Toggle dark mode",
            Action::Quit => "Quit",
        };
        f.write_str(label)
    }
}

async fn interactive() -> anyhow::Result<()> {
    let mut app = build_app()?;
    render::draw(app.state());

    loop {
        let choice = inquire::Select::new("What next?", Action::ALL.to_vec())
            .prompt_skippable()
            .context("Failed to read menu choice")?;

        match choice {
            Some(Action::Search) => {
                let place = inquire::Text::new("City name:")
                    .prompt_skippable()
                    .context("Failed to read city name")?;
                if let Some(place) = place {
                    render::draw_loading(app.state());
                    app.submit_place_name(&place).await;
                    render::draw(app.state());
                }
            }
            Some(Action::Here) => {
                render::draw_loading(app.state());
                app.submit_current_location().await;
                render::draw(app.state());
            }
            Some(Action::Share) => match app.share_snapshot() {
                Some(link) => {
                    println!("Share link: {link}");
                    if let Err(err) = webbrowser::open(&link) {
                        tracing::warn!(error = %err, "could not open share link in browser");
                    }
                }
                None => render::draw(app.state()),
            },
            Some(Action::Theme) => {
                app.toggle_theme();
                render::draw(app.state());
            }
            Some(Action::Quit) | None => return Ok(()),
        }
    }
}
