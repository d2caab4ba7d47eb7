use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use aura::Theme;
use aura::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "aura")]
#[command(about = "Aura Points - support ticket leaderboard dashboard")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.aura/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL for this run
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard (default)
    Gui,

    /// Remember an agent ID for the dashboard and CLI
    Login {
        /// Agent identifier
        id: String,
    },

    /// Forget the remembered agent ID and its watched milestones
    Logout,

    /// Show an agent's rank progress
    Profile {
        /// Agent identifier (defaults to the remembered one)
        #[arg(long)]
        id: Option<String>,
    },

    /// Show the current month's leaderboard
    Leaderboard,

    /// Show the leaderboard of a past month
    History {
        #[arg(long)]
        year: i32,

        /// Month number (1-12)
        #[arg(long)]
        month: u32,
    },

    /// Show or set the dashboard theme
    Theme {
        /// "role" or "rank"
        value: Option<Theme>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let mut config = Config::load_from(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.server.base_url = base_url;
    }

    match cli.command {
        Some(Commands::Login { id }) => cli::session::login_command(&config, &id)?,
        Some(Commands::Logout) => cli::session::logout_command(&config)?,
        Some(Commands::Theme { value }) => cli::session::theme_command(&config, value)?,
        Some(Commands::Profile { id }) => cli::profile::profile_command(&config, id)?,
        Some(Commands::Leaderboard) => cli::board::leaderboard_command(&config)?,
        Some(Commands::History { year, month }) => {
            cli::board::history_command(&config, year, month)?
        }
        Some(Commands::Gui) | None => aura::gui::run_gui(config)?,
    }

    Ok(())
}
