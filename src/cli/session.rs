//! Session commands: login, logout, theme

use anyhow::{Context, Result, bail};

use aura::Theme;
use aura::config::Config;
use aura::store::ClientStore;

fn open_store(config: &Config) -> Result<ClientStore> {
    let path = config.state_path();
    ClientStore::open(&path)
        .with_context(|| format!("Failed to open client state: {}", path.display()))
}

/// Remember an agent ID
pub fn login_command(config: &Config, id: &str) -> Result<()> {
    let id = id.trim();
    if id.is_empty() {
        bail!("Agent ID must not be empty");
    }

    let mut store = open_store(config)?;
    store.set_user_id(id)?;
    println!("Logged in as {}.", id);
    Ok(())
}

/// Forget the remembered agent ID and its watched milestones
pub fn logout_command(config: &Config) -> Result<()> {
    let mut store = open_store(config)?;
    let Some(id) = store.user_id().map(str::to_string) else {
        println!("Not logged in.");
        return Ok(());
    };

    store.clear_user_id()?;
    store.clear_watched(&id)?;
    println!("Logged out {}.", id);
    Ok(())
}

/// Print or set the persisted theme
pub fn theme_command(config: &Config, value: Option<Theme>) -> Result<()> {
    let mut store = open_store(config)?;
    match value {
        Some(theme) => {
            store.set_theme(theme)?;
            println!("Theme set to {}.", theme);
        }
        None => println!("{}", store.theme()),
    }
    Ok(())
}
