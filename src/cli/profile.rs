//! Profile command implementation

use anyhow::{Context, Result, bail};

use aura::api::{AuraApi, ProfileResponse};
use aura::config::Config;
use aura::store::ClientStore;

/// Fetch and print one agent's profile
pub fn profile_command(config: &Config, id: Option<String>) -> Result<()> {
    let id = match id {
        Some(id) => id,
        None => {
            let store = ClientStore::open(config.state_path())?;
            store
                .user_id()
                .map(str::to_string)
                .context("No agent ID given and none remembered (use `aura login <ID>`)")?
        }
    };

    let client = config.api_client();
    let profile = match client.profile(&id)? {
        ProfileResponse::Profile(profile) => profile,
        ProfileResponse::Invalid(message) => bail!("Agent {} rejected: {}", id, message),
    };

    println!("{}", profile.display_name());
    println!("  Rank: {}", profile.rank.label());
    println!("  Role: {}", profile.role_label);
    println!(
        "  Progress: {} tickets ({:.0}%)",
        profile.counter(),
        profile.progress() * 100.0
    );
    if let Some(video) = profile.video() {
        println!("  Milestone video unlocked: {}", video);
    }

    Ok(())
}
