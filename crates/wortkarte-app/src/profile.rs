use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use wortkarte_config::Config;

/// Config file looked up in the working directory when no path is given
const DEFAULT_PROFILE: &str = "config.json";

/// Represents a user profile
#[derive(Debug, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

pub fn load_profile(path: &Path) -> anyhow::Result<Profile> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("invalid profile {}", path.display()))?;

    tracing::info!("Loaded profile {} from {}", profile.name, path.display());
    Ok(profile)
}

/// Config from `path`, else `config.json` if present, else environment defaults.
///
/// An explicit path that cannot be read is an error.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Ok(load_profile(path)?.value);
    }

    let default = Path::new(DEFAULT_PROFILE);
    if default.exists() {
        return Ok(load_profile(default)?.value);
    }

    tracing::debug!("No profile found, using environment config");
    Ok(Config::new())
}

/// Write `config` as a named profile
pub fn save_profile(path: &Path, name: &str, config: &Config) -> anyhow::Result<()> {
    let profile = Profile {
        name: name.into(),
        value: config.clone(),
    };
    fs::write(path, serde_json::to_string_pretty(&profile)?)
        .with_context(|| format!("failed to write profile {}", path.display()))?;
    tracing::info!("Saved profile {}", name);
    Ok(())
}
