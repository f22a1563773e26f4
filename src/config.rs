use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::models::{Config, Directory};

const SEED: &str = include_str!("seed.toml");

/// Load the config file, or the defaults when no path is given.
/// A config without any `[activities]` tables gets the built-in seed.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parse_config(&content).with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => Config::default(),
    };
    if config.activities.is_empty() {
        config.activities = seed_activities()?;
    }
    validate_directory(&config.activities)?;
    Ok(config)
}

pub fn seed_activities() -> Result<Directory> {
    let seed = parse_config(SEED).context("Built-in activity seed is malformed")?;
    Ok(seed.activities)
}

fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

fn validate_directory(activities: &Directory) -> Result<()> {
    for (name, activity) in activities {
        if activity.max_participants == 0 {
            bail!("Activity '{}' must allow at least one participant", name);
        }
        let mut seen = HashSet::new();
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                bail!("Activity '{}' lists {} more than once", name, email);
            }
        }
    }
    Ok(())
}
