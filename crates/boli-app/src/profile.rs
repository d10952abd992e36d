use std::fs;
use std::path::{Path, PathBuf};

use boli_config::Config;
use serde::{Deserialize, Serialize};

const MAIN_PROFILE: &str = "main";

fn profiles_dir(root: &Path) -> PathBuf {
    root.join("profiles")
}

fn profile_path(root: &Path, name: &str) -> PathBuf {
    profiles_dir(root).join(format!("{name}.json"))
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&data)?;
    Ok(profile.value)
}

fn write_profile(path: &Path, name: &str, config: Config) -> anyhow::Result<()> {
    let profile = Profile {
        name: name.into(),
        value: config,
    };
    fs::write(path, serde_json::to_string_pretty(&profile)?)?;
    Ok(())
}

/// Create the profiles folder and the main profile, seeded from the
/// environment, if missing
pub fn init_profiles(root: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(profiles_dir(root))?;

    let main_profile = profile_path(root, MAIN_PROFILE);
    if !main_profile.exists() {
        write_profile(&main_profile, MAIN_PROFILE, Config::new())?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(main_profile)
}

/// Load a profile by name, falling back to main, then to the environment
pub fn load_profile(root: &Path, name: &str) -> anyhow::Result<Config> {
    let file = profile_path(root, name);
    if file.exists() {
        return read_profile(&file);
    }

    tracing::warn!("Profile {name} not found, falling back to main profile");
    let main_file = profile_path(root, MAIN_PROFILE);
    if main_file.exists() {
        read_profile(&main_file)
    } else {
        Ok(Config::new())
    }
}

/// Add a new profile cloned from main
pub fn add_profile(root: &Path, name: &str) -> anyhow::Result<PathBuf> {
    let config = load_profile(root, MAIN_PROFILE)?;
    fs::create_dir_all(profiles_dir(root))?;

    let file = profile_path(root, name);
    write_profile(&file, name, config)?;
    tracing::info!("Created new profile: {name}");
    Ok(file)
}
