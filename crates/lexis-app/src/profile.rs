use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use lexis_config::Config;
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_FILE: &str = "config.json";

/// `config.json` shipped next to the executable
fn default_config_path() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    Some(exe.parent()?.join(DEFAULT_CONFIG_FILE))
}

/// Shipped default config, or built-in defaults when it is missing or broken
fn load_default_config() -> Config {
    match default_config_path() {
        Some(path) => load_config_file(&path),
        None => Config::default(),
    }
}

pub(crate) fn load_config_file(path: &Path) -> Config {
    if !path.exists() {
        tracing::debug!("No {} found, using built-in defaults", path.display());
        return Config::default();
    }

    tracing::info!("Loading default config from {}", path.display());
    let parsed: anyhow::Result<Config> = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))
        .and_then(|data| {
            serde_json::from_str(&data).with_context(|| format!("Failed to parse {}", path.display()))
        });

    parsed.unwrap_or_else(|e| {
        tracing::warn!("{e:#}, using built-in defaults");
        Config::default()
    })
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Named config profiles stored as `<root>/profiles/<name>.json`
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Platform config directory, e.g. `~/.config/lexis` on Linux
    pub fn default_location() -> anyhow::Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "lexis")
            .context("Could not determine a home directory")?;
        Ok(Self::new(dirs.config_dir()))
    }

    fn profiles_dir(&self) -> PathBuf {
        self.root.join("profiles")
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.profiles_dir().join(format!("{name}.json"))
    }

    /// Initialize user config folders and main profile if missing
    pub fn init(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.profiles_dir())
            .with_context(|| format!("Failed to create {}", self.profiles_dir().display()))?;

        let main_profile = self.profile_path("main");

        if !main_profile.exists() {
            let profile = Profile {
                name: "main".into(),
                value: load_default_config(),
            };
            fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
            tracing::info!("Created main profile at {}", main_profile.display());
        }

        Ok(())
    }

    /// Load a user profile by name, defaulting to main if name not found
    pub fn load(&self, name: &str) -> anyhow::Result<Config> {
        let profile_file = self.profile_path(name);

        if profile_file.exists() {
            return read_profile(&profile_file);
        }

        tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
        let main_file = self.profile_path("main");
        if main_file.exists() {
            read_profile(&main_file)
        } else {
            Ok(load_default_config())
        }
    }

    /// Add a new profile cloned from main (or the defaults if main is missing)
    pub fn add_from_default(&self, new_name: &str) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(self.profiles_dir())?;

        let profile = Profile {
            name: new_name.into(),
            value: self.load("main")?,
        };
        let file = self.profile_path(new_name);
        fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created new profile: {new_name}");
        Ok(file)
    }
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Invalid profile {}", path.display()))?;
    Ok(profile.value)
}
