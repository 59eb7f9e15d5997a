use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::app::{AllowedRange, TimeOfDay};

const APP_DIR: &str = "room-finder";
const ENV_API_URL: &str = "ROOM_FINDER_API_URL";
const ENV_ANON_KEY: &str = "ROOM_FINDER_ANON_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomFinderConfig {
    /// Base URL of the backend project, e.g. "https://xyz.supabase.co"
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Public anon key sent with every request
    #[serde(default)]
    pub anon_key: String,
    /// Earliest searchable time, "HH:MM"
    #[serde(default = "default_window_start")]
    pub window_start: String,
    /// Latest searchable time, "HH:MM"
    #[serde(default = "default_window_end")]
    pub window_end: String,
    #[serde(default = "default_gap_minutes")]
    pub default_gap_minutes: i32,
    /// Pause after the last keystroke before a time input is committed
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Rooms per page in the results table
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_api_url() -> String {
    "http://localhost:54321".to_string()
}

fn default_window_start() -> String {
    "07:00".to_string()
}

fn default_window_end() -> String {
    "22:00".to_string()
}

fn default_gap_minutes() -> i32 {
    180
}

fn default_debounce_ms() -> u64 {
    350
}

fn default_page_size() -> usize {
    15
}

impl Default for RoomFinderConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            anon_key: String::new(),
            window_start: default_window_start(),
            window_end: default_window_end(),
            default_gap_minutes: default_gap_minutes(),
            debounce_ms: default_debounce_ms(),
            page_size: default_page_size(),
        }
    }
}

fn root_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Cannot determine config directory")?
        .join(APP_DIR))
}

impl RoomFinderConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(root_path()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(root_path()?.join("room-finder.log"))
    }

    /// Load config from disk, then apply environment overrides. Returns the
    /// default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config at {}", path.display()))?;
            Self::from_toml(&raw)
                .with_context(|| format!("Failed to parse config at {}", path.display()))?
        } else {
            Self::default()
        };

        config.apply_overrides(std::env::var(ENV_API_URL).ok(), std::env::var(ENV_ANON_KEY).ok());
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&mut self, api_url: Option<String>, anon_key: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url;
        }
        if let Some(key) = anon_key {
            self.anon_key = key;
        }
    }

    fn validate(&self) -> Result<()> {
        self.allowed_range()?;
        anyhow::ensure!(
            self.default_gap_minutes > 0,
            "default_gap_minutes must be positive, got {}",
            self.default_gap_minutes
        );
        Ok(())
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }

    pub fn allowed_range(&self) -> Result<AllowedRange> {
        let start: TimeOfDay = self
            .window_start
            .parse()
            .context("Invalid window_start")?;
        let end: TimeOfDay = self.window_end.parse().context("Invalid window_end")?;
        Ok(AllowedRange::new(start, end)?)
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
