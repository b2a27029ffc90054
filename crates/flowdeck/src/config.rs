use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::graph::playback::{DEFAULT_SPEED_MS, MAX_SPEED_MS, MIN_SPEED_MS};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "flowdeck";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<IconsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Playback interval in milliseconds per step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IconsConfig {
    /// Root directory holding one subdirectory of .svg files per collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `flowdeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents =
            format!("# Flowdeck configuration - https://github.com/mklab-se/flowdeck\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .theme = Some(value.to_string());
            }
            "defaults.speed_ms" => {
                let ms: u64 = value.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid speed: {value}. Must be a number of milliseconds.")
                })?;
                if !(MIN_SPEED_MS..=MAX_SPEED_MS).contains(&ms) {
                    anyhow::bail!(
                        "Invalid speed: {value}. Must be between {MIN_SPEED_MS} and {MAX_SPEED_MS} ms."
                    );
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .speed_ms = Some(ms);
            }
            "icons.dir" => {
                self.icons.get_or_insert_with(IconsConfig::default).dir =
                    Some(PathBuf::from(value));
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.theme, defaults.speed_ms, icons.dir"
            ),
        }
        Ok(())
    }

    /// Effective theme name.
    pub fn theme_name(&self) -> &str {
        self.defaults
            .as_ref()
            .and_then(|d| d.theme.as_deref())
            .unwrap_or("light")
    }

    /// Effective playback interval in milliseconds.
    pub fn speed_ms(&self) -> u64 {
        self.defaults
            .as_ref()
            .and_then(|d| d.speed_ms)
            .unwrap_or(DEFAULT_SPEED_MS)
            .clamp(MIN_SPEED_MS, MAX_SPEED_MS)
    }

    /// Effective icon-collection root: configured dir, or
    /// `<config dir>/flowdeck/icons`.
    pub fn icons_dir(&self) -> PathBuf {
        self.icons
            .as_ref()
            .and_then(|i| i.dir.clone())
            .or_else(|| dirs::config_dir().map(|d| d.join(APP_DIR).join("icons")))
            .unwrap_or_else(|| PathBuf::from("icons"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_theme_validates() {
        let mut config = Config::default();
        config.set("defaults.theme", "dark").unwrap();
        assert_eq!(config.theme_name(), "dark");
        assert!(config.set("defaults.theme", "sepia").is_err());
    }

    #[test]
    fn set_speed_enforces_bounds() {
        let mut config = Config::default();
        config.set("defaults.speed_ms", "200").unwrap();
        config.set("defaults.speed_ms", "2000").unwrap();
        assert_eq!(config.speed_ms(), 2000);
        assert!(config.set("defaults.speed_ms", "100").is_err());
        assert!(config.set("defaults.speed_ms", "2500").is_err());
        assert!(config.set("defaults.speed_ms", "fast").is_err());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut config = Config::default();
        assert!(config.set("defaults.unknown", "x").is_err());
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::default();
        assert_eq!(config.theme_name(), "light");
        assert_eq!(config.speed_ms(), 1000);
    }

    #[test]
    fn yaml_round_trip() {
        let mut config = Config::default();
        config.set("defaults.theme", "dark").unwrap();
        config.set("defaults.speed_ms", "500").unwrap();
        config.set("icons.dir", "/tmp/icons").unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.theme_name(), "dark");
        assert_eq!(parsed.speed_ms(), 500);
        assert_eq!(parsed.icons_dir(), PathBuf::from("/tmp/icons"));
    }
}
