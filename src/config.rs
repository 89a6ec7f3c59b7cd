use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the catalog document
    pub catalog_path: String,
    /// Path to the optional additional-links document
    #[serde(default)]
    pub links_path: String,
    /// Version opened at startup; empty means the latest in the catalog
    #[serde(default)]
    pub default_version: String,
    /// Destination directory for site exports
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

fn default_export_dir() -> String {
    "site".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: "mods.json".to_string(),
            links_path: "additional-links.json".to_string(),
            default_version: String::new(),
            export_dir: default_export_dir(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".modlist-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let config = Config {
            catalog_path: "data/mods.json".to_string(),
            links_path: String::new(),
            default_version: "1.21.5".to_string(),
            export_dir: "public".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.catalog_path, "data/mods.json");
        assert_eq!(back.default_version, "1.21.5");
        assert_eq!(back.export_dir, "public");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str(r#"{"catalog_path": "mods.json"}"#).unwrap();
        assert!(config.default_version.is_empty());
        assert_eq!(config.export_dir, "site");
    }
}
