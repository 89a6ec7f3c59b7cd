//! Data models for export history persistence

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// A single completed site export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportHistoryEntry {
    pub timestamp: DateTime<Local>,
    /// Version the index page was built for
    pub default_version: String,
    pub pages: usize,
    pub rows: usize,
    pub out_dir: String,
}

impl ExportHistoryEntry {
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Wrapper for persisting export history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportHistory {
    pub entries: Vec<ExportHistoryEntry>,
}

impl ExportHistory {
    fn history_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".modlist-tui"))
    }

    fn history_path() -> Option<PathBuf> {
        Self::history_dir().map(|dir| dir.join("history.json"))
    }

    pub fn load() -> Vec<ExportHistoryEntry> {
        let history_path = match Self::history_path() {
            Some(p) => p,
            None => return Vec::new(),
        };

        if !history_path.exists() {
            return Vec::new();
        }

        let contents = match fs::read_to_string(&history_path) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str::<ExportHistory>(&contents) {
            Ok(history) => history.entries,
            Err(_) => Vec::new(),
        }
    }

    pub fn save(entries: &[ExportHistoryEntry]) -> Result<(), String> {
        let history_dir = Self::history_dir().ok_or("Could not determine home directory")?;

        if !history_dir.exists() {
            fs::create_dir_all(&history_dir)
                .map_err(|e| format!("Failed to create history directory: {}", e))?;
        }

        let history_path = Self::history_path().ok_or("Could not determine history path")?;

        let history = ExportHistory {
            entries: entries.to_vec(),
        };

        let json = serde_json::to_string_pretty(&history)
            .map_err(|e| format!("Failed to serialize history: {}", e))?;

        fs::write(&history_path, json)
            .map_err(|e| format!("Failed to write history file: {}", e))?;

        Ok(())
    }
}
