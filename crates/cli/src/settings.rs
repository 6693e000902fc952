use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use ielts_coach_core::shared::constants::DRILL_PASS_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub const ALL: &[ReportFormat] = &[ReportFormat::Text, ReportFormat::Json];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.to_string() == value)
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub default_topic: String,
    pub format: ReportFormat,
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: u8,
}

fn default_pass_threshold() -> u8 {
    DRILL_PASS_THRESHOLD
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_topic: "Hometown".to_string(),
            format: ReportFormat::Text,
            pass_threshold: default_pass_threshold(),
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("IeltsCoach").join("settings.json"))
    }

    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Reads settings from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            self.save_to(&path);
        }
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::warn!("Could not save settings to {}: {e}", path.display());
                }
            }
            Err(e) => log::warn!("Could not serialize settings: {e}"),
        }
    }
}
