use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "AUDIOGATE_CONFIG";

const DEFAULT_PATH: &str = "/usr/local/etc/audiogate/config.json";

fn default_sample_rate() -> String {
    "48000".to_string()
}

/// Daemon configuration, stored as pretty-printed JSON.
///
/// `sample_rate` stays a string: the readiness probe compares it against the
/// decimal form of the device's truncated nominal rate.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Config {
    pub dac_name: String,
    #[serde(default = "default_sample_rate")]
    pub sample_rate: String,
    pub base_url: String,
    pub plug_device_id: String,
    pub username: String,
    pub password: String,
}

pub fn path() -> PathBuf {
    std::env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_PATH))
}

impl Config {
    pub fn load() -> Result<Self, String> {
        Self::load_from(&path())
    }

    pub fn load_from(path: &Path) -> Result<Self, String> {
        let file =
            File::open(path).map_err(|e| format!("failed to open {}: {e}", path.display()))?;
        serde_json::from_reader(file).map_err(|e| format!("failed to parse {}: {e}", path.display()))
    }

    pub fn save(&self) -> Result<(), String> {
        self.save_to(&path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("failed to create {}: {e}", dir.display()))?;
        }
        let file =
            File::create(path).map_err(|e| format!("failed to create {}: {e}", path.display()))?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))
    }
}

pub fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .ok()
        .map(|v| {
            let s = v.trim().to_ascii_lowercase();
            s == "1" || s == "true" || s == "yes" || s == "on"
        })
        .unwrap_or(false)
}
