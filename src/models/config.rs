use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::utils::error::{AppError, AppResult};

/// Default configuration file, relative to the working directory
pub const CONFIG_FILE: &str = "capture.toml";

#[cfg(target_os = "windows")]
pub const DEFAULT_TSHARK_PATH: &str = r"C:\Program Files\Wireshark\tshark.exe";
#[cfg(not(target_os = "windows"))]
pub const DEFAULT_TSHARK_PATH: &str = "tshark";

#[cfg(target_os = "windows")]
const DEFAULT_BASE_FOLDER: &str = r"C:\captures";
#[cfg(not(target_os = "windows"))]
const DEFAULT_BASE_FOLDER: &str = "captures";

/// Capture configuration persisted between runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Interface number as reported by `tshark -D`
    pub interface: u32,

    /// Length of each capture window in seconds
    pub duration: u64,

    /// Number of capture files to keep per day folder (0 = unlimited)
    pub retain_count: usize,

    /// Root directory that day folders are created under
    pub base_folder: PathBuf,

    /// Path to the tshark executable
    pub tshark_path: PathBuf,
}

/// On-disk layout: a single `[capture]` table
#[derive(Serialize, Deserialize)]
struct ConfigFile {
    capture: CaptureConfig,
}

impl CaptureConfig {
    /// Build a config for the given interface with the recommended defaults
    pub fn with_interface(interface: u32) -> Self {
        Self {
            interface,
            duration: 300,
            retain_count: 0,
            base_folder: PathBuf::from(DEFAULT_BASE_FOLDER),
            tshark_path: PathBuf::from(DEFAULT_TSHARK_PATH),
        }
    }

    /// Read the configuration from `path`
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::MissingConfig(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&text)?;
        Ok(file.capture)
    }

    /// Write the configuration to `path`, replacing any existing file
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let file = ConfigFile {
            capture: self.clone(),
        };
        let text = toml::to_string_pretty(&file)?;
        fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn round_trip_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.toml");
        let config = CaptureConfig {
            interface: 4,
            duration: 120,
            retain_count: 7,
            base_folder: PathBuf::from("/tmp/cap"),
            tshark_path: PathBuf::from("/usr/bin/tshark"),
        };

        config.save(&path).unwrap();
        let loaded = CaptureConfig::load(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.toml");

        CaptureConfig::with_interface(1).save(&path).unwrap();
        CaptureConfig::with_interface(9).save(&path).unwrap();

        assert_eq!(CaptureConfig::load(&path).unwrap().interface, 9);
    }

    #[test]
    fn defaults_match_recommended_settings() {
        let config = CaptureConfig::with_interface(2);
        assert_eq!(config.interface, 2);
        assert_eq!(config.duration, 300);
        assert_eq!(config.retain_count, 0);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = CaptureConfig::load(&dir.path().join("capture.toml")).unwrap_err();
        assert!(matches!(err, AppError::MissingConfig(_)));
    }
}
