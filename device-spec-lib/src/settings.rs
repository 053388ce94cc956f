//! Settings file lookup (overlay directory).
//!
//! The settings file is `~/.config/device-spec/settings.toml` (or the
//! platform equivalent):
//!
//! ```toml
//! [catalog]
//! overlay_dir = "/path/to/overlays"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Canonical path to the shared settings file: `~/.config/device-spec/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("device-spec").join("settings.toml")
}

/// Settings that affect how a [`Device`](crate::Device) is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Directory of YAML/JSON device overlays merged over the built-in catalog.
    pub overlay_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    catalog: CatalogSection,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogSection {
    overlay_dir: Option<PathBuf>,
}

impl Settings {
    /// Read the shared settings file. A missing or unreadable file yields defaults.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// Read settings from a specific file. A missing or unreadable file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str::<SettingsFile>(&contents) {
            Ok(file) => Self {
                overlay_dir: file
                    .catalog
                    .overlay_dir
                    .filter(|p| !p.as_os_str().is_empty()),
            },
            Err(e) => {
                log::warn!("ignoring malformed settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
