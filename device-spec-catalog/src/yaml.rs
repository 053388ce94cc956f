//! Loading for human-curated catalog data.
//!
//! The built-in catalog is compiled in from the YAML files under `data/`.
//! Overlay files (YAML or JSON) extend it at runtime; each holds a mapping
//! of device key to [`DeviceRecord`].

use std::path::Path;

use device_spec_core::DeviceError;
use thiserror::Error;

use crate::types::{DeviceCatalog, SocCatalog};

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("Directory not found: {0}")]
    DirNotFound(String),
    #[error("Unsupported catalog file type: {0}")]
    Unsupported(String),
}

impl From<YamlError> for DeviceError {
    fn from(e: YamlError) -> Self {
        DeviceError::catalog(e)
    }
}

const BUILTIN_SOCS: (&str, &str) = ("socs.yaml", include_str!("../data/socs.yaml"));

/// Embedded device data files as (file name, contents).
fn builtin_device_sources() -> Vec<(&'static str, &'static str)> {
    let mut sources = vec![
        ("apple.yaml", include_str!("../data/devices/apple.yaml")),
        ("google.yaml", include_str!("../data/devices/google.yaml")),
        ("amazon.yaml", include_str!("../data/devices/amazon.yaml")),
        ("game.yaml", include_str!("../data/devices/game.yaml")),
    ];
    #[cfg(feature = "androidjp")]
    sources.extend_from_slice(&[
        ("docomo.yaml", include_str!("../data/devices/docomo.yaml")),
        ("au.yaml", include_str!("../data/devices/au.yaml")),
        ("softbank.yaml", include_str!("../data/devices/softbank.yaml")),
    ]);
    #[cfg(feature = "windowsphone")]
    sources.push((
        "windows_phone.yaml",
        include_str!("../data/devices/windows_phone.yaml"),
    ));
    sources
}

/// Parse the embedded device catalog.
pub fn builtin_devices() -> Result<DeviceCatalog, YamlError> {
    let mut devices = DeviceCatalog::new();
    for (name, contents) in builtin_device_sources() {
        devices.extend(parse_devices(name, contents)?);
    }
    Ok(devices)
}

/// Parse the embedded SoC catalog.
pub fn builtin_socs() -> Result<SocCatalog, YamlError> {
    let (name, contents) = BUILTIN_SOCS;
    parse_socs(name, contents)
}

/// Parse a YAML device mapping. `source` names the input in error messages.
pub fn parse_devices(source: &str, contents: &str) -> Result<DeviceCatalog, YamlError> {
    parse_yaml(source, contents)
}

/// Parse a YAML SoC mapping. `source` names the input in error messages.
pub fn parse_socs(source: &str, contents: &str) -> Result<SocCatalog, YamlError> {
    parse_yaml(source, contents)
}

/// Load a device-catalog overlay from a `.yaml`, `.yml` or `.json` file.
pub fn load_overlay_file(path: &Path) -> Result<DeviceCatalog, YamlError> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: display.clone(),
        source: e,
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => parse_yaml(&display, &contents),
        Some("json") => serde_json::from_str(&contents).map_err(|e| YamlError::Json {
            path: display,
            source: e,
        }),
        _ => Err(YamlError::Unsupported(display)),
    }
}

/// Load every overlay file in a directory, in file-name order.
///
/// Later files overwrite keys from earlier ones. A missing directory yields
/// an empty catalog; files with other extensions are skipped.
pub fn load_overlay_dir(dir: &Path) -> Result<DeviceCatalog, YamlError> {
    if !dir.exists() {
        return Ok(DeviceCatalog::new());
    }
    if !dir.is_dir() {
        return Err(YamlError::DirNotFound(dir.display().to_string()));
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| YamlError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml" || ext == "json")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let mut devices = DeviceCatalog::new();
    for entry in entries {
        let path = entry.path();
        let overlay = load_overlay_file(&path)?;
        log::debug!(
            "loaded {} catalog entries from {}",
            overlay.len(),
            path.display()
        );
        devices.extend(overlay);
    }

    Ok(devices)
}

fn parse_yaml<T: serde::de::DeserializeOwned>(source: &str, contents: &str) -> Result<T, YamlError> {
    serde_yml::from_str(contents).map_err(|e| YamlError::Parse {
        path: source.to_string(),
        source: e,
    })
}
