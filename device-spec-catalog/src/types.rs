//! Data model types for the device and SoC catalogs.
//!
//! Records are loaded from the YAML files under `data/` (or from overlay
//! files) and are immutable by convention; the store replaces whole records
//! rather than editing fields.

use std::collections::HashMap;

use device_spec_core::{Connectivity, EnvironmentSignals, OsType};
use serde::{Deserialize, Serialize};

/// Device key → device record.
pub type DeviceCatalog = HashMap<String, DeviceRecord>;

/// SoC key → chip record.
pub type SocCatalog = HashMap<String, SocRecord>;

/// GPU family whose SoCs lack NEON-class SIMD.
pub const NO_SIMD_GPU: &str = "Tegra2";

// ── Device ──────────────────────────────────────────────────────────────────

/// One physical device model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub os: OsType,
    pub brand: String,
    /// Key into the SoC catalog.
    pub soc: String,
    /// OS version the device shipped with, as `major.minor.patch`.
    pub os_pre: String,
    /// Highest known OS version, as `major.minor.patch` (`0.0.0` if open-ended).
    pub os_highest: String,
    /// Display width in physical pixels. Either axis may be the long one.
    pub width: u32,
    /// Display height in physical pixels.
    pub height: u32,
    pub ppi: u32,
    pub dpr: f64,
    /// RAM in megabytes.
    pub ram: u32,
    /// Touch points, 0 for no touch screen.
    pub touches: u32,
    /// Diagonal size in inches.
    pub inch: f64,
    /// Connectivity token, e.g. `NFC_GPS_WIFI_3G_LTE`.
    pub features: String,
    /// Re-keying rule for models that share one identifier across revisions.
    #[serde(skip)]
    pub revision: Revision,
}

impl DeviceRecord {
    pub fn long_edge(&self) -> u32 {
        self.width.max(self.height)
    }

    pub fn short_edge(&self) -> u32 {
        self.width.min(self.height)
    }

    pub fn connectivity(&self) -> Connectivity {
        Connectivity::from_token(&self.features)
    }
}

// ── Revision ────────────────────────────────────────────────────────────────

/// Maps a resolved device key plus display signals to the key of the actual
/// hardware revision.
pub type RevisionResolver = fn(&str, &EnvironmentSignals) -> String;

/// Whether a catalog entry is the final answer for its key, or must be
/// re-keyed using runtime signals.
///
/// Some identifiers are shared by two hardware generations ("Nexus 7" is
/// both the 2012 and the 2013 model). The catalog lists each generation
/// under its own key and hangs a resolver off the shared one.
#[derive(Debug, Clone, Copy, Default)]
pub enum Revision {
    #[default]
    Fixed,
    Resolve(RevisionResolver),
}

impl Revision {
    /// Key to use for projection.
    pub fn resolve(&self, key: &str, signals: &EnvironmentSignals) -> String {
        match self {
            Self::Fixed => key.to_string(),
            Self::Resolve(resolver) => resolver(key, signals),
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed)
    }
}

// ── SoC ─────────────────────────────────────────────────────────────────────

/// A system-on-chip definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocRecord {
    /// Instruction-set family: "ARM", "ARM64", "ATOM", or empty when unknown.
    pub cpu: String,
    /// CPU clock in GHz.
    pub clock: f64,
    pub cores: u32,
    /// GPU family name.
    pub gpu: String,
    /// GPU model identifier within the family.
    pub gpu_id: String,
}

impl SocRecord {
    /// NEON-class SIMD support. Only [`NO_SIMD_GPU`] chips lack it.
    pub fn has_simd(&self) -> bool {
        self.gpu != NO_SIMD_GPU
    }
}
