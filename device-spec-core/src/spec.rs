//! The normalized device specification record.
//!
//! A `Spec` starts as a baseline (usually just the user agent) and is filled
//! in place by the identification engine. Each group mirrors one area of the
//! device profile.

use serde::{Deserialize, Serialize};

use crate::platform::OsType;
use crate::version::OsVersion;

/// Device specification record, grouped by concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    pub browser: BrowserSpec,
    pub device: DeviceSpec,
    pub os: OsSpec,
    pub cpu: CpuSpec,
    pub gpu: GpuSpec,
    pub input: InputSpec,
    pub memory: MemorySpec,
    pub display: DisplaySpec,
    pub network: NetworkSpec,
}

/// Client-supplied identification input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserSpec {
    /// Raw platform identifier, conventionally the HTTP `User-Agent` header.
    pub user_agent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSpec {
    /// Catalog key of the identified device (e.g. "SO-04D", "iPad 3"). Empty if unresolved.
    pub id: String,
    pub brand: String,
    /// SoC catalog key.
    pub soc: String,
    /// The id was inferred from display signals and may stand for a sibling model.
    pub maybe: bool,
    pub gps: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsSpec {
    /// Dispatched OS family. `None` when the identifier matched no family.
    pub os_type: Option<OsType>,
    /// OS version the device shipped with.
    pub version_pre: OsVersion,
    /// Highest OS version known to run on the device (`0.0.0` if open-ended).
    pub version_highest: OsVersion,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuSpec {
    /// Instruction-set family ("ARM", "ARM64", "ATOM"; empty for consoles).
    pub cpu_type: String,
    /// Clock speed in GHz.
    pub clock: f64,
    pub cores: u32,
    /// NEON-class SIMD available.
    pub simd: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuSpec {
    /// GPU family ("Adreno", "PowerVR", "Tegra", ...).
    pub gpu_type: String,
    /// GPU model within the family ("330", "SGX543MP3", ...).
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSpec {
    pub touch: bool,
    /// Maximum simultaneous touch points.
    pub touches: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySpec {
    /// RAM in megabytes.
    pub ram: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplaySpec {
    pub ppi: u32,
    pub dpr: f64,
    /// Diagonal size in inches.
    pub inch: f64,
    /// Long edge in physical pixels.
    pub long: u32,
    /// Short edge in physical pixels.
    pub short: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    #[serde(rename = "3g")]
    pub three_g: bool,
    pub lte: bool,
    pub nfc: bool,
    pub wifi: bool,
}

impl Spec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Baseline record carrying only a raw identifier string.
    pub fn with_user_agent(user_agent: impl Into<String>) -> Self {
        let mut spec = Self::default();
        spec.browser.user_agent = user_agent.into();
        spec
    }

    pub fn user_agent(&self) -> &str {
        &self.browser.user_agent
    }

    /// True once device data has been applied.
    pub fn is_identified(&self) -> bool {
        !self.device.id.is_empty()
    }

    /// Clear every identification result while keeping the browser input,
    /// so the record can be passed through the engine again.
    pub fn reset(&mut self) {
        let browser = std::mem::take(&mut self.browser);
        *self = Self {
            browser,
            ..Self::default()
        };
    }

    /// Render the record as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
