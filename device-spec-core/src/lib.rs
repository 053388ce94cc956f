//! Core types shared by the device-spec crates: OS families, version
//! triples, environment signals, the output [`Spec`] record and the
//! [`DeviceIdExtractor`] trait implemented by each platform heuristic.

pub mod connectivity;
pub mod error;
pub mod platform;
pub mod signals;
pub mod spec;
pub mod util;
pub mod version;

pub use connectivity::Connectivity;
pub use error::DeviceError;
pub use platform::OsType;
pub use signals::EnvironmentSignals;
pub use spec::{
    BrowserSpec, CpuSpec, DeviceSpec, DisplaySpec, GpuSpec, InputSpec, MemorySpec, NetworkSpec,
    OsSpec, Spec,
};
pub use version::{OsVersion, VersionParseError};

/// Trait for turning a raw identifier string into a candidate device key.
///
/// One implementation exists per OS family. Implementations are pure string
/// heuristics: they never touch the catalog and never fail. An identifier
/// they cannot make sense of yields an empty key, which callers treat as
/// "unresolved, keep the defaults".
pub trait DeviceIdExtractor: Send + Sync {
    /// Returns the OS family this extractor handles.
    fn os_type(&self) -> OsType;

    /// Check whether the identifier belongs to this extractor's family.
    ///
    /// Used by the dispatcher; the first registered extractor that matches
    /// wins.
    fn matches(&self, user_agent: &str) -> bool;

    /// Extract a candidate device key from the identifier.
    ///
    /// # Arguments
    /// * `user_agent` - The raw identifier string
    /// * `signals` - Live or emulated display signals (all zero when unknown)
    ///
    /// # Returns
    /// The candidate catalog key, or an empty string if unresolved.
    fn extract(&self, user_agent: &str, signals: &EnvironmentSignals) -> String;

    /// Returns a short name for log output.
    fn name(&self) -> &'static str {
        self.os_type().short_name()
    }
}
