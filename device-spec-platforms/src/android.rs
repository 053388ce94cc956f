//! Android extractor.
//!
//! The model name sits in the last `;` field before `Build/`:
//!
//! ```text
//! Mozilla/5.0 (Linux; U; Android 4.0.4; ja-jp; SonySO-04D Build/7.0.D.1.117) ...
//!                                               ^^^^^^^^^^
//! ```

use device_spec_core::{DeviceIdExtractor, EnvironmentSignals, OsType};

/// Extractor for Android devices.
#[derive(Debug, Default)]
pub struct AndroidExtractor;

impl AndroidExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DeviceIdExtractor for AndroidExtractor {
    fn os_type(&self) -> OsType {
        OsType::Android
    }

    fn matches(&self, user_agent: &str) -> bool {
        user_agent.contains("Android")
    }

    fn extract(&self, user_agent: &str, _signals: &EnvironmentSignals) -> String {
        let head = user_agent.split("Build/").next().unwrap_or_default();
        let id = head.rsplit(';').next().unwrap_or_default().trim();
        strip_sony_prefix(id).to_string()
    }
}

/// Sony phones report `SonySO-04D` or `SonyEricssonSO-01C`; the catalog uses
/// the bare carrier model. Tablets (`Sony Tablet S`) keep the full name.
fn strip_sony_prefix(id: &str) -> &str {
    match id.strip_prefix("Sony") {
        Some(rest) if !id.contains("Tablet") => rest.strip_prefix("Ericsson").unwrap_or(rest),
        _ => id,
    }
}

#[cfg(test)]
#[path = "tests/android_tests.rs"]
mod tests;
