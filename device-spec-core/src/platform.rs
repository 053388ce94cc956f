use serde::{Deserialize, Serialize};

/// Operating-system families a device identifier can be dispatched to.
///
/// The serialized form is the canonical name, which is also the value
/// written into the catalog data files (`os: "Windows Phone"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OsType {
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "Android")]
    Android,
    #[serde(rename = "Windows Phone")]
    WindowsPhone,
    #[serde(rename = "Game")]
    Game,
}

impl OsType {
    /// Canonical name, as stored in the catalog and in `Spec.os.os_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "iOS",
            Self::Android => "Android",
            Self::WindowsPhone => "Windows Phone",
            Self::Game => "Game",
        }
    }

    /// Short lowercase name for log output.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::WindowsPhone => "wphone",
            Self::Game => "game",
        }
    }
}

impl std::fmt::Display for OsType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
