//! OS version triples as stored in the device catalog (`"4.2.2"`).

use serde::{Deserialize, Serialize};

/// A `major.minor.patch` OS version.
///
/// `0.0.0` is the catalog's "unknown" marker (e.g. a device whose highest
/// supported version has not been recorded yet).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl OsVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// `major.minor` as a float, for quick range comparisons (`4.1`, `7.5`).
    pub fn value(&self) -> f64 {
        format!("{}.{}", self.major, self.minor)
            .parse()
            .unwrap_or(0.0)
    }

    /// True for the `0.0.0` "unknown" marker.
    pub fn is_unknown(&self) -> bool {
        *self == Self::default()
    }
}

impl std::fmt::Display for OsVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Error returned when a version string is not three dot-separated integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionParseError(pub String);

impl std::fmt::Display for VersionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid version: '{}'", self.0)
    }
}

impl std::error::Error for VersionParseError {}

impl std::str::FromStr for OsVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || VersionParseError(s.to_string());
        let mut parts = s.trim().split('.');
        let mut next = || -> Result<u32, VersionParseError> {
            parts
                .next()
                .ok_or_else(err)?
                .parse::<u32>()
                .map_err(|_| err())
        };
        let version = Self::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(version)
    }
}
