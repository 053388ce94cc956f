use thiserror::Error;

/// Errors raised while projecting catalog data onto a [`Spec`](crate::Spec).
///
/// An identifier that matches no platform or no catalog entry is not an
/// error; these variants only cover catalog entries that cannot be read.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// Device key is not present in the device catalog
    #[error("Unknown device: {0}")]
    UnknownDevice(String),

    /// SoC key referenced by a device (or requested directly) is not present
    #[error("Unknown SoC: {0}")]
    UnknownSoc(String),

    /// Catalog OS version is not a `major.minor.patch` triple
    #[error("Invalid OS version '{value}' for device {device}")]
    InvalidVersion { device: String, value: String },

    /// Catalog data could not be loaded. The source carries the file and parser detail.
    #[error("Catalog error: {0}")]
    Catalog(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DeviceError {
    pub fn unknown_device(key: impl Into<String>) -> Self {
        Self::UnknownDevice(key.into())
    }

    pub fn unknown_soc(key: impl Into<String>) -> Self {
        Self::UnknownSoc(key.into())
    }

    pub fn catalog(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Catalog(source.into())
    }
}
