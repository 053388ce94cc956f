//! Device identification: maps a user-agent string (or a device/SoC key) to
//! a normalized hardware [`Spec`] using an embedded catalog.
//!
//! ```no_run
//! use device_spec_lib::{Device, Spec};
//!
//! let device = Device::new()?;
//! let spec = device.identify(Spec::with_user_agent("Mozilla/5.0 (PlayStation 4 1.52)"), None)?;
//! assert_eq!(spec.device.id, "PS 4");
//! # Ok::<(), device_spec_lib::DeviceError>(())
//! ```

pub mod context;
pub mod device;
pub mod projector;
pub mod settings;

pub use context::{Detection, DetectionContext};
pub use device::{Device, Query};
pub use settings::Settings;

pub use device_spec_catalog::{CatalogStore, DeviceRecord, Revision, SocRecord};
pub use device_spec_core::{DeviceError, DeviceIdExtractor, EnvironmentSignals, OsType, Spec};
