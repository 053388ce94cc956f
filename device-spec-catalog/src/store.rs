//! The catalog store: a flat device mapping and a flat SoC mapping.

use device_spec_core::EnvironmentSignals;

use crate::revision::BUILTIN_REVISIONS;
use crate::types::{DeviceCatalog, DeviceRecord, Revision, SocCatalog, SocRecord};
use crate::yaml::{self, YamlError};

/// Owns the device and SoC catalogs.
///
/// Lookups borrow the store; [`merge`](Self::merge) and the `_mut` accessors
/// need exclusive access, so concurrent readers and writers must be
/// coordinated by the owner.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    devices: DeviceCatalog,
    socs: SocCatalog,
}

impl CatalogStore {
    /// Create a store from pre-built catalogs.
    pub fn new(devices: DeviceCatalog, socs: SocCatalog) -> Self {
        Self { devices, socs }
    }

    /// Load the embedded catalog data and attach the built-in revision resolvers.
    pub fn builtin() -> Result<Self, YamlError> {
        let mut store = Self::new(yaml::builtin_devices()?, yaml::builtin_socs()?);
        for &(key, resolver) in BUILTIN_REVISIONS {
            if !store.set_revision(key, Revision::Resolve(resolver)) {
                log::warn!("revision resolver for unknown device {key}");
            }
        }
        log::debug!(
            "built-in catalog: {} devices, {} SoCs",
            store.devices.len(),
            store.socs.len()
        );
        Ok(store)
    }

    pub fn lookup_device(&self, key: &str) -> Option<&DeviceRecord> {
        self.devices.get(key)
    }

    pub fn lookup_soc(&self, key: &str) -> Option<&SocRecord> {
        self.socs.get(key)
    }

    /// Check whether a device key exists.
    pub fn has(&self, key: &str) -> bool {
        self.devices.contains_key(key)
    }

    /// Check whether a SoC key exists.
    pub fn has_soc(&self, key: &str) -> bool {
        self.socs.contains_key(key)
    }

    /// Insert or overwrite device entries.
    ///
    /// Referenced SoC keys are not checked here; a dangling key surfaces when
    /// the device is projected.
    pub fn merge(&mut self, entries: impl IntoIterator<Item = (String, DeviceRecord)>) {
        let mut count = 0usize;
        for (key, record) in entries {
            self.devices.insert(key, record);
            count += 1;
        }
        log::debug!("merged {count} device entries into catalog");
    }

    /// Attach a revision rule to an existing device. Returns false if the key is unknown.
    pub fn set_revision(&mut self, key: &str, revision: Revision) -> bool {
        match self.devices.get_mut(key) {
            Some(record) => {
                record.revision = revision;
                true
            }
            None => false,
        }
    }

    /// Apply the revision rule of `key`, if any. Unknown keys are returned unchanged.
    pub fn resolve_revision(&self, key: &str, signals: &EnvironmentSignals) -> String {
        match self.devices.get(key) {
            Some(record) => record.revision.resolve(key, signals),
            None => key.to_string(),
        }
    }

    pub fn devices(&self) -> &DeviceCatalog {
        &self.devices
    }

    pub fn socs(&self) -> &SocCatalog {
        &self.socs
    }

    /// Live handle to the device mapping, for ad-hoc extension outside [`merge`](Self::merge).
    pub fn devices_mut(&mut self) -> &mut DeviceCatalog {
        &mut self.devices
    }

    /// Live handle to the SoC mapping.
    pub fn socs_mut(&mut self) -> &mut SocCatalog {
        &mut self.socs
    }
}
