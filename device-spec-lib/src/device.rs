//! The identification facade.

use device_spec_catalog::{CatalogStore, DeviceRecord, load_overlay_dir};
use device_spec_core::{DeviceError, EnvironmentSignals, Spec};

use crate::context::DetectionContext;
use crate::projector;
use crate::settings::Settings;

/// What to identify.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// A device key, or failing that a SoC key.
    Id(String),
    /// A record whose `browser.user_agent` is run through detection.
    Spec(Spec),
}

impl From<&str> for Query {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for Query {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl From<Spec> for Query {
    fn from(spec: Spec) -> Self {
        Self::Spec(spec)
    }
}

/// Device identification engine: a catalog plus the extractors that map
/// identifier strings onto it.
///
/// This is the main entry point for using the library.
pub struct Device {
    catalog: CatalogStore,
    context: DetectionContext,
}

impl Device {
    /// Engine over the built-in catalog.
    pub fn new() -> Result<Self, DeviceError> {
        Ok(Self::with_catalog(CatalogStore::builtin()?))
    }

    /// Engine over a caller-supplied catalog.
    pub fn with_catalog(catalog: CatalogStore) -> Self {
        Self {
            catalog,
            context: DetectionContext::with_defaults(),
        }
    }

    /// Engine over the built-in catalog extended with the overlay directory
    /// named in `settings`, if any.
    pub fn from_settings(settings: &Settings) -> Result<Self, DeviceError> {
        let mut device = Self::new()?;
        if let Some(dir) = &settings.overlay_dir {
            let overlay = load_overlay_dir(dir)?;
            log::debug!("applying {} overlay entries from {}", overlay.len(), dir.display());
            device.add_catalog_entries(overlay);
        }
        Ok(device)
    }

    /// Identify a device.
    ///
    /// - `Query::Id`: a device key gets the full device projection, a SoC key
    ///   only the CPU and GPU groups, anything else an empty record.
    /// - `Query::Spec`: the user agent is dispatched to an extractor and the
    ///   candidate key, after any revision rule, is projected. The OS type is
    ///   set whenever an extractor claims the user agent, even if no catalog
    ///   entry is found.
    ///
    /// `signals` defaults to all zeros. An identifier that matches nothing is
    /// not an error; errors only report broken catalog entries.
    pub fn identify(
        &self,
        query: impl Into<Query>,
        signals: Option<&EnvironmentSignals>,
    ) -> Result<Spec, DeviceError> {
        match query.into() {
            Query::Id(id) => self.identify_id(&id),
            Query::Spec(spec) => {
                let signals = signals.copied().unwrap_or_default();
                self.identify_spec(spec, &signals)
            }
        }
    }

    fn identify_id(&self, id: &str) -> Result<Spec, DeviceError> {
        let mut spec = Spec::new();
        if self.catalog.has(id) {
            projector::apply_device(&self.catalog, id, &mut spec)?;
        } else if self.catalog.has_soc(id) {
            projector::apply_soc(&self.catalog, id, &mut spec)?;
        }
        Ok(spec)
    }

    fn identify_spec(&self, mut spec: Spec, signals: &EnvironmentSignals) -> Result<Spec, DeviceError> {
        let detection = self.context.detect(spec.user_agent(), signals);
        spec.os.os_type = detection.os_type;

        if !self.catalog.has(&detection.device_id) {
            if detection.is_resolved() {
                log::debug!("no catalog entry for {:?}", detection.device_id);
            }
            return Ok(spec);
        }

        let key = projector::resolve_revision(&self.catalog, &detection.device_id, signals);
        if !self.catalog.has(&key) {
            log::warn!(
                "revision rule for {:?} produced unknown key {key:?}",
                detection.device_id
            );
            return Err(DeviceError::unknown_device(key));
        }
        projector::apply_device(&self.catalog, &key, &mut spec)?;
        Ok(spec)
    }

    /// Insert or overwrite device entries.
    pub fn add_catalog_entries(&mut self, entries: impl IntoIterator<Item = (String, DeviceRecord)>) {
        self.catalog.merge(entries);
    }

    /// Check whether a device key exists.
    pub fn has_device(&self, key: &str) -> bool {
        self.catalog.has(key)
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    pub fn context(&self) -> &DetectionContext {
        &self.context
    }

    /// Access the dispatcher, e.g. to register additional extractors.
    pub fn context_mut(&mut self) -> &mut DetectionContext {
        &mut self.context
    }
}

#[cfg(test)]
#[path = "tests/device_tests.rs"]
mod tests;
