//! Built-in revision resolvers.
//!
//! Each entry names a catalog key whose identifier is shared by more than
//! one hardware revision, and the resolver that picks the right one.

use device_spec_core::EnvironmentSignals;

use crate::types::RevisionResolver;

/// Resolvers attached by [`CatalogStore::builtin`](crate::CatalogStore::builtin).
pub static BUILTIN_REVISIONS: &[(&str, RevisionResolver)] = &[("Nexus 7", nexus_7)];

/// Both Nexus 7 generations report `Nexus 7`. Only the 2013 model runs at a
/// device pixel ratio of exactly 2; the 2012 model is 1.33.
pub fn nexus_7(_key: &str, signals: &EnvironmentSignals) -> String {
    if signals.pixel_ratio() == 2.0 {
        "Nexus 7 (2013)".to_string()
    } else {
        "Nexus 7".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nexus_7_splits_on_pixel_ratio() {
        let retina = EnvironmentSignals::new().with_device_pixel_ratio(2.0);
        let original = EnvironmentSignals::new().with_device_pixel_ratio(1.33);
        assert_eq!(nexus_7("Nexus 7", &retina), "Nexus 7 (2013)");
        assert_eq!(nexus_7("Nexus 7", &original), "Nexus 7");
        assert_eq!(nexus_7("Nexus 7", &EnvironmentSignals::new()), "Nexus 7");
    }
}
