use device_spec_catalog::{CatalogStore, DeviceRecord, NO_SIMD_GPU, Revision};
use device_spec_core::{EnvironmentSignals, OsType, OsVersion};

fn builtin() -> CatalogStore {
    CatalogStore::builtin().unwrap()
}

fn test_device(ram: u32) -> DeviceRecord {
    DeviceRecord {
        os: OsType::Android,
        brand: "Acme".to_string(),
        soc: "MSM8974".to_string(),
        os_pre: "4.4.0".to_string(),
        os_highest: "0.0.0".to_string(),
        width: 1080,
        height: 1920,
        ppi: 441,
        dpr: 3.0,
        ram,
        touches: 10,
        inch: 5.0,
        features: "GPS_WIFI_3G_LTE".to_string(),
        revision: Revision::Fixed,
    }
}

#[test]
fn builtin_catalog_loads() {
    let store = builtin();
    assert!(store.has("iPad 3"));
    assert!(store.has("PS 4"));
    assert!(store.has_soc("A6"));
    assert!(!store.has("nonexistent-key"));
    assert!(store.lookup_device("nonexistent-key").is_none());
}

#[test]
fn every_device_references_a_known_soc() {
    let store = builtin();
    for (key, device) in store.devices() {
        assert!(
            store.has_soc(&device.soc),
            "{key} references unknown SoC {}",
            device.soc
        );
    }
}

#[test]
fn every_device_version_parses() {
    let store = builtin();
    for (key, device) in store.devices() {
        assert!(device.os_pre.parse::<OsVersion>().is_ok(), "{key}: {}", device.os_pre);
        assert!(
            device.os_highest.parse::<OsVersion>().is_ok(),
            "{key}: {}",
            device.os_highest
        );
    }
}

#[test]
fn simd_is_missing_only_on_tegra2() {
    let store = builtin();
    for soc in store.socs().values() {
        assert_eq!(soc.has_simd(), soc.gpu != NO_SIMD_GPU);
    }
    assert!(!store.lookup_soc("T20").unwrap().has_simd());
    assert!(store.lookup_soc("T30L").unwrap().has_simd());
}

#[test]
fn nexus_7_carries_revision_resolver() {
    let store = builtin();
    assert!(!store.lookup_device("Nexus 7").unwrap().revision.is_fixed());
    assert!(store.lookup_device("Nexus 7 (2013)").unwrap().revision.is_fixed());

    let retina = EnvironmentSignals::new().with_device_pixel_ratio(2.0);
    assert_eq!(store.resolve_revision("Nexus 7", &retina), "Nexus 7 (2013)");
    assert_eq!(
        store.resolve_revision("Nexus 7", &EnvironmentSignals::new()),
        "Nexus 7"
    );
    assert_eq!(store.resolve_revision("iPad 3", &retina), "iPad 3");
    assert_eq!(store.resolve_revision("nonexistent-key", &retina), "nonexistent-key");
}

#[test]
fn merge_inserts_and_overwrites() {
    let mut store = builtin();
    let before = store.devices().len();

    store.merge([("Acme One".to_string(), test_device(2048))]);
    assert_eq!(store.devices().len(), before + 1);
    assert_eq!(store.lookup_device("Acme One").unwrap().ram, 2048);

    store.merge([("Acme One".to_string(), test_device(4096))]);
    assert_eq!(store.devices().len(), before + 1);
    assert_eq!(store.lookup_device("Acme One").unwrap().ram, 4096);
}

#[test]
fn set_revision_requires_known_key() {
    fn always_first(_key: &str, _signals: &EnvironmentSignals) -> String {
        "Acme One".to_string()
    }

    let mut store = CatalogStore::default();
    assert!(!store.set_revision("Acme One", Revision::Resolve(always_first)));

    store.merge([("Acme One".to_string(), test_device(1024))]);
    store.merge([("Acme Two".to_string(), test_device(1024))]);
    assert!(store.set_revision("Acme Two", Revision::Resolve(always_first)));
    assert_eq!(
        store.resolve_revision("Acme Two", &EnvironmentSignals::new()),
        "Acme One"
    );
}

#[test]
fn mutable_handles_edit_in_place() {
    let mut store = CatalogStore::default();
    store.devices_mut().insert("Acme One".to_string(), test_device(512));
    store.socs_mut().remove("nothing");
    assert!(store.has("Acme One"));
    assert!(store.socs().is_empty());
}

#[test]
fn edges_ignore_orientation() {
    let device = test_device(0);
    assert_eq!(device.long_edge(), 1920);
    assert_eq!(device.short_edge(), 1080);
    let conn = device.connectivity();
    assert!(conn.gps && conn.lte && !conn.nfc);
}

#[cfg(feature = "androidjp")]
#[test]
fn japanese_carrier_models_present() {
    let store = builtin();
    let xperia = store.lookup_device("SO-04D").unwrap();
    assert_eq!(xperia.brand, "SONY");
    assert_eq!(xperia.os, OsType::Android);
}

#[cfg(feature = "windowsphone")]
#[test]
fn windows_phone_models_present() {
    let store = builtin();
    assert_eq!(store.lookup_device("Lumia 920").unwrap().os, OsType::WindowsPhone);
    assert!(store.has("8S"));
}
