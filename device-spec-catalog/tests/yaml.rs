use device_spec_catalog::yaml::{parse_devices, parse_socs};
use device_spec_catalog::{YamlError, load_overlay_dir, load_overlay_file};
use device_spec_core::{DeviceError, OsType};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn parse_device_flow_mapping() {
    let devices = parse_devices(
        "inline",
        r#"
"Nexus 4": { os: "Android", brand: "Google", soc: "APQ8064", os_pre: "4.2.0", os_highest: "0.0.0", width: 768, height: 1280, ppi: 318, dpr: 2, ram: 2048, touches: 5, inch: 4.7, features: NFC_GPS_WIFI_3G_LTE }
"#,
    )
    .unwrap();

    let nexus = &devices["Nexus 4"];
    assert_eq!(nexus.os, OsType::Android);
    assert_eq!(nexus.brand, "Google");
    assert_eq!(nexus.dpr, 2.0);
    assert_eq!(nexus.inch, 4.7);
    assert_eq!(nexus.long_edge(), 1280);
    assert!(nexus.revision.is_fixed());
}

#[test]
fn parse_soc_mapping() {
    let socs = parse_socs(
        "inline",
        r#"
T20: { cpu: ARM, clock: 1.0, cores: 2, gpu: Tegra2, gpu_id: T20 }
A6: { cpu: ARM, clock: 1.3, cores: 2, gpu: PowerVR, gpu_id: SGX543MP3 }
"#,
    )
    .unwrap();
    assert_eq!(socs.len(), 2);
    assert!(!socs["T20"].has_simd());
    assert!(socs["A6"].has_simd());
}

#[test]
fn parse_error_names_source() {
    let err = parse_devices("broken.yaml", "key: { os: Symbian }").unwrap_err();
    assert!(matches!(err, YamlError::Parse { ref path, .. } if path == "broken.yaml"));
}

#[test]
fn load_yaml_and_json_overlays() {
    let tmp = TempDir::new().unwrap();
    write_file(
        tmp.path(),
        "10-phones.yaml",
        r#"
"My Phone": { os: "Android", brand: "Acme", soc: "MSM8974", os_pre: "4.4.0", os_highest: "4.4.0", width: 1080, height: 1920, ppi: 441, dpr: 3, ram: 2048, touches: 10, inch: 5, features: GPS_WIFI_3G_LTE }
"#,
    );
    write_file(
        tmp.path(),
        "20-tablets.json",
        r#"{
  "My Tablet": { "os": "Android", "brand": "Acme", "soc": "APQ8064", "os_pre": "4.3.0", "os_highest": "0.0.0",
                 "width": 1200, "height": 1920, "ppi": 323, "dpr": 2, "ram": 2048, "touches": 10, "inch": 7,
                 "features": "WIFI" }
}"#,
    );
    write_file(tmp.path(), "notes.txt", "ignored");

    let devices = load_overlay_dir(tmp.path()).unwrap();
    assert_eq!(devices.len(), 2);
    assert_eq!(devices["My Phone"].touches, 10);
    assert_eq!(devices["My Tablet"].features, "WIFI");
}

#[test]
fn later_overlay_files_win() {
    let tmp = TempDir::new().unwrap();
    let entry = |ram: u32| {
        format!(
            r#""X": {{ os: "Game", brand: "Acme", soc: "LowSpec", os_pre: "0.0.0", os_highest: "0.0.0", width: 0, height: 0, ppi: 0, dpr: 0, ram: {ram}, touches: 0, inch: 0, features: WIFI }}"#
        )
    };
    write_file(tmp.path(), "a.yaml", &entry(64));
    write_file(tmp.path(), "b.yaml", &entry(128));

    let devices = load_overlay_dir(tmp.path()).unwrap();
    assert_eq!(devices["X"].ram, 128);
}

#[test]
fn unsupported_extension_is_rejected() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "devices.toml", "");
    let err = load_overlay_file(&tmp.path().join("devices.toml")).unwrap_err();
    assert!(matches!(err, YamlError::Unsupported(_)));
}

#[test]
fn missing_dir_returns_empty() {
    let tmp = TempDir::new().unwrap();
    let result = load_overlay_dir(&tmp.path().join("nonexistent")).unwrap();
    assert!(result.is_empty());
}

#[test]
fn file_instead_of_dir_is_an_error() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "a.yaml", "{}");
    let err = load_overlay_dir(&tmp.path().join("a.yaml")).unwrap_err();
    assert!(matches!(err, YamlError::DirNotFound(_)));
}

#[test]
fn device_error_keeps_yaml_source() {
    let err: DeviceError = parse_devices("broken.yaml", "key: { os: Symbian }")
        .unwrap_err()
        .into();
    assert!(err.to_string().contains("broken.yaml"));

    let source = std::error::Error::source(&err).unwrap();
    let yaml = source.downcast_ref::<YamlError>().unwrap();
    assert!(matches!(yaml, YamlError::Parse { path, .. } if path == "broken.yaml"));
}
