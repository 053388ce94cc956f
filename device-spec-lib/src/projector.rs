//! Projection of catalog records onto a [`Spec`].

use device_spec_catalog::CatalogStore;
use device_spec_core::{DeviceError, EnvironmentSignals, OsVersion, Spec};

/// Keys that stand for a group of similar models rather than one exact model.
/// They are produced by signal-based inference on iOS.
const AMBIGUOUS_KEYS: &[&str] = &["iPad 2", "iPad 3", "iPhone 4", "iPhone 5", "iPod touch 5"];

/// Fill every device-derived group of `spec` from the catalog entry `key`.
///
/// Nothing is written unless the entry, its SoC and both versions are valid.
pub fn apply_device(store: &CatalogStore, key: &str, spec: &mut Spec) -> Result<(), DeviceError> {
    let device = store
        .lookup_device(key)
        .ok_or_else(|| DeviceError::unknown_device(key))?;
    let soc = store
        .lookup_soc(&device.soc)
        .ok_or_else(|| DeviceError::unknown_soc(&device.soc))?;
    let version_pre = parse_version(key, &device.os_pre)?;
    let version_highest = parse_version(key, &device.os_highest)?;
    let connectivity = device.connectivity();

    spec.device.id = key.to_string();
    spec.device.maybe = AMBIGUOUS_KEYS.iter().any(|k| key.contains(k));
    spec.device.brand = device.brand.clone();
    spec.device.soc = device.soc.clone();
    spec.device.gps = connectivity.gps;

    spec.os.os_type = Some(device.os);
    spec.os.version_pre = version_pre;
    spec.os.version_highest = version_highest;

    spec.cpu.cpu_type = soc.cpu.clone();
    spec.cpu.clock = soc.clock;
    spec.cpu.cores = soc.cores;
    spec.cpu.simd = soc.has_simd();
    spec.gpu.gpu_type = soc.gpu.clone();
    spec.gpu.id = soc.gpu_id.clone();

    spec.input.touch = device.touches > 0;
    spec.input.touches = device.touches;
    spec.memory.ram = device.ram;

    spec.display.ppi = device.ppi;
    spec.display.dpr = device.dpr;
    spec.display.inch = device.inch;
    spec.display.long = device.long_edge();
    spec.display.short = device.short_edge();

    spec.network.three_g = connectivity.three_g;
    spec.network.lte = connectivity.lte;
    spec.network.nfc = connectivity.nfc;
    spec.network.wifi = connectivity.wifi;

    Ok(())
}

/// Fill only the CPU and GPU groups from the SoC entry `key`.
pub fn apply_soc(store: &CatalogStore, key: &str, spec: &mut Spec) -> Result<(), DeviceError> {
    let soc = store
        .lookup_soc(key)
        .ok_or_else(|| DeviceError::unknown_soc(key))?;

    spec.cpu.cpu_type = soc.cpu.clone();
    spec.cpu.clock = soc.clock;
    spec.cpu.cores = soc.cores;
    spec.cpu.simd = soc.has_simd();
    spec.gpu.gpu_type = soc.gpu.clone();
    spec.gpu.id = soc.gpu_id.clone();

    Ok(())
}

/// Apply the revision rule of `key`, logging when it picks a different entry.
pub fn resolve_revision(store: &CatalogStore, key: &str, signals: &EnvironmentSignals) -> String {
    let resolved = store.resolve_revision(key, signals);
    if resolved != key {
        log::debug!("revision rule re-keyed {key:?} to {resolved:?}");
    }
    resolved
}

fn parse_version(device: &str, value: &str) -> Result<OsVersion, DeviceError> {
    value.parse().map_err(|_| DeviceError::InvalidVersion {
        device: device.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
#[path = "tests/projector_tests.rs"]
mod tests;
