//! Device and SoC catalog: record types, the catalog store, and YAML/JSON
//! loading for the built-in data and runtime overlays.
//!
//! The built-in data lives in `data/`. Japanese carrier models and Windows
//! Phone models are behind the `androidjp` and `windowsphone` features
//! (both on by default).

pub mod revision;
pub mod store;
pub mod types;
pub mod yaml;

pub use store::CatalogStore;
pub use types::*;
pub use yaml::{YamlError, load_overlay_dir, load_overlay_file};
