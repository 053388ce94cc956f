//! Game console extractor.

use device_spec_core::util::contains_ignore_case;
use device_spec_core::{DeviceIdExtractor, EnvironmentSignals, OsType};

/// Console keywords and the catalog key each maps to, checked in order.
///
/// `Xbox One` must precede `Xbox`, and `WiiU` must precede `Wii`.
pub static GAME_KEYWORDS: &[(&str, &str)] = &[
    ("PlayStation 3", "PS 3"),
    ("PlayStation 4", "PS 4"),
    ("PlayStation Vita", "PS Vita"),
    ("PlayStation Portable", "PSP"),
    ("Xbox One", "Xbox One"),
    ("Xbox", "Xbox 360"),
    ("WiiU", "Wii U"),
    ("Wii", "Wii"),
    ("3DS", "3DS"),
];

const FAMILY_MARKERS: &[&str] = &["PlayStation", "Xbox", "Nintendo"];

/// Extractor for game consoles. Matching is case-insensitive.
#[derive(Debug, Default)]
pub struct GameExtractor;

impl GameExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DeviceIdExtractor for GameExtractor {
    fn os_type(&self) -> OsType {
        OsType::Game
    }

    fn matches(&self, user_agent: &str) -> bool {
        FAMILY_MARKERS
            .iter()
            .any(|marker| contains_ignore_case(user_agent, marker))
    }

    fn extract(&self, user_agent: &str, _signals: &EnvironmentSignals) -> String {
        GAME_KEYWORDS
            .iter()
            .find(|(keyword, _)| contains_ignore_case(user_agent, keyword))
            .map(|(_, key)| key.to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "tests/game_tests.rs"]
mod tests;
