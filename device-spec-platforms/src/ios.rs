//! iOS extractor.
//!
//! iOS user agents name only the product family, so the generation is
//! inferred from the device pixel ratio and the long screen edge. The
//! inferred key stands for a group of similar models (see
//! [`DeviceSpec::maybe`](device_spec_core::DeviceSpec::maybe)).

use device_spec_core::{DeviceIdExtractor, EnvironmentSignals, OsType};

/// Logical long edge of the 3.5" screens. Anything longer is a 4" model.
const SHORT_SCREEN_LONG_EDGE: u32 = 480;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    IPad,
    IPod,
    IPhone,
}

impl Family {
    fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.contains("iPad") {
            Self::IPad
        } else if user_agent.contains("iPod") {
            Self::IPod
        } else {
            Self::IPhone
        }
    }
}

/// Extractor for iPhone, iPad and iPod touch.
#[derive(Debug, Default)]
pub struct IosExtractor;

impl IosExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DeviceIdExtractor for IosExtractor {
    fn os_type(&self) -> OsType {
        OsType::Ios
    }

    fn matches(&self, user_agent: &str) -> bool {
        ["iPhone", "iPad", "iPod"]
            .iter()
            .any(|family| user_agent.contains(family))
    }

    fn extract(&self, user_agent: &str, signals: &EnvironmentSignals) -> String {
        let dpr = signals.pixel_ratio();
        let tall = signals.long_edge() > SHORT_SCREEN_LONG_EDGE;

        let id = match Family::from_user_agent(user_agent) {
            Family::IPad if dpr == 1.0 => "iPad 2",
            Family::IPad => "iPad 3",
            Family::IPhone if dpr == 1.0 => "iPhone 3GS",
            Family::IPhone if tall => "iPhone 5",
            Family::IPhone => "iPhone 4",
            Family::IPod if tall => "iPod touch 5",
            Family::IPod if dpr == 2.0 => "iPod touch 4",
            Family::IPod => "iPod touch 3",
        };
        id.to_string()
    }
}

#[cfg(test)]
#[path = "tests/ios_tests.rs"]
mod tests;
