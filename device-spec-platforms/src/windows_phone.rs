//! Windows Phone extractor.
//!
//! The model is the field after `IEMobile/x.y` inside the first parenthesized
//! segment, once platform and vendor noise has been removed:
//!
//! ```text
//! (compatible; MSIE 10.0; Windows Phone 8.0; Trident/6.0; IEMobile/10.0; ARM; Touch; NOKIA; Lumia 920)
//! (compatible; MSIE 9.0; Windows Phone OS 7.5; Trident/5.0; IEMobile/9.0; HTC; Windows Phone 8S by HTC; 1.04.163.03)
//! ```

use device_spec_core::util::remove_first_ignore_case;
use device_spec_core::{DeviceIdExtractor, EnvironmentSignals, OsType};

/// Vendor fields that precede the model name. Each is removed once,
/// case-insensitively.
const VENDOR_TOKENS: &[&str] = &[
    "LG; ",
    "ZTE; ",
    "HTC; ",
    "DELL; ",
    "ACER; ",
    "Alcatel; ",
    "NOKIA; ",
    "SAMSUNG; ",
    "FujitsuToshibaMobileCommun; ",
];

/// Extractor for Windows Phone devices.
#[derive(Debug, Default)]
pub struct WindowsPhoneExtractor;

impl WindowsPhoneExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DeviceIdExtractor for WindowsPhoneExtractor {
    fn os_type(&self) -> OsType {
        OsType::WindowsPhone
    }

    fn matches(&self, user_agent: &str) -> bool {
        user_agent.contains("Windows Phone")
    }

    fn extract(&self, user_agent: &str, _signals: &EnvironmentSignals) -> String {
        let Some(segment) = first_parenthesized(user_agent) else {
            return String::new();
        };

        let mut token = segment.replacen("ARM; ", "", 1).replacen("Touch; ", "", 1);
        for vendor in VENDOR_TOKENS {
            token = remove_first_ignore_case(&token, vendor);
        }
        let token = token
            .replace("Windows Phone ", "")
            .replacen(" by HTC", "", 1);

        token
            .split_once("IEMobile/")
            .and_then(|(_, rest)| rest.split("; ").nth(1))
            .map(|id| id.trim().to_string())
            .unwrap_or_default()
    }
}

/// Text between the first `(` and the next `)` (or the end of the string).
fn first_parenthesized(user_agent: &str) -> Option<&str> {
    let (_, rest) = user_agent.split_once('(')?;
    Some(rest.split(')').next().unwrap_or(rest))
}

#[cfg(test)]
#[path = "tests/windows_phone_tests.rs"]
mod tests;
