use serde::{Deserialize, Serialize};

/// Runtime display values used to tell apart hardware generations that share
/// one identifier string.
///
/// In a browser these come from `screen.width`, `screen.height` and
/// `devicePixelRatio`; callers emulating another device supply them directly.
/// Zero means "not available".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSignals {
    pub screen_width: u32,
    pub screen_height: u32,
    pub device_pixel_ratio: f64,
}

impl EnvironmentSignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_screen(mut self, width: u32, height: u32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    /// Device pixel ratio, defaulting to `1.0` when unknown.
    pub fn pixel_ratio(&self) -> f64 {
        if self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        }
    }

    /// Longest screen edge in logical pixels (`0` when unknown).
    pub fn long_edge(&self) -> u32 {
        self.screen_width.max(self.screen_height)
    }
}
