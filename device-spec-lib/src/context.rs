//! Platform dispatch: picks the extractor for an identifier string.

use device_spec_core::{DeviceIdExtractor, EnvironmentSignals, OsType};
use device_spec_platforms::{AndroidExtractor, GameExtractor, IosExtractor, WindowsPhoneExtractor};

/// Outcome of dispatch and extraction for one identifier string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    /// Family of the extractor that claimed the identifier, if any.
    pub os_type: Option<OsType>,
    /// Candidate catalog key. Empty if no extractor matched or the extractor
    /// could not find a model name.
    pub device_id: String,
}

impl Detection {
    pub fn is_resolved(&self) -> bool {
        !self.device_id.is_empty()
    }
}

/// Ordered registry of identifier extractors.
///
/// Extractors are tried in registration order and the first whose predicate
/// matches wins. Some identifiers could match more than one family, so the
/// order is part of the behavior.
pub struct DetectionContext {
    extractors: Vec<Box<dyn DeviceIdExtractor>>,
}

impl Default for DetectionContext {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl DetectionContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Create a context with the built-in extractors: game consoles, Android,
    /// iOS, Windows Phone.
    pub fn with_defaults() -> Self {
        let mut ctx = Self::new();
        ctx.register(GameExtractor::new());
        ctx.register(AndroidExtractor::new());
        ctx.register(IosExtractor::new());
        ctx.register(WindowsPhoneExtractor::new());
        ctx
    }

    /// Append an extractor. It is tried after every extractor registered before it.
    pub fn register<E: DeviceIdExtractor + 'static>(&mut self, extractor: E) -> &mut Self {
        self.extractors.push(Box::new(extractor));
        self
    }

    /// Get all registered extractors, in dispatch order.
    pub fn extractors(&self) -> impl Iterator<Item = &dyn DeviceIdExtractor> {
        self.extractors.iter().map(|e| e.as_ref())
    }

    /// Find the first extractor whose predicate matches.
    pub fn dispatch(&self, user_agent: &str) -> Option<&dyn DeviceIdExtractor> {
        let found = self
            .extractors
            .iter()
            .find(|e| e.matches(user_agent))
            .map(|e| e.as_ref());
        match found {
            Some(extractor) => log::debug!("dispatched to {} extractor", extractor.name()),
            None => log::debug!("no extractor matched user agent"),
        }
        found
    }

    /// Dispatch, then extract a candidate key.
    pub fn detect(&self, user_agent: &str, signals: &EnvironmentSignals) -> Detection {
        let Some(extractor) = self.dispatch(user_agent) else {
            return Detection::default();
        };
        let device_id = extractor.extract(user_agent, signals);
        log::debug!("{} extractor produced key {device_id:?}", extractor.name());
        Detection {
            os_type: Some(extractor.os_type()),
            device_id,
        }
    }
}

#[cfg(test)]
#[path = "tests/context_tests.rs"]
mod tests;
