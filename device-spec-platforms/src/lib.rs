//! Identifier extractors, one per OS family.
//!
//! Each extractor turns a raw user-agent string into a candidate catalog key:
//!
//! - Game consoles (PlayStation, Xbox, Nintendo)
//! - Android
//! - iOS (iPhone, iPad, iPod touch)
//! - Windows Phone

pub mod android;
pub mod game;
pub mod ios;
pub mod windows_phone;

pub use android::AndroidExtractor;
pub use game::GameExtractor;
pub use ios::IosExtractor;
pub use windows_phone::WindowsPhoneExtractor;
