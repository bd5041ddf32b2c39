mod context;
mod update;

pub use context::{REMEMBER_ADVANCED_COOKIE, UpdateContext};
pub use update::{AdvancedSection, AuthSection, EncryptionSection, ServerSection, SettingsUpdate};
