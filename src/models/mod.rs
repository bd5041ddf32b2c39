mod hook;
mod setting;
mod template_field;

pub use hook::HookRegistration;
pub use setting::{MODULE_FOLDER, Setting, SettingName, SmtpSettings};
pub use template_field::TemplateMailField;
