pub mod email_templates;
pub mod hooks;
pub mod settings;
pub mod template_fields;
