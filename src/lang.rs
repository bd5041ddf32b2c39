/// User-facing strings for one language.
#[derive(Debug)]
pub struct LangStrings {
    pub code: &'static str,
    pub module_name: &'static str,
    pub module_description: &'static str,
    pub notify_settings_updated: &'static str,
    pub phrase_undeliverable_email_recipient: &'static str,
    pub phrase_enable_module: &'static str,
    pub phrase_smtp_server: &'static str,
    pub word_port: &'static str,
    pub phrase_requires_authentication: &'static str,
    pub word_username: &'static str,
    pub word_password: &'static str,
    pub phrase_authentication_procedure: &'static str,
    pub phrase_use_encryption: &'static str,
    pub phrase_encryption_type: &'static str,
    pub phrase_advanced_settings: &'static str,
    pub word_charset: &'static str,
    pub phrase_server_connection_timeout: &'static str,
    pub phrase_use_anti_flooding: &'static str,
    pub phrase_anti_flooding_batch_size: &'static str,
    pub phrase_anti_flooding_batch_wait_time: &'static str,
    pub word_update: &'static str,
}

pub static EN_US: LangStrings = LangStrings {
    code: "en_us",
    module_name: "Swift Mailer",
    module_description: "This module lets your configure your server's SMTP settings for Swift Mailer, letting you override the default mail() functionality used to sent emails.",
    notify_settings_updated: "The settings have been updated.",
    phrase_undeliverable_email_recipient: "Undeliverable email recipient",
    phrase_enable_module: "Enable module",
    phrase_smtp_server: "SMTP server",
    word_port: "Port",
    phrase_requires_authentication: "Requires authentication",
    word_username: "Username",
    word_password: "Password",
    phrase_authentication_procedure: "Authentication procedure",
    phrase_use_encryption: "Use encryption",
    phrase_encryption_type: "Encryption type",
    phrase_advanced_settings: "Advanced settings",
    word_charset: "Character set",
    phrase_server_connection_timeout: "Server connection timeout",
    phrase_use_anti_flooding: "Use anti-flooding",
    phrase_anti_flooding_batch_size: "Emails per batch",
    phrase_anti_flooding_batch_wait_time: "Seconds to wait between batches",
    word_update: "Update",
};

static AVAILABLE: &[&LangStrings] = &[&EN_US];

pub fn for_code(code: &str) -> Option<&'static LangStrings> {
    AVAILABLE.iter().copied().find(|l| l.code == code)
}
