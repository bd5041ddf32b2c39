use serde::{Deserialize, Serialize};

/// Module folder name used to scope rows in the host `settings` table.
pub const MODULE_FOLDER: &str = "swift_mailer";

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Setting {
    pub setting_name: String,
    pub setting_value: String,
    pub module: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingName {
    SwiftmailerEnabled,
    SmtpServer,
    Port,
    RequiresAuthentication,
    Username,
    Password,
    AuthenticationProcedure,
    UseEncryption,
    EncryptionType,
    Charset,
    ServerConnectionTimeout,
    UseAntiFlooding,
    AntiFloodingEmailBatchSize,
    AntiFloodingEmailBatchWaitTime,
}

impl SettingName {
    pub const ALL: [SettingName; 14] = [
        SettingName::SwiftmailerEnabled,
        SettingName::SmtpServer,
        SettingName::Port,
        SettingName::RequiresAuthentication,
        SettingName::Username,
        SettingName::Password,
        SettingName::AuthenticationProcedure,
        SettingName::UseEncryption,
        SettingName::EncryptionType,
        SettingName::Charset,
        SettingName::ServerConnectionTimeout,
        SettingName::UseAntiFlooding,
        SettingName::AntiFloodingEmailBatchSize,
        SettingName::AntiFloodingEmailBatchWaitTime,
    ];

    /// Column value in `settings.setting_name`, also the form field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingName::SwiftmailerEnabled => "swiftmailer_enabled",
            SettingName::SmtpServer => "smtp_server",
            SettingName::Port => "port",
            SettingName::RequiresAuthentication => "requires_authentication",
            SettingName::Username => "username",
            SettingName::Password => "password",
            SettingName::AuthenticationProcedure => "authentication_procedure",
            SettingName::UseEncryption => "use_encryption",
            SettingName::EncryptionType => "encryption_type",
            SettingName::Charset => "charset",
            SettingName::ServerConnectionTimeout => "server_connection_timeout",
            SettingName::UseAntiFlooding => "use_anti_flooding",
            SettingName::AntiFloodingEmailBatchSize => "anti_flooding_email_batch_size",
            SettingName::AntiFloodingEmailBatchWaitTime => "anti_flooding_email_batch_wait_time",
        }
    }

    /// Value seeded at install time.
    pub fn default_value(&self) -> &'static str {
        match self {
            SettingName::SwiftmailerEnabled => "no",
            SettingName::RequiresAuthentication => "no",
            SettingName::Charset => "UTF-8",
            SettingName::ServerConnectionTimeout => "15",
            _ => "",
        }
    }

    pub fn parse(name: &str) -> Option<SettingName> {
        SettingName::ALL.into_iter().find(|n| n.as_str() == name)
    }
}

impl std::fmt::Display for SettingName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully loaded module configuration. Values are kept exactly as stored;
/// nothing here is validated or parsed.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SmtpSettings {
    pub swiftmailer_enabled: String,
    pub smtp_server: String,
    pub port: String,
    pub requires_authentication: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub authentication_procedure: String,
    pub use_encryption: String,
    pub encryption_type: String,
    pub charset: String,
    pub server_connection_timeout: String,
    pub use_anti_flooding: String,
    pub anti_flooding_email_batch_size: String,
    pub anti_flooding_email_batch_wait_time: String,
}

impl SmtpSettings {
    /// Build from stored rows. Unknown names are ignored, missing ones stay empty.
    pub fn from_rows(rows: &[Setting]) -> Self {
        let mut settings = SmtpSettings::default();
        for row in rows {
            if let Some(name) = SettingName::parse(&row.setting_name) {
                *settings.field_mut(name) = row.setting_value.clone();
            }
        }
        settings
    }

    pub fn get(&self, name: SettingName) -> &str {
        match name {
            SettingName::SwiftmailerEnabled => &self.swiftmailer_enabled,
            SettingName::SmtpServer => &self.smtp_server,
            SettingName::Port => &self.port,
            SettingName::RequiresAuthentication => &self.requires_authentication,
            SettingName::Username => &self.username,
            SettingName::Password => &self.password,
            SettingName::AuthenticationProcedure => &self.authentication_procedure,
            SettingName::UseEncryption => &self.use_encryption,
            SettingName::EncryptionType => &self.encryption_type,
            SettingName::Charset => &self.charset,
            SettingName::ServerConnectionTimeout => &self.server_connection_timeout,
            SettingName::UseAntiFlooding => &self.use_anti_flooding,
            SettingName::AntiFloodingEmailBatchSize => &self.anti_flooding_email_batch_size,
            SettingName::AntiFloodingEmailBatchWaitTime => {
                &self.anti_flooding_email_batch_wait_time
            }
        }
    }

    fn field_mut(&mut self, name: SettingName) -> &mut String {
        match name {
            SettingName::SwiftmailerEnabled => &mut self.swiftmailer_enabled,
            SettingName::SmtpServer => &mut self.smtp_server,
            SettingName::Port => &mut self.port,
            SettingName::RequiresAuthentication => &mut self.requires_authentication,
            SettingName::Username => &mut self.username,
            SettingName::Password => &mut self.password,
            SettingName::AuthenticationProcedure => &mut self.authentication_procedure,
            SettingName::UseEncryption => &mut self.use_encryption,
            SettingName::EncryptionType => &mut self.encryption_type,
            SettingName::Charset => &mut self.charset,
            SettingName::ServerConnectionTimeout => &mut self.server_connection_timeout,
            SettingName::UseAntiFlooding => &mut self.use_anti_flooding,
            SettingName::AntiFloodingEmailBatchSize => &mut self.anti_flooding_email_batch_size,
            SettingName::AntiFloodingEmailBatchWaitTime => {
                &mut self.anti_flooding_email_batch_wait_time
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.swiftmailer_enabled == "yes"
    }

    pub fn requires_authentication(&self) -> bool {
        self.requires_authentication == "yes"
    }

    pub fn uses_encryption(&self) -> bool {
        self.use_encryption == "yes"
    }

    pub fn uses_anti_flooding(&self) -> bool {
        self.use_anti_flooding == "yes"
    }
}
