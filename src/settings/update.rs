use std::collections::HashMap;

use crate::models::SettingName;

use super::UpdateContext;

/// Present when the relay is switched on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerSection {
    pub smtp_server: String,
    pub port: Option<String>,
}

/// Present when authentication is switched on. Absent fields keep their stored
/// value. The settings page never echoes the password back, so an empty
/// password counts as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthSection {
    pub username: Option<String>,
    pub password: Option<String>,
    pub authentication_procedure: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncryptionSection {
    pub encryption_type: Option<String>,
}

/// Only built when the session remembers the advanced panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvancedSection {
    pub server_connection_timeout: Option<String>,
    pub charset: Option<String>,
    pub use_anti_flooding: bool,
    pub anti_flooding_email_batch_size: Option<String>,
    pub anti_flooding_email_batch_wait_time: Option<String>,
}

/// A sparse settings change built from one form submission.
///
/// Each feature toggle maps to an optional section; `None` means the toggle
/// was absent from the form and only the `no` flag is written for it.
/// Values are carried verbatim, with no shape checks on ports, timeouts or
/// batch sizes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsUpdate {
    pub server: Option<ServerSection>,
    pub authentication: Option<AuthSection>,
    pub encryption: Option<EncryptionSection>,
    pub advanced: Option<AdvancedSection>,
}

impl SettingsUpdate {
    pub fn from_form(form: &HashMap<String, String>, ctx: &UpdateContext) -> Self {
        let field = |name: SettingName| form.get(name.as_str()).cloned();
        let present = |name: SettingName| form.contains_key(name.as_str());

        let server = present(SettingName::SwiftmailerEnabled).then(|| ServerSection {
            smtp_server: field(SettingName::SmtpServer).unwrap_or_default(),
            port: field(SettingName::Port),
        });

        let authentication = present(SettingName::RequiresAuthentication).then(|| AuthSection {
            username: field(SettingName::Username),
            password: field(SettingName::Password).filter(|p| !p.is_empty()),
            authentication_procedure: field(SettingName::AuthenticationProcedure),
        });

        let encryption = present(SettingName::UseEncryption).then(|| EncryptionSection {
            encryption_type: field(SettingName::EncryptionType),
        });

        let advanced = ctx.remember_advanced_settings.then(|| AdvancedSection {
            server_connection_timeout: field(SettingName::ServerConnectionTimeout),
            charset: field(SettingName::Charset),
            use_anti_flooding: present(SettingName::UseAntiFlooding),
            anti_flooding_email_batch_size: field(SettingName::AntiFloodingEmailBatchSize),
            anti_flooding_email_batch_wait_time: field(SettingName::AntiFloodingEmailBatchWaitTime),
        });

        Self {
            server,
            authentication,
            encryption,
            advanced,
        }
    }

    /// The settings this update touches, in form order. Anything not listed
    /// keeps its stored value.
    pub fn changes(&self) -> Vec<(SettingName, String)> {
        let mut changes = vec![
            (SettingName::SwiftmailerEnabled, yes_no(self.server.is_some())),
            (
                SettingName::RequiresAuthentication,
                yes_no(self.authentication.is_some()),
            ),
            (SettingName::UseEncryption, yes_no(self.encryption.is_some())),
        ];

        if let Some(server) = &self.server {
            changes.push((SettingName::SmtpServer, server.smtp_server.clone()));
            push_some(&mut changes, SettingName::Port, &server.port);
        }

        if let Some(auth) = &self.authentication {
            push_some(&mut changes, SettingName::Username, &auth.username);
            push_some(&mut changes, SettingName::Password, &auth.password);
            push_some(
                &mut changes,
                SettingName::AuthenticationProcedure,
                &auth.authentication_procedure,
            );
        }

        if let Some(encryption) = &self.encryption {
            push_some(&mut changes, SettingName::EncryptionType, &encryption.encryption_type);
        }

        if let Some(advanced) = &self.advanced {
            push_some(
                &mut changes,
                SettingName::ServerConnectionTimeout,
                &advanced.server_connection_timeout,
            );
            push_some(&mut changes, SettingName::Charset, &advanced.charset);
            changes.push((SettingName::UseAntiFlooding, yes_no(advanced.use_anti_flooding)));
            push_some(
                &mut changes,
                SettingName::AntiFloodingEmailBatchSize,
                &advanced.anti_flooding_email_batch_size,
            );
            push_some(
                &mut changes,
                SettingName::AntiFloodingEmailBatchWaitTime,
                &advanced.anti_flooding_email_batch_wait_time,
            );
        }

        changes
    }
}

fn yes_no(flag: bool) -> String {
    let value = if flag { "yes" } else { "no" };
    value.to_string()
}

fn push_some(changes: &mut Vec<(SettingName, String)>, name: SettingName, value: &Option<String>) {
    if let Some(value) = value {
        changes.push((name, value.clone()));
    }
}
