use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload of the host's blank-template creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateCreated {
    pub email_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDeleted {
    pub email_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateUpdated {
    pub email_id: i64,
    pub info: TemplateForm,
}

/// The submitted edit form. Host fields the module does not own pass through.
/// The return path is required; a payload without it is rejected rather than
/// clearing the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateForm {
    pub swift_mailer_return_path: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Result of the host's template lookup, as handed to read hooks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateRead {
    pub email_template: EmailTemplate,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TemplateRead {
    pub fn for_template(email_id: i64) -> Self {
        Self {
            email_template: EmailTemplate {
                email_id,
                swift_mailer_settings: None,
                fields: Map::new(),
            },
            extra: Map::new(),
        }
    }

    /// Attached return path. `None` both before the read hook ran and when
    /// the template has no mapped row.
    pub fn return_path(&self) -> Option<&str> {
        self.email_template
            .swift_mailer_settings
            .as_ref()
            .and_then(|s| s.return_path.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub email_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_mailer_settings: Option<MailerTemplateSettings>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MailerTemplateSettings {
    pub return_path: Option<String>,
}
