use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, PartialEq)]
pub struct TemplateMailField {
    pub email_template_id: i64,
    pub return_path: String,
}
