use serde::{Deserialize, Serialize};

/// A row of the host `hooks` table.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct HookRegistration {
    pub id: i64,
    pub hook_type: String,
    pub module_folder: String,
    pub action_location: String,
    pub function_name: String,
    pub hook_function: String,
}
