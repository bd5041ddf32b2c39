use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::hooks::HookTable;
use crate::lang::LangStrings;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub hooks: HookTable,
    pub lang: &'static LangStrings,
}
