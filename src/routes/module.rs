use axum::extract::State;
use axum::Json;

use crate::db;
use crate::error::AppError;
use crate::module::{self, OperationResult};
use crate::state::SharedState;

pub async fn install(State(state): State<SharedState>) -> Json<OperationResult> {
    Json(module::install(&state.pool, state.config.module_id).await)
}

pub async fn uninstall(
    State(state): State<SharedState>,
) -> Result<Json<OperationResult>, AppError> {
    // Hook rows are host-owned; clear them the way the host does on uninstall.
    let hooks = db::hooks::delete_for_module(&state.pool).await?;
    tracing::debug!(hooks, "Removed hook registrations");

    let result = module::uninstall(&state.pool, state.config.module_id).await?;
    Ok(Json(result))
}
