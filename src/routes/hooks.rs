use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::hooks::info::{TemplateCreated, TemplateDeleted, TemplateRead, TemplateUpdated};
use crate::module::{self, OperationResult};
use crate::state::SharedState;

/// Host bindings are gone once the module is uninstalled.
async fn require_installed(state: &SharedState) -> Result<(), AppError> {
    if module::is_installed(&state.pool).await? {
        Ok(())
    } else {
        Err(AppError::NotInstalled)
    }
}

pub async fn template_created(
    State(state): State<SharedState>,
    Json(info): Json<TemplateCreated>,
) -> Result<Json<OperationResult>, AppError> {
    require_installed(&state).await?;
    state.hooks.template_created(&info).await?;
    Ok(Json(OperationResult::ok("")))
}

pub async fn template_deleted(
    State(state): State<SharedState>,
    Json(info): Json<TemplateDeleted>,
) -> Result<Json<OperationResult>, AppError> {
    require_installed(&state).await?;
    state.hooks.template_deleted(&info).await?;
    Ok(Json(OperationResult::ok("")))
}

pub async fn template_updated(
    State(state): State<SharedState>,
    Json(info): Json<TemplateUpdated>,
) -> Result<Json<OperationResult>, AppError> {
    require_installed(&state).await?;
    state.hooks.template_updated(&info).await?;
    Ok(Json(OperationResult::ok("")))
}

pub async fn template_read(
    State(state): State<SharedState>,
    Json(info): Json<TemplateRead>,
) -> Result<Json<TemplateRead>, AppError> {
    require_installed(&state).await?;
    let info = state.hooks.template_read(info).await?;
    Ok(Json(info))
}
