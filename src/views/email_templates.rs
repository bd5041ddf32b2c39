use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse};

use crate::db;
use crate::error::AppError;
use crate::hooks::info::TemplateRead;
use crate::module;
use crate::state::SharedState;

/// Extra rows injected into the second tab of the template edit page.
/// Renders nothing while the module is not installed.
pub async fn tab2(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !db::email_templates::exists(&state.pool, id).await? {
        return Err(AppError::NotFound("Email template not found".to_string()));
    }

    if !module::is_installed(&state.pool).await? {
        return Ok(Html(String::new()));
    }

    let info = state.hooks.template_read(TemplateRead::for_template(id)).await?;
    Ok(Html(state.hooks.edit_template_tab2(&info)))
}
