use std::collections::HashMap;

use axum::extract::State;
use axum::{Form, Json};
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::SmtpSettings;
use crate::module::{self, MODULE_INFO, ModuleInfo, OperationResult};
use crate::settings::{REMEMBER_ADVANCED_COOKIE, UpdateContext};
use crate::state::SharedState;

#[derive(Serialize)]
pub struct SettingsResponse {
    pub module: ModuleInfo,
    pub settings: SmtpSettings,
    pub remember_advanced_settings: bool,
}

#[derive(Deserialize)]
pub struct AdvancedToggle {
    pub remember: bool,
}

#[derive(Serialize)]
pub struct AdvancedResponse {
    pub remember_advanced_settings: bool,
}

pub async fn get_settings(
    State(state): State<SharedState>,
    ctx: UpdateContext,
) -> Result<Json<SettingsResponse>, AppError> {
    let settings = module::load_settings(&state.pool).await?;
    Ok(Json(SettingsResponse {
        module: MODULE_INFO,
        settings,
        remember_advanced_settings: ctx.remember_advanced_settings,
    }))
}

/// Form fields are read by presence: an unchecked checkbox is simply missing.
pub async fn update_settings(
    State(state): State<SharedState>,
    ctx: UpdateContext,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Json<OperationResult>, AppError> {
    let result = module::update_settings(&state.pool, &form, &ctx, state.lang).await?;
    Ok(Json(result))
}

pub async fn set_advanced(
    jar: CookieJar,
    Json(req): Json<AdvancedToggle>,
) -> (CookieJar, Json<AdvancedResponse>) {
    let jar = if req.remember {
        let cookie = Cookie::build((REMEMBER_ADVANCED_COOKIE, "yes"))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        jar.add(cookie)
    } else {
        jar.remove(Cookie::build(REMEMBER_ADVANCED_COOKIE).path("/"))
    };

    (
        jar,
        Json(AdvancedResponse {
            remember_advanced_settings: req.remember,
        }),
    )
}
