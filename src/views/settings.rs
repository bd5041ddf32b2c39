use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::error::AppError;
use crate::lang::LangStrings;
use crate::models::SmtpSettings;
use crate::module;
use crate::settings::UpdateContext;
use crate::state::SharedState;

const AUTH_PROCEDURES: &[&str] = &["LOGIN", "PLAIN", "CRAMMD5"];
const ENCRYPTION_TYPES: &[&str] = &["SSL", "TLS"];

struct SelectOption {
    value: &'static str,
    selected: bool,
}

fn options(values: &[&'static str], current: &str) -> Vec<SelectOption> {
    values
        .iter()
        .map(|&value| SelectOption {
            value,
            selected: value == current,
        })
        .collect()
}

#[derive(Template)]
#[template(path = "settings/index.html")]
struct SettingsTemplate {
    l: &'static LangStrings,
    settings: SmtpSettings,
    show_advanced: bool,
    auth_procedures: Vec<SelectOption>,
    encryption_types: Vec<SelectOption>,
}

pub async fn index(
    State(state): State<SharedState>,
    ctx: UpdateContext,
) -> Result<impl IntoResponse, AppError> {
    let settings = module::load_settings(&state.pool).await?;

    let template = SettingsTemplate {
        l: state.lang,
        auth_procedures: options(AUTH_PROCEDURES, &settings.authentication_procedure),
        encryption_types: options(ENCRYPTION_TYPES, &settings.encryption_type),
        settings,
        show_advanced: ctx.remember_advanced_settings,
    };
    Ok(Html(template.render().unwrap_or_default()))
}
