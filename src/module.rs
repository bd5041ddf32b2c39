use std::collections::HashMap;

use serde::Serialize;
use sqlx::{SqliteConnection, SqlitePool};

use crate::db;
use crate::hooks::HookPoint;
use crate::lang::LangStrings;
use crate::models::{MODULE_FOLDER, SettingName, SmtpSettings};
use crate::settings::{SettingsUpdate, UpdateContext};

#[derive(Debug, Clone, Serialize)]
pub struct ModuleInfo {
    pub name: &'static str,
    pub folder: &'static str,
    pub version: &'static str,
    pub date: &'static str,
    pub author: &'static str,
    pub author_email: &'static str,
    pub author_link: &'static str,
    pub origin_language: &'static str,
}

pub const MODULE_INFO: ModuleInfo = ModuleInfo {
    name: "Swift Mailer",
    folder: MODULE_FOLDER,
    version: "2.0.0",
    date: "2017-10-24",
    author: "Ben Keen",
    author_email: "ben.keen@gmail.com",
    author_link: "https://formtools.org",
    origin_language: "en_us",
};

/// Success flag plus a user-facing message, as reported back to the host.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OperationResult {
    pub success: bool,
    pub message: String,
}

impl OperationResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Seeds settings, creates the return-path table, records hook bindings and
/// maps every existing template. All or nothing: any storage failure rolls
/// the whole install back and is reported in the result.
pub async fn install(pool: &SqlitePool, module_id: i64) -> OperationResult {
    match try_install(pool).await {
        Ok(templates) => {
            tracing::info!(module_id, templates, "Installed {}", MODULE_INFO.name);
            OperationResult::ok("")
        }
        Err(e) => {
            tracing::error!(module_id, "Install failed, rolled back: {e}");
            OperationResult::failed(e.to_string())
        }
    }
}

async fn try_install(pool: &SqlitePool) -> Result<usize, sqlx::Error> {
    let mut tx = pool.begin().await?;

    match seed(&mut *tx).await {
        Ok(templates) => {
            tx.commit().await?;
            Ok(templates)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!("Rollback after failed install also failed: {rollback_err}");
            }
            Err(e)
        }
    }
}

async fn seed(conn: &mut SqliteConnection) -> Result<usize, sqlx::Error> {
    for name in SettingName::ALL {
        db::settings::insert(&mut *conn, name, name.default_value()).await?;
    }

    db::template_fields::create_table(&mut *conn).await?;

    for point in HookPoint::ALL {
        db::hooks::register(
            &mut *conn,
            point.hook_type(),
            point.action_location(),
            point.function_name(),
            point.hook_function(),
        )
        .await?;
    }

    // Map every template that predates the install
    let template_ids = db::email_templates::list_ids(&mut *conn).await?;
    for email_template_id in &template_ids {
        db::template_fields::insert_blank(&mut *conn, *email_template_id).await?;
    }

    Ok(template_ids.len())
}

/// Drops the return-path table and the module's settings. Hook rows belong
/// to the host. Each statement is safe to repeat after a partial failure.
pub async fn uninstall(pool: &SqlitePool, module_id: i64) -> Result<OperationResult, sqlx::Error> {
    db::template_fields::drop_table(pool).await?;
    let removed = db::settings::delete_for_module(pool).await?;
    tracing::info!(module_id, settings = removed, "Uninstalled {}", MODULE_INFO.name);
    Ok(OperationResult::ok(""))
}

/// Merges one settings form submission into the store.
pub async fn update_settings(
    pool: &SqlitePool,
    form: &HashMap<String, String>,
    ctx: &UpdateContext,
    lang: &LangStrings,
) -> Result<OperationResult, sqlx::Error> {
    let changes = SettingsUpdate::from_form(form, ctx).changes();

    let mut tx = pool.begin().await?;
    for (name, value) in &changes {
        db::settings::upsert(&mut *tx, *name, value).await?;
    }
    tx.commit().await?;

    tracing::info!(
        changed = changes.len(),
        advanced = ctx.remember_advanced_settings,
        "Updated {} settings",
        MODULE_INFO.name
    );
    Ok(OperationResult::ok(lang.notify_settings_updated))
}

/// The return-path table exists only between install and uninstall.
pub async fn is_installed(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    db::template_fields::table_exists(pool).await
}

pub async fn load_settings(pool: &SqlitePool) -> Result<SmtpSettings, sqlx::Error> {
    let rows = db::settings::list(pool).await?;
    Ok(SmtpSettings::from_rows(&rows))
}
