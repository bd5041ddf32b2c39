use askama::Template;
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::EmailTemplateHooks;
use super::info::{MailerTemplateSettings, TemplateCreated, TemplateDeleted, TemplateRead, TemplateUpdated};
use crate::db;
use crate::lang::LangStrings;
use crate::models::MODULE_FOLDER;

#[derive(Template)]
#[template(path = "email_templates/tab2.html")]
struct Tab2Template<'a> {
    label: &'a str,
    return_path: &'a str,
}

/// Keeps one return-path row per host email template.
pub struct ReturnPathHooks {
    pool: SqlitePool,
    lang: &'static LangStrings,
}

impl ReturnPathHooks {
    pub fn new(pool: SqlitePool, lang: &'static LangStrings) -> Self {
        Self { pool, lang }
    }
}

#[async_trait]
impl EmailTemplateHooks for ReturnPathHooks {
    fn module_folder(&self) -> &str {
        MODULE_FOLDER
    }

    async fn template_created(&self, info: &TemplateCreated) -> Result<(), sqlx::Error> {
        db::template_fields::insert_blank(&self.pool, info.email_id).await
    }

    async fn template_deleted(&self, info: &TemplateDeleted) -> Result<(), sqlx::Error> {
        db::template_fields::delete(&self.pool, info.email_id).await?;
        Ok(())
    }

    async fn template_updated(&self, info: &TemplateUpdated) -> Result<(), sqlx::Error> {
        let updated = db::template_fields::update_return_path(
            &self.pool,
            info.email_id,
            &info.info.swift_mailer_return_path,
        )
        .await?;
        if updated == 0 {
            tracing::warn!(
                email_id = info.email_id,
                "No return path row for template; update ignored"
            );
        }
        Ok(())
    }

    async fn template_read(&self, mut info: TemplateRead) -> Result<TemplateRead, sqlx::Error> {
        let return_path =
            db::template_fields::find_return_path(&self.pool, info.email_template.email_id).await?;
        info.email_template.swift_mailer_settings = Some(MailerTemplateSettings { return_path });
        Ok(info)
    }

    fn edit_template_tab2(&self, info: &TemplateRead) -> String {
        let template = Tab2Template {
            label: self.lang.phrase_undeliverable_email_recipient,
            return_path: info.return_path().unwrap_or_default(),
        };
        template.render().unwrap_or_default()
    }
}
