use sqlx::SqlitePool;

use crate::models::TemplateMailField;

pub const TABLE: &str = "module_swift_mailer_email_template_fields";

pub async fn create_table<'e, E: sqlx::SqliteExecutor<'e>>(executor: E) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE module_swift_mailer_email_template_fields (
            email_template_id INTEGER NOT NULL,
            return_path VARCHAR(255) NOT NULL,
            PRIMARY KEY (email_template_id)
        )",
    )
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn drop_table<'e, E: sqlx::SqliteExecutor<'e>>(executor: E) -> Result<(), sqlx::Error> {
    sqlx::query("DROP TABLE IF EXISTS module_swift_mailer_email_template_fields")
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn table_exists(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
    )
    .bind(TABLE)
    .fetch_one(pool)
    .await?;
    Ok(count > 0)
}

/// Map a template to an empty return path. Fails on a duplicate id.
pub async fn insert_blank<'e, E: sqlx::SqliteExecutor<'e>>(
    executor: E,
    email_template_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO module_swift_mailer_email_template_fields (email_template_id, return_path)
         VALUES (?, '')",
    )
    .bind(email_template_id)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn delete<'e, E: sqlx::SqliteExecutor<'e>>(
    executor: E,
    email_template_id: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "DELETE FROM module_swift_mailer_email_template_fields WHERE email_template_id = ?",
    )
    .bind(email_template_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn update_return_path<'e, E: sqlx::SqliteExecutor<'e>>(
    executor: E,
    email_template_id: i64,
    return_path: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE module_swift_mailer_email_template_fields
         SET return_path = ?
         WHERE email_template_id = ?",
    )
    .bind(return_path)
    .bind(email_template_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn find_return_path(
    pool: &SqlitePool,
    email_template_id: i64,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT return_path FROM module_swift_mailer_email_template_fields
         WHERE email_template_id = ?",
    )
    .bind(email_template_id)
    .fetch_optional(pool)
    .await
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<TemplateMailField>, sqlx::Error> {
    sqlx::query_as::<_, TemplateMailField>(
        "SELECT email_template_id, return_path FROM module_swift_mailer_email_template_fields
         ORDER BY email_template_id",
    )
    .fetch_all(pool)
    .await
}
