use sqlx::SqlitePool;

/// Every template id known to the host, used for the install-time backfill.
pub async fn list_ids<'e, E: sqlx::SqliteExecutor<'e>>(executor: E) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT email_id FROM email_templates ORDER BY email_id")
        .fetch_all(executor)
        .await
}

pub async fn exists(pool: &SqlitePool, email_id: i64) -> Result<bool, sqlx::Error> {
    let found: Option<i64> =
        sqlx::query_scalar("SELECT email_id FROM email_templates WHERE email_id = ?")
            .bind(email_id)
            .fetch_optional(pool)
            .await?;
    Ok(found.is_some())
}
