use sqlx::SqlitePool;

use crate::models::{MODULE_FOLDER, Setting, SettingName};

pub async fn insert<'e, E: sqlx::SqliteExecutor<'e>>(
    executor: E,
    name: SettingName,
    value: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO settings (setting_name, setting_value, module) VALUES (?, ?, ?)",
    )
    .bind(name.as_str())
    .bind(value)
    .bind(MODULE_FOLDER)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn upsert<'e, E: sqlx::SqliteExecutor<'e>>(
    executor: E,
    name: SettingName,
    value: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO settings (setting_name, setting_value, module) VALUES (?, ?, ?)
         ON CONFLICT (setting_name, module) DO UPDATE SET
           setting_value = excluded.setting_value",
    )
    .bind(name.as_str())
    .bind(value)
    .bind(MODULE_FOLDER)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Setting>, sqlx::Error> {
    sqlx::query_as::<_, Setting>(
        "SELECT setting_name, setting_value, module FROM settings
         WHERE module = ? ORDER BY setting_id",
    )
    .bind(MODULE_FOLDER)
    .fetch_all(pool)
    .await
}

pub async fn delete_for_module<'e, E: sqlx::SqliteExecutor<'e>>(
    executor: E,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM settings WHERE module = ?")
        .bind(MODULE_FOLDER)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
