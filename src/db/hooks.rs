use sqlx::SqlitePool;

use crate::models::{HookRegistration, MODULE_FOLDER};

pub async fn register<'e, E: sqlx::SqliteExecutor<'e>>(
    executor: E,
    hook_type: &str,
    action_location: &str,
    function_name: &str,
    hook_function: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO hooks (hook_type, module_folder, action_location, function_name, hook_function)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(hook_type)
    .bind(MODULE_FOLDER)
    .bind(action_location)
    .bind(function_name)
    .bind(hook_function)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn list_for_module(pool: &SqlitePool) -> Result<Vec<HookRegistration>, sqlx::Error> {
    sqlx::query_as::<_, HookRegistration>(
        "SELECT * FROM hooks WHERE module_folder = ? ORDER BY id",
    )
    .bind(MODULE_FOLDER)
    .fetch_all(pool)
    .await
}

/// Host-side cleanup run when a module is uninstalled.
pub async fn delete_for_module<'e, E: sqlx::SqliteExecutor<'e>>(
    executor: E,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM hooks WHERE module_folder = ?")
        .bind(MODULE_FOLDER)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
