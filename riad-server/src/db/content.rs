//! Site content key/value store

use shared::models::SiteContent;
use sqlx::SqlitePool;

pub async fn list(pool: &SqlitePool) -> Result<Vec<SiteContent>, sqlx::Error> {
    sqlx::query_as::<_, SiteContent>(
        "SELECT key, value, section, updated_at FROM site_content ORDER BY key",
    )
    .fetch_all(pool)
    .await
}

pub async fn upsert(
    pool: &SqlitePool,
    key: &str,
    value: &str,
    section: Option<&str>,
    now: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO site_content (key, value, section, updated_at)
        VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT (key)
        DO UPDATE SET value = excluded.value,
                      section = COALESCE(excluded.section, site_content.section),
                      updated_at = excluded.updated_at
        "#,
    )
    .bind(key)
    .bind(value)
    .bind(section)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}
