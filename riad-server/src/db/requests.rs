//! Service-request record store
//!
//! One table per kind, same shape modulo kind-specific columns. Every
//! statement here is generic over the kind: the table name comes from
//! [`Kind::table`] and column names from the kind's field table, never from
//! request input.

use shared::models::{ColumnValue, Kind, KindStats, RequestPatch, ServiceRecord};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

/// A record type that can be read back from its table
pub trait StoredRecord: ServiceRecord + for<'r> FromRow<'r, SqliteRow> {}

impl<R> StoredRecord for R where R: ServiceRecord + for<'r> FromRow<'r, SqliteRow> {}

/// Insert one submission. Status stays NULL; both timestamps are `now`.
pub async fn insert(
    pool: &SqlitePool,
    kind: Kind,
    columns: &[(&'static str, ColumnValue)],
    now: i64,
) -> Result<i64, sqlx::Error> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!("INSERT INTO {} (", kind.table()));

    let mut names = qb.separated(", ");
    for (column, _) in columns {
        names.push(*column);
    }
    names.push("created_at");
    names.push("updated_at");

    qb.push(") VALUES (");
    let mut values = qb.separated(", ");
    for (_, value) in columns {
        match value {
            ColumnValue::Text(text) => values.push_bind(text.clone()),
            ColumnValue::Integer(n) => values.push_bind(*n),
        };
    }
    values.push_bind(now);
    values.push_bind(now);
    qb.push(")");

    let result = qb.build().execute(pool).await?;
    Ok(result.last_insert_rowid())
}

/// All records of a kind, newest first (`id` breaks timestamp ties)
pub async fn list<R: StoredRecord>(pool: &SqlitePool) -> Result<Vec<R>, sqlx::Error> {
    let sql = format!(
        "SELECT * FROM {} ORDER BY created_at DESC, id DESC",
        R::KIND.table()
    );
    sqlx::query_as::<_, R>(&sql).fetch_all(pool).await
}

/// Apply the present fields of `patch` and stamp `updated_at`.
///
/// Returns the number of rows touched (0 when the id does not exist).
pub async fn patch(
    pool: &SqlitePool,
    kind: Kind,
    patch: &RequestPatch,
    now: i64,
) -> Result<u64, sqlx::Error> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!("UPDATE {} SET ", kind.table()));
    qb.push("updated_at = ").push_bind(now);

    if let Some(status) = patch.status {
        qb.push(", status = ")
            .push_bind(status.map(|s| s.as_str()));
    }
    if let Some(priority) = patch.priority {
        qb.push(", priority = ").push_bind(priority);
    }
    if let Some(notes) = &patch.notes {
        qb.push(", notes = ").push_bind(notes.clone());
    }

    qb.push(" WHERE id = ").push_bind(patch.id);

    let result = qb.build().execute(pool).await?;
    Ok(result.rows_affected())
}

/// Hard delete; deleting a missing id is not an error
pub async fn delete(pool: &SqlitePool, kind: Kind, id: i64) -> Result<u64, sqlx::Error> {
    let sql = format!("DELETE FROM {} WHERE id = ?", kind.table());
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;
    Ok(result.rows_affected())
}

/// Total and pending (including NULL status) counts of a kind
pub async fn stats(pool: &SqlitePool, kind: Kind) -> Result<KindStats, sqlx::Error> {
    let sql = format!(
        "SELECT COUNT(*), COALESCE(SUM(CASE WHEN status IS NULL OR status = 'pending' THEN 1 ELSE 0 END), 0) FROM {}",
        kind.table()
    );
    let (total, pending): (i64, i64) = sqlx::query_as(&sql).fetch_one(pool).await?;
    Ok(KindStats { total, pending })
}
