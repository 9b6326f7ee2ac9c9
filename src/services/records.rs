//! Row lookups shared by the entity stores, keyed on `Auditable::TABLE`.

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use crate::database::transaction::Tx;
use crate::dto::pagination::{ListResponse, Pagination};
use crate::error::{Error, Result};
use crate::services::audit_service::Auditable;

/// Reads the row about to be changed through the write transaction.
pub async fn find_in_tx<T>(tx: &mut Tx, id: i64) -> Result<T>
where
    T: Auditable + for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let sql = format!("SELECT * FROM {} WHERE id = $1", T::TABLE);
    sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or_else(|| not_found::<T>(id))
}

pub async fn fetch_by_id<T>(pool: &PgPool, id: i64) -> Result<T>
where
    T: Auditable + for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let sql = format!("SELECT * FROM {} WHERE id = $1", T::TABLE);
    sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| not_found::<T>(id))
}

pub async fn list_page<T>(pool: &PgPool, pagination: Pagination) -> Result<ListResponse<T>>
where
    T: Auditable + for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let sql = format!("SELECT * FROM {} ORDER BY id LIMIT $1 OFFSET $2", T::TABLE);
    let items = sqlx::query_as::<_, T>(&sql)
        .bind(pagination.limit)
        .bind(pagination.offset())
        .fetch_all(pool)
        .await?;

    let count_sql = format!("SELECT COUNT(*) FROM {}", T::TABLE);
    let total: (i64,) = sqlx::query_as(&count_sql).fetch_one(pool).await?;

    Ok(ListResponse::new(items, total.0, pagination))
}

pub fn not_found<T: Auditable>(id: i64) -> Error {
    Error::NotFound(format!("{} record {} not found", T::TABLE, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::Category;
    use crate::models::supplier::Supplier;

    #[test]
    fn not_found_names_the_table() {
        let err = not_found::<Category>(7);
        assert!(matches!(&err, Error::NotFound(msg) if msg == "categories record 7 not found"));

        let err = not_found::<Supplier>(3);
        assert_eq!(err.to_string(), "Not found: suppliers record 3 not found");
    }
}
