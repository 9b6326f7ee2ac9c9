//! Single place where a business mutation and its audit row are bracketed
//! by BEGIN / COMMIT / ROLLBACK.

use std::future::Future;
use std::pin::Pin;

use sqlx::{PgPool, Postgres, Transaction};

use crate::error::Result;

pub type Tx = Transaction<'static, Postgres>;

pub type TxFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'c>>;

/// Runs `work` inside a fresh transaction.
///
/// Commits when `work` resolves to `Ok`, rolls back when it resolves to `Err`
/// and returns that error unchanged. If the returned future is dropped before
/// completion (request timeout, client disconnect) the transaction is rolled
/// back by `sqlx::Transaction`'s drop, so nothing from `work` is committed.
///
/// ```ignore
/// let category = with_transaction(&pool, move |tx| {
///     Box::pin(async move {
///         let row = insert(tx, payload).await?;
///         audit.log_create(tx, &scope, &row).await?;
///         Ok::<_, Error>(row)
///     })
/// })
/// .await?;
/// ```
pub async fn with_transaction<T, F>(pool: &PgPool, work: F) -> Result<T>
where
    F: for<'c> FnOnce(&'c mut Tx) -> TxFuture<'c, T>,
{
    let mut tx = pool.begin().await?;

    match work(&mut tx).await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            tracing::debug!(error = %err, "rolling back transaction");
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(error = ?rollback_err, "transaction rollback failed");
            }
            Err(err)
        }
    }
}
