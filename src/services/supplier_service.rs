use crate::database::transaction::with_transaction;
use crate::dto::pagination::{ListResponse, Pagination};
use crate::dto::supplier_dto::{CreateSupplierPayload, UpdateSupplierPayload};
use crate::error::{Error, Result};
use crate::models::audit_context::RequestScope;
use crate::models::supplier::Supplier;
use crate::services::audit_service::AuditService;
use crate::services::records;
use sqlx::PgPool;

#[derive(Clone)]
pub struct SupplierService {
    pool: PgPool,
    audit: AuditService,
}

impl SupplierService {
    pub fn new(pool: PgPool, audit: AuditService) -> Self {
        Self { pool, audit }
    }

    pub async fn create(
        &self,
        scope: &RequestScope,
        payload: CreateSupplierPayload,
    ) -> Result<Supplier> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        let supplier = with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let supplier = sqlx::query_as::<_, Supplier>(
                    r#"
                    INSERT INTO suppliers (name)
                    VALUES ($1)
                    RETURNING *
                    "#,
                )
                .bind(&payload.name)
                .fetch_one(&mut **tx)
                .await?;

                audit.log_create(tx, &scope, &supplier).await?;
                Ok::<_, Error>(supplier)
            })
        })
        .await?;

        tracing::info!(supplier_id = supplier.id, "supplier created");
        Ok(supplier)
    }

    pub async fn update(
        &self,
        scope: &RequestScope,
        id: i64,
        payload: UpdateSupplierPayload,
    ) -> Result<Supplier> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        let supplier = with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let old = records::find_in_tx::<Supplier>(tx, id).await?;

                let updated = sqlx::query_as::<_, Supplier>(
                    r#"
                    UPDATE suppliers
                    SET
                        name = COALESCE($2, name),
                        updated_at = NOW()
                    WHERE id = $1
                    RETURNING *
                    "#,
                )
                .bind(id)
                .bind(&payload.name)
                .fetch_one(&mut **tx)
                .await?;

                audit.log_update(tx, &scope, &old, &updated).await?;
                Ok::<_, Error>(updated)
            })
        })
        .await?;

        tracing::info!(supplier_id = id, "supplier updated");
        Ok(supplier)
    }

    pub async fn delete(&self, scope: &RequestScope, id: i64) -> Result<()> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let old = records::find_in_tx::<Supplier>(tx, id).await?;

                sqlx::query("DELETE FROM suppliers WHERE id = $1")
                    .bind(id)
                    .execute(&mut **tx)
                    .await?;

                audit.log_delete(tx, &scope, &old).await?;
                Ok::<_, Error>(())
            })
        })
        .await?;

        tracing::info!(supplier_id = id, "supplier deleted");
        Ok(())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Supplier> {
        records::fetch_by_id(&self.pool, id).await
    }

    pub async fn list(&self, pagination: Pagination) -> Result<ListResponse<Supplier>> {
        records::list_page(&self.pool, pagination).await
    }
}
