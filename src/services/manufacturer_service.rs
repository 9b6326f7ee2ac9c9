use crate::database::transaction::with_transaction;
use crate::dto::manufacturer_dto::{CreateManufacturerPayload, UpdateManufacturerPayload};
use crate::dto::pagination::{ListResponse, Pagination};
use crate::error::{Error, Result};
use crate::models::audit_context::RequestScope;
use crate::models::manufacturer::Manufacturer;
use crate::services::audit_service::AuditService;
use crate::services::records;
use sqlx::PgPool;

#[derive(Clone)]
pub struct ManufacturerService {
    pool: PgPool,
    audit: AuditService,
}

impl ManufacturerService {
    pub fn new(pool: PgPool, audit: AuditService) -> Self {
        Self { pool, audit }
    }

    pub async fn create(
        &self,
        scope: &RequestScope,
        payload: CreateManufacturerPayload,
    ) -> Result<Manufacturer> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        let manufacturer = with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let manufacturer = sqlx::query_as::<_, Manufacturer>(
                    r#"
                    INSERT INTO manufacturers (name, email)
                    VALUES ($1, $2)
                    RETURNING *
                    "#,
                )
                .bind(&payload.name)
                .bind(&payload.email)
                .fetch_one(&mut **tx)
                .await?;

                audit.log_create(tx, &scope, &manufacturer).await?;
                Ok::<_, Error>(manufacturer)
            })
        })
        .await?;

        tracing::info!(manufacturer_id = manufacturer.id, "manufacturer created");
        Ok(manufacturer)
    }

    pub async fn update(
        &self,
        scope: &RequestScope,
        id: i64,
        payload: UpdateManufacturerPayload,
    ) -> Result<Manufacturer> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        let manufacturer = with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let old = records::find_in_tx::<Manufacturer>(tx, id).await?;

                let updated = sqlx::query_as::<_, Manufacturer>(
                    r#"
                    UPDATE manufacturers
                    SET
                        name = COALESCE($2, name),
                        email = COALESCE($3, email)
                    WHERE id = $1
                    RETURNING *
                    "#,
                )
                .bind(id)
                .bind(&payload.name)
                .bind(&payload.email)
                .fetch_one(&mut **tx)
                .await?;

                audit.log_update(tx, &scope, &old, &updated).await?;
                Ok::<_, Error>(updated)
            })
        })
        .await?;

        tracing::info!(manufacturer_id = id, "manufacturer updated");
        Ok(manufacturer)
    }

    pub async fn delete(&self, scope: &RequestScope, id: i64) -> Result<()> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let old = records::find_in_tx::<Manufacturer>(tx, id).await?;

                sqlx::query("DELETE FROM manufacturers WHERE id = $1")
                    .bind(id)
                    .execute(&mut **tx)
                    .await?;

                audit.log_delete(tx, &scope, &old).await?;
                Ok::<_, Error>(())
            })
        })
        .await?;

        tracing::info!(manufacturer_id = id, "manufacturer deleted");
        Ok(())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Manufacturer> {
        records::fetch_by_id(&self.pool, id).await
    }

    pub async fn list(&self, pagination: Pagination) -> Result<ListResponse<Manufacturer>> {
        records::list_page(&self.pool, pagination).await
    }
}
