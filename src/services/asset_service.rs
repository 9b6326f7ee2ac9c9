use crate::database::transaction::with_transaction;
use crate::dto::asset_dto::{CreateAssetPayload, UpdateAssetPayload};
use crate::dto::pagination::{ListResponse, Pagination};
use crate::error::{Error, Result};
use crate::models::asset::{Asset, AssetStatus};
use crate::models::audit_context::RequestScope;
use crate::services::audit_service::AuditService;
use crate::services::records;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AssetService {
    pool: PgPool,
    audit: AuditService,
}

impl AssetService {
    pub fn new(pool: PgPool, audit: AuditService) -> Self {
        Self { pool, audit }
    }

    pub async fn create(&self, scope: &RequestScope, payload: CreateAssetPayload) -> Result<Asset> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        let asset = with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let asset = sqlx::query_as::<_, Asset>(
                    r#"
                    INSERT INTO assets (
                        name, serial_number, tag, description, model_id, status,
                        purchase_date, purchase_cost, useful_life_years, salvage_value, location
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                    RETURNING *
                    "#,
                )
                .bind(&payload.name)
                .bind(&payload.serial_number)
                .bind(&payload.tag)
                .bind(&payload.description)
                .bind(payload.model_id)
                .bind(payload.status)
                .bind(payload.purchase_date)
                .bind(payload.purchase_cost)
                .bind(payload.useful_life_years)
                .bind(payload.salvage_value)
                .bind(&payload.location)
                .fetch_one(&mut **tx)
                .await?;

                audit.log_create(tx, &scope, &asset).await?;
                Ok::<_, Error>(asset)
            })
        })
        .await?;

        tracing::info!(
            asset_id = asset.id,
            model_id = asset.model_id,
            status = %asset.status,
            "asset created"
        );
        Ok(asset)
    }

    pub async fn update(
        &self,
        scope: &RequestScope,
        id: i64,
        payload: UpdateAssetPayload,
    ) -> Result<Asset> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        let asset = with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let old = records::find_in_tx::<Asset>(tx, id).await?;

                let updated = sqlx::query_as::<_, Asset>(
                    r#"
                    UPDATE assets
                    SET
                        name = COALESCE($2, name),
                        serial_number = COALESCE($3, serial_number),
                        tag = COALESCE($4, tag),
                        description = COALESCE($5, description),
                        model_id = COALESCE($6, model_id),
                        status = COALESCE($7, status),
                        purchase_date = COALESCE($8, purchase_date),
                        purchase_cost = COALESCE($9, purchase_cost),
                        useful_life_years = COALESCE($10, useful_life_years),
                        salvage_value = COALESCE($11, salvage_value),
                        location = COALESCE($12, location),
                        updated_at = NOW()
                    WHERE id = $1
                    RETURNING *
                    "#,
                )
                .bind(id)
                .bind(&payload.name)
                .bind(&payload.serial_number)
                .bind(&payload.tag)
                .bind(&payload.description)
                .bind(payload.model_id)
                .bind(payload.status)
                .bind(payload.purchase_date)
                .bind(payload.purchase_cost)
                .bind(payload.useful_life_years)
                .bind(payload.salvage_value)
                .bind(&payload.location)
                .fetch_one(&mut **tx)
                .await?;

                audit.log_update(tx, &scope, &old, &updated).await?;
                Ok::<_, Error>(updated)
            })
        })
        .await?;

        tracing::info!(asset_id = id, "asset updated");
        Ok(asset)
    }

    /// Status transition recorded as an ordinary UPDATE audit row.
    pub async fn update_status(
        &self,
        scope: &RequestScope,
        id: i64,
        status: AssetStatus,
    ) -> Result<Asset> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        let asset = with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let old = records::find_in_tx::<Asset>(tx, id).await?;

                let updated = sqlx::query_as::<_, Asset>(
                    "UPDATE assets SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
                )
                .bind(id)
                .bind(status)
                .fetch_one(&mut **tx)
                .await?;

                audit.log_update(tx, &scope, &old, &updated).await?;
                Ok::<_, Error>(updated)
            })
        })
        .await?;

        tracing::info!(asset_id = id, status = %status, "asset status changed");
        Ok(asset)
    }

    pub async fn delete(&self, scope: &RequestScope, id: i64) -> Result<()> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let old = records::find_in_tx::<Asset>(tx, id).await?;

                sqlx::query("DELETE FROM assets WHERE id = $1")
                    .bind(id)
                    .execute(&mut **tx)
                    .await?;

                audit.log_delete(tx, &scope, &old).await?;
                Ok::<_, Error>(())
            })
        })
        .await?;

        tracing::info!(asset_id = id, "asset deleted");
        Ok(())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Asset> {
        records::fetch_by_id(&self.pool, id).await
    }

    pub async fn list(&self, pagination: Pagination) -> Result<ListResponse<Asset>> {
        records::list_page(&self.pool, pagination).await
    }
}
