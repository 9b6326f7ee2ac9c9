use crate::database::transaction::with_transaction;
use crate::dto::asset_model_dto::{CreateAssetModelPayload, UpdateAssetModelPayload};
use crate::dto::pagination::{ListResponse, Pagination};
use crate::error::{Error, Result};
use crate::models::asset_model::AssetModel;
use crate::models::audit_context::RequestScope;
use crate::services::audit_service::AuditService;
use crate::services::records;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AssetModelService {
    pool: PgPool,
    audit: AuditService,
}

impl AssetModelService {
    pub fn new(pool: PgPool, audit: AuditService) -> Self {
        Self { pool, audit }
    }

    /// Unknown category or manufacturer ids surface as [`Error::Conflict`].
    pub async fn create(
        &self,
        scope: &RequestScope,
        payload: CreateAssetModelPayload,
    ) -> Result<AssetModel> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        let model = with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let model = sqlx::query_as::<_, AssetModel>(
                    r#"
                    INSERT INTO models (name, category_id, manufacturer_id, model_number)
                    VALUES ($1, $2, $3, $4)
                    RETURNING *
                    "#,
                )
                .bind(&payload.name)
                .bind(payload.category_id)
                .bind(payload.manufacturer_id)
                .bind(&payload.model_number)
                .fetch_one(&mut **tx)
                .await?;

                audit.log_create(tx, &scope, &model).await?;
                Ok::<_, Error>(model)
            })
        })
        .await?;

        tracing::info!(
            model_id = model.id,
            category_id = model.category_id,
            manufacturer_id = model.manufacturer_id,
            "model created"
        );
        Ok(model)
    }

    pub async fn update(
        &self,
        scope: &RequestScope,
        id: i64,
        payload: UpdateAssetModelPayload,
    ) -> Result<AssetModel> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        let model = with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let old = records::find_in_tx::<AssetModel>(tx, id).await?;

                let updated = sqlx::query_as::<_, AssetModel>(
                    r#"
                    UPDATE models
                    SET
                        name = COALESCE($2, name),
                        category_id = COALESCE($3, category_id),
                        manufacturer_id = COALESCE($4, manufacturer_id),
                        model_number = COALESCE($5, model_number),
                        updated_at = NOW()
                    WHERE id = $1
                    RETURNING *
                    "#,
                )
                .bind(id)
                .bind(&payload.name)
                .bind(payload.category_id)
                .bind(payload.manufacturer_id)
                .bind(&payload.model_number)
                .fetch_one(&mut **tx)
                .await?;

                audit.log_update(tx, &scope, &old, &updated).await?;
                Ok::<_, Error>(updated)
            })
        })
        .await?;

        tracing::info!(model_id = id, "model updated");
        Ok(model)
    }

    /// Models still referenced by assets cannot be deleted.
    pub async fn delete(&self, scope: &RequestScope, id: i64) -> Result<()> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let old = records::find_in_tx::<AssetModel>(tx, id).await?;

                sqlx::query("DELETE FROM models WHERE id = $1")
                    .bind(id)
                    .execute(&mut **tx)
                    .await?;

                audit.log_delete(tx, &scope, &old).await?;
                Ok::<_, Error>(())
            })
        })
        .await?;

        tracing::info!(model_id = id, "model deleted");
        Ok(())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<AssetModel> {
        records::fetch_by_id(&self.pool, id).await
    }

    pub async fn list(&self, pagination: Pagination) -> Result<ListResponse<AssetModel>> {
        records::list_page(&self.pool, pagination).await
    }
}
