use crate::database::transaction::with_transaction;
use crate::dto::category_dto::{CreateCategoryPayload, UpdateCategoryPayload};
use crate::dto::pagination::{ListResponse, Pagination};
use crate::error::{Error, Result};
use crate::models::audit_context::RequestScope;
use crate::models::category::Category;
use crate::services::audit_service::AuditService;
use crate::services::records;
use sqlx::PgPool;

#[derive(Clone)]
pub struct CategoryService {
    pool: PgPool,
    audit: AuditService,
}

impl CategoryService {
    pub fn new(pool: PgPool, audit: AuditService) -> Self {
        Self { pool, audit }
    }

    pub async fn create(
        &self,
        scope: &RequestScope,
        payload: CreateCategoryPayload,
    ) -> Result<Category> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        let category = with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let category = sqlx::query_as::<_, Category>(
                    r#"
                    INSERT INTO categories (name, description)
                    VALUES ($1, $2)
                    RETURNING *
                    "#,
                )
                .bind(&payload.name)
                .bind(&payload.description)
                .fetch_one(&mut **tx)
                .await?;

                audit.log_create(tx, &scope, &category).await?;
                Ok::<_, Error>(category)
            })
        })
        .await?;

        tracing::info!(category_id = category.id, "category created");
        Ok(category)
    }

    pub async fn update(
        &self,
        scope: &RequestScope,
        id: i64,
        payload: UpdateCategoryPayload,
    ) -> Result<Category> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        let category = with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let old = records::find_in_tx::<Category>(tx, id).await?;

                let updated = sqlx::query_as::<_, Category>(
                    r#"
                    UPDATE categories
                    SET
                        name = COALESCE($2, name),
                        description = COALESCE($3, description),
                        updated_at = NOW()
                    WHERE id = $1
                    RETURNING *
                    "#,
                )
                .bind(id)
                .bind(&payload.name)
                .bind(&payload.description)
                .fetch_one(&mut **tx)
                .await?;

                audit.log_update(tx, &scope, &old, &updated).await?;
                Ok::<_, Error>(updated)
            })
        })
        .await?;

        tracing::info!(category_id = id, "category updated");
        Ok(category)
    }

    pub async fn delete(&self, scope: &RequestScope, id: i64) -> Result<()> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let old = records::find_in_tx::<Category>(tx, id).await?;

                sqlx::query("DELETE FROM categories WHERE id = $1")
                    .bind(id)
                    .execute(&mut **tx)
                    .await?;

                audit.log_delete(tx, &scope, &old).await?;
                Ok::<_, Error>(())
            })
        })
        .await?;

        tracing::info!(category_id = id, "category deleted");
        Ok(())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Category> {
        records::fetch_by_id(&self.pool, id).await
    }

    pub async fn list(&self, pagination: Pagination) -> Result<ListResponse<Category>> {
        records::list_page(&self.pool, pagination).await
    }
}
