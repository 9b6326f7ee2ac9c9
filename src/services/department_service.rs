use crate::database::transaction::with_transaction;
use crate::dto::department_dto::{CreateDepartmentPayload, UpdateDepartmentPayload};
use crate::dto::pagination::{ListResponse, Pagination};
use crate::error::{Error, Result};
use crate::models::audit_context::RequestScope;
use crate::models::department::Department;
use crate::services::audit_service::AuditService;
use crate::services::records;
use sqlx::PgPool;

#[derive(Clone)]
pub struct DepartmentService {
    pool: PgPool,
    audit: AuditService,
}

impl DepartmentService {
    pub fn new(pool: PgPool, audit: AuditService) -> Self {
        Self { pool, audit }
    }

    pub async fn create(
        &self,
        scope: &RequestScope,
        payload: CreateDepartmentPayload,
    ) -> Result<Department> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        let department = with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let department = sqlx::query_as::<_, Department>(
                    r#"
                    INSERT INTO departments (name, notes)
                    VALUES ($1, $2)
                    RETURNING *
                    "#,
                )
                .bind(&payload.name)
                .bind(&payload.notes)
                .fetch_one(&mut **tx)
                .await?;

                audit.log_create(tx, &scope, &department).await?;
                Ok::<_, Error>(department)
            })
        })
        .await?;

        tracing::info!(department_id = department.id, "department created");
        Ok(department)
    }

    pub async fn update(
        &self,
        scope: &RequestScope,
        id: i64,
        payload: UpdateDepartmentPayload,
    ) -> Result<Department> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        let department = with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let old = records::find_in_tx::<Department>(tx, id).await?;

                let updated = sqlx::query_as::<_, Department>(
                    r#"
                    UPDATE departments
                    SET
                        name = COALESCE($2, name),
                        notes = COALESCE($3, notes),
                        updated_at = NOW()
                    WHERE id = $1
                    RETURNING *
                    "#,
                )
                .bind(id)
                .bind(&payload.name)
                .bind(&payload.notes)
                .fetch_one(&mut **tx)
                .await?;

                audit.log_update(tx, &scope, &old, &updated).await?;
                Ok::<_, Error>(updated)
            })
        })
        .await?;

        tracing::info!(department_id = id, "department updated");
        Ok(department)
    }

    pub async fn delete(&self, scope: &RequestScope, id: i64) -> Result<()> {
        let audit = self.audit.clone();
        let scope = scope.clone();

        with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let old = records::find_in_tx::<Department>(tx, id).await?;

                sqlx::query("DELETE FROM departments WHERE id = $1")
                    .bind(id)
                    .execute(&mut **tx)
                    .await?;

                audit.log_delete(tx, &scope, &old).await?;
                Ok::<_, Error>(())
            })
        })
        .await?;

        tracing::info!(department_id = id, "department deleted");
        Ok(())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Department> {
        records::fetch_by_id(&self.pool, id).await
    }

    pub async fn list(&self, pagination: Pagination) -> Result<ListResponse<Department>> {
        records::list_page(&self.pool, pagination).await
    }
}
