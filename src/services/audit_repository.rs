use crate::database::transaction::Tx;
use crate::error::Result;
use crate::models::audit_log::{AuditEntry, AuditLog};
use crate::utils::time::now;
use serde_json::Value as JsonValue;

/// Writes audit rows. Holds no pool: every write goes through the caller's
/// transaction so it commits or rolls back together with the mutation.
#[derive(Clone, Default)]
pub struct AuditRepository;

impl AuditRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn log(&self, tx: &mut Tx, entry: AuditEntry) -> Result<AuditLog> {
        let old_value = entry.old_value.as_ref().map(to_text).transpose()?;
        let new_value = entry.new_value.as_ref().map(to_text).transpose()?;
        let diff = entry.diff.as_ref().map(to_text).transpose()?;

        let row = sqlx::query_as::<_, AuditLog>(
            r#"
            INSERT INTO audit_logs (
                table_name, record_id, operation, field_name,
                old_value, new_value, diff,
                changed_at, changed_by, ip_address, user_agent, request_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&entry.table_name)
        .bind(&entry.record_id)
        .bind(entry.operation.as_str())
        .bind(&entry.field_name)
        .bind(old_value)
        .bind(new_value)
        .bind(diff)
        .bind(now())
        .bind(&entry.changed_by)
        .bind(&entry.ip_address)
        .bind(&entry.user_agent)
        .bind(&entry.request_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| {
            tracing::error!(
                error = ?e,
                table = %entry.table_name,
                record_id = %entry.record_id,
                operation = %entry.operation,
                "audit write failed"
            );
            e
        })?;

        Ok(row)
    }
}

fn to_text(value: &JsonValue) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
