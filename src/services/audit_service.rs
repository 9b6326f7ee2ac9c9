use crate::database::transaction::Tx;
use crate::error::Result;
use crate::models::audit_context::RequestScope;
use crate::models::audit_log::{AuditEntry, AuditLog, AuditOperation};
use crate::services::audit_repository::AuditRepository;
use crate::utils::diff::compute_diff;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// A record whose mutations are written to `audit_logs`.
pub trait Auditable: Serialize {
    /// Name recorded in `audit_logs.table_name`.
    const TABLE: &'static str;

    fn record_id(&self) -> String;

    /// Serializable evidence of the record's current field values.
    fn snapshot(&self) -> Result<JsonValue> {
        Ok(serde_json::to_value(self)?)
    }
}

#[derive(Clone, Default)]
pub struct AuditService {
    repo: AuditRepository,
}

impl AuditService {
    pub fn new(repo: AuditRepository) -> Self {
        Self { repo }
    }

    pub async fn log_create<T: Auditable>(
        &self,
        tx: &mut Tx,
        scope: &RequestScope,
        record: &T,
    ) -> Result<AuditLog> {
        let new_value = record.snapshot()?;
        let entry = self.entry(
            scope,
            T::TABLE,
            record.record_id(),
            AuditOperation::Create,
            None,
            Some(new_value),
            None,
        );
        self.repo.log(tx, entry).await
    }

    pub async fn log_update<T: Auditable>(
        &self,
        tx: &mut Tx,
        scope: &RequestScope,
        old: &T,
        new: &T,
    ) -> Result<AuditLog> {
        let old_value = old.snapshot()?;
        let new_value = new.snapshot()?;
        let diff = compute_diff(&old_value, &new_value);
        if diff.is_empty() {
            tracing::debug!(
                table = T::TABLE,
                record_id = %new.record_id(),
                "update produced an empty diff; recording it anyway"
            );
        }
        let diff = serde_json::to_value(&diff)?;

        let entry = self.entry(
            scope,
            T::TABLE,
            new.record_id(),
            AuditOperation::Update,
            Some(old_value),
            Some(new_value),
            Some(diff),
        );
        self.repo.log(tx, entry).await
    }

    pub async fn log_delete<T: Auditable>(
        &self,
        tx: &mut Tx,
        scope: &RequestScope,
        old: &T,
    ) -> Result<AuditLog> {
        let old_value = old.snapshot()?;
        let entry = self.entry(
            scope,
            T::TABLE,
            old.record_id(),
            AuditOperation::Delete,
            Some(old_value),
            None,
            None,
        );
        self.repo.log(tx, entry).await
    }

    #[allow(clippy::too_many_arguments)]
    fn entry(
        &self,
        scope: &RequestScope,
        table: &str,
        record_id: String,
        operation: AuditOperation,
        old_value: Option<JsonValue>,
        new_value: Option<JsonValue>,
        diff: Option<JsonValue>,
    ) -> AuditEntry {
        let (ctx, present) = scope.get_audit_context();
        if !present {
            tracing::debug!(
                table,
                record_id = %record_id,
                operation = %operation,
                "no audit context attached; recording empty attribution"
            );
        }

        AuditEntry {
            table_name: table.to_string(),
            record_id,
            operation,
            field_name: None,
            old_value,
            new_value,
            diff,
            changed_by: ctx.actor_id,
            ip_address: non_empty(ctx.ip_address),
            user_agent: non_empty(ctx.user_agent),
            request_id: non_empty(ctx.request_id),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
