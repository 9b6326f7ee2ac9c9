use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::services::audit_service::Auditable;

/// A make/model of equipment, tied to one category and one manufacturer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AssetModel {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub manufacturer_id: i64,
    pub model_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Auditable for AssetModel {
    const TABLE: &'static str = "models";

    fn record_id(&self) -> String {
        self.id.to_string()
    }
}
