use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::services::audit_service::Auditable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Manufacturer {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Auditable for Manufacturer {
    const TABLE: &'static str = "manufacturers";

    fn record_id(&self) -> String {
        self.id.to_string()
    }
}
