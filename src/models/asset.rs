use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::services::audit_service::Auditable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "asset_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    #[default]
    Available,
    Assigned,
    Repair,
    Retired,
    Pending,
    ReadyToDeploy,
    Archived,
    Broken,
    LostStolen,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Available => "AVAILABLE",
            AssetStatus::Assigned => "ASSIGNED",
            AssetStatus::Repair => "REPAIR",
            AssetStatus::Retired => "RETIRED",
            AssetStatus::Pending => "PENDING",
            AssetStatus::ReadyToDeploy => "READY_TO_DEPLOY",
            AssetStatus::Archived => "ARCHIVED",
            AssetStatus::Broken => "BROKEN",
            AssetStatus::LostStolen => "LOST_STOLEN",
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Asset {
    pub id: i64,
    pub name: String,
    pub serial_number: String,
    pub tag: String,
    pub description: String,
    pub model_id: i64,
    pub status: AssetStatus,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_cost: f64,
    /// Straight-line depreciation period.
    pub useful_life_years: i32,
    pub salvage_value: f64,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Auditable for Asset {
    const TABLE: &'static str = "assets";

    fn record_id(&self) -> String {
        self.id.to_string()
    }
}
