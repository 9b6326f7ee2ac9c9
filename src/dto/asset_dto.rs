use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::asset::{Asset, AssetStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAssetPayload {
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub serial_number: String,
    #[validate(length(min = 1, max = 100))]
    pub tag: String,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub description: String,
    #[validate(range(min = 1))]
    pub model_id: i64,
    #[serde(default)]
    pub status: AssetStatus,
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub purchase_cost: f64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub useful_life_years: i32,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub salvage_value: f64,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct UpdateAssetPayload {
    #[validate(length(min = 1, max = 150))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub serial_number: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub tag: Option<String>,
    #[validate(length(max = 255))]
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub model_id: Option<i64>,
    pub status: Option<AssetStatus>,
    pub purchase_date: Option<NaiveDate>,
    #[validate(range(min = 0.0))]
    pub purchase_cost: Option<f64>,
    #[validate(range(min = 0))]
    pub useful_life_years: Option<i32>,
    #[validate(range(min = 0.0))]
    pub salvage_value: Option<f64>,
    #[validate(length(max = 100))]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAssetStatusPayload {
    pub status: AssetStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetResponse {
    pub id: i64,
    pub name: String,
    pub serial_number: String,
    pub tag: String,
    pub description: String,
    pub model_id: i64,
    pub status: AssetStatus,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_cost: f64,
    pub useful_life_years: i32,
    pub salvage_value: f64,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Asset> for AssetResponse {
    fn from(value: Asset) -> Self {
        Self {
            id: value.id,
            name: value.name,
            serial_number: value.serial_number,
            tag: value.tag,
            description: value.description,
            model_id: value.model_id,
            status: value.status,
            purchase_date: value.purchase_date,
            purchase_cost: value.purchase_cost,
            useful_life_years: value.useful_life_years,
            salvage_value: value.salvage_value,
            location: value.location,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
