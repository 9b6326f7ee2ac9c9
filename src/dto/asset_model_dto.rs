use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::asset_model::AssetModel;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAssetModelPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 1))]
    pub category_id: i64,
    #[validate(range(min = 1))]
    pub manufacturer_id: i64,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub model_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct UpdateAssetModelPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(range(min = 1))]
    pub category_id: Option<i64>,
    #[validate(range(min = 1))]
    pub manufacturer_id: Option<i64>,
    #[validate(length(max = 255))]
    pub model_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetModelResponse {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub manufacturer_id: i64,
    pub model_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AssetModel> for AssetModelResponse {
    fn from(value: AssetModel) -> Self {
        Self {
            id: value.id,
            name: value.name,
            category_id: value.category_id,
            manufacturer_id: value.manufacturer_id,
            model_number: value.model_number,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
