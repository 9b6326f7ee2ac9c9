use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::manufacturer::Manufacturer;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateManufacturerPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct UpdateManufacturerPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManufacturerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<Manufacturer> for ManufacturerResponse {
    fn from(value: Manufacturer) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
        }
    }
}
