pub mod asset;
pub mod asset_model;
pub mod category;
pub mod department;
pub mod health;
pub mod manufacturer;
pub mod supplier;
