pub mod asset;
pub mod asset_model;
pub mod audit_context;
pub mod audit_log;
pub mod category;
pub mod department;
pub mod manufacturer;
pub mod supplier;
