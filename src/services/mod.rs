pub mod asset_model_service;
pub mod asset_service;
pub mod audit_repository;
pub mod audit_service;
pub mod category_service;
pub mod department_service;
pub mod manufacturer_service;
pub mod records;
pub mod supplier_service;
