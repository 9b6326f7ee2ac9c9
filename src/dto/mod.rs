pub mod asset_dto;
pub mod asset_model_dto;
pub mod category_dto;
pub mod department_dto;
pub mod manufacturer_dto;
pub mod pagination;
pub mod supplier_dto;
