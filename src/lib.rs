pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch},
    Router,
};
use sqlx::PgPool;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::services::{
    asset_model_service::AssetModelService, asset_service::AssetService,
    audit_repository::AuditRepository, audit_service::AuditService,
    category_service::CategoryService, department_service::DepartmentService,
    manufacturer_service::ManufacturerService, supplier_service::SupplierService,
};

const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub audit_service: AuditService,
    pub category_service: CategoryService,
    pub department_service: DepartmentService,
    pub manufacturer_service: ManufacturerService,
    pub supplier_service: SupplierService,
    pub asset_model_service: AssetModelService,
    pub asset_service: AssetService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let audit_service = AuditService::new(AuditRepository::new());

        let category_service = CategoryService::new(pool.clone(), audit_service.clone());
        let department_service = DepartmentService::new(pool.clone(), audit_service.clone());
        let manufacturer_service =
            ManufacturerService::new(pool.clone(), audit_service.clone());
        let supplier_service = SupplierService::new(pool.clone(), audit_service.clone());
        let asset_model_service = AssetModelService::new(pool.clone(), audit_service.clone());
        let asset_service = AssetService::new(pool.clone(), audit_service.clone());

        Self {
            pool,
            audit_service,
            category_service,
            department_service,
            manufacturer_service,
            supplier_service,
            asset_model_service,
            asset_service,
        }
    }
}

/// Full HTTP surface with the middleware stack used in production.
pub fn build_router(state: AppState, config: &Config) -> Router {
    let api = Router::new()
        .route(
            "/api/categories",
            get(routes::category::list_categories).post(routes::category::create_category),
        )
        .route(
            "/api/categories/:id",
            get(routes::category::get_category)
                .patch(routes::category::update_category)
                .delete(routes::category::delete_category),
        )
        .route(
            "/api/departments",
            get(routes::department::list_departments)
                .post(routes::department::create_department),
        )
        .route(
            "/api/departments/:id",
            get(routes::department::get_department)
                .patch(routes::department::update_department)
                .delete(routes::department::delete_department),
        )
        .route(
            "/api/manufacturers",
            get(routes::manufacturer::list_manufacturers)
                .post(routes::manufacturer::create_manufacturer),
        )
        .route(
            "/api/manufacturers/:id",
            get(routes::manufacturer::get_manufacturer)
                .patch(routes::manufacturer::update_manufacturer)
                .delete(routes::manufacturer::delete_manufacturer),
        )
        .route(
            "/api/suppliers",
            get(routes::supplier::list_suppliers).post(routes::supplier::create_supplier),
        )
        .route(
            "/api/suppliers/:id",
            get(routes::supplier::get_supplier)
                .patch(routes::supplier::update_supplier)
                .delete(routes::supplier::delete_supplier),
        )
        .route(
            "/api/models",
            get(routes::asset_model::list_models).post(routes::asset_model::create_model),
        )
        .route(
            "/api/models/:id",
            get(routes::asset_model::get_model)
                .patch(routes::asset_model::update_model)
                .delete(routes::asset_model::delete_model),
        )
        .route(
            "/api/assets",
            get(routes::asset::list_assets).post(routes::asset::create_asset),
        )
        .route(
            "/api/assets/:id",
            get(routes::asset::get_asset)
                .patch(routes::asset::update_asset)
                .delete(routes::asset::delete_asset),
        )
        .route(
            "/api/assets/:id/status",
            patch(routes::asset::update_asset_status),
        )
        // auth is the outer layer so its claims are visible to attribution
        .layer(axum::middleware::from_fn(
            middleware::audit::attach_audit_context,
        ))
        .layer(axum::middleware::from_fn(
            middleware::auth::require_bearer_auth_for_writes,
        ));

    Router::new()
        .route("/health", get(routes::health::health))
        .merge(api)
        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(middleware::cors::cors_layer(
            config.cors_allowed_origin.as_deref(),
        ))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
