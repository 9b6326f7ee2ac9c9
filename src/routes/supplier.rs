use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::supplier_dto::{SupplierResponse, CreateSupplierPayload, UpdateSupplierPayload},
    dto::pagination::{ListQuery, Pagination},
    error::Result,
    models::audit_context::RequestScope,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/suppliers",
    request_body = CreateSupplierPayload,
    responses(
        (status = 201, description = "Supplier created successfully", body = Json<SupplierResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 409, description = "Supplier name already exists")
    )
)]
#[axum::debug_handler]
pub async fn create_supplier(
    State(state): State<AppState>,
    scope: RequestScope,
    Json(payload): Json<CreateSupplierPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let supplier = state.supplier_service.create(&scope, payload).await?;
    Ok((StatusCode::CREATED, Json(SupplierResponse::from(supplier))))
}

#[utoipa::path(
    patch,
    path = "/api/suppliers/{id}",
    params(
        ("id" = i64, Path, description = "Supplier ID")
    ),
    request_body = UpdateSupplierPayload,
    responses(
        (status = 200, description = "Supplier updated successfully", body = Json<SupplierResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Supplier not found")
    )
)]
#[axum::debug_handler]
pub async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    scope: RequestScope,
    Json(payload): Json<UpdateSupplierPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let supplier = state.supplier_service.update(&scope, id, payload).await?;
    Ok(Json(SupplierResponse::from(supplier)))
}

#[utoipa::path(
    delete,
    path = "/api/suppliers/{id}",
    params(
        ("id" = i64, Path, description = "Supplier ID")
    ),
    responses(
        (status = 204, description = "Supplier deleted successfully"),
        (status = 404, description = "Supplier not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    scope: RequestScope,
) -> Result<impl IntoResponse> {
    state.supplier_service.delete(&scope, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/suppliers",
    params(
        ("page" = Option<i64>, Query, description = "Page number"),
        ("limit" = Option<i64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Paginated list of suppliers")
    )
)]
#[axum::debug_handler]
pub async fn list_suppliers(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let result = state
        .supplier_service
        .list(Pagination::from_query(&query))
        .await?;
    Ok(Json(result.map(SupplierResponse::from)))
}

#[utoipa::path(
    get,
    path = "/api/suppliers/{id}",
    params(
        ("id" = i64, Path, description = "Supplier ID")
    ),
    responses(
        (status = 200, description = "Supplier found", body = Json<SupplierResponse>),
        (status = 404, description = "Supplier not found")
    )
)]
#[axum::debug_handler]
pub async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let supplier = state.supplier_service.get_by_id(id).await?;
    Ok(Json(SupplierResponse::from(supplier)))
}
