use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::manufacturer_dto::{ManufacturerResponse, CreateManufacturerPayload, UpdateManufacturerPayload},
    dto::pagination::{ListQuery, Pagination},
    error::Result,
    models::audit_context::RequestScope,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/manufacturers",
    request_body = CreateManufacturerPayload,
    responses(
        (status = 201, description = "Manufacturer created successfully", body = Json<ManufacturerResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 409, description = "Manufacturer name or email already exists")
    )
)]
#[axum::debug_handler]
pub async fn create_manufacturer(
    State(state): State<AppState>,
    scope: RequestScope,
    Json(payload): Json<CreateManufacturerPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let manufacturer = state.manufacturer_service.create(&scope, payload).await?;
    Ok((StatusCode::CREATED, Json(ManufacturerResponse::from(manufacturer))))
}

#[utoipa::path(
    patch,
    path = "/api/manufacturers/{id}",
    params(
        ("id" = i64, Path, description = "Manufacturer ID")
    ),
    request_body = UpdateManufacturerPayload,
    responses(
        (status = 200, description = "Manufacturer updated successfully", body = Json<ManufacturerResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Manufacturer not found")
    )
)]
#[axum::debug_handler]
pub async fn update_manufacturer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    scope: RequestScope,
    Json(payload): Json<UpdateManufacturerPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let manufacturer = state.manufacturer_service.update(&scope, id, payload).await?;
    Ok(Json(ManufacturerResponse::from(manufacturer)))
}

#[utoipa::path(
    delete,
    path = "/api/manufacturers/{id}",
    params(
        ("id" = i64, Path, description = "Manufacturer ID")
    ),
    responses(
        (status = 204, description = "Manufacturer deleted successfully"),
        (status = 404, description = "Manufacturer not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_manufacturer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    scope: RequestScope,
) -> Result<impl IntoResponse> {
    state.manufacturer_service.delete(&scope, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/manufacturers",
    params(
        ("page" = Option<i64>, Query, description = "Page number"),
        ("limit" = Option<i64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Paginated list of manufacturers")
    )
)]
#[axum::debug_handler]
pub async fn list_manufacturers(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let result = state
        .manufacturer_service
        .list(Pagination::from_query(&query))
        .await?;
    Ok(Json(result.map(ManufacturerResponse::from)))
}

#[utoipa::path(
    get,
    path = "/api/manufacturers/{id}",
    params(
        ("id" = i64, Path, description = "Manufacturer ID")
    ),
    responses(
        (status = 200, description = "Manufacturer found", body = Json<ManufacturerResponse>),
        (status = 404, description = "Manufacturer not found")
    )
)]
#[axum::debug_handler]
pub async fn get_manufacturer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let manufacturer = state.manufacturer_service.get_by_id(id).await?;
    Ok(Json(ManufacturerResponse::from(manufacturer)))
}
