use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::asset_dto::{
        AssetResponse, CreateAssetPayload, UpdateAssetPayload, UpdateAssetStatusPayload,
    },
    dto::pagination::{ListQuery, Pagination},
    error::Result,
    models::audit_context::RequestScope,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/assets",
    request_body = CreateAssetPayload,
    responses(
        (status = 201, description = "Asset created successfully", body = Json<AssetResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 409, description = "Asset already exists or references a missing record")
    )
)]
#[axum::debug_handler]
pub async fn create_asset(
    State(state): State<AppState>,
    scope: RequestScope,
    Json(payload): Json<CreateAssetPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let asset = state.asset_service.create(&scope, payload).await?;
    Ok((StatusCode::CREATED, Json(AssetResponse::from(asset))))
}

#[utoipa::path(
    patch,
    path = "/api/assets/{id}",
    params(
        ("id" = i64, Path, description = "Asset ID")
    ),
    request_body = UpdateAssetPayload,
    responses(
        (status = 200, description = "Asset updated successfully", body = Json<AssetResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Asset not found")
    )
)]
#[axum::debug_handler]
pub async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    scope: RequestScope,
    Json(payload): Json<UpdateAssetPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let asset = state.asset_service.update(&scope, id, payload).await?;
    Ok(Json(AssetResponse::from(asset)))
}

#[utoipa::path(
    delete,
    path = "/api/assets/{id}",
    params(
        ("id" = i64, Path, description = "Asset ID")
    ),
    responses(
        (status = 204, description = "Asset deleted successfully"),
        (status = 404, description = "Asset not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    scope: RequestScope,
) -> Result<impl IntoResponse> {
    state.asset_service.delete(&scope, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/assets",
    params(
        ("page" = Option<i64>, Query, description = "Page number"),
        ("limit" = Option<i64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Paginated list of assets")
    )
)]
#[axum::debug_handler]
pub async fn list_assets(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let result = state
        .asset_service
        .list(Pagination::from_query(&query))
        .await?;
    Ok(Json(result.map(AssetResponse::from)))
}

#[utoipa::path(
    get,
    path = "/api/assets/{id}",
    params(
        ("id" = i64, Path, description = "Asset ID")
    ),
    responses(
        (status = 200, description = "Asset found", body = Json<AssetResponse>),
        (status = 404, description = "Asset not found")
    )
)]
#[axum::debug_handler]
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let asset = state.asset_service.get_by_id(id).await?;
    Ok(Json(AssetResponse::from(asset)))
}

#[utoipa::path(
    patch,
    path = "/api/assets/{id}/status",
    params(
        ("id" = i64, Path, description = "Asset ID")
    ),
    request_body = UpdateAssetStatusPayload,
    responses(
        (status = 200, description = "Asset status changed", body = Json<AssetResponse>),
        (status = 422, description = "Unknown status"),
        (status = 404, description = "Asset not found")
    )
)]
#[axum::debug_handler]
pub async fn update_asset_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    scope: RequestScope,
    Json(payload): Json<UpdateAssetStatusPayload>,
) -> Result<impl IntoResponse> {
    let asset = state
        .asset_service
        .update_status(&scope, id, payload.status)
        .await?;
    Ok(Json(AssetResponse::from(asset)))
}
