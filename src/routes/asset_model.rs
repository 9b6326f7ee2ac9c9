use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::asset_model_dto::{AssetModelResponse, CreateAssetModelPayload, UpdateAssetModelPayload},
    dto::pagination::{ListQuery, Pagination},
    error::Result,
    models::audit_context::RequestScope,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/models",
    request_body = CreateAssetModelPayload,
    responses(
        (status = 201, description = "Model created successfully", body = Json<AssetModelResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 409, description = "Model already exists or references a missing record")
    )
)]
#[axum::debug_handler]
pub async fn create_model(
    State(state): State<AppState>,
    scope: RequestScope,
    Json(payload): Json<CreateAssetModelPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let model = state.asset_model_service.create(&scope, payload).await?;
    Ok((StatusCode::CREATED, Json(AssetModelResponse::from(model))))
}

#[utoipa::path(
    patch,
    path = "/api/models/{id}",
    params(
        ("id" = i64, Path, description = "Model ID")
    ),
    request_body = UpdateAssetModelPayload,
    responses(
        (status = 200, description = "Model updated successfully", body = Json<AssetModelResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Model not found")
    )
)]
#[axum::debug_handler]
pub async fn update_model(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    scope: RequestScope,
    Json(payload): Json<UpdateAssetModelPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let model = state.asset_model_service.update(&scope, id, payload).await?;
    Ok(Json(AssetModelResponse::from(model)))
}

#[utoipa::path(
    delete,
    path = "/api/models/{id}",
    params(
        ("id" = i64, Path, description = "Model ID")
    ),
    responses(
        (status = 204, description = "Model deleted successfully"),
        (status = 404, description = "Model not found"),
        (status = 409, description = "Model is still referenced by assets")
    )
)]
#[axum::debug_handler]
pub async fn delete_model(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    scope: RequestScope,
) -> Result<impl IntoResponse> {
    state.asset_model_service.delete(&scope, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/models",
    params(
        ("page" = Option<i64>, Query, description = "Page number"),
        ("limit" = Option<i64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Paginated list of models")
    )
)]
#[axum::debug_handler]
pub async fn list_models(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let result = state
        .asset_model_service
        .list(Pagination::from_query(&query))
        .await?;
    Ok(Json(result.map(AssetModelResponse::from)))
}

#[utoipa::path(
    get,
    path = "/api/models/{id}",
    params(
        ("id" = i64, Path, description = "Model ID")
    ),
    responses(
        (status = 200, description = "Model found", body = Json<AssetModelResponse>),
        (status = 404, description = "Model not found")
    )
)]
#[axum::debug_handler]
pub async fn get_model(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let model = state.asset_model_service.get_by_id(id).await?;
    Ok(Json(AssetModelResponse::from(model)))
}
