use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::category_dto::{CategoryResponse, CreateCategoryPayload, UpdateCategoryPayload},
    dto::pagination::{ListQuery, Pagination},
    error::Result,
    models::audit_context::RequestScope,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryPayload,
    responses(
        (status = 201, description = "Category created successfully", body = Json<CategoryResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 409, description = "Category name already exists")
    )
)]
#[axum::debug_handler]
pub async fn create_category(
    State(state): State<AppState>,
    scope: RequestScope,
    Json(payload): Json<CreateCategoryPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let category = state.category_service.create(&scope, payload).await?;
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}

#[utoipa::path(
    patch,
    path = "/api/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryPayload,
    responses(
        (status = 200, description = "Category updated successfully", body = Json<CategoryResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Category not found")
    )
)]
#[axum::debug_handler]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    scope: RequestScope,
    Json(payload): Json<UpdateCategoryPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let category = state.category_service.update(&scope, id, payload).await?;
    Ok(Json(CategoryResponse::from(category)))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted successfully"),
        (status = 404, description = "Category not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    scope: RequestScope,
) -> Result<impl IntoResponse> {
    state.category_service.delete(&scope, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/categories",
    params(
        ("page" = Option<i64>, Query, description = "Page number"),
        ("limit" = Option<i64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Paginated list of categories")
    )
)]
#[axum::debug_handler]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let result = state
        .category_service
        .list(Pagination::from_query(&query))
        .await?;
    Ok(Json(result.map(CategoryResponse::from)))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = Json<CategoryResponse>),
        (status = 404, description = "Category not found")
    )
)]
#[axum::debug_handler]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let category = state.category_service.get_by_id(id).await?;
    Ok(Json(CategoryResponse::from(category)))
}
