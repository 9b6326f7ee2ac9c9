use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::department_dto::{DepartmentResponse, CreateDepartmentPayload, UpdateDepartmentPayload},
    dto::pagination::{ListQuery, Pagination},
    error::Result,
    models::audit_context::RequestScope,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/departments",
    request_body = CreateDepartmentPayload,
    responses(
        (status = 201, description = "Department created successfully", body = Json<DepartmentResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 409, description = "Department name already exists")
    )
)]
#[axum::debug_handler]
pub async fn create_department(
    State(state): State<AppState>,
    scope: RequestScope,
    Json(payload): Json<CreateDepartmentPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let department = state.department_service.create(&scope, payload).await?;
    Ok((StatusCode::CREATED, Json(DepartmentResponse::from(department))))
}

#[utoipa::path(
    patch,
    path = "/api/departments/{id}",
    params(
        ("id" = i64, Path, description = "Department ID")
    ),
    request_body = UpdateDepartmentPayload,
    responses(
        (status = 200, description = "Department updated successfully", body = Json<DepartmentResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Department not found")
    )
)]
#[axum::debug_handler]
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    scope: RequestScope,
    Json(payload): Json<UpdateDepartmentPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let department = state.department_service.update(&scope, id, payload).await?;
    Ok(Json(DepartmentResponse::from(department)))
}

#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    params(
        ("id" = i64, Path, description = "Department ID")
    ),
    responses(
        (status = 204, description = "Department deleted successfully"),
        (status = 404, description = "Department not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    scope: RequestScope,
) -> Result<impl IntoResponse> {
    state.department_service.delete(&scope, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/departments",
    params(
        ("page" = Option<i64>, Query, description = "Page number"),
        ("limit" = Option<i64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Paginated list of departments")
    )
)]
#[axum::debug_handler]
pub async fn list_departments(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let result = state
        .department_service
        .list(Pagination::from_query(&query))
        .await?;
    Ok(Json(result.map(DepartmentResponse::from)))
}

#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    params(
        ("id" = i64, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department found", body = Json<DepartmentResponse>),
        (status = 404, description = "Department not found")
    )
)]
#[axum::debug_handler]
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let department = state.department_service.get_by_id(id).await?;
    Ok(Json(DepartmentResponse::from(department)))
}
