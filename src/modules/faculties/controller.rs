use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::{info, instrument};

use academia_core::{AppError, ErrorResponse, MessageResponse, PaginationMeta, PaginationParams};
use academia_models::{
    CreateFacultyDto, Faculty, FacultyDetail, FacultyId, PaginatedFacultiesResponse,
    UpdateFacultyDto,
};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/faculties",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of faculties with their programs", body = PaginatedFacultiesResponse),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse)
    ),
    tag = "Faculties",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_faculties(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedFacultiesResponse>, AppError> {
    let page = state.faculties.list(params.offset(), params.limit()).await?;

    Ok(Json(PaginatedFacultiesResponse {
        data: page.items,
        meta: PaginationMeta::new(&params, page.total),
    }))
}

#[utoipa::path(
    post,
    path = "/api/faculties",
    request_body = CreateFacultyDto,
    responses(
        (status = 201, description = "Faculty created", body = Faculty),
        (status = 400, description = "Malformed body or duplicate name", body = ErrorResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Faculties",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn create_faculty(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateFacultyDto>,
) -> Result<(StatusCode, Json<Faculty>), AppError> {
    let faculty = state.faculties.create(dto).await?;

    info!(faculty_id = %faculty.id, by = auth_user.display_name(), "Faculty created");

    Ok((StatusCode::CREATED, Json(faculty)))
}

#[utoipa::path(
    get,
    path = "/api/faculties/{id}",
    params(
        ("id" = FacultyId, Path, description = "Faculty ID")
    ),
    responses(
        (status = 200, description = "Faculty with its programs", body = FacultyDetail),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Faculty not found", body = ErrorResponse)
    ),
    tag = "Faculties",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_faculty(
    State(state): State<AppState>,
    Path(id): Path<FacultyId>,
) -> Result<Json<FacultyDetail>, AppError> {
    Ok(Json(state.faculties.get(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/faculties/{id}",
    params(
        ("id" = FacultyId, Path, description = "Faculty ID")
    ),
    request_body = UpdateFacultyDto,
    responses(
        (status = 200, description = "Faculty updated", body = MessageResponse),
        (status = 400, description = "Malformed body or duplicate name", body = ErrorResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Faculty not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Faculties",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn update_faculty(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<FacultyId>,
    ValidatedJson(dto): ValidatedJson<UpdateFacultyDto>,
) -> Result<Json<MessageResponse>, AppError> {
    state.faculties.update(id, dto).await?;

    info!(faculty_id = %id, by = auth_user.display_name(), "Faculty updated");

    Ok(Json(MessageResponse::new("Faculty updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/faculties/{id}",
    params(
        ("id" = FacultyId, Path, description = "Faculty ID")
    ),
    responses(
        (status = 200, description = "Faculty deleted; its programs are detached", body = MessageResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Faculty not found", body = ErrorResponse)
    ),
    tag = "Faculties",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_faculty(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<FacultyId>,
) -> Result<Json<MessageResponse>, AppError> {
    state.faculties.delete(id).await?;

    info!(faculty_id = %id, by = auth_user.display_name(), "Faculty deleted");

    Ok(Json(MessageResponse::new("Faculty deleted successfully")))
}
