use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::{info, instrument};

use academia_core::{AppError, ErrorResponse, MessageResponse, PaginationMeta, PaginationParams};
use academia_models::{
    CreateProfessorDto, Professor, ProfessorDetail, ProfessorId, PaginatedProfessorsResponse,
    UpdateProfessorDto,
};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/professors",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of professors with their subject", body = PaginatedProfessorsResponse),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse)
    ),
    tag = "Professors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_professors(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedProfessorsResponse>, AppError> {
    let page = state.professors.list(params.offset(), params.limit()).await?;

    Ok(Json(PaginatedProfessorsResponse {
        data: page.items,
        meta: PaginationMeta::new(&params, page.total),
    }))
}

#[utoipa::path(
    post,
    path = "/api/professors",
    request_body = CreateProfessorDto,
    responses(
        (status = 201, description = "Professor created", body = Professor),
        (status = 400, description = "Malformed body or unknown subject", body = ErrorResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Professors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn create_professor(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateProfessorDto>,
) -> Result<(StatusCode, Json<Professor>), AppError> {
    let professor = state.professors.create(dto).await?;

    info!(professor_id = %professor.id, by = auth_user.display_name(), "Professor created");

    Ok((StatusCode::CREATED, Json(professor)))
}

#[utoipa::path(
    get,
    path = "/api/professors/{id}",
    params(
        ("id" = ProfessorId, Path, description = "Professor ID")
    ),
    responses(
        (status = 200, description = "Professor with their subject", body = ProfessorDetail),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Professor not found", body = ErrorResponse)
    ),
    tag = "Professors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_professor(
    State(state): State<AppState>,
    Path(id): Path<ProfessorId>,
) -> Result<Json<ProfessorDetail>, AppError> {
    Ok(Json(state.professors.get(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/professors/{id}",
    params(
        ("id" = ProfessorId, Path, description = "Professor ID")
    ),
    request_body = UpdateProfessorDto,
    responses(
        (status = 200, description = "Professor updated", body = MessageResponse),
        (status = 400, description = "Malformed body or unknown subject", body = ErrorResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Professor not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Professors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn update_professor(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<ProfessorId>,
    ValidatedJson(dto): ValidatedJson<UpdateProfessorDto>,
) -> Result<Json<MessageResponse>, AppError> {
    state.professors.update(id, dto).await?;

    info!(professor_id = %id, by = auth_user.display_name(), "Professor updated");

    Ok(Json(MessageResponse::new("Professor updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/professors/{id}",
    params(
        ("id" = ProfessorId, Path, description = "Professor ID")
    ),
    responses(
        (status = 200, description = "Professor deleted", body = MessageResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Professor not found", body = ErrorResponse)
    ),
    tag = "Professors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_professor(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<ProfessorId>,
) -> Result<Json<MessageResponse>, AppError> {
    state.professors.delete(id).await?;

    info!(professor_id = %id, by = auth_user.display_name(), "Professor deleted");

    Ok(Json(MessageResponse::new("Professor deleted successfully")))
}
