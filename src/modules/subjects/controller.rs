use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::{info, instrument};

use academia_core::{AppError, ErrorResponse, MessageResponse, PaginationMeta, PaginationParams};
use academia_models::{
    CreateSubjectDto, Subject, SubjectDetail, SubjectId, PaginatedSubjectsResponse,
    UpdateSubjectDto,
};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/subjects",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of subjects with their program and professors", body = PaginatedSubjectsResponse),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse)
    ),
    tag = "Subjects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_subjects(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedSubjectsResponse>, AppError> {
    let page = state.subjects.list(params.offset(), params.limit()).await?;

    Ok(Json(PaginatedSubjectsResponse {
        data: page.items,
        meta: PaginationMeta::new(&params, page.total),
    }))
}

#[utoipa::path(
    post,
    path = "/api/subjects",
    request_body = CreateSubjectDto,
    responses(
        (status = 201, description = "Subject created", body = Subject),
        (status = 400, description = "Malformed body, duplicate name or unknown program", body = ErrorResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Subjects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn create_subject(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateSubjectDto>,
) -> Result<(StatusCode, Json<Subject>), AppError> {
    let subject = state.subjects.create(dto).await?;

    info!(subject_id = %subject.id, by = auth_user.display_name(), "Subject created");

    Ok((StatusCode::CREATED, Json(subject)))
}

#[utoipa::path(
    get,
    path = "/api/subjects/{id}",
    params(
        ("id" = SubjectId, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Subject with its program and professors", body = SubjectDetail),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Subject not found", body = ErrorResponse)
    ),
    tag = "Subjects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_subject(
    State(state): State<AppState>,
    Path(id): Path<SubjectId>,
) -> Result<Json<SubjectDetail>, AppError> {
    Ok(Json(state.subjects.get(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/subjects/{id}",
    params(
        ("id" = SubjectId, Path, description = "Subject ID")
    ),
    request_body = UpdateSubjectDto,
    responses(
        (status = 200, description = "Subject updated", body = MessageResponse),
        (status = 400, description = "Malformed body, duplicate name or unknown program", body = ErrorResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Subject not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Subjects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn update_subject(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<SubjectId>,
    ValidatedJson(dto): ValidatedJson<UpdateSubjectDto>,
) -> Result<Json<MessageResponse>, AppError> {
    state.subjects.update(id, dto).await?;

    info!(subject_id = %id, by = auth_user.display_name(), "Subject updated");

    Ok(Json(MessageResponse::new("Subject updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/subjects/{id}",
    params(
        ("id" = SubjectId, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Subject deleted; its professors are detached", body = MessageResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Subject not found", body = ErrorResponse)
    ),
    tag = "Subjects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_subject(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<SubjectId>,
) -> Result<Json<MessageResponse>, AppError> {
    state.subjects.delete(id).await?;

    info!(subject_id = %id, by = auth_user.display_name(), "Subject deleted");

    Ok(Json(MessageResponse::new("Subject deleted successfully")))
}
