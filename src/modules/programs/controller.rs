use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::{info, instrument};

use academia_core::{AppError, ErrorResponse, MessageResponse, PaginationMeta, PaginationParams};
use academia_models::{
    CreateProgramDto, Program, ProgramDetail, ProgramId, PaginatedProgramsResponse,
    UpdateProgramDto,
};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/programs",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of programs with their faculty and subjects", body = PaginatedProgramsResponse),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse)
    ),
    tag = "Programs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_programs(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedProgramsResponse>, AppError> {
    let page = state.programs.list(params.offset(), params.limit()).await?;

    Ok(Json(PaginatedProgramsResponse {
        data: page.items,
        meta: PaginationMeta::new(&params, page.total),
    }))
}

#[utoipa::path(
    post,
    path = "/api/programs",
    request_body = CreateProgramDto,
    responses(
        (status = 201, description = "Program created", body = Program),
        (status = 400, description = "Malformed body, duplicate name or unknown faculty", body = ErrorResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Programs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn create_program(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateProgramDto>,
) -> Result<(StatusCode, Json<Program>), AppError> {
    let program = state.programs.create(dto).await?;

    info!(program_id = %program.id, by = auth_user.display_name(), "Program created");

    Ok((StatusCode::CREATED, Json(program)))
}

#[utoipa::path(
    get,
    path = "/api/programs/{id}",
    params(
        ("id" = ProgramId, Path, description = "Program ID")
    ),
    responses(
        (status = 200, description = "Program with its faculty and subjects", body = ProgramDetail),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Program not found", body = ErrorResponse)
    ),
    tag = "Programs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_program(
    State(state): State<AppState>,
    Path(id): Path<ProgramId>,
) -> Result<Json<ProgramDetail>, AppError> {
    Ok(Json(state.programs.get(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/programs/{id}",
    params(
        ("id" = ProgramId, Path, description = "Program ID")
    ),
    request_body = UpdateProgramDto,
    responses(
        (status = 200, description = "Program updated", body = MessageResponse),
        (status = 400, description = "Malformed body, duplicate name or unknown faculty", body = ErrorResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Program not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Programs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn update_program(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<ProgramId>,
    ValidatedJson(dto): ValidatedJson<UpdateProgramDto>,
) -> Result<Json<MessageResponse>, AppError> {
    state.programs.update(id, dto).await?;

    info!(program_id = %id, by = auth_user.display_name(), "Program updated");

    Ok(Json(MessageResponse::new("Program updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/programs/{id}",
    params(
        ("id" = ProgramId, Path, description = "Program ID")
    ),
    responses(
        (status = 200, description = "Program deleted; its subjects are detached", body = MessageResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Program not found", body = ErrorResponse)
    ),
    tag = "Programs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_program(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<ProgramId>,
) -> Result<Json<MessageResponse>, AppError> {
    state.programs.delete(id).await?;

    info!(program_id = %id, by = auth_user.display_name(), "Program deleted");

    Ok(Json(MessageResponse::new("Program deleted successfully")))
}
