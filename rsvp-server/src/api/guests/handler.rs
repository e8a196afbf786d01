//! Guest API Handlers
//!
//! Mutations answer with the `ApiResponse` envelope; reads return the bare
//! guest or list.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{ConfirmAttendance, Guest, GuestCreate, GuestUpdate};

/// Unparsable bodies are validation errors, not axum's plain-text rejection
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(v)| v)
        .map_err(|e| AppError::validation(format!("Invalid request body: {}", e.body_text())))
}

/// Ids are numeric; anything else cannot name a guest
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse().map_err(|_| {
        AppError::with_message(ErrorCode::GuestNotFound, format!("Guest '{raw}' not found"))
            .with_detail("id", raw)
    })
}

/// POST /api/invitados - register a guest
pub async fn register(
    State(state): State<ServerState>,
    payload: Result<Json<GuestCreate>, JsonRejection>,
) -> AppResult<(StatusCode, ApiResponse<Guest>)> {
    let guest = state.registry.register(body(payload)?).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::success_with_message("Guest created successfully", guest),
    ))
}

/// POST /api/invitados/confirmar - confirm attendance
pub async fn confirm(
    State(state): State<ServerState>,
    payload: Result<Json<ConfirmAttendance>, JsonRejection>,
) -> AppResult<ApiResponse<Guest>> {
    let confirmation = state.registry.confirm(body(payload)?).await?;
    Ok(ApiResponse::success_with_message(
        confirmation.message,
        confirmation.guest,
    ))
}

/// GET /api/invitados - all guests, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Guest>>> {
    Ok(Json(state.registry.list_all().await?))
}

/// GET /api/invitados/confirmados
pub async fn list_confirmed(State(state): State<ServerState>) -> AppResult<Json<Vec<Guest>>> {
    Ok(Json(state.registry.list_confirmed().await?))
}

/// GET /api/invitados/codigo/{code}
pub async fn get_by_code(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<Guest>> {
    Ok(Json(state.registry.find_by_code(&code).await?))
}

/// PUT /api/invitados/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<GuestUpdate>, JsonRejection>,
) -> AppResult<ApiResponse<Guest>> {
    let id = parse_id(&id)?;
    let guest = state.registry.update(id, body(payload)?).await?;
    Ok(ApiResponse::success_with_message(
        "Guest updated successfully",
        guest,
    ))
}

/// DELETE /api/invitados/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Guest>> {
    let deletion = state.registry.delete(parse_id(&id)?).await?;
    Ok(ApiResponse::success_with_message(
        deletion.message,
        deletion.guest,
    ))
}
