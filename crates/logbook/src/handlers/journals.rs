//! Journal CRUD handlers.
//!
//! Input is validated here, before any storage call. Storage faults are
//! wrapped with the failing operation and surface as 500s.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use logbook_core::journal::{
    validate_id, CreateJournalRequest, Journal, Todo, UpdateJournalRequest,
};

use crate::{handlers::ApiError, state::AppState};

/// List all journals, newest first (GET /api/journals).
pub async fn list_journals(State(state): State<AppState>) -> Result<Json<Vec<Journal>>, ApiError> {
    let journals = state
        .journals
        .list_journals()
        .await
        .map_err(ApiError::storage("Failed to fetch journals"))?;

    Ok(Json(journals))
}

/// Create a new journal (POST /api/journals).
pub async fn create_journal(
    State(state): State<AppState>,
    payload: Result<Json<CreateJournalRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    let text = payload.validate()?;

    let journal = state
        .journals
        .create_journal(text)
        .await
        .map_err(ApiError::storage("Failed to create journal"))?;

    tracing::info!(journal_id = journal.id, "Created new journal");

    Ok((StatusCode::CREATED, Json(journal)))
}

/// Get a single journal by ID (GET /api/journals/{id}).
pub async fn get_journal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Journal>, ApiError> {
    let id = validate_id(&id)?;

    state
        .journals
        .get_journal(id)
        .await
        .map_err(ApiError::storage("Failed to fetch journal"))?
        .map(Json)
        .ok_or(ApiError::NotFound("Journal"))
}

/// Replace a journal's text (PUT /api/journals/{id}).
pub async fn update_journal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateJournalRequest>, JsonRejection>,
) -> Result<Json<Journal>, ApiError> {
    let id = validate_id(&id)?;
    let Json(payload) = payload?;
    let text = payload.validate()?;

    let journal = state
        .journals
        .update_journal(id, text)
        .await
        .map_err(ApiError::storage("Failed to update journal"))?
        .ok_or(ApiError::NotFound("Journal"))?;

    tracing::info!(journal_id = id, "Updated journal");

    Ok(Json(journal))
}

/// Delete a journal by ID (DELETE /api/journals/{id}).
///
/// Todos that referenced the journal are kept with their link cleared.
pub async fn delete_journal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = validate_id(&id)?;

    state
        .journals
        .delete_journal(id)
        .await
        .map_err(ApiError::storage("Failed to delete journal"))?;

    tracing::info!(journal_id = id, "Deleted journal");

    Ok(StatusCode::NO_CONTENT)
}

/// List a journal's todos, oldest first (GET /api/journals/{id}/todos).
///
/// The journal itself is not looked up; an unknown id yields an empty list.
pub async fn list_journal_todos(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let id = validate_id(&id)?;

    let todos = state
        .todos
        .list_todos_by_journal(id)
        .await
        .map_err(ApiError::storage("Failed to fetch journal todos"))?;

    Ok(Json(todos))
}
