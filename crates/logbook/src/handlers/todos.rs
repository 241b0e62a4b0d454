//! Todo CRUD handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use logbook_core::journal::{
    validate_id, CreateTodoRequest, Todo, UpdateTodoRequest, ValidationError,
};

use crate::{handlers::ApiError, state::AppState};

/// List all todos, newest first (GET /api/todos).
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state
        .todos
        .list_todos()
        .await
        .map_err(ApiError::storage("Failed to fetch todos"))?;

    Ok(Json(todos))
}

/// Create a new todo (POST /api/todos).
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    let new_todo = payload.into_new_todo()?;

    tracing::debug!(payload = ?new_todo, "Received create todo request");

    // Verify the journal exists
    if let Some(journal_id) = new_todo.journal_id {
        let journal = state
            .journals
            .get_journal(journal_id)
            .await
            .map_err(ApiError::storage("Failed to fetch journal"))?;

        if journal.is_none() {
            return Err(ValidationError::UnknownJournal(journal_id).into());
        }
    }

    let todo = state
        .todos
        .create_todo(&new_todo)
        .await
        .map_err(ApiError::storage("Failed to create todo"))?;

    tracing::info!(
        todo_id = todo.id,
        journal_id = ?todo.journal_id,
        priority = %todo.priority,
        "Created new todo"
    );

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Get a single todo by ID (GET /api/todos/{id}).
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = validate_id(&id)?;

    state
        .todos
        .get_todo(id)
        .await
        .map_err(ApiError::storage("Failed to fetch todo"))?
        .map(Json)
        .ok_or(ApiError::NotFound("Todo"))
}

/// Update a todo by ID (PUT /api/todos/{id}).
///
/// Only the fields present in the body change.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = validate_id(&id)?;
    let Json(payload) = payload?;
    payload.validate()?;

    let todo = state
        .todos
        .update_todo(id, &payload)
        .await
        .map_err(ApiError::storage("Failed to update todo"))?
        .ok_or(ApiError::NotFound("Todo"))?;

    tracing::info!(todo_id = id, done = todo.done, "Updated todo");

    Ok(Json(todo))
}

/// Delete a todo by ID (DELETE /api/todos/{id}).
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = validate_id(&id)?;

    state
        .todos
        .delete_todo(id)
        .await
        .map_err(ApiError::storage("Failed to delete todo"))?;

    tracing::info!(todo_id = id, "Deleted todo");

    Ok(StatusCode::NO_CONTENT)
}
