//! Request handlers for the `/api` surface.
//!
//! Handlers stay thin: validate, touch the store under its lock, and let
//! `ApiError` pick the status code for anything that goes wrong.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::ApiError,
    state::AppState,
    store::Todo,
    validation::{parse_id, validate_text},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
    pub app: String,
    pub description: String,
}

pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    let todos = state.store.read().await.list();
    Json(todos)
}

pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let text = validate_text(&body)?;
    let todo = state.store.write().await.insert(text);
    debug!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let Some(id) = parse_id(&raw_id)? else {
        return Err(ApiError::NotFound);
    };

    if !state.store.write().await.delete(id) {
        return Err(ApiError::NotFound);
    }
    debug!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "OK".to_string(),
        timestamp: crate::time::format(&crate::time::now()),
        app: state.config.app_name.clone(),
        description: state.config.app_description.clone(),
    })
}
