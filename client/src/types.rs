//! Wire DTOs for the todo API.
//!
//! These mirror the server's JSON but are defined independently so the
//! client does not depend on axum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a todo. The server trims `text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub text: String,
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Health {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub app: String,
    pub description: String,
}

/// Body of any error response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
