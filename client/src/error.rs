//! Error types for the todo API client.
//!
//! The server answers every failure with a `{ "error": "..." }` body. 400 and
//! 404 get their own variants carrying that message; any other unexpected
//! status lands in `HttpError` with the raw body.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClientError {
    /// 404: the todo does not exist.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// 400: the server rejected the input.
    #[error("bad request: {message}")]
    BadRequest { message: String },

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
