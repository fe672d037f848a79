// src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError {
        message: String,
        cause: Option<String>,
    },
    NotFound(String),
    ServerError(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationError {
            message: message.into(),
            cause: None,
        }
    }

    pub fn validation_with_cause(message: impl Into<String>, cause: impl ToString) -> Self {
        AppError::ValidationError {
            message: message.into(),
            cause: Some(cause.to_string()),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn server(message: impl Into<String>) -> Self {
        AppError::ServerError(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::ValidationError {
                message,
                cause: Some(cause),
            } => json!({ "message": message, "error": cause }),
            AppError::ValidationError { message, cause: None }
            | AppError::NotFound(message)
            | AppError::ServerError(message) => json!({ "message": message }),
        };

        (status, Json(body)).into_response()
    }
}
