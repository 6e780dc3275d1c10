use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::result::MessageResponse;
use crate::validation::{INVALID_INPUT, ValidationErrors};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request body: {0}")]
    Validation(ValidationErrors),
    #[error("Member with id {0} not found.")]
    MemberNotFound(i32),
    #[error("Workout session with id {0} not found.")]
    WorkoutSessionNotFound(i32),
    #[error("No workout sessions found for member with id {0}.")]
    NoWorkoutSessions(i32),
    #[error("{0}")]
    BadPath(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.into())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        AppError::Validation(ValidationErrors::schema(INVALID_INPUT))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadPath(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadPath(_) => StatusCode::BAD_REQUEST,
            AppError::MemberNotFound(_)
            | AppError::WorkoutSessionNotFound(_)
            | AppError::NoWorkoutSessions(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let text = self.to_string();
        match self {
            // 校验错误直接返回字段到错误信息的映射
            AppError::Validation(errors) => (status, Json(errors)).into_response(),
            AppError::NoWorkoutSessions(_) => {
                (status, MessageResponse::json(text)).into_response()
            }
            _ => (status, Json(ErrorResponse { error: text })).into_response(),
        }
    }
}
