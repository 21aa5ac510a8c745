use axum::Json;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::database::ServiceError;
use crate::result::MessageResponse;

#[derive(Debug, Error)]
pub enum AppError {
    /// 请求体无法解析
    #[error("{1}")]
    BadRequest(StatusCode, String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(status, _) => *status,
            AppError::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(MessageResponse::error(self.to_string()))).into_response()
    }
}
