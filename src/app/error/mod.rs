use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::validation::ValidationError;

mod schema;

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// Errors a handler can answer a request with.
///
/// Field validation failures are reported as a JSON map from field name to messages.
/// Bodies that cannot be read as fields at all are a separate kind and get the generic
/// `{code, message}` body instead.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Malformed request body: {0}")]
    MalformedRequest(String),
    #[error("Unsupported content type: {0}")]
    UnsupportedMediaType(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::Validation(e) => {
                tracing::warn!(fields = ?e.fields().collect::<Vec<_>>(), "{}", e);
                (status, Json(e)).into_response()
            }
            Self::MalformedRequest(_) | Self::UnsupportedMediaType(_) => {
                tracing::warn!("{}", self);
                (
                    status,
                    Json(schema::Error {
                        code: status.as_u16(),
                        message: self.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
