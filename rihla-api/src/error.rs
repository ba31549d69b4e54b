use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rihla_core::ParseFailure;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    Unparseable(ParseFailure),
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Unparseable(failure) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "kind": failure.kind(), "error": failure.to_string() }),
            ),
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "Internal Server Error" }))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}
