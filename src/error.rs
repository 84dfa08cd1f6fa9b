use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Malformed input on the job route. Never recovered from, always answered with a 500.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("request body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("request body has no `hello` field")]
    MissingHello
}

impl IntoResponse for JobError {
    // the access log line records the failure, nothing is logged here
    fn into_response(self) -> Response {

        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()

    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}")]
    InvalidValue {
        name: &'static str,
        value: String
    }
}
