use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CovidError {
    /// The page could not be fetched, or the server answered with a non-200 status.
    #[error("Network error: {0}")]
    Network(String),

    /// A script element is missing or its payload is not valid JSON.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// City breakdown requested for a region that upstream reports as a whole.
    #[error("Unsupported region: {0}")]
    UnsupportedRegion(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<hyper::Error> for CovidError {
    fn from(e: hyper::Error) -> Self {
        CovidError::Network(e.to_string())
    }
}

impl From<hyper::http::Error> for CovidError {
    fn from(e: hyper::http::Error) -> Self {
        CovidError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for CovidError {
    fn from(e: serde_json::Error) -> Self {
        CovidError::Parse(e.to_string())
    }
}

impl IntoResponse for CovidError {
    fn into_response(self) -> Response {
        let status = match self {
            CovidError::Network(ref msg) | CovidError::Parse(ref msg) => {
                tracing::error!("Upstream error: {}", msg);
                StatusCode::BAD_GATEWAY
            }
            CovidError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            CovidError::UnsupportedRegion(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CovidError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, CovidError>;
