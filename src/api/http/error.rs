use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::graph::GraphError;

/// The API has a single failure outcome: HTTP 500 carrying the failure's
/// message. Connection, query, and transaction errors are not distinguished
/// on the wire.
#[derive(Debug)]
pub struct HttpError {
    message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl From<GraphError> for HttpError {
    fn from(err: GraphError) -> Self {
        HttpError::new(err.to_string())
    }
}
