// HTTP error responses
use crate::domain::error::DashboardError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::NotFound(message) | ApiError::BadRequest(message) => message,
        }
    }
}

impl From<DashboardError> for ApiError {
    fn from(error: DashboardError) -> Self {
        match error {
            DashboardError::UnknownFocus(_) => ApiError::NotFound(error.to_string()),
            DashboardError::UnsupportedTimeframe(_) => ApiError::BadRequest(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status(), error = self.message(), "request rejected");
        let body = Json(serde_json::json!({ "error": self.message() }));
        (self.status(), body).into_response()
    }
}
