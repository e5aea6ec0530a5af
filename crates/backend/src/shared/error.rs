use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Error taxonomy of the HTTP surface
///
/// Folder-missing and empty-listing conditions are not errors: they travel as
/// notices inside a successful listing response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("The password is not correct")]
    AuthenticationFailed,

    #[error("Unknown session")]
    SessionNotFound,

    #[error("Administrator login is required")]
    AdminRequired,

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("File '{0}' was not found")]
    FileNotFound(String),

    #[error("Invalid file name '{0}'")]
    InvalidFileName(String),

    #[error("No files were selected for upload")]
    EmptyUpload,

    #[error("Failed to store '{name}': {source}")]
    WriteFailure {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            ApiError::SessionNotFound => StatusCode::NOT_FOUND,
            ApiError::AdminRequired => StatusCode::FORBIDDEN,
            ApiError::UnknownCategory(_) => StatusCode::NOT_FOUND,
            ApiError::FileNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidFileName(_) => StatusCode::BAD_REQUEST,
            ApiError::EmptyUpload => StatusCode::BAD_REQUEST,
            ApiError::WriteFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {:#}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            ApiError::AuthenticationFailed.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::SessionNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::EmptyUpload.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::WriteFailure {
                name: "a.pdf".into(),
                source: std::io::Error::other("disk full"),
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
