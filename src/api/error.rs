use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{api::types::ErrorBody, gemini::UpstreamError};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("API key not configured")]
    MissingCredential,
    #[error("Invalid JSON body")]
    InvalidBody,
    #[error("Prompt is required")]
    PromptRequired,
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::InvalidBody | RelayError::PromptRequired => StatusCode::BAD_REQUEST,
            RelayError::MissingCredential | RelayError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(RelayError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(RelayError::PromptRequired.status(), StatusCode::BAD_REQUEST);
        assert_eq!(RelayError::InvalidBody.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_message_passes_through() {
        let err = RelayError::from(UpstreamError::Status("quota exceeded".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "quota exceeded");

        let empty = RelayError::from(UpstreamError::EmptyResponse);
        assert_eq!(empty.to_string(), "Received an empty response from the API.");
    }
}
