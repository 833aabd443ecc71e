use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type CheckResult<T> = Result<T, CheckError>;

/// Anything that stops a check from reaching a verdict.
///
/// None of these are retried; the caller sees a generic `error` status.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Missing {0} parameter.")]
    MissingParam(&'static str),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0} is not configured.")]
    MissingCredential(&'static str),

    #[error("Invalid upstream URL {0}")]
    Config(String),

    #[error("Failed to connect to {platform} API.")]
    Upstream {
        platform: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected response from {platform} API: {detail}")]
    UnexpectedResponse {
        platform: &'static str,
        detail: String,
    },
}

impl CheckError {
    pub fn upstream(platform: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| CheckError::Upstream { platform, source }
    }

    /// For bodies that arrived but did not have the expected JSON shape.
    pub fn decode(platform: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |e| CheckError::UnexpectedResponse { platform, detail: e.to_string() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            CheckError::MissingParam(_) | CheckError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CheckError::MissingCredential(_)
            | CheckError::Config(_)
            | CheckError::Upstream { .. }
            | CheckError::UnexpectedResponse { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CheckError {
    fn into_response(self) -> Response {
        match &self {
            CheckError::Upstream { platform, source } => {
                tracing::error!("Error fetching {} API: {}", platform, source)
            }
            CheckError::UnexpectedResponse { .. }
            | CheckError::MissingCredential(_)
            | CheckError::Config(_) => {
                tracing::error!("{}", self)
            }
            _ => tracing::debug!("Rejected request: {}", self),
        }

        let body = Json(json!({
            "status": "error",
            "error": self.to_string(),
        }));
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_problems_are_client_errors() {
        assert_eq!(CheckError::MissingParam("username").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            CheckError::InvalidInput("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn missing_credential_message_names_it() {
        let err = CheckError::MissingCredential("Twitter API Bearer Token");
        assert_eq!(err.to_string(), "Twitter API Bearer Token is not configured.");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unexpected_response_names_platform() {
        let err = CheckError::UnexpectedResponse { platform: "Steam", detail: "eof".into() };
        assert_eq!(err.to_string(), "Unexpected response from Steam API: eof");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
