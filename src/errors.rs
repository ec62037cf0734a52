use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Failures raised inside one stage of the generation pipeline.
///
/// These never reach the HTTP caller directly; the orchestrator catches them
/// and escalates to the next stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Validation error at {path}: {message}")]
    ValidationError { path: String, message: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("No questions parsed from plain template")]
    NoQuestionsParsed,

    #[error("Upstream model error: {0}")]
    UpstreamError(String),
}

impl GenerationError {
    pub fn validation(path: impl Into<String>, message: impl Into<String>) -> Self {
        GenerationError::ValidationError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::ParseError(err.to_string())
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::UpstreamError(err.to_string())
    }
}

/// Terminal payload returned when every generation stage failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationFailure {
    pub error: String,
    pub hint: String,
    pub preview: String,
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Generation failed: {}", .0.error)]
    GenerationFailed(GenerationFailure),

    #[error("Export error: {0}")]
    ExportError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::GenerationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ExportError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::GenerationFailed(failure) => {
                HttpResponse::build(self.status_code()).json(failure)
            }
            _ => HttpResponse::build(self.status_code()).json(ErrorResponse {
                error: self.to_string(),
                code: self.status_code().as_u16(),
            }),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::ValidationError { .. } => AppError::ValidationError(err.to_string()),
            other => AppError::InternalError(other.to_string()),
        }
    }
}

impl From<GenerationFailure> for AppError {
    fn from(failure: GenerationFailure) -> Self {
        AppError::GenerationFailed(failure)
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(err: zip::result::ZipError) -> Self {
        AppError::ExportError(format!("Zip archive error: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::ExportError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("JSON serialization error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ExportError("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let failure = GenerationFailure {
            error: "e".into(),
            hint: "h".into(),
            preview: "p".into(),
        };
        assert_eq!(
            AppError::GenerationFailed(failure).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_error_messages() {
        let err = GenerationError::validation("questions[0].choices", "must have 4 entries");
        assert_eq!(
            err.to_string(),
            "Validation error at questions[0].choices: must have 4 entries"
        );
        assert_eq!(
            GenerationError::NoQuestionsParsed.to_string(),
            "No questions parsed from plain template"
        );
    }

    #[test]
    fn test_generation_validation_error_maps_to_bad_request() {
        let app_err: AppError = GenerationError::validation("$", "bad").into();
        assert_eq!(app_err.status_code(), StatusCode::BAD_REQUEST);

        let app_err: AppError = GenerationError::ParseError("eof".into()).into();
        assert_eq!(app_err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_generation_failure_renders_payload() {
        let failure = GenerationFailure {
            error: "could not parse".into(),
            hint: "try fewer questions".into(),
            preview: "Q1 garbage".into(),
        };
        let response = AppError::GenerationFailed(failure).error_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "could not parse");
        assert_eq!(json["hint"], "try fewer questions");
        assert_eq!(json["preview"], "Q1 garbage");
    }
}
