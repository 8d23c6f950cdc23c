use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidInput(String),

    #[error("Stored data failed validation: {0}")]
    InvalidStoredData(String),

    #[error("Database unavailable")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidInput(msg) => AppError::InvalidInput(msg),
            e @ DomainError::InvalidDocument { .. } => AppError::InvalidStoredData(e.to_string()),
            DomainError::Unavailable(msg) => AppError::Unavailable(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(e: actix_web::error::BlockingError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidStoredData(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::InvalidInput(_)
            | AppError::InvalidStoredData(_)
            | AppError::Unavailable(_) => self.to_string(),
            AppError::Internal(msg) => {
                log::error!("Request failed: {}", msg);
                "Internal server error".to_string()
            }
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": message }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn invalid_input_returns_422() {
        let resp = AppError::InvalidInput("bad".to_string()).error_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unavailable_returns_503() {
        let err = AppError::Unavailable("timed out".to_string());
        assert_eq!(err.error_response().status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "Database unavailable");
    }

    #[test]
    fn invalid_input_display() {
        assert_eq!(
            AppError::InvalidInput("msg".to_string()).to_string(),
            "Invalid request: msg"
        );
    }

    #[test]
    fn domain_invalid_document_maps_to_stored_data_error() {
        let app_err: AppError = DomainError::InvalidDocument {
            collection: "product".to_string(),
            reason: "missing field `price`".to_string(),
        }
        .into();
        assert!(matches!(app_err, AppError::InvalidStoredData(ref m) if m.contains("price")));
        assert_eq!(
            app_err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn domain_invalid_input_maps_to_app_invalid_input() {
        let app_err: AppError = DomainError::InvalidInput("bad value".to_string()).into();
        assert!(matches!(app_err, AppError::InvalidInput(_)));
    }

    #[test]
    fn domain_unavailable_maps_to_app_unavailable() {
        let app_err: AppError = DomainError::Unavailable("pool timeout".to_string()).into();
        assert!(matches!(app_err, AppError::Unavailable(_)));
    }
}
