use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::service_name;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("{0}")]
    MissingParameterError(String),

    #[error("Bad Request: {0}")]
    BadRequestError(String),

    #[error("Not Found: {0}")]
    NotFoundError(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl CustomError {
    fn error_type(&self) -> &'static str {
        match *self {
            CustomError::MissingParameterError(..) => "MISSING_PARAMETER_ERROR",
            CustomError::BadRequestError(..) => "BAD_REQUEST_ERROR",
            CustomError::NotFoundError(..) => "NOT_FOUND_ERROR",
            CustomError::InternalServerError(..) => "INTERNAL_SERVER_ERROR",
        }
    }
}

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub http_status_code: u16,
    pub error: String,
    pub service: String,
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::MissingParameterError(..) => StatusCode::FORBIDDEN,
            CustomError::BadRequestError(..) => StatusCode::BAD_REQUEST,
            CustomError::NotFoundError(..) => StatusCode::NOT_FOUND,
            CustomError::InternalServerError(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            message: self.to_string(),
            http_status_code: self.status_code().as_u16(),
            error: self.error_type().to_string(),
            service: service_name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn error_response_uses_json_envelope() {
        let err = CustomError::MissingParameterError("title is required".into());
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "title is required");
        assert_eq!(json["httpStatusCode"], 403);
        assert_eq!(json["error"], "MISSING_PARAMETER_ERROR");
    }

    #[test]
    fn status_codes_follow_variant() {
        let cases = [
            (CustomError::BadRequestError("x".into()), StatusCode::BAD_REQUEST),
            (CustomError::NotFoundError("x".into()), StatusCode::NOT_FOUND),
            (
                CustomError::InternalServerError("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.status_code(), status);
        }
    }
}
