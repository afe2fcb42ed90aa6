use crate::utils::error::CustomError;

/// Default service for paths no route matches.
pub async fn not_found() -> Result<actix_web::HttpResponse, CustomError> {
    Err(CustomError::NotFoundError("Route does not exist".into()))
}
