use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid input: {0}")]
    Validation(String),

    /// A stored document does not have the shape of its record type
    #[error("Invalid stored document: {0}")]
    InvalidDocument(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn vendor_not_found(id: impl std::fmt::Display) -> Self {
        CatalogError::NotFound {
            entity: "Vendor",
            id: id.to_string(),
        }
    }

    pub fn product_not_found(id: impl std::fmt::Display) -> Self {
        CatalogError::NotFound {
            entity: "Product",
            id: id.to_string(),
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convert CatalogError to AppError for standardized error responses
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { .. } => AppError::NotFound(err.to_string()),
            CatalogError::Validation(msg) => AppError::BadRequest(msg),
            CatalogError::InvalidDocument(msg) => AppError::DatabaseDecode(msg),
            CatalogError::Database(msg) => AppError::Database(msg),
            CatalogError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for CatalogError {
    fn from(err: mongodb::error::Error) -> Self {
        CatalogError::Database(err.to_string())
    }
}

impl From<mongodb::bson::de::Error> for CatalogError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        CatalogError::InvalidDocument(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for CatalogError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        CatalogError::Internal(err.to_string())
    }
}

impl From<validator::ValidationErrors> for CatalogError {
    fn from(err: validator::ValidationErrors) -> Self {
        CatalogError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_message() {
        let err = CatalogError::product_not_found("65f1c0ffee0000000000000a");
        assert_eq!(err.to_string(), "Product 65f1c0ffee0000000000000a not found");
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (CatalogError::vendor_not_found("x"), StatusCode::NOT_FOUND),
            (CatalogError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (
                CatalogError::InvalidDocument("missing field `price`".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CatalogError::Database("timeout".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
