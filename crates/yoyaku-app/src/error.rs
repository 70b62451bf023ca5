use salvo::http::StatusCode;
use salvo::writing::Json;
use thiserror::Error;

use yoyaku_core::error::CoreError;
use yoyaku_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    DatabaseError(#[from] yoyaku_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// Error response payload
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// HTTP status for the failure taxonomy: bad input 400, missing
    /// resources 404, admission conflicts 409, ownership violations 403,
    /// everything else a 500 with the detail kept out of the response.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(err) => match err {
                ServiceError::InvalidInput(_)
                | ServiceError::CoreError(CoreError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
                ServiceError::NotFound(_) | ServiceError::CoreError(CoreError::NotFound(_)) => {
                    StatusCode::NOT_FOUND
                }
                ServiceError::SlotUnavailable => StatusCode::CONFLICT,
                ServiceError::Unauthorized(_) => StatusCode::FORBIDDEN,
                ServiceError::DatabaseError(_)
                | ServiceError::CoreError(_)
                | ServiceError::InvariantViolation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::CoreError(CoreError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Self::CoreError(CoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::DatabaseError(_) | Self::CoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            "Internal server error".to_owned()
        } else {
            self.to_string()
        }
    }
}

/// ## Summary
/// Writes the error onto the response as a JSON payload with the taxonomy's
/// status code. Storage failures are logged and reported without detail.
pub fn render_error(res: &mut salvo::Response, err: &AppError) {
    let status = err.status_code();
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = ?err, "Request failed");
    } else {
        tracing::debug!(error = %err, status = %status, "Request rejected");
    }

    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: err.public_message(),
    }));
}
