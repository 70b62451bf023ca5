use thiserror::Error;

/// Service layer errors - the caller-facing failure taxonomy
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] yoyaku_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] yoyaku_core::error::CoreError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Time slot is not available")]
    SlotUnavailable,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
