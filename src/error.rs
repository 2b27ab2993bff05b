use rocket::http::Status;
use thiserror::Error;

/// Failure taxonomy for registry operations. Controllers translate these to
/// HTTP statuses; raw driver errors never reach the caller.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("{0}")]
    Validation(String),

    #[error("url parameters 'protocol' and 'address' are required")]
    MissingParameter,

    #[error("record already exists: {0}")]
    Conflict(String),

    #[error("Record not found")]
    NotFound,

    #[error("internal storage error")]
    Internal(#[from] sqlx::Error),
}

impl RegistryError {
    pub fn status(&self) -> Status {
        match self {
            RegistryError::Validation(_) => Status::BadRequest,
            RegistryError::MissingParameter => Status::BadRequest,
            RegistryError::Conflict(_) => Status::BadRequest,
            RegistryError::NotFound => Status::NotFound,
            RegistryError::Internal(_) => Status::InternalServerError,
        }
    }
}
