use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    Referential(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Trip already completed")]
    AlreadyCompleted,

    #[error("storage error: {0}")]
    Storage(#[source] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

// Foreign-key and unique violations carry their own meaning here; everything
// else from the driver is a storage fault.
impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            match db_err.code().as_deref() {
                Some("23503") => return Error::Referential(db_err.message().to_string()),
                Some("23505") => return Error::Duplicate(db_err.message().to_string()),
                _ => {}
            }
        }
        Error::Storage(err)
    }
}

impl From<bcrypt::BcryptError> for Error {
    fn from(err: bcrypt::BcryptError) -> Self {
        Error::Internal(format!("password hashing failed: {}", err))
    }
}
