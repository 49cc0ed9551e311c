//! Error types for jobboard

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error types for store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Unusable caller input, e.g. an empty partial update
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Lookup matched zero rows
    #[error("not found: {0}")]
    NotFound(String),

    /// Unique constraint violation
    #[error("conflict: {0}")]
    Conflict(String),

    /// Database connection error
    #[error("connection error: {0}")]
    Connection(String),

    /// Row decode/mapping error
    #[error("decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Pool error
    #[cfg(feature = "pool")]
    #[error("pool error: {0}")]
    Pool(String),

    /// Any other database failure, propagated as-is
    #[error("database error: {0}")]
    Database(#[from] tokio_postgres::Error),
}

impl StoreError {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Check if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Parse a tokio_postgres error into a more specific StoreError.
    ///
    /// A unique violation surfaces as [`StoreError::Conflict`]. A foreign-key
    /// violation means the caller referenced a row that does not exist (e.g.
    /// an unknown company handle), which is caller input, not a server fault.
    pub fn from_db_error(err: tokio_postgres::Error) -> Self {
        if let Some(db_err) = err.as_db_error() {
            let constraint = db_err.constraint().unwrap_or("unknown");
            let message = db_err.message();

            match db_err.code().code() {
                "23505" => return Self::Conflict(format!("{constraint}: {message}")),
                "23503" => return Self::InvalidArgument(format!("{constraint}: {message}")),
                _ => {}
            }
        }
        Self::Database(err)
    }
}

#[cfg(feature = "pool")]
impl From<deadpool_postgres::PoolError> for StoreError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Self::Pool(err.to_string())
    }
}
