// errors.rs
use crate::domain::BookingError;
use std::fmt;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    DbError(String),
    Config(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::DbError(msg) => write!(f, "Database Error: {msg}"),
            ServerError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<BookingError> for ServerError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::UnknownCategory(_) => ServerError::NotFound,
            BookingError::Persistence(msg) => ServerError::DbError(msg),
            BookingError::Interrupted => ServerError::InternalError,
            other @ (BookingError::InvalidRange { .. }
            | BookingError::PriceOverflow { .. }
            | BookingError::Validation(_)) => {
                ServerError::BadRequest(other.to_string())
            }
        }
    }
}

impl From<ServerError> for BookingError {
    fn from(err: ServerError) -> Self {
        BookingError::Persistence(err.to_string())
    }
}
