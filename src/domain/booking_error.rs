use crate::domain::validation::{combined_message, ValidationError};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum BookingError {
    /// Check-out is on or before check-in.
    InvalidRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    /// Category name not recognised, or not priced.
    UnknownCategory(String),
    /// nights x nightly price does not fit the amount type.
    PriceOverflow { nights: i64, nightly: i64 },
    Validation(Vec<ValidationError>),
    /// Storage unavailable or the stored list is unreadable.
    Persistence(String),
    /// The background booking task died before producing a result.
    Interrupted,
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingError::InvalidRange {
                check_in,
                check_out,
            } => write!(
                f,
                "Invalid stay: check-out {check_out} is not after check-in {check_in}"
            ),
            BookingError::UnknownCategory(name) => write!(f, "Unknown room category: {name}"),
            BookingError::PriceOverflow { nights, nightly } => {
                write!(f, "Stay total out of range: {nights} nights at {nightly}")
            }
            BookingError::Validation(errors) => write!(f, "{}", combined_message(errors, "; ")),
            BookingError::Persistence(msg) => write!(f, "Storage error: {msg}"),
            BookingError::Interrupted => write!(f, "Booking was interrupted"),
        }
    }
}

impl Error for BookingError {}
