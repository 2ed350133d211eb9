// src/booking/submission.rs
use crate::booking::recorder::BookingRecorder;
use crate::domain::{BookingError, BookingForm, BookingRecord, RoomCategory};
use chrono::{DateTime, Utc};
use std::thread::{self, JoinHandle};

/// A booking being recorded in the background.
///
/// Resolves exactly once, via [`PendingBooking::wait`], to the stored record
/// or the error that stopped it.
#[derive(Debug)]
pub struct PendingBooking {
    booking_id_hint: String,
    handle: JoinHandle<Result<BookingRecord, BookingError>>,
}

impl PendingBooking {
    /// True once the record has been stored or has failed.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn wait(self) -> Result<BookingRecord, BookingError> {
        self.handle.join().unwrap_or_else(|_| {
            log::error!("Booking task for {} panicked", self.booking_id_hint);
            Err(BookingError::Interrupted)
        })
    }
}

/// Validate the form now and record it on a worker thread.
///
/// Validation failures come back immediately, all of them, in rule order.
pub fn submit(
    recorder: &BookingRecorder,
    form: &BookingForm,
    category: RoomCategory,
    now: DateTime<Utc>,
) -> Result<PendingBooking, BookingError> {
    // "Today" is the UTC date of `now`.
    let booking = form.validated(category, now.date_naive()).map_err(|e| {
        log::debug!("Rejected {category} booking form: {e}");
        e
    })?;

    let recorder = recorder.clone();
    let booking_id_hint = format!("{category} booking at {}", now.to_rfc3339());
    let handle = thread::Builder::new()
        .name("booking".into())
        .spawn(move || recorder.record(booking, now))
        .map_err(|e| {
            log::error!("Could not start booking task: {e}");
            BookingError::Interrupted
        })?;

    Ok(PendingBooking {
        booking_id_hint,
        handle,
    })
}
