// src/db/bookings.rs
use crate::db::storage::{read_document, write_document};
use crate::domain::BookingRecord;
use crate::errors::ServerError;
use rusqlite::Connection;

pub const BOOKINGS_KEY: &str = "bookings";

/// The stored booking list, oldest first. A missing document is an empty list.
pub fn load_bookings(conn: &Connection) -> Result<Vec<BookingRecord>, ServerError> {
    let Some(raw) = read_document(conn, BOOKINGS_KEY)? else {
        return Ok(Vec::new());
    };

    serde_json::from_str(&raw)
        .map_err(|e| ServerError::DbError(format!("stored bookings are unreadable: {e}")))
}

pub fn save_bookings(
    conn: &Connection,
    bookings: &[BookingRecord],
    now: i64,
) -> Result<(), ServerError> {
    let raw = serde_json::to_string(bookings)
        .map_err(|e| ServerError::DbError(format!("serialize bookings failed: {e}")))?;
    write_document(conn, BOOKINGS_KEY, &raw, now)
}

/// Read the whole list, push one record, write it all back.
///
/// Not transactional: two writers racing here lose one booking. Only one
/// client books at a time.
pub fn append_booking(
    conn: &Connection,
    record: &BookingRecord,
    now: i64,
) -> Result<usize, ServerError> {
    let mut bookings = load_bookings(conn)?;
    bookings.push(record.clone());
    save_bookings(conn, &bookings, now)?;
    Ok(bookings.len())
}

pub fn find_booking(
    conn: &Connection,
    booking_id: &str,
) -> Result<Option<BookingRecord>, ServerError> {
    Ok(load_bookings(conn)?
        .into_iter()
        .find(|b| b.booking_id == booking_id))
}

pub fn latest_booking(conn: &Connection) -> Result<Option<BookingRecord>, ServerError> {
    Ok(load_bookings(conn)?.pop())
}
