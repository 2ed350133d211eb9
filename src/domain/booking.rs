// src/domain/booking.rs

use crate::domain::room::RoomCategory;
use crate::domain::validation::{guest_count, Customer};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
}

/// A confirmed reservation. Field names on the wire follow the stored
/// `bookings` document, so lists written by the old booking page still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub booking_id: String,
    #[serde(rename = "roomType")]
    pub room_category: RoomCategory,
    #[serde(rename = "checkin")]
    pub check_in: NaiveDate,
    #[serde(rename = "checkout")]
    pub check_out: NaiveDate,
    pub nights: i64,
    #[serde(
        rename = "guests",
        default = "one_guest",
        deserialize_with = "guests_from_number_or_text"
    )]
    pub guest_count: u32,
    #[serde(rename = "total")]
    pub total_amount: i64,
    pub customer: Customer,
    pub payment_method: String,
    pub status: BookingStatus,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Prefix plus the millisecond timestamp in upper-case base 36.
///
/// Two bookings in the same millisecond get the same id. Nothing checks the
/// stored list for a clash; one client books at a time.
pub fn generate_booking_id(prefix: &str, now: DateTime<Utc>) -> String {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    format!("{prefix}{}", to_base36(millis))
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    // Only ASCII digits were pushed.
    String::from_utf8(digits).unwrap_or_default()
}

fn one_guest() -> u32 {
    1
}

// Older documents stored the raw form value: a string, or null when the
// field was left out. Same rule as the form: not a positive count means 1.
fn guests_from_number_or_text<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Number(n)) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| *n > 0)
            .unwrap_or(1),
        Some(serde_json::Value::String(s)) => guest_count(Some(&s)),
        _ => one_guest(),
    })
}
