// src/booking/recorder.rs
use crate::db::bookings;
use crate::db::Database;
use crate::domain::{
    compute_stay, generate_booking_id, BookingError, BookingRecord, BookingStatus, PricingTable,
    RoomCategory, StayQuote, ValidatedBooking,
};
use chrono::{DateTime, NaiveDate, Utc};

/// Turns validated bookings into stored records.
#[derive(Debug, Clone)]
pub struct BookingRecorder {
    db: Database,
    pricing: PricingTable,
    id_prefix: String,
}

impl BookingRecorder {
    pub fn new(db: Database, pricing: PricingTable, id_prefix: impl Into<String>) -> Self {
        Self {
            db,
            pricing,
            id_prefix: id_prefix.into(),
        }
    }

    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    pub fn quote(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        category: RoomCategory,
    ) -> Result<StayQuote, BookingError> {
        compute_stay(&self.pricing, check_in, check_out, category)
    }

    /// Price the stay from scratch, assign an id and append to the stored list.
    pub fn record(
        &self,
        booking: ValidatedBooking,
        now: DateTime<Utc>,
    ) -> Result<BookingRecord, BookingError> {
        let stay = &booking.stay;
        let quote = stay.quote(&self.pricing)?;

        let record = BookingRecord {
            booking_id: generate_booking_id(&self.id_prefix, now),
            room_category: stay.category(),
            check_in: stay.check_in(),
            check_out: stay.check_out(),
            nights: quote.nights,
            guest_count: stay.guests(),
            total_amount: quote.total,
            customer: booking.customer,
            payment_method: booking.payment_method,
            status: BookingStatus::Confirmed,
            created_at: now,
        };

        let stored = self
            .db
            .with_conn(|conn| bookings::append_booking(conn, &record, now.timestamp()))
            .map_err(|e| {
                log::error!("Failed to store booking {}: {e}", record.booking_id);
                BookingError::from(e)
            })?;

        log::info!(
            "Booking {} confirmed: {} x{} nights, total {} ({} stored)",
            record.booking_id,
            record.room_category,
            record.nights,
            record.total_amount,
            stored
        );

        Ok(record)
    }

    pub fn list(&self) -> Result<Vec<BookingRecord>, BookingError> {
        Ok(self.db.with_conn(|conn| bookings::load_bookings(conn))?)
    }

    pub fn find(&self, booking_id: &str) -> Result<Option<BookingRecord>, BookingError> {
        Ok(self
            .db
            .with_conn(|conn| bookings::find_booking(conn, booking_id))?)
    }

    pub fn latest(&self) -> Result<Option<BookingRecord>, BookingError> {
        Ok(self.db.with_conn(|conn| bookings::latest_booking(conn))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookingForm;
    use crate::tests::utils::init_test_db;
    use chrono::TimeZone;

    fn form(checkin: &str, checkout: &str) -> BookingForm {
        BookingForm {
            checkin: Some(checkin.into()),
            checkout: Some(checkout.into()),
            guests: Some("2".into()),
            name: Some("Jane Doe".into()),
            email: Some("jane@example.com".into()),
            phone: Some("1234567890".into()),
            payment: Some("card".into()),
        }
    }

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn deluxe_three_nights_totals_5154() {
        let recorder = BookingRecorder::new(init_test_db(), PricingTable::default(), "DDI");
        let now = Utc.with_ymd_and_hms(2025, 5, 20, 8, 0, 0).unwrap();
        let booking = form("2025-06-01", "2025-06-04")
            .validated(RoomCategory::Deluxe, now.date_naive())
            .unwrap();

        let record = recorder.record(booking, now).unwrap();

        assert_eq!(record.nights, 3);
        assert_eq!(record.total_amount, 3 * 1718);
        assert_eq!(record.total_amount, 5154);
        assert_eq!(record.status, BookingStatus::Confirmed);
        assert!(record.booking_id.starts_with("DDI"));
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn records_are_persisted_in_order() {
        let recorder = BookingRecorder::new(init_test_db(), PricingTable::default(), "DDI");
        let first = at(1_750_000_000_000);
        let second = at(1_750_000_000_500);

        let a = recorder
            .record(
                form("2025-07-01", "2025-07-02")
                    .validated(RoomCategory::Standard, first.date_naive())
                    .unwrap(),
                first,
            )
            .unwrap();
        let b = recorder
            .record(
                form("2025-07-03", "2025-07-05")
                    .validated(RoomCategory::Family, second.date_naive())
                    .unwrap(),
                second,
            )
            .unwrap();

        assert_ne!(a.booking_id, b.booking_id);
        assert_eq!(recorder.list().unwrap(), vec![a.clone(), b.clone()]);
        assert_eq!(recorder.latest().unwrap(), Some(b));
        assert_eq!(recorder.find(&a.booking_id).unwrap(), Some(a));
    }

    #[test]
    fn uses_injected_prices() {
        let pricing = PricingTable::default().with_price(RoomCategory::Standard, 100);
        let recorder = BookingRecorder::new(init_test_db(), pricing, "TST");
        let now = at(1_750_000_000_000);

        let record = recorder
            .record(
                form("2025-07-01", "2025-07-03")
                    .validated(RoomCategory::Standard, now.date_naive())
                    .unwrap(),
                now,
            )
            .unwrap();

        assert_eq!(record.total_amount, 200);
        assert!(record.booking_id.starts_with("TST"));
    }

    #[test]
    fn unpriced_category_is_not_stored() {
        let pricing = PricingTable::empty().with_price(RoomCategory::Standard, 100);
        let recorder = BookingRecorder::new(init_test_db(), pricing, "DDI");
        let now = at(1_750_000_000_000);

        let err = recorder
            .record(
                form("2025-07-01", "2025-07-03")
                    .validated(RoomCategory::Deluxe, now.date_naive())
                    .unwrap(),
                now,
            )
            .unwrap_err();

        assert!(matches!(err, BookingError::UnknownCategory(_)));
        assert!(recorder.list().unwrap().is_empty());
    }

    #[test]
    fn unreadable_stored_list_is_a_persistence_error() {
        let db = init_test_db();
        db.with_conn(|conn| {
            crate::db::storage::write_document(conn, bookings::BOOKINGS_KEY, "{not json", 1)
        })
        .unwrap();
        let recorder = BookingRecorder::new(db, PricingTable::default(), "DDI");
        let now = at(1_750_000_000_000);

        assert!(matches!(recorder.list(), Err(BookingError::Persistence(_))));
        assert!(matches!(recorder.latest(), Err(BookingError::Persistence(_))));
        let err = recorder
            .record(
                form("2025-07-01", "2025-07-03")
                    .validated(RoomCategory::Standard, now.date_naive())
                    .unwrap(),
                now,
            )
            .unwrap_err();
        assert!(matches!(err, BookingError::Persistence(_)));
    }
}
