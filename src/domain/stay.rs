// src/domain/stay.rs

use crate::domain::booking_error::BookingError;
use crate::domain::room::{PricingTable, RoomCategory};
use crate::domain::validation::ValidationError;
use chrono::NaiveDate;

/// Nights and total price for one stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayQuote {
    pub nights: i64,
    pub total: i64,
}

/// Derive nights and total for a stay. Pure; dates are whole calendar days,
/// so the day difference is already the ceiling.
pub fn compute_stay(
    pricing: &PricingTable,
    check_in: NaiveDate,
    check_out: NaiveDate,
    category: RoomCategory,
) -> Result<StayQuote, BookingError> {
    if check_out <= check_in {
        return Err(BookingError::InvalidRange {
            check_in,
            check_out,
        });
    }

    let nights = (check_out - check_in).num_days();
    let nightly = pricing.price(category)?;
    let total = nights
        .checked_mul(nightly)
        .ok_or(BookingError::PriceOverflow { nights, nightly })?;

    Ok(StayQuote { nights, total })
}

/// A stay that has passed the date rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StayRequest {
    check_in: NaiveDate,
    check_out: NaiveDate,
    category: RoomCategory,
    guests: u32,
}

impl StayRequest {
    /// Enforces check-out after check-in and check-in not before `today`.
    pub fn new(
        check_in: NaiveDate,
        check_out: NaiveDate,
        category: RoomCategory,
        guests: u32,
        today: NaiveDate,
    ) -> Result<Self, BookingError> {
        if check_out <= check_in {
            return Err(BookingError::InvalidRange {
                check_in,
                check_out,
            });
        }
        if check_in < today {
            return Err(BookingError::Validation(vec![ValidationError::PastDate]));
        }

        Ok(Self {
            check_in,
            check_out,
            category,
            guests,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn category(&self) -> RoomCategory {
        self.category
    }

    pub fn guests(&self) -> u32 {
        self.guests
    }

    pub fn quote(&self, pricing: &PricingTable) -> Result<StayQuote, BookingError> {
        compute_stay(pricing, self.check_in, self.check_out, self.category)
    }
}
