pub mod booking;
pub mod booking_error;
pub mod room;
pub mod stay;
pub mod validation;

pub use booking::{generate_booking_id, BookingRecord, BookingStatus};
pub use booking_error::BookingError;
pub use room::{PricingTable, RoomCategory};
pub use stay::{compute_stay, StayQuote};
pub use validation::{BookingForm, ValidatedBooking, ValidationError};
