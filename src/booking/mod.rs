pub mod recorder;
pub mod submission;

pub use recorder::BookingRecorder;
pub use submission::{submit, PendingBooking};
