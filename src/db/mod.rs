pub mod bookings;
pub mod connection;
pub mod storage;

pub use connection::{init_db, Database};
