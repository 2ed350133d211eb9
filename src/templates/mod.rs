pub mod components;
pub mod format;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{booking_details, error_page, room_card, stay_summary};
pub use layouts::desktop::desktop_layout;
