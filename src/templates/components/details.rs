use crate::domain::BookingRecord;
use crate::templates::format::{format_date, format_inr};
use maud::{html, Markup};

fn detail(label: &str, value: impl maud::Render) -> Markup {
    html! {
        div class="detail-item" {
            span { (label) }
            span { (value) }
        }
    }
}

/// Shared by the confirmation view and the printable receipt.
pub fn booking_details(record: &BookingRecord) -> Markup {
    html! {
        div class="booking-details" {
            (detail("Booking ID:", &record.booking_id))
            (detail("Room Type:", record.room_category.display_name()))
            (detail("Check-in:", format_date(record.check_in)))
            (detail("Check-out:", format_date(record.check_out)))
            (detail("Nights:", record.nights))
            (detail("Guests:", record.guest_count))
            div class="detail-item total" {
                span { "Total Amount:" }
                span { (format_inr(record.total_amount)) }
            }
        }
    }
}
