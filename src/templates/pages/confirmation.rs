// templates/pages/confirmation.rs

use crate::domain::BookingRecord;
use crate::templates::{booking_details, desktop_layout};
use maud::{html, Markup};

pub fn confirmation_page(record: &BookingRecord, hotel_name: &str) -> Markup {
    desktop_layout(
        "Booking Confirmed",
        hotel_name,
        html! {
            main class="container" {
                div class="booking-success" {
                    h2 { "Booking Confirmed!" }

                    h3 { "Booking Details" }
                    (booking_details(record))

                    div class="success-message" {
                        p {
                            "Your booking has been confirmed! A confirmation email has been sent to "
                            strong { (record.customer.email) }
                        }
                        p { "We look forward to welcoming you to " (hotel_name) "!" }
                    }

                    div class="success-actions" {
                        a class="btn btn-primary" href=(record.room_category.path()) { "Close" }
                        a class="btn btn-secondary"
                            href={ "/bookings/" (record.booking_id) "/print" }
                            target="_blank"
                        { "Print Booking" }
                    }
                }
            }
        },
    )
}
