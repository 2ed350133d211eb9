// templates/pages/receipt.rs

use crate::domain::BookingRecord;
use crate::templates::booking_details;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const RECEIPT_CSS: &str = r#"
body { font-family: Arial, sans-serif; padding: 20px; }
.header { text-align: center; margin-bottom: 30px; }
.booking-details { background: #f8f9fa; padding: 20px; border-radius: 10px; }
.detail-item { display: flex; justify-content: space-between; margin-bottom: 10px; }
.total { font-weight: bold; font-size: 1.2em; color: #e74c3c; }
"#;

/// Standalone printable page; opens the print dialog on load.
pub fn receipt_page(record: &BookingRecord, hotel_name: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Booking Confirmation - " (hotel_name) }
                style { (PreEscaped(RECEIPT_CSS)) }
            }
            body onload="window.print()" {
                div class="header" {
                    h1 { (hotel_name) }
                    h2 { "Booking Confirmation" }
                }
                (booking_details(record))
                p { "Thank you for choosing " (hotel_name) "!" }
            }
        }
    }
}
