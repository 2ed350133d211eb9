use crate::domain::{RoomCategory, StayQuote};
use crate::templates::format::format_inr;
use maud::{html, Markup};

/// Nights and total for the selected dates. Empty figures until the dates
/// form a valid stay. Also the htmx swap target for date changes.
pub fn stay_summary(category: RoomCategory, quote: Option<StayQuote>) -> Markup {
    html! {
        div
            class="booking-summary"
            id="booking-summary"
            hx-get={ (category.path()) "/summary" }
            hx-trigger="change from:#checkin, change from:#checkout"
            hx-include="#checkin, #checkout"
            hx-swap="outerHTML"
        {
            div class="detail-item" {
                span { "Nights:" }
                span id="nights" {
                    @if let Some(q) = quote { (q.nights) } @else { "-" }
                }
            }
            div class="detail-item total" {
                span { "Total:" }
                span id="total" {
                    @if let Some(q) = quote { (format_inr(q.total)) } @else { "-" }
                }
            }
        }
    }
}
