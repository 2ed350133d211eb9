// templates/pages/home.rs

use crate::domain::PricingTable;
use crate::templates::{desktop_layout, room_card};
use maud::{html, Markup};

pub fn home_page(hotel_name: &str, pricing: &PricingTable) -> Markup {
    desktop_layout(
        "Rooms",
        hotel_name,
        html! {
            main class="container" {
                h1 { "Welcome to " (hotel_name) }
                p { "Choose a room to check prices and book your stay." }

                @for (category, nightly) in pricing.entries() {
                    (room_card(category, nightly))
                }
            }
        },
    )
}
