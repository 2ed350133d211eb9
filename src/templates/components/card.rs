use crate::domain::RoomCategory;
use crate::templates::format::format_inr;
use maud::{html, Markup};

pub fn room_card(category: RoomCategory, nightly: i64) -> Markup {
    html! {
        div class="card" {
            h2 { (category.display_name()) }
            div class="card-body" {
                p class="price" { (format_inr(nightly)) " / night" }
                a class="btn btn-primary" href=(category.path()) { "Book now" }
            }
        }
    }
}
