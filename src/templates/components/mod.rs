use maud::{html, Markup};

pub mod card;
pub mod details;
pub mod error;
pub mod summary;

pub use card::room_card;
pub use details::booking_details;
pub use error::{error_page, message_box};
pub use summary::stay_summary;

pub fn button(label: &str, kind: &str) -> Markup {
    html! {
        button type="submit" class={ "btn btn-" (kind) } { (label) }
    }
}
