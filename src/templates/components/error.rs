use crate::domain::ValidationError;
use maud::{html, Markup, DOCTYPE};

/// Validation messages shown above the booking form.
pub fn message_box(errors: &[ValidationError]) -> Markup {
    html! {
        @if !errors.is_empty() {
            div class="booking-message error-message" role="alert" {
                @for (i, err) in errors.iter().enumerate() {
                    @if i > 0 { br; }
                    (err.message())
                }
            }
        }
    }
}

/// Build a basic HTML error page
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style {
                    "body { font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem; }"
                    "h1 { font-size: 2rem; margin-bottom: 1rem; }"
                    "p { font-size: 1.1rem; color: #444; }"
                }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        }
    }
}
