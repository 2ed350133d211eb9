use crate::domain::RoomCategory;
use maud::{html, Markup, DOCTYPE};

const SITE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #333; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; box-shadow: 0 1px 4px rgba(0,0,0,.1); }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
main.container { max-width: 900px; margin: 2rem auto; padding: 0 1rem; }
.card { border: 1px solid #e0e0e0; border-radius: 15px; padding: 1.5rem; margin-bottom: 1rem; }
.btn { display: inline-block; padding: 0.6rem 1.2rem; border-radius: 8px; border: none; cursor: pointer; text-decoration: none; }
.btn-primary { background: #e74c3c; color: #fff; }
.btn-secondary { background: #ecf0f1; color: #333; }
.booking-form label { display: block; margin-top: 0.8rem; }
.booking-message.error-message { background: #fdecea; color: #c0392b; padding: 1rem; border-radius: 8px; }
.booking-details { background: #f8f9fa; padding: 1.5rem; border-radius: 15px; margin: 2rem 0; }
.detail-item { display: flex; justify-content: space-between; padding: 0.5rem 0; border-bottom: 1px solid #e0e0e0; }
.detail-item.total { font-weight: 700; font-size: 1.2rem; color: #e74c3c; border-top: 2px solid #e74c3c; }
.booking-success { text-align: center; padding: 2rem; }
.success-actions { display: flex; gap: 1rem; justify-content: center; }
"#;

pub fn desktop_layout(title: &str, hotel_name: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (hotel_name) }
                style { (maud::PreEscaped(SITE_CSS)) }
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
                header {
                    h3 { a href="/" { (hotel_name) } }
                    nav {
                        ul {
                            @for category in RoomCategory::ALL {
                                li { a href=(category.path()) { (category.display_name()) } }
                            }
                        }
                    }
                }
                (content)
            }
        }
    }
}
