// src/tests/router_tests/page_tests.rs

use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, test_app};
use astra::Body;
use chrono::{Days, Utc};
use http::{Method, Request};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn home_lists_every_room() {
    let app = test_app();
    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    for (name, price) in [
        ("Standard Room", "₹1,953"),
        ("Family Room", "₹1,964"),
        ("Deluxe Room", "₹1,718"),
    ] {
        assert!(body.contains(name), "missing {name}");
        assert!(body.contains(price), "missing {price}");
    }
}

#[test]
fn room_page_defaults_to_one_night_from_today() {
    let app = test_app();
    let today = Utc::now().date_naive();
    let tomorrow = today + Days::new(1);

    let body = body_string(handle(get("/rooms/family"), &app).expect("Handler failed"));

    assert!(body.contains("id=\"bookingForm\""));
    assert!(body.contains(&format!("min=\"{}\"", today.format("%Y-%m-%d"))));
    assert!(body.contains(&format!("value=\"{}\"", tomorrow.format("%Y-%m-%d"))));
    assert!(body.contains("<span id=\"nights\">1</span>"));
    assert!(body.contains("<span id=\"total\">₹1,964</span>"));
}

#[test]
fn summary_follows_selected_dates() {
    let app = test_app();

    let body = body_string(
        handle(
            get("/rooms/deluxe/summary?checkin=2030-03-01&checkout=2030-03-04"),
            &app,
        )
        .unwrap(),
    );
    assert!(body.contains("<span id=\"nights\">3</span>"));
    assert!(body.contains("₹5,154"));

    let reversed = body_string(
        handle(
            get("/rooms/deluxe/summary?checkin=2030-03-04&checkout=2030-03-01"),
            &app,
        )
        .unwrap(),
    );
    assert!(reversed.contains("<span id=\"nights\">-</span>"));
}

#[test]
fn unknown_paths_are_not_found() {
    let app = test_app();
    assert!(matches!(
        handle(get("/nowhere"), &app).unwrap_err(),
        ServerError::NotFound
    ));
    assert!(matches!(
        handle(get("/rooms/penthouse"), &app).unwrap_err(),
        ServerError::NotFound
    ));
}

#[test]
fn errors_render_with_status() {
    assert_eq!(error_to_response(ServerError::NotFound).status(), 404);
    assert_eq!(
        error_to_response(ServerError::BadRequest("nope".into())).status(),
        400
    );

    let resp = error_to_response(ServerError::DbError("disk full".into()));
    assert_eq!(resp.status(), 500);
    assert!(body_string(resp).contains("disk full"));
}
