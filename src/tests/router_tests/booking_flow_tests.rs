// src/tests/router_tests/booking_flow_tests.rs

use crate::errors::ServerError;
use crate::router::{handle, MAX_FORM_BYTES};
use crate::tests::utils::{body_string, test_app};
use astra::Body;
use chrono::{Days, NaiveDate, Utc};
use http::{Method, Request};

fn in_days(n: u64) -> String {
    let day: NaiveDate = Utc::now().date_naive() + Days::new(n);
    day.format("%Y-%m-%d").to_string()
}

fn encode(fields: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}

fn post(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn valid_form(checkin: &str, checkout: &str) -> String {
    encode(&[
        ("checkin", checkin),
        ("checkout", checkout),
        ("guests", "2"),
        ("rooms", "1"),
        ("name", "Jane Doe"),
        ("email", "jane@example.com"),
        ("phone", "1234567890"),
        ("payment", "card"),
    ])
}

#[test]
fn booking_redirects_to_confirmation() {
    let app = test_app();

    let resp = handle(
        post("/rooms/deluxe/book", valid_form(&in_days(10), &in_days(13))),
        &app,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 303);
    let location = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(location.starts_with("/bookings/DDI"), "got {location}");

    // Stored with a server-side total
    let stored = app.recorder.list().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].nights, 3);
    assert_eq!(stored[0].total_amount, 5154);
    assert_eq!(stored[0].guest_count, 2);

    let resp = handle(get(&location), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Booking Confirmed!"));
    assert!(body.contains("Deluxe Room"));
    assert!(body.contains("₹5,154"));
    assert!(body.contains("jane@example.com"));
    assert!(body.contains(&stored[0].booking_id));
}

#[test]
fn print_views_show_the_booking() {
    let app = test_app();
    handle(
        post("/rooms/family/book", valid_form(&in_days(1), &in_days(2))),
        &app,
    )
    .expect("Handler failed");
    let record = app.recorder.latest().unwrap().unwrap();

    let body = body_string(
        handle(get(&format!("/bookings/{}/print", record.booking_id)), &app).unwrap(),
    );
    assert!(body.contains("Booking Confirmation - Drizzle Drop Inn"));
    assert!(body.contains(&record.booking_id));
    assert!(body.contains("₹1,964"));
    assert!(body.contains("window.print()"));

    let latest = body_string(handle(get("/bookings/latest/print"), &app).unwrap());
    assert!(latest.contains(&record.booking_id));
}

#[test]
fn invalid_form_is_shown_again_with_every_error() {
    let app = test_app();
    let body = encode(&[
        ("checkin", in_days(5).as_str()),
        ("checkout", in_days(3).as_str()),
        ("name", "J"),
        ("email", "not-an-email"),
        ("phone", "12345"),
    ]);

    let resp = handle(post("/rooms/standard/book", body), &app).expect("Handler failed");
    assert_eq!(resp.status(), 400);

    let html = body_string(resp);
    let order = [
        "Check-out date must be after check-in date",
        "Please enter a valid name",
        "Please enter a valid email address",
        "Please enter a valid phone number",
        "Please select a payment method",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|msg| html.find(msg).unwrap_or_else(|| panic!("missing {msg}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(!html.contains("Check-in date cannot be in the past"));

    // Entered values are kept
    assert!(html.contains("not-an-email"));
    assert!(app.recorder.list().unwrap().is_empty());
}

#[test]
fn past_check_in_is_rejected() {
    let app = test_app();
    let yesterday = (Utc::now().date_naive() - Days::new(1))
        .format("%Y-%m-%d")
        .to_string();

    let resp = handle(
        post("/rooms/standard/book", valid_form(&yesterday, &in_days(2))),
        &app,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Check-in date cannot be in the past"));
    assert!(app.recorder.list().unwrap().is_empty());
}

#[test]
fn unknown_room_and_booking_are_not_found() {
    let app = test_app();

    let err = handle(
        post("/rooms/penthouse/book", valid_form(&in_days(1), &in_days(2))),
        &app,
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    assert!(matches!(
        handle(get("/bookings/DDINOPE"), &app).unwrap_err(),
        ServerError::NotFound
    ));
    assert!(matches!(
        handle(get("/bookings/latest/print"), &app).unwrap_err(),
        ServerError::NotFound
    ));
}

#[test]
fn oversized_form_body_is_rejected() {
    let app = test_app();
    let padding = "x".repeat(MAX_FORM_BYTES as usize);
    let body = format!("{}&name={padding}", valid_form(&in_days(10), &in_days(13)));

    let err = handle(post("/rooms/standard/book", body), &app).unwrap_err();

    assert!(matches!(err, ServerError::BadRequest(_)));
    assert!(app.recorder.list().unwrap().is_empty());
}
