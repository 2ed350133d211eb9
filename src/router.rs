use crate::booking::{submit, BookingRecorder};
use crate::config::AppConfig;
use crate::domain::{BookingError, BookingForm, RoomCategory, StayQuote, ValidationError};
use crate::errors::ServerError;
use crate::responses::{html_response, html_response_with_status, redirect, ResultResp};
use crate::templates;
use crate::templates::pages::RoomPageVm;
use astra::Request;
use chrono::{NaiveDate, Utc};
use std::borrow::Cow;
use std::io::Read;

/// Everything a request handler needs.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub recorder: BookingRecorder,
}

pub fn handle(mut req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => html_response(templates::pages::home_page(
            &app.config.hotel_name,
            app.recorder.pricing(),
        )),

        ("GET", ["rooms", category]) => {
            let category = category.parse::<RoomCategory>()?;
            let form = BookingForm::from_pairs(parse_query(&req));
            room_page(app, category, &form, &[], 200)
        }

        ("GET", ["rooms", category, "summary"]) => {
            let category = category.parse::<RoomCategory>()?;
            let form = BookingForm::from_pairs(parse_query(&req));
            let quote = quote_for(app, category, &form)?;
            html_response(templates::stay_summary(category, quote))
        }

        ("POST", ["rooms", category, "book"]) => {
            let category = category.parse::<RoomCategory>()?;
            let body = read_body(&mut req)?;
            let form = BookingForm::from_pairs(url::form_urlencoded::parse(body.as_bytes()));
            book(app, category, &form)
        }

        ("GET", ["bookings", "latest", "print"]) => {
            let record = app.recorder.latest()?.ok_or(ServerError::NotFound)?;
            html_response(templates::pages::receipt_page(&record, &app.config.hotel_name))
        }

        ("GET", ["bookings", booking_id]) => {
            let record = app.recorder.find(booking_id)?.ok_or(ServerError::NotFound)?;
            html_response(templates::pages::confirmation_page(
                &record,
                &app.config.hotel_name,
            ))
        }

        ("GET", ["bookings", booking_id, "print"]) => {
            let record = app.recorder.find(booking_id)?.ok_or(ServerError::NotFound)?;
            html_response(templates::pages::receipt_page(&record, &app.config.hotel_name))
        }

        _ => Err(ServerError::NotFound),
    }
}

fn book(app: &AppState, category: RoomCategory, form: &BookingForm) -> ResultResp {
    match submit(&app.recorder, form, category, Utc::now()) {
        Ok(pending) => {
            let record = pending.wait()?;
            redirect(&format!("/bookings/{}", record.booking_id))
        }
        Err(BookingError::Validation(errors)) => room_page(app, category, form, &errors, 400),
        Err(e) => Err(e.into()),
    }
}

fn room_page(
    app: &AppState,
    category: RoomCategory,
    form: &BookingForm,
    errors: &[ValidationError],
    status: u16,
) -> ResultResp {
    let today = today();
    let quote = if form.checkin.is_none() && form.checkout.is_none() {
        default_quote(app, category, today)
    } else {
        quote_for(app, category, form)?
    };
    let vm = RoomPageVm {
        hotel_name: &app.config.hotel_name,
        category,
        nightly: app.recorder.pricing().price(category)?,
        today,
        form,
        quote,
        errors,
    };
    html_response_with_status(status, templates::pages::room_page(&vm))
}

/// Summary figures for the dates in the form. Incomplete or reversed dates
/// give no summary rather than an error.
fn quote_for(
    app: &AppState,
    category: RoomCategory,
    form: &BookingForm,
) -> Result<Option<StayQuote>, ServerError> {
    let (Some(check_in), Some(check_out)) = (form.check_in_date(), form.check_out_date()) else {
        return Ok(None);
    };

    match app.recorder.quote(check_in, check_out, category) {
        Ok(quote) => Ok(Some(quote)),
        Err(BookingError::InvalidRange { .. }) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// The form opens on a one-night stay starting today.
fn default_quote(
    app: &AppState,
    category: RoomCategory,
    today: NaiveDate,
) -> Option<StayQuote> {
    let tomorrow = today.succ_opt()?;
    app.recorder.quote(today, tomorrow, category).ok()
}

// UTC calendar date. Between 00:00 and 05:30 IST this is still the previous
// day, so that day's check-in is not yet rejected as past.
fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Largest booking form body accepted.
pub const MAX_FORM_BYTES: u64 = 64 * 1024;

fn read_body(req: &mut Request) -> Result<String, ServerError> {
    let mut body = String::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form body too large".into()));
    }
    Ok(body)
}

fn parse_query(req: &Request) -> Vec<(Cow<'_, str>, Cow<'_, str>)> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).collect())
        .unwrap_or_default()
}
