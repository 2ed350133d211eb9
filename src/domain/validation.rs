// src/domain/validation.rs

use crate::domain::booking_error::BookingError;
use crate::domain::room::RoomCategory;
use crate::domain::stay::StayRequest;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One failed form rule. Variants are declared in the order rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationError {
    MissingCheckIn,
    MissingCheckOut,
    Ordering,
    PastDate,
    InvalidName,
    InvalidEmail,
    InvalidPhone,
    MissingPayment,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingCheckIn => "Please select check-in date",
            ValidationError::MissingCheckOut => "Please select check-out date",
            ValidationError::Ordering => "Check-out date must be after check-in date",
            ValidationError::PastDate => "Check-in date cannot be in the past",
            ValidationError::InvalidName => "Please enter a valid name",
            ValidationError::InvalidEmail => "Please enter a valid email address",
            ValidationError::InvalidPhone => "Please enter a valid phone number",
            ValidationError::MissingPayment => "Please select a payment method",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Join all messages for display in a single block.
pub fn combined_message(errors: &[ValidationError], sep: &str) -> String {
    errors
        .iter()
        .map(ValidationError::message)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Raw booking form fields, exactly as submitted. Blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    pub guests: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub payment: Option<String>,
}

impl BookingForm {
    /// Build from decoded `key=value` pairs. Unknown keys (e.g. `rooms`) are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Cow<'a, str>, Cow<'a, str>)>,
    {
        let mut form = BookingForm::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "checkin" => &mut form.checkin,
                "checkout" => &mut form.checkout,
                "guests" => &mut form.guests,
                "name" => &mut form.name,
                "email" => &mut form.email,
                "phone" => &mut form.phone,
                "payment" => &mut form.payment,
                _ => continue,
            };
            *slot = Some(value.into_owned());
        }
        form
    }

    pub fn check_in_date(&self) -> Option<NaiveDate> {
        parse_date(self.checkin.as_deref())
    }

    pub fn check_out_date(&self) -> Option<NaiveDate> {
        parse_date(self.checkout.as_deref())
    }

    pub fn guest_count(&self) -> u32 {
        guest_count(self.guests.as_deref())
    }

    /// Check every rule and turn the form into a typed booking request.
    pub fn validated(
        &self,
        category: RoomCategory,
        today: NaiveDate,
    ) -> Result<ValidatedBooking, BookingError> {
        let errors = validate(self, today);
        if !errors.is_empty() {
            return Err(BookingError::Validation(errors));
        }

        // All rules passed, so every required field is present.
        let (Some(check_in), Some(check_out)) = (self.check_in_date(), self.check_out_date())
        else {
            return Err(BookingError::Validation(vec![ValidationError::MissingCheckIn]));
        };
        let stay = StayRequest::new(check_in, check_out, category, self.guest_count(), today)?;

        Ok(ValidatedBooking {
            stay,
            customer: Customer {
                name: trimmed(&self.name),
                email: trimmed(&self.email),
                phone: trimmed(&self.phone),
            },
            payment_method: trimmed(&self.payment),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Output of a successful validation; the only input the recorder accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBooking {
    pub stay: StayRequest,
    pub customer: Customer,
    pub payment_method: String,
}

/// Check all rules. Every failure is reported, in rule order.
pub fn validate(form: &BookingForm, today: NaiveDate) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let check_in = form.check_in_date();
    let check_out = form.check_out_date();

    if check_in.is_none() {
        errors.push(ValidationError::MissingCheckIn);
    }
    if check_out.is_none() {
        errors.push(ValidationError::MissingCheckOut);
    }

    if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
        if check_out <= check_in {
            errors.push(ValidationError::Ordering);
        }
        if check_in < today {
            errors.push(ValidationError::PastDate);
        }
    }

    if !present(form.name.as_deref()).is_some_and(|n| n.trim().chars().count() >= 2) {
        errors.push(ValidationError::InvalidName);
    }

    if !present(form.email.as_deref()).is_some_and(is_valid_email) {
        errors.push(ValidationError::InvalidEmail);
    }

    if !present(form.phone.as_deref()).is_some_and(|p| p.trim().chars().count() >= 10) {
        errors.push(ValidationError::InvalidPhone);
    }

    if present(form.payment.as_deref()).is_none() {
        errors.push(ValidationError::MissingPayment);
    }

    errors
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot in the domain with
/// at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Guest count; anything missing or not a positive integer means one guest.
pub fn guest_count(raw: Option<&str>) -> u32 {
    present(raw)
        .and_then(|g| g.trim().parse::<u32>().ok())
        .filter(|g| *g > 0)
        .unwrap_or(1)
}

pub fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    present(raw).and_then(|s| NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok())
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.trim().is_empty())
}

fn trimmed(raw: &Option<String>) -> String {
    raw.as_deref().map(str::trim).unwrap_or_default().to_string()
}
