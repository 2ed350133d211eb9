// templates/pages/room.rs

use crate::domain::{BookingForm, RoomCategory, StayQuote, ValidationError};
use crate::templates::components::{button, message_box};
use crate::templates::format::{format_inr, input_date};
use crate::templates::{desktop_layout, stay_summary};
use chrono::{Days, NaiveDate};
use maud::{html, Markup};

const PAYMENT_METHODS: [(&str, &str); 4] = [
    ("card", "Credit / Debit Card"),
    ("upi", "UPI"),
    ("netbanking", "Net Banking"),
    ("hotel", "Pay at Hotel"),
];

pub struct RoomPageVm<'a> {
    pub hotel_name: &'a str,
    pub category: RoomCategory,
    pub nightly: i64,
    pub today: NaiveDate,
    /// Previously submitted values, refilled after a failed submit.
    pub form: &'a BookingForm,
    pub quote: Option<StayQuote>,
    pub errors: &'a [ValidationError],
}

pub fn room_page(vm: &RoomPageVm) -> Markup {
    let tomorrow = vm.today.checked_add_days(Days::new(1)).unwrap_or(vm.today);
    let check_in = vm.form.check_in_date();

    let check_in_value = vm.form.checkin.clone().unwrap_or_else(|| input_date(vm.today));
    let check_out_value = vm.form.checkout.clone().unwrap_or_else(|| input_date(tomorrow));
    // Check-out must be at least the night after check-in.
    let check_out_min = check_in
        .and_then(|d| d.checked_add_days(Days::new(1)))
        .unwrap_or(vm.today);
    let guests = vm.form.guest_count();
    let payment = vm.form.payment.as_deref().unwrap_or_default();

    desktop_layout(
        &vm.category.display_name(),
        vm.hotel_name,
        html! {
            main class="container" {
                h1 { (vm.category.display_name()) }
                p class="price" { (format_inr(vm.nightly)) " / night" }

                form class="booking-form" id="bookingForm" method="post"
                    action={ (vm.category.path()) "/book" }
                {
                    (message_box(vm.errors))

                    label for="checkin" { "Check-in" }
                    input type="date" id="checkin" name="checkin"
                        min=(input_date(vm.today)) value=(check_in_value);

                    label for="checkout" { "Check-out" }
                    input type="date" id="checkout" name="checkout"
                        min=(input_date(check_out_min)) value=(check_out_value);

                    label for="guests" { "Guests" }
                    select id="guests" name="guests" {
                        @for n in 1..=4u32 {
                            option value=(n) selected[n == guests] { (n) }
                        }
                    }

                    label for="rooms" { "Rooms" }
                    select id="rooms" name="rooms" {
                        @for n in 1..=3u32 {
                            option value=(n) { (n) }
                        }
                    }

                    (stay_summary(vm.category, vm.quote))

                    label for="name" { "Full name" }
                    input type="text" id="name" name="name" value=[vm.form.name.as_deref()];

                    label for="email" { "Email" }
                    input type="email" id="email" name="email" value=[vm.form.email.as_deref()];

                    label for="phone" { "Phone" }
                    input type="tel" id="phone" name="phone" value=[vm.form.phone.as_deref()];

                    label for="payment" { "Payment method" }
                    select id="payment" name="payment" {
                        option value="" { "Select payment method" }
                        @for (value, label) in PAYMENT_METHODS {
                            option value=(value) selected[value == payment] { (label) }
                        }
                    }

                    (button("Book Now", "primary"))
                }
            }
        },
    )
}
