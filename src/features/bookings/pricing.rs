//! Date and price arithmetic for booking forms and the rental history. All
//! calculations work on calendar dates; times of day are ignored.

use crate::{
    app_lib::format::{days_between, format_date_for_input},
    features::{
        bookings::types::{Booking, BookingRequest},
        cars::types::Car,
    },
};
use chrono::{Days, NaiveDate};
use std::cmp::Reverse;

pub const AVAILABLE: &str = "Car is available for the selected dates!";
pub const UNAVAILABLE: &str = "Sorry, this car is not available for the selected dates.";
pub const START_AFTER_END: &str = "Start date must be before end date.";
pub const EXTENSION_TOO_SHORT: &str = "New end date must be after the current end date.";
pub const NO_CAR_SELECTED: &str = "No car selected. Please choose a car first.";
pub const CAR_LOAD_FAILED: &str = "Failed to load car details. Please try again.";
/// Pause on the confirmation before opening the user page.
pub const BOOKING_REDIRECT_MS: u32 = 2_000;

/// Day after `date`, saturating at the calendar's end.
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}

/// Start today, end tomorrow.
pub fn default_dates(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today, next_day(today))
}

/// Keeps the end date strictly after the start date.
pub fn adjust_end(start: NaiveDate, end: NaiveDate) -> NaiveDate {
    if end <= start { next_day(start) } else { end }
}

/// Number of rental days and the total for a date range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quote {
    pub days: i64,
    pub daily_rate: f64,
    pub total: f64,
}

impl Quote {
    pub fn new(daily_rate: f64, start: NaiveDate, end: NaiveDate) -> Self {
        let days = days_between(start, end);
        Self {
            days,
            daily_rate,
            total: days as f64 * daily_rate,
        }
    }

    /// Admin edit summary: never less than one day.
    pub fn at_least_one_day(daily_rate: f64, start: NaiveDate, end: NaiveDate) -> Self {
        let days = (end - start).num_days().max(1);
        Self {
            days,
            daily_rate,
            total: days as f64 * daily_rate,
        }
    }
}

/// Whether the booking form may be submitted for `car`.
pub fn availability(car: &Car) -> Result<&'static str, &'static str> {
    if car.is_booked() {
        Err(UNAVAILABLE)
    } else {
        Ok(AVAILABLE)
    }
}

/// Validates a date range and builds the request body.
///
/// # Errors
///
/// Returns [`START_AFTER_END`] when the range is reversed.
pub fn booking_request(
    car_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<BookingRequest, &'static str> {
    if start > end {
        return Err(START_AFTER_END);
    }
    Ok(BookingRequest {
        car_id,
        start_date: format_date_for_input(start),
        end_date: format_date_for_input(end),
    })
}

/// Checks a new end date for an active rental.
///
/// # Errors
///
/// Returns [`EXTENSION_TOO_SHORT`] unless the new end is later.
pub fn extension_request(
    booking: &Booking,
    new_end: NaiveDate,
) -> Result<BookingRequest, &'static str> {
    let (Some(car_id), Some(start), Some(end)) = (booking.car_id(), booking.start(), booking.end())
    else {
        return Err("This booking cannot be extended.");
    };
    if new_end <= end {
        return Err(EXTENSION_TOO_SHORT);
    }
    booking_request(car_id, start, new_end)
}

pub fn booking_created_message(reference: Option<i64>) -> String {
    match reference {
        Some(id) => format!("Booking created successfully! Booking reference: {id}"),
        None => "Booking created successfully!".to_string(),
    }
}

pub fn booking_failed_message(detail: &str) -> String {
    format!("Failed to create booking. Please try again. {detail}")
        .trim_end()
        .to_string()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingStatus {
    Upcoming,
    Active,
    Completed,
}

impl BookingStatus {
    pub fn of(booking: &Booking, today: NaiveDate) -> Self {
        match (booking.start(), booking.end()) {
            (_, Some(end)) if end < today => BookingStatus::Completed,
            (Some(start), _) if start > today => BookingStatus::Upcoming,
            (Some(_), Some(_)) => BookingStatus::Active,
            _ => BookingStatus::Upcoming,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "Upcoming",
            BookingStatus::Active => "Active",
            BookingStatus::Completed => "Completed",
        }
    }

    pub fn can_cancel(self) -> bool {
        self == BookingStatus::Upcoming
    }

    pub fn can_extend(self) -> bool {
        self == BookingStatus::Active
    }
}

/// Rental length in days for history cards.
pub fn booking_days(booking: &Booking) -> i64 {
    match (booking.start(), booking.end()) {
        (Some(start), Some(end)) => days_between(start, end),
        _ => 0,
    }
}

/// The stored total, or days times the car's rate when the backend left it out.
pub fn booking_total(booking: &Booking) -> f64 {
    booking.total_price.unwrap_or_else(|| {
        booking
            .car
            .as_ref()
            .map_or(0.0, |car| car.daily_price() * booking_days(booking) as f64)
    })
}

/// Newest start date first; unparsable dates sink to the end.
pub fn sort_newest_first(bookings: &mut [Booking]) {
    bookings.sort_by_key(|booking| Reverse(booking.start()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").expect("valid date")
    }

    fn booking(id: i64, start: &str, end: &str) -> Booking {
        Booking {
            id,
            car_id: Some(4),
            start_date: start.to_string(),
            end_date: end.to_string(),
            ..Booking::default()
        }
    }

    #[test]
    fn defaults_and_end_adjustment() {
        let today = date("2024-12-31");
        assert_eq!(default_dates(today), (today, date("2025-01-01")));
        assert_eq!(adjust_end(today, today), date("2025-01-01"));
        assert_eq!(adjust_end(today, date("2025-01-05")), date("2025-01-05"));
        assert_eq!(adjust_end(today, date("2024-12-01")), date("2025-01-01"));
    }

    #[test]
    fn quote_multiplies_days_by_rate() {
        let quote = Quote::new(450.0, date("2024-06-01"), date("2024-06-04"));
        assert_eq!(quote.days, 3);
        assert_eq!(quote.total, 1350.0);
    }

    #[test]
    fn edit_summary_never_drops_below_one_day() {
        let same_day = Quote::at_least_one_day(300.0, date("2024-06-01"), date("2024-06-01"));
        assert_eq!(same_day.days, 1);
        assert_eq!(same_day.total, 300.0);
        let reversed = Quote::at_least_one_day(300.0, date("2024-06-05"), date("2024-06-01"));
        assert_eq!(reversed.days, 1);
    }

    #[test]
    fn booked_cars_are_unavailable() {
        let mut car = Car::default();
        assert_eq!(availability(&car), Ok(AVAILABLE));
        car.booked = Some(true);
        assert_eq!(availability(&car), Err(UNAVAILABLE));
    }

    #[test]
    fn reversed_ranges_are_rejected() {
        assert_eq!(
            booking_request(1, date("2024-06-05"), date("2024-06-01")),
            Err(START_AFTER_END)
        );
        let request = booking_request(1, date("2024-06-01"), date("2024-06-05")).expect("valid");
        assert_eq!(request.start_date, "2024-06-01");
        assert_eq!(request.end_date, "2024-06-05");
    }

    #[test]
    fn confirmation_messages_carry_reference_and_reason() {
        assert_eq!(
            booking_created_message(Some(42)),
            "Booking created successfully! Booking reference: 42"
        );
        assert_eq!(booking_created_message(None), "Booking created successfully!");
        assert_eq!(
            booking_failed_message("Car already booked"),
            "Failed to create booking. Please try again. Car already booked"
        );
        assert_eq!(booking_failed_message(""), "Failed to create booking. Please try again.");
    }

    #[test]
    fn status_is_relative_to_today() {
        let today = date("2024-06-10");
        assert_eq!(
            BookingStatus::of(&booking(1, "2024-06-11", "2024-06-12"), today),
            BookingStatus::Upcoming
        );
        assert_eq!(
            BookingStatus::of(&booking(2, "2024-06-10", "2024-06-10"), today),
            BookingStatus::Active
        );
        assert_eq!(
            BookingStatus::of(&booking(3, "2024-06-01", "2024-06-09"), today),
            BookingStatus::Completed
        );
        assert!(BookingStatus::Upcoming.can_cancel());
        assert!(BookingStatus::Active.can_extend());
        assert!(!BookingStatus::Completed.can_cancel());
    }

    #[test]
    fn extension_must_move_the_end_forward() {
        let active = booking(5, "2024-06-08", "2024-06-12");
        assert_eq!(extension_request(&active, date("2024-06-12")), Err(EXTENSION_TOO_SHORT));
        let request = extension_request(&active, date("2024-06-15")).expect("extension");
        assert_eq!(request.car_id, 4);
        assert_eq!(request.start_date, "2024-06-08");
        assert_eq!(request.end_date, "2024-06-15");
    }

    #[test]
    fn totals_fall_back_to_car_rate() {
        let mut with_car = booking(6, "2024-06-01", "2024-06-03");
        with_car.car = Some(Car {
            id: 4,
            price: Some(400.0),
            ..Car::default()
        });
        assert_eq!(booking_days(&with_car), 2);
        assert_eq!(booking_total(&with_car), 800.0);
        with_car.total_price = Some(750.0);
        assert_eq!(booking_total(&with_car), 750.0);
    }

    #[test]
    fn history_sorts_newest_first() {
        let mut bookings = vec![
            booking(1, "2024-01-01", "2024-01-02"),
            booking(2, "bogus", "2024-01-02"),
            booking(3, "2024-03-01", "2024-03-02"),
        ];
        sort_newest_first(&mut bookings);
        let ids: Vec<i64> = bookings.iter().map(|booking| booking.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
