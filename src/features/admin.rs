//! Admin dashboard rules: tabs, confirmation and failure texts, and the
//! booking edit form.

use crate::{
    app_lib::format::parse_date,
    features::bookings::{
        pricing::{Quote, booking_days, booking_request},
        types::{Booking, BookingRequest},
    },
};

pub const ACCESS_DENIED: &str =
    "Access denied. You do not have permission to view the admin dashboard.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Users,
    Cars,
    Bookings,
}

impl AdminTab {
    pub const ALL: [AdminTab; 3] = [AdminTab::Users, AdminTab::Cars, AdminTab::Bookings];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Users => "Users",
            AdminTab::Cars => "Cars",
            AdminTab::Bookings => "Bookings",
        }
    }
}

/// Question asked before deleting a `user`, `car` or `booking`.
pub fn delete_confirmation(entity: &str) -> String {
    format!("Are you sure you want to delete this {entity}? This action cannot be undone.")
}

/// `"{context}. Please try again."`
pub fn failure_message(context: &str) -> String {
    format!("{context}. Please try again.")
}

/// Daily rate when the selected car cannot be looked up: the embedded car's
/// price, else the stored total spread over the booked days.
pub fn fallback_rate(booking: &Booking) -> f64 {
    if let Some(car) = &booking.car
        && car.rate().is_some()
    {
        return car.daily_price();
    }
    match (booking.total_price, booking_days(booking)) {
        (Some(total), days) if days > 0 => total / days as f64,
        (Some(total), _) => total,
        _ => 0.0,
    }
}

/// Booking edit form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingEdit {
    pub car_id: String,
    pub start_date: String,
    pub end_date: String,
}

impl BookingEdit {
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            car_id: booking.car_id().map(|id| id.to_string()).unwrap_or_default(),
            start_date: booking
                .start()
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            end_date: booking
                .end()
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    pub fn car_id(&self) -> Option<i64> {
        self.car_id.trim().parse().ok()
    }

    /// Summary shown under the form, or `None` until both dates parse.
    pub fn quote(&self, daily_rate: f64) -> Option<Quote> {
        let start = parse_date(&self.start_date)?;
        let end = parse_date(&self.end_date)?;
        Some(Quote::at_least_one_day(daily_rate, start, end))
    }

    /// # Errors
    ///
    /// Returns the message to show in the edit dialog.
    pub fn to_request(&self) -> Result<BookingRequest, &'static str> {
        let car_id = self.car_id().ok_or("Please enter a valid car ID.")?;
        let start = parse_date(&self.start_date).ok_or("Please choose a start date.")?;
        let end = parse_date(&self.end_date).ok_or("Please choose an end date.")?;
        booking_request(car_id, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{bookings::pricing::START_AFTER_END, cars::types::Car};

    fn booking() -> Booking {
        Booking {
            id: 8,
            car_id: Some(3),
            start_date: "2024-06-01".to_string(),
            end_date: "2024-06-05".to_string(),
            total_price: Some(2000.0),
            ..Booking::default()
        }
    }

    #[test]
    fn confirmation_and_failure_texts() {
        assert_eq!(
            delete_confirmation("car"),
            "Are you sure you want to delete this car? This action cannot be undone."
        );
        assert_eq!(failure_message("Failed to delete user"), "Failed to delete user. Please try again.");
    }

    #[test]
    fn fallback_rate_prefers_embedded_car() {
        let mut with_car = booking();
        assert_eq!(fallback_rate(&with_car), 500.0);
        with_car.car = Some(Car {
            id: 3,
            price: Some(450.0),
            ..Car::default()
        });
        assert_eq!(fallback_rate(&with_car), 450.0);
        assert_eq!(fallback_rate(&Booking::default()), 0.0);
    }

    #[test]
    fn edit_form_round_trips_a_booking() {
        let edit = BookingEdit::from_booking(&booking());
        assert_eq!(edit.car_id, "3");
        assert_eq!(edit.start_date, "2024-06-01");
        let request = edit.to_request().expect("valid edit");
        assert_eq!(request.car_id, 3);
        assert_eq!(request.end_date, "2024-06-05");
        assert_eq!(edit.quote(300.0).map(|quote| quote.total), Some(1200.0));
    }

    #[test]
    fn edit_form_rejects_bad_input() {
        let mut edit = BookingEdit::from_booking(&booking());
        edit.start_date = "2024-06-09".to_string();
        assert_eq!(edit.to_request(), Err(START_AFTER_END));
        assert_eq!(edit.quote(100.0).map(|quote| quote.days), Some(1));
        edit.car_id = "abc".to_string();
        assert_eq!(edit.to_request(), Err("Please enter a valid car ID."));
    }

    #[test]
    fn tabs_start_on_users() {
        assert_eq!(AdminTab::default(), AdminTab::Users);
        let labels: Vec<&str> = AdminTab::ALL.iter().map(|tab| tab.label()).collect();
        assert_eq!(labels, vec!["Users", "Cars", "Bookings"]);
    }
}
