use crate::{app_lib::format::parse_date, features::cars::types::Car};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct BookingUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    #[serde(default)]
    pub car_id: Option<i64>,
    #[serde(default)]
    pub car: Option<Car>,
    #[serde(default)]
    pub user: Option<BookingUser>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub total_price: Option<f64>,
}

impl Booking {
    /// Car id from the booking itself or its embedded car.
    pub fn car_id(&self) -> Option<i64> {
        self.car_id.or_else(|| self.car.as_ref().map(|car| car.id))
    }

    pub fn start(&self) -> Option<NaiveDate> {
        parse_date(&self.start_date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        parse_date(&self.end_date)
    }

    pub fn username(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|user| user.username.as_deref())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("Unknown")
    }

    pub fn car_label(&self) -> String {
        self.car
            .as_ref()
            .map_or_else(|| "Unknown".to_string(), Car::full_name)
    }
}

/// Body for creating or changing a booking. Dates are `YYYY-MM-DD`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub car_id: i64,
    pub start_date: String,
    pub end_date: String,
}

#[cfg(test)]
mod tests {
    use super::{Booking, BookingRequest};
    use serde_json::json;

    #[test]
    fn booking_reads_embedded_car_and_user() {
        let booking: Booking = serde_json::from_value(json!({
            "id": 11,
            "car": {"id": 4, "name": "Volvo", "model": "V70", "price": 500.0},
            "user": {"id": 2, "username": "anna"},
            "startDate": "2024-06-01T00:00:00",
            "endDate": "2024-06-04",
            "totalPrice": 1500.0
        }))
        .expect("booking");

        assert_eq!(booking.car_id(), Some(4));
        assert_eq!(booking.username(), "anna");
        assert_eq!(booking.car_label(), "Volvo V70");
        assert_eq!(booking.start().map(|d| d.to_string()).as_deref(), Some("2024-06-01"));
    }

    #[test]
    fn booking_without_relations_shows_unknown() {
        let booking: Booking =
            serde_json::from_value(json!({"id": 1, "carId": 9})).expect("booking");
        assert_eq!(booking.car_id(), Some(9));
        assert_eq!(booking.username(), "Unknown");
        assert_eq!(booking.car_label(), "Unknown");
        assert_eq!(booking.start(), None);
    }

    #[test]
    fn booking_request_is_camel_case() {
        let request = BookingRequest {
            car_id: 3,
            start_date: "2024-06-01".to_string(),
            end_date: "2024-06-03".to_string(),
        };
        let value = serde_json::to_value(request).expect("serialize");
        assert_eq!(value["carId"], 3);
        assert_eq!(value["startDate"], "2024-06-01");
    }
}
