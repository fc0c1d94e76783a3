//! Client helpers for booking endpoints.

use crate::{
    app_lib::{AppError, AuthMode, delete, get_json, post_json, put_json},
    features::{
        bookings::types::{Booking, BookingRequest},
        cars,
    },
};
use futures::future::join_all;

pub async fn list_bookings() -> Result<Vec<Booking>, AppError> {
    get_json("/bookings").await
}

pub async fn user_bookings(user_id: i64) -> Result<Vec<Booking>, AppError> {
    get_json(&format!("/bookings/user/{user_id}")).await
}

pub async fn create_booking(request: &BookingRequest) -> Result<Option<Booking>, AppError> {
    post_json("/bookings", request, AuthMode::Session).await
}

pub async fn update_booking(id: i64, request: &BookingRequest) -> Result<Option<Booking>, AppError> {
    put_json(&format!("/bookings/{id}"), request).await
}

pub async fn delete_booking(id: i64) -> Result<(), AppError> {
    delete(&format!("/bookings/{id}")).await
}

/// Fills in the car of every booking that does not embed one. Lookups run
/// concurrently; a failed lookup leaves that car unknown.
pub async fn with_cars(bookings: Vec<Booking>) -> Vec<Booking> {
    join_all(bookings.into_iter().map(|mut booking| async move {
        if booking.car.is_none()
            && let Some(car_id) = booking.car_id
        {
            match cars::client::get_car(car_id).await {
                Ok(car) => booking.car = Some(car),
                Err(err) => {
                    tracing::warn!(booking = booking.id, error = %err, "car lookup failed");
                }
            }
        }
        booking
    }))
    .await
}
