//! Client helpers for car endpoints.

use crate::{
    app_lib::{AppError, AuthMode, delete, get_json, post_json, put_json},
    features::cars::types::{Car, CarRequest},
};

pub async fn list_cars() -> Result<Vec<Car>, AppError> {
    get_json("/cars").await
}

pub async fn get_car(id: i64) -> Result<Car, AppError> {
    get_json(&format!("/cars/{id}")).await
}

pub async fn create_car(request: &CarRequest) -> Result<Option<Car>, AppError> {
    post_json("/cars", request, AuthMode::Session).await
}

pub async fn update_car(id: i64, request: &CarRequest) -> Result<Option<Car>, AppError> {
    put_json(&format!("/cars/{id}"), request).await
}

pub async fn delete_car(id: i64) -> Result<(), AppError> {
    delete(&format!("/cars/{id}")).await
}
