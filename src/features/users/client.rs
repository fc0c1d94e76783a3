//! Client helpers for user endpoints. Authorization is enforced by the
//! backend; these only keep the paths in one place.

use crate::{
    app_lib::{AppError, AuthMode, delete, get_json, get_optional_json, post_text, put_json},
    features::{auth::types::RegisterRequest, users::types::User},
};

/// Fetches the user behind the session cookie.
pub async fn current_user(mode: AuthMode) -> Result<Option<User>, AppError> {
    get_optional_json("/users/current", mode).await
}

pub async fn list_users() -> Result<Vec<User>, AppError> {
    get_json("/users").await
}

/// Creates an account. Runs without a session so a 401 is not treated as expiry.
pub async fn register(request: &RegisterRequest) -> Result<(), AppError> {
    post_text("/users", request, AuthMode::Anonymous)
        .await
        .map(|_| ())
}

pub async fn update_user(user: &User) -> Result<Option<User>, AppError> {
    put_json(&format!("/users/{}", user.id), user).await
}

pub async fn delete_user(id: i64) -> Result<(), AppError> {
    delete(&format!("/users/{id}")).await
}
