//! Client wrappers for the login and password endpoints. Request bodies carry
//! passwords and must never be logged.

use crate::{
    app_lib::{AppError, AuthMode, post_text},
    features::auth::types::{ChangePasswordRequest, LoginRequest, LoginResponse},
};

/// Posts credentials; the backend answers by setting the session cookie.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, AppError> {
    let body = post_text("/auth/login", request, AuthMode::Anonymous).await?;
    Ok(LoginResponse::from_body(body.as_deref()))
}

/// Changes the password of the signed-in user. A 401 here means the current
/// password was wrong, so it must not end the session.
pub async fn change_password(request: &ChangePasswordRequest) -> Result<(), AppError> {
    post_text("/users/change-password", request, AuthMode::Anonymous)
        .await
        .map(|_| ())
}
