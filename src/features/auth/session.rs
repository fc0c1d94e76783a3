//! Browser-independent auth rules: form validation, message texts and how a
//! start-up session check is interpreted.

use crate::app_lib::{
    AppError,
    format::{is_strong_password, is_valid_email},
};

pub const LOGIN_FAILED: &str = "Incorrect username or password.";
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const WEAK_PASSWORD: &str =
    "Password must be at least 8 characters long and contain letters and numbers.";
/// Delay before leaving the registration success panel.
pub const REGISTRATION_REDIRECT_MS: u32 = 2_000;

/// How a start-up check of the stored session turned out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The backend accepted the cookie (403 counts: the user exists).
    Valid,
    /// The backend rejected the cookie or could not be asked; local flags
    /// must go.
    Invalid,
}

pub fn verify_outcome<T>(result: &Result<T, AppError>) -> VerifyOutcome {
    match result {
        Ok(_) => VerifyOutcome::Valid,
        Err(err) if err.is_forbidden() => VerifyOutcome::Valid,
        Err(_) => VerifyOutcome::Invalid,
    }
}

/// Trimmed registration input ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Checks the registration form in the order the user reads it.
///
/// # Errors
///
/// Returns the message to show next to the form.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<Registration, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields.");
    }
    if password != confirm {
        return Err(PASSWORDS_DO_NOT_MATCH);
    }
    if !is_valid_email(email) {
        return Err(INVALID_EMAIL);
    }
    if !is_strong_password(password) {
        return Err(WEAK_PASSWORD);
    }
    Ok(Registration {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Every failed login reads the same; the cause only goes to the log.
pub fn login_error(err: &AppError) -> &'static str {
    tracing::warn!(error = %err, "login failed");
    LOGIN_FAILED
}

/// Message for a failed registration: the backend's words when it gave any.
pub fn registration_error(err: &AppError) -> String {
    match err {
        AppError::Http { message, .. } if message != "Request failed." => message.clone(),
        _ if err.is_transport() => err.detail(),
        _ => REGISTRATION_FAILED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> AppError {
        AppError::Http {
            status,
            message: "x".to_string(),
        }
    }

    #[test]
    fn login_errors_hide_the_backend_reason() {
        assert_eq!(login_error(&http(401)), LOGIN_FAILED);
        assert_eq!(login_error(&http(500)), LOGIN_FAILED);
        assert_eq!(login_error(&AppError::Network("offline".to_string())), LOGIN_FAILED);
        assert_eq!(login_error(&AppError::Timeout("slow".to_string())), LOGIN_FAILED);
    }

    #[test]
    fn verify_outcome_maps_statuses() {
        assert_eq!(verify_outcome::<()>(&Ok(())), VerifyOutcome::Valid);
        assert_eq!(verify_outcome::<()>(&Err(http(403))), VerifyOutcome::Valid);
        assert_eq!(verify_outcome::<()>(&Err(http(401))), VerifyOutcome::Invalid);
        assert_eq!(verify_outcome::<()>(&Err(http(500))), VerifyOutcome::Invalid);
        assert_eq!(
            verify_outcome::<()>(&Err(AppError::Network("offline".to_string()))),
            VerifyOutcome::Invalid
        );
        assert_eq!(
            verify_outcome::<()>(&Err(AppError::Timeout("slow".to_string()))),
            VerifyOutcome::Invalid
        );
    }

    #[test]
    fn registration_checks_match_before_format() {
        assert_eq!(
            validate_registration("anna", "bad", "rental2024", "rental2025"),
            Err(PASSWORDS_DO_NOT_MATCH)
        );
        assert_eq!(
            validate_registration("anna", "bad", "rental2024", "rental2024"),
            Err(INVALID_EMAIL)
        );
        assert_eq!(
            validate_registration("anna", "anna@wigell.se", "weak", "weak"),
            Err(WEAK_PASSWORD)
        );
    }

    #[test]
    fn registration_trims_identity_fields() {
        let registration =
            validate_registration(" anna ", " anna@wigell.se ", "rental2024", "rental2024")
                .expect("valid registration");
        assert_eq!(registration.username, "anna");
        assert_eq!(registration.email, "anna@wigell.se");
    }

    #[test]
    fn registration_error_prefers_server_message() {
        let taken = AppError::Http {
            status: 409,
            message: "Username already exists".to_string(),
        };
        assert_eq!(registration_error(&taken), "Username already exists");
        let empty = AppError::Http {
            status: 500,
            message: "Request failed.".to_string(),
        };
        assert_eq!(registration_error(&empty), REGISTRATION_FAILED);
        assert_eq!(
            registration_error(&AppError::Parse("bad".to_string())),
            REGISTRATION_FAILED
        );
    }
}
