//! Rules behind the "My Pages" forms: profile edits and password change.

use crate::{
    app_lib::{
        AppError,
        format::{MIN_PASSWORD_LENGTH, is_valid_email},
    },
    features::{
        auth::{session::INVALID_EMAIL, types::ChangePasswordRequest},
        users::types::{ProfileEdits, User},
    },
};

pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
/// The profile confirmation disappears after this many milliseconds.
pub const PROFILE_MESSAGE_MS: u32 = 5_000;
pub const PASSWORD_TOO_SHORT: &str = "New password must be at least 8 characters long.";
pub const NEW_PASSWORDS_DO_NOT_MATCH: &str = "New passwords do not match.";
pub const PASSWORD_CHANGED: &str = "Password changed successfully!";
pub const WRONG_CURRENT_PASSWORD: &str = "Failed to change password. Current password is incorrect.";

/// Validates the edits and merges them into the fetched user.
///
/// # Errors
///
/// Returns [`INVALID_EMAIL`] when the email does not look like one.
pub fn profile_update(user: &User, edits: &ProfileEdits) -> Result<User, &'static str> {
    if !is_valid_email(edits.email.trim()) {
        return Err(INVALID_EMAIL);
    }
    Ok(user.with_profile(edits))
}

pub fn profile_error(err: &AppError) -> String {
    format!("Failed to update profile: {}", err.detail())
}

/// Checks the password form before anything is sent.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn password_change(
    current: &str,
    new_password: &str,
    confirm: &str,
) -> Result<ChangePasswordRequest, &'static str> {
    if current.is_empty() {
        return Err("Please enter your current password.");
    }
    if new_password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PASSWORD_TOO_SHORT);
    }
    if new_password != confirm {
        return Err(NEW_PASSWORDS_DO_NOT_MATCH);
    }
    Ok(ChangePasswordRequest {
        current_password: current.to_string(),
        new_password: new_password.to_string(),
    })
}

/// A 401 from the change-password call means the current password was wrong.
pub fn password_change_error(err: &AppError) -> String {
    if err.is_unauthorized() {
        WRONG_CURRENT_PASSWORD.to_string()
    } else {
        format!("Failed to change password: {}", err.detail())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 7,
            username: "erik".to_string(),
            email: Some("erik@wigell.se".to_string()),
            ..User::default()
        }
    }

    #[test]
    fn profile_rejects_bad_email() {
        let mut edits = ProfileEdits::from_user(&user());
        edits.email = "erik-at-wigell".to_string();
        assert_eq!(profile_update(&user(), &edits), Err(INVALID_EMAIL));
    }

    #[test]
    fn profile_update_keeps_identity() {
        let mut edits = ProfileEdits::from_user(&user());
        edits.phone = "070-1234567".to_string();
        let updated = profile_update(&user(), &edits).expect("valid edits");
        assert_eq!(updated.id, 7);
        assert_eq!(updated.phone.as_deref(), Some("070-1234567"));
    }

    #[test]
    fn password_rules_apply_in_order() {
        assert_eq!(password_change("old", "short", "short"), Err(PASSWORD_TOO_SHORT));
        assert_eq!(
            password_change("old", "longenough", "different"),
            Err(NEW_PASSWORDS_DO_NOT_MATCH)
        );
        let request = password_change("old", "longenough", "longenough").expect("valid");
        assert_eq!(request.current_password, "old");
        assert_eq!(request.new_password, "longenough");
    }

    #[test]
    fn unauthorized_means_wrong_current_password() {
        let unauthorized = AppError::Http {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert_eq!(password_change_error(&unauthorized), WRONG_CURRENT_PASSWORD);
        let server = AppError::Http {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(password_change_error(&server), "Failed to change password: boom");
        assert_eq!(profile_error(&server), "Failed to update profile: boom");
    }
}
