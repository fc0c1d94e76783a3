use std::fmt;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// The session cookie is missing or expired.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Http { status: 401, .. })
    }

    /// Authenticated but not allowed to touch the resource.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, AppError::Http { status: 403, .. })
    }

    /// True when the backend was never reached, so the session state is unknown.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Timeout(_))
    }

    /// Message without the variant prefix, used for inline form errors.
    pub fn detail(&self) -> String {
        match self {
            AppError::Config(message)
            | AppError::Network(message)
            | AppError::Timeout(message)
            | AppError::Parse(message)
            | AppError::Serialization(message)
            | AppError::Http { message, .. } => message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "{message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Builds the user-facing message for a failed response body. The backend
/// reports errors as `{"message": "..."}`; anything else is shown trimmed.
pub fn error_message_from_body(body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .filter(|message| !message.trim().is_empty());

    sanitize_body(from_json.as_deref().unwrap_or(body))
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{AppError, error_message_from_body};

    #[test]
    fn error_message_prefers_json_message_field() {
        assert_eq!(
            error_message_from_body(r#"{"message":"Username already taken","status":409}"#),
            "Username already taken"
        );
    }

    #[test]
    fn error_message_falls_back_to_trimmed_body() {
        assert_eq!(error_message_from_body("  Bad Request \n"), "Bad Request");
        assert_eq!(error_message_from_body(""), "Request failed.");
        assert_eq!(error_message_from_body(r#"{"message":"  "}"#), r#"{"message":"  "}"#);
    }

    #[test]
    fn error_message_is_truncated() {
        let body = "x".repeat(500);
        assert_eq!(error_message_from_body(&body).chars().count(), 200);
    }

    #[test]
    fn status_helpers_match_http_variants() {
        let unauthorized = AppError::Http {
            status: 401,
            message: "expired".to_string(),
        };
        let forbidden = AppError::Http {
            status: 403,
            message: "nope".to_string(),
        };
        assert!(unauthorized.is_unauthorized());
        assert!(!unauthorized.is_forbidden());
        assert!(forbidden.is_forbidden());
        assert!(AppError::Timeout("slow".to_string()).is_transport());
        assert!(!forbidden.is_transport());
        assert_eq!(forbidden.detail(), "nope");
    }
}
