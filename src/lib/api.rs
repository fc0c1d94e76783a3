//! HTTP helpers for the rental REST API with consistent timeouts and error
//! handling. Every request carries the session cookie. Calls made in
//! [`AuthMode::Session`] treat a 401 as an expired session: the stored auth
//! flags are cleared and the browser is sent to the login page. Anonymous
//! calls (login, registration, password change) hand the 401 back instead.
//! Request bodies may contain passwords and are never logged.

use super::errors::{AppError, error_message_from_body};
use serde::de::DeserializeOwned;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    /// A 401 ends the local session and redirects to login.
    Session,
    /// A 401 is returned to the caller untouched.
    Anonymous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Returns the response text, or `None` for 204 and blank bodies.
pub fn content_of(status: u16, text: String) -> Option<String> {
    if status == 204 || text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Decodes an optional JSON body.
pub fn decode_optional<T: DeserializeOwned>(text: Option<&str>) -> Result<Option<T>, AppError> {
    match text {
        None => Ok(None),
        Some(text) => serde_json::from_str(text)
            .map(Some)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}"))),
    }
}

/// Decodes a JSON body that must be present.
pub fn decode_required<T: DeserializeOwned>(text: Option<&str>) -> Result<T, AppError> {
    decode_optional(text)?
        .ok_or_else(|| AppError::Parse("Expected a response body but got none.".to_string()))
}

/// Maps a non-2xx status and its body into an `AppError`.
pub fn http_error(status: u16, body: &str) -> AppError {
    AppError::Http {
        status,
        message: error_message_from_body(body),
    }
}

/// True when a failed call should end the local session.
pub fn expires_session(mode: AuthMode, status: u16) -> bool {
    mode == AuthMode::Session && status == 401
}

#[cfg(target_arch = "wasm32")]
pub use transport::{delete, get_json, get_optional_json, post_json, post_text, put_json, send};

#[cfg(target_arch = "wasm32")]
mod transport {
    use super::{
        AuthMode, DEFAULT_TIMEOUT_MS, Method, content_of, decode_optional, decode_required,
        expires_session, http_error,
    };
    use crate::app_lib::{config::AppConfig, errors::AppError, storage};
    use gloo_net::http::{Request, RequestBuilder, Response};
    use gloo_timers::callback::Timeout;
    use serde::{Serialize, de::DeserializeOwned};
    use web_sys::{AbortController, AbortSignal, RequestCredentials};

    /// Fetches JSON from a session-authenticated endpoint.
    pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
        let text = send(Method::Get, path, None, AuthMode::Session).await?;
        decode_required(text.as_deref())
    }

    /// Fetches JSON and returns `None` for 204 or an empty body.
    pub async fn get_optional_json<T: DeserializeOwned>(
        path: &str,
        mode: AuthMode,
    ) -> Result<Option<T>, AppError> {
        let text = send(Method::Get, path, None, mode).await?;
        decode_optional(text.as_deref())
    }

    /// Posts JSON and parses a JSON response, tolerating an empty one.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
        mode: AuthMode,
    ) -> Result<Option<T>, AppError> {
        let payload = encode(body)?;
        let text = send(Method::Post, path, Some(payload), mode).await?;
        decode_optional(text.as_deref())
    }

    /// Posts JSON and returns the raw response text for endpoints that may
    /// answer with plain text.
    pub async fn post_text<B: Serialize>(
        path: &str,
        body: &B,
        mode: AuthMode,
    ) -> Result<Option<String>, AppError> {
        let payload = encode(body)?;
        send(Method::Post, path, Some(payload), mode).await
    }

    /// Replaces a resource and parses the updated representation if any.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
    ) -> Result<Option<T>, AppError> {
        let payload = encode(body)?;
        let text = send(Method::Put, path, Some(payload), AuthMode::Session).await?;
        decode_optional(text.as_deref())
    }

    /// Deletes a resource; any response body is ignored.
    pub async fn delete(path: &str) -> Result<(), AppError> {
        send(Method::Delete, path, None, AuthMode::Session)
            .await
            .map(|_| ())
    }

    /// Sends one request with credentials and returns the body text, or
    /// `None` when the server sent no content.
    pub async fn send(
        method: Method,
        path: &str,
        payload: Option<String>,
        mode: AuthMode,
    ) -> Result<Option<String>, AppError> {
        let url = AppConfig::load().endpoint(path);
        tracing::debug!(method = method.as_str(), %url, "api request");

        let response = send_with_timeout(|signal| {
            let builder = builder_for(method, &url)
                .credentials(RequestCredentials::Include)
                .abort_signal(Some(signal));
            let request = match payload {
                Some(payload) => builder
                    .header("Content-Type", "application/json")
                    .body(payload),
                None => builder.build(),
            };
            request.map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        handle_response(response, mode).await
    }

    fn builder_for(method: Method, url: &str) -> RequestBuilder {
        match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
    }

    fn encode<B: Serialize>(body: &B) -> Result<String, AppError> {
        serde_json::to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
    }

    /// Maps network errors into user-facing `AppError` variants with timeout detection.
    fn map_request_error(err: gloo_net::Error) -> AppError {
        let message = err.to_string();
        let lowered = message.to_lowercase();

        if lowered.contains("timeout") || lowered.contains("abort") {
            AppError::Timeout("Request timed out. Please try again.".to_string())
        } else {
            AppError::Network(format!("Unable to reach the server: {message}"))
        }
    }

    /// Sends a request with an abort timeout to avoid hanging UI state.
    async fn send_with_timeout(
        build_request: impl FnOnce(&AbortSignal) -> Result<Request, AppError>,
    ) -> Result<Response, AppError> {
        let controller = AbortController::new()
            .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

        let request = build_request(&signal)?;
        request.send().await.map_err(map_request_error)
    }

    async fn handle_response(response: Response, mode: AuthMode) -> Result<Option<String>, AppError> {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if response.ok() {
            return Ok(content_of(status, text));
        }

        tracing::debug!(status, "api request failed");
        if expires_session(mode, status) {
            expire_session();
        }
        Err(http_error(status, &text))
    }

    /// Drops the stored session flags and leaves for the login page.
    fn expire_session() {
        tracing::warn!("session rejected by the server, signing out locally");
        storage::clear_auth(&storage::local());
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Car {
        id: i64,
    }

    #[test]
    fn no_content_and_blank_bodies_are_empty() {
        assert_eq!(content_of(204, "ignored".to_string()), None);
        assert_eq!(content_of(200, "  \n".to_string()), None);
        assert_eq!(content_of(200, "{}".to_string()), Some("{}".to_string()));
    }

    #[test]
    fn decode_optional_handles_missing_bodies() {
        assert_eq!(decode_optional::<Car>(None), Ok(None));
        assert_eq!(decode_optional::<Car>(Some(r#"{"id":3}"#)), Ok(Some(Car { id: 3 })));
        assert!(matches!(
            decode_optional::<Car>(Some("not json")),
            Err(AppError::Parse(_))
        ));
    }

    #[test]
    fn decode_required_rejects_empty_bodies() {
        assert!(matches!(decode_required::<Car>(None), Err(AppError::Parse(_))));
        assert_eq!(decode_required::<Car>(Some(r#"{"id":9}"#)), Ok(Car { id: 9 }));
    }

    #[test]
    fn http_error_uses_backend_message() {
        assert_eq!(
            http_error(409, r#"{"message":"Car is already booked"}"#),
            AppError::Http {
                status: 409,
                message: "Car is already booked".to_string()
            }
        );
    }

    #[test]
    fn only_session_calls_expire_on_401() {
        assert!(expires_session(AuthMode::Session, 401));
        assert!(!expires_session(AuthMode::Session, 403));
        assert!(!expires_session(AuthMode::Anonymous, 401));
    }

    #[test]
    fn methods_render_as_http_verbs() {
        assert_eq!(Method::Delete.as_str(), "DELETE");
        assert_eq!(Method::Put.as_str(), "PUT");
    }
}
