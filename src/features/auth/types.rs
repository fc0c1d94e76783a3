use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login answers vary: JSON with any of these fields, plain text, or nothing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Accepts empty and non-JSON bodies as a successful login without flags.
    pub fn from_body(body: Option<&str>) -> Self {
        let Some(body) = body else {
            return Self::default();
        };
        serde_json::from_str(body).unwrap_or_else(|_| Self {
            message: Some(body.trim().to_string()),
            ..Self::default()
        })
    }

    pub fn grants_admin(&self) -> bool {
        self.is_admin == Some(true)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::{ChangePasswordRequest, LoginResponse};

    #[test]
    fn login_response_reads_admin_flag() {
        let response = LoginResponse::from_body(Some(r#"{"isAdmin":true,"id":5}"#));
        assert!(response.grants_admin());
        assert_eq!(response.id, Some(5));
    }

    #[test]
    fn login_response_tolerates_text_and_empty_bodies() {
        assert_eq!(LoginResponse::from_body(None), LoginResponse::default());
        let text = LoginResponse::from_body(Some("Login successful"));
        assert!(!text.grants_admin());
        assert_eq!(text.message.as_deref(), Some("Login successful"));
    }

    #[test]
    fn password_change_uses_camel_case() {
        let request = ChangePasswordRequest {
            current_password: "old".to_string(),
            new_password: "new".to_string(),
        };
        let value = serde_json::to_value(request).expect("serialize");
        assert_eq!(value["currentPassword"], "old");
        assert_eq!(value["newPassword"], "new");
    }
}
