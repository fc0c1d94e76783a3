use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ADMIN_ROLE: &str = "ROLE_ADMIN";

/// A user as the backend returns it. Fields the client does not edit are kept
/// in `extra` so a profile update sends the resource back intact.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }

    /// Role column text; users without a role are plain users.
    pub fn role_label(&self) -> &str {
        self.role.as_deref().unwrap_or("USER")
    }

    /// Full name when set, otherwise the username.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }

    /// Applies profile form edits. Blank fields become `""` rather than
    /// `None` so the update body still names them and the backend clears them.
    pub fn with_profile(&self, edits: &ProfileEdits) -> Self {
        let clean = |value: &str| Some(value.trim().to_string());
        Self {
            email: clean(&edits.email),
            full_name: clean(&edits.full_name),
            phone: clean(&edits.phone),
            address: clean(&edits.address),
            ..self.clone()
        }
    }
}

/// Editable profile fields as typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileEdits {
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub address: String,
}

impl ProfileEdits {
    pub fn from_user(user: &User) -> Self {
        Self {
            email: user.email.clone().unwrap_or_default(),
            full_name: user.full_name.clone().unwrap_or_default(),
            phone: user.phone.clone().unwrap_or_default(),
            address: user.address.clone().unwrap_or_default(),
        }
    }
}

/// Placeholder shown for empty optional cells.
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> User {
        serde_json::from_value(json!({
            "id": 3,
            "username": "anna",
            "email": "anna@wigell.se",
            "role": "USER",
            "createdAt": "2024-01-01"
        }))
        .expect("user")
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let user = sample();
        let value = serde_json::to_value(&user).expect("serialize");
        assert_eq!(value["createdAt"], "2024-01-01");
        assert_eq!(value["username"], "anna");
    }

    #[test]
    fn profile_edits_merge_into_user() {
        let user = sample();
        let edits = ProfileEdits {
            email: "new@wigell.se".to_string(),
            full_name: " Anna Wigell ".to_string(),
            phone: String::new(),
            address: "Storgatan 1".to_string(),
        };
        let updated = user.with_profile(&edits);
        assert_eq!(updated.id, 3);
        assert_eq!(updated.username, "anna");
        assert_eq!(updated.email.as_deref(), Some("new@wigell.se"));
        assert_eq!(updated.full_name.as_deref(), Some("Anna Wigell"));
        assert_eq!(updated.phone.as_deref(), Some(""));
        assert_eq!(updated.extra.get("createdAt"), Some(&json!("2024-01-01")));
    }

    #[test]
    fn cleared_profile_fields_are_sent_empty() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "username": "anna",
            "email": "a@b.se",
            "phone": "070-1",
            "fullName": "Anna",
            "address": "Storgatan 1"
        }))
        .expect("user");
        let edits = ProfileEdits {
            email: "a@b.se".to_string(),
            ..ProfileEdits::default()
        };
        let body = serde_json::to_value(user.with_profile(&edits)).expect("serialize");
        assert_eq!(body["phone"], "");
        assert_eq!(body["fullName"], "");
        assert_eq!(body["address"], "");
        assert_eq!(body["email"], "a@b.se");
    }

    #[test]
    fn labels_fall_back() {
        let mut user = sample();
        user.role = None;
        assert_eq!(user.role_label(), "USER");
        assert_eq!(user.display_name(), "anna");
        assert!(!user.is_admin());
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("070-123")), "070-123");
    }
}
