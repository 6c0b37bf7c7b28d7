//! Data Transfer Objects
//!
//! Request and response shapes exchanged with the academy backend, plus the
//! decoding rules that tolerate both the bare and the enveloped variants the
//! backend produces.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::error::{ClientError, ClientResult};

/// Flat form submission: field name to trimmed or raw string value
pub type FormData = BTreeMap<String, String>;

// ============================================
// Session
// ============================================

/// Authenticated principal as returned by `/auth/user`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Any further profile fields the backend includes
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionUser {
    /// Name to show in the navigation badge
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Student")
    }
}

/// Decode a `/auth/user` body.
///
/// Accepts the bare user object or the `{"user": ..., "status": ...}`
/// envelope; a `null` user inside the envelope means nobody is signed in.
pub fn decode_session(body: Value) -> ClientResult<Option<SessionUser>> {
    match body {
        Value::Object(mut map) if map.contains_key("user") => {
            match map.remove("user").unwrap_or(Value::Null) {
                Value::Null => Ok(None),
                user => serde_json::from_value(user)
                    .map(Some)
                    .map_err(|e| ClientError::Decode(e.to_string())),
            }
        }
        Value::Object(map) => serde_json::from_value(Value::Object(map))
            .map(Some)
            .map_err(|e| ClientError::Decode(e.to_string())),
        Value::Null => Ok(None),
        other => Err(ClientError::Decode(format!(
            "expected a user object, got {}",
            kind_of(&other)
        ))),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LogoutResponse {
    #[serde(default)]
    pub success: bool,
}

// ============================================
// Submissions
// ============================================

/// Outcome of a registration or contact submission
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// 2xx: the backend's response body
    Accepted { data: Value },
    /// Non-2xx or transport failure, with the reason shown to the user
    Rejected { error: String },
}

impl Submission {
    pub fn is_success(&self) -> bool {
        matches!(self, Submission::Accepted { .. })
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            Submission::Accepted { data } => Some(data),
            Submission::Rejected { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Submission::Accepted { .. } => None,
            Submission::Rejected { error } => Some(error),
        }
    }

    /// `{success, data}` / `{success, error}` rendering
    pub fn to_json(&self) -> Value {
        match self {
            Submission::Accepted { data } => json!({ "success": true, "data": data }),
            Submission::Rejected { error } => json!({ "success": false, "error": error }),
        }
    }
}

/// Pull the human-readable reason out of an error body.
///
/// Looks at `error` first, then `message`.
pub fn error_message(body: &Value) -> Option<String> {
    ["error", "message"]
        .iter()
        .filter_map(|key| body.get(*key))
        .find_map(|v| match v {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        })
}

// ============================================
// Admin listings
// ============================================

/// A student registration record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: i64,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A contact inquiry record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Registration {
    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}

impl Inquiry {
    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}

/// Decode a listing body: a bare array, or an object holding the array under
/// `key` (`registrations` / `inquiries`).
pub fn decode_listing<T: DeserializeOwned>(body: Value, key: &str) -> ClientResult<Vec<T>> {
    let items = match body {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => map
            .remove(key)
            .ok_or_else(|| ClientError::Decode(format!("missing `{}` in listing", key)))?,
        other => {
            return Err(ClientError::Decode(format!(
                "expected a listing, got {}",
                kind_of(&other)
            )))
        }
    };

    serde_json::from_value(items).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Parse a backend timestamp: SQLite's `YYYY-MM-DD HH:MM:SS` (UTC) or RFC 3339
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

// ============================================
// Health
// ============================================

/// Body of `/api/health`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_decode_bare_user() {
        let user = decode_session(json!({
            "name": "Ada",
            "picture": "https://example.com/ada.png",
            "google_id": "123"
        }))
        .unwrap()
        .unwrap();

        assert_eq!(user.name.as_deref(), Some("Ada"));
        assert_eq!(user.picture.as_deref(), Some("https://example.com/ada.png"));
        assert_eq!(user.extra.get("google_id"), Some(&json!("123")));
    }

    #[test]
    fn test_decode_enveloped_user() {
        let user = decode_session(json!({
            "user": { "name": "Ada", "email": "ada@example.com" },
            "status": "logged_in"
        }))
        .unwrap()
        .unwrap();

        assert_eq!(user.display_name(), "Ada");
    }

    #[test]
    fn test_decode_not_logged_in_envelope() {
        let user = decode_session(json!({ "user": null, "status": "not_logged_in" })).unwrap();
        assert!(user.is_none());
    }

    #[test]
    fn test_decode_session_rejects_array() {
        assert!(decode_session(json!([1, 2])).is_err());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = decode_session(json!({ "email": "ada@example.com" }))
            .unwrap()
            .unwrap();
        assert_eq!(user.display_name(), "ada@example.com");
    }

    #[test]
    fn test_error_message_prefers_error_field() {
        let body = json!({ "error": "missing field", "message": "Validation failed" });
        assert_eq!(error_message(&body).as_deref(), Some("missing field"));
    }

    #[test]
    fn test_error_message_falls_back_to_message() {
        let body = json!({ "status": "error", "message": "Invalid email format" });
        assert_eq!(error_message(&body).as_deref(), Some("Invalid email format"));
    }

    #[test]
    fn test_error_message_missing() {
        assert_eq!(error_message(&json!({ "status": "error" })), None);
        assert_eq!(error_message(&json!({ "error": "  " })), None);
        assert_eq!(error_message(&json!("plain")), None);
    }

    #[test]
    fn test_decode_bare_listing() {
        let rows: Vec<Registration> = decode_listing(
            json!([{ "id": 1, "full_name": "Ada", "course": "A2P" }]),
            "registrations",
        )
        .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].full_name.as_deref(), Some("Ada"));
        assert_eq!(rows[0].phone, None);
    }

    #[test]
    fn test_decode_enveloped_listing() {
        let rows: Vec<Inquiry> = decode_listing(
            json!({
                "status": "success",
                "count": 2,
                "inquiries": [
                    { "id": 2, "name": "Grace", "subject": "Fees" },
                    { "id": 1, "name": "Alan", "status": "new" }
                ]
            }),
            "inquiries",
        )
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 2);
        assert_eq!(rows[1].status.as_deref(), Some("new"));
    }

    #[test]
    fn test_decode_listing_missing_key() {
        let result: ClientResult<Vec<Inquiry>> =
            decode_listing(json!({ "status": "success" }), "inquiries");
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[test]
    fn test_decode_listing_empty() {
        let rows: Vec<Registration> = decode_listing(json!([]), "registrations").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_parse_sqlite_timestamp() {
        let dt = parse_timestamp("2024-03-05 14:30:00").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 3);
        assert_eq!(dt.hour(), 14);
    }

    #[test]
    fn test_parse_rfc3339_timestamp() {
        let dt = parse_timestamp("2024-03-05T14:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 12);
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_submission_json() {
        let accepted = Submission::Accepted {
            data: json!({ "id": 7 }),
        };
        assert_eq!(
            accepted.to_json(),
            json!({ "success": true, "data": { "id": 7 } })
        );

        let rejected = Submission::Rejected {
            error: "missing field".to_string(),
        };
        assert!(!rejected.is_success());
        assert_eq!(rejected.error(), Some("missing field"));
        assert_eq!(
            rejected.to_json(),
            json!({ "success": false, "error": "missing field" })
        );
    }
}
