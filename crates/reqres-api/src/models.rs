//! Request and response bodies for the reqres API.
//!
//! Response types mirror the JSON the API returns. Fields the API may omit are
//! `Option` so that absence is an ordinary value instead of a decode failure.

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Envelopes
// ============================================================================

/// Paginated collection response (`/api/users`, `/api/unknown`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page<T> {
    /// Current page number
    #[serde(default)]
    pub page: Option<u32>,
    /// Items per page
    #[serde(default)]
    pub per_page: Option<u32>,
    /// Total number of items across all pages
    #[serde(default)]
    pub total: Option<u32>,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: Option<u32>,
    /// Items on this page, in server order
    pub data: Vec<T>,
}

/// Single-item response. `data` is `None` for not-found responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Single<T> {
    pub data: Option<T>,
}

// ============================================================================
// Response Records
// ============================================================================

/// A user as returned by `/api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A colour resource as returned by `/api/unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceRecord {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub pantone_value: Option<String>,
}

/// Response to `POST /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    /// RFC 3339 creation time
    pub created_at: String,
}

/// Response to `PUT`/`PATCH /api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    /// RFC 3339 update time
    pub updated_at: String,
}

/// Successful `POST /api/register`.
///
/// The API sends `id` as a number; it is kept as text so it compares directly
/// with the documented value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterSuccess {
    #[serde(deserialize_with = "string_or_number")]
    pub id: Option<String>,
    pub token: String,
}

/// Successful `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginSuccess {
    pub token: String,
}

/// Failed registration or login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterFailure {
    pub error: String,
}

// ============================================================================
// Request Bodies
// ============================================================================

/// Body for `POST /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub job: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job: job.into(),
        }
    }
}

/// Body for `PUT`/`PATCH /api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub job: String,
}

impl UserUpdate {
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job: job.into(),
        }
    }
}

/// Body for `/api/register` and `/api/login`.
///
/// A `None` password is left out of the JSON entirely; `Some("")` is sent as
/// an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Credentials {
    /// Email and password.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Some(password.into()),
        }
    }

    /// Email only, no password field.
    pub fn email_only(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: None,
        }
    }
}

// ============================================================================
// Serde Helpers
// ============================================================================

/// Accept a JSON string, number or null and keep it as text.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_page_parses_reqres_shape() {
        let page: Page<UserRecord> = serde_json::from_value(json!({
            "page": 2,
            "per_page": 6,
            "total": 12,
            "total_pages": 2,
            "data": [{
                "id": 7,
                "email": "michael.lawson@reqres.in",
                "first_name": "Michael",
                "last_name": "Lawson",
                "avatar": "https://reqres.in/img/faces/7-image.jpg"
            }],
            "support": {"url": "https://reqres.in/#support-heading"}
        }))
        .unwrap();

        assert_eq!(page.page, Some(2));
        assert_eq!(page.total_pages, Some(2));
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].first_name.as_deref(), Some("Michael"));
    }

    #[test]
    fn test_single_envelope_missing_and_null_data() {
        let missing: Single<UserRecord> = serde_json::from_value(json!({})).unwrap();
        assert!(missing.data.is_none());

        let null: Single<ResourceRecord> = serde_json::from_value(json!({"data": null})).unwrap();
        assert!(null.data.is_none());
    }

    #[test]
    fn test_resource_record_optional_fields() {
        let resource: ResourceRecord = serde_json::from_value(json!({"id": 2})).unwrap();
        assert_eq!(resource.id, 2);
        assert!(resource.color.is_none());
        assert!(resource.pantone_value.is_none());
    }

    #[test]
    fn test_created_record_uses_camel_case() {
        let created: CreatedRecord = serde_json::from_value(json!({
            "name": "morpheus",
            "job": "leader",
            "id": "728",
            "createdAt": "2026-10-18T09:14:55.123Z"
        }))
        .unwrap();

        assert_eq!(created.id.as_deref(), Some("728"));
        assert_eq!(created.created_at, "2026-10-18T09:14:55.123Z");
    }

    #[test]
    fn test_updated_record_requires_timestamp() {
        let result: Result<UpdatedRecord, _> =
            serde_json::from_value(json!({"name": "morpheus", "job": "zion resident"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_register_success_accepts_numeric_id() {
        let success: RegisterSuccess =
            serde_json::from_value(json!({"id": 4, "token": "QpwL5tke4Pnpja7X4"})).unwrap();
        assert_eq!(success.id.as_deref(), Some("4"));

        let textual: RegisterSuccess =
            serde_json::from_value(json!({"id": "4", "token": "t"})).unwrap();
        assert_eq!(textual.id.as_deref(), Some("4"));
    }

    #[test]
    fn test_credentials_serialization() {
        let empty_password = serde_json::to_value(Credentials::new("eve.holt@reqres.in", "")).unwrap();
        assert_eq!(
            empty_password,
            json!({"email": "eve.holt@reqres.in", "password": ""})
        );

        let email_only = serde_json::to_value(Credentials::email_only("peter@klaven")).unwrap();
        assert_eq!(email_only, json!({"email": "peter@klaven"}));
    }
}
