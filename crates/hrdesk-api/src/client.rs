use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::endpoints::Endpoints;

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {message}")]
    Request { message: String },
    #[error("failed to read response body: {message}")]
    Read { message: String },
    #[error("http {status}: {}", .detail.as_deref().unwrap_or("<no detail>"))]
    Http {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("failed to decode response: {message}")]
    Decode { message: String },
}

/// Authenticated profile of the current user as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProtectedProfile {
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Minimal diff body for the user-update operation.
///
/// Absent fields are omitted from the wire payload entirely; the backend
/// treats a present field as an instruction to change it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

impl UserUpdatePayload {
    /// An empty diff must never be sent; callers reject it before the wire.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.phone.is_none()
            && self.old_password.is_none()
            && self.new_password.is_none()
    }
}

#[derive(Debug, Deserialize)]
struct UpdateUserBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// JSON client for the HR backend.
///
/// Every request carries a bearer token, a JSON content type, and an
/// `x-request-id` header for correlation on the backend side.
#[derive(Debug, Clone)]
pub struct HrApiClient {
    endpoints: Endpoints,
    timeout: Duration,
    http: reqwest::Client,
}

impl HrApiClient {
    #[must_use]
    pub fn new(endpoints: Endpoints) -> Self {
        Self::with_timeout(endpoints, DEFAULT_TIMEOUT_MS)
    }

    #[must_use]
    pub fn with_timeout(endpoints: Endpoints, timeout_ms: u64) -> Self {
        Self {
            endpoints,
            timeout: Duration::from_millis(timeout_ms.max(250)),
            http: reqwest::Client::new(),
        }
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// GET the protected-profile endpoint for the session identified by `token`.
    pub async fn fetch_protected_profile(
        &self,
        token: &str,
    ) -> Result<ProtectedProfile, ApiError> {
        let response = self
            .http
            .get(self.endpoints.protected())
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .header("x-request-id", request_id())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|error| ApiError::Request {
                message: error.to_string(),
            })?;

        decode_json_response(response).await
    }

    /// PUT a minimal diff to the user-update endpoint.
    ///
    /// Returns the backend's confirmation message when it supplies one. A
    /// non-success status surfaces as [`ApiError::Http`] carrying the parsed
    /// `detail` from the error body verbatim.
    pub async fn update_user(
        &self,
        token: &str,
        payload: &UserUpdatePayload,
    ) -> Result<Option<String>, ApiError> {
        let response = self
            .http
            .put(self.endpoints.update_user())
            .bearer_auth(token)
            .header("x-request-id", request_id())
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await
            .map_err(|error| ApiError::Request {
                message: error.to_string(),
            })?;

        let body: UpdateUserBody = decode_json_response(response).await?;
        Ok(body.message.and_then(non_empty_string))
    }
}

fn request_id() -> String {
    format!("req_{}", Uuid::new_v4().simple())
}

async fn decode_json_response<T>(response: reqwest::Response) -> Result<T, ApiError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let status = response.status();
    let bytes = response.bytes().await.map_err(|error| ApiError::Read {
        message: error.to_string(),
    })?;

    if !status.is_success() {
        return Err(http_error(status, &bytes));
    }

    serde_json::from_slice::<T>(&bytes).map_err(|error| ApiError::Decode {
        message: error.to_string(),
    })
}

pub(crate) fn http_error(status: StatusCode, body: &[u8]) -> ApiError {
    let detail = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail)
        .and_then(non_empty_string);
    ApiError::Http { status, detail }
}

fn non_empty_string(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_only_populated_fields() {
        let payload = UserUpdatePayload {
            email: Some("new@example.com".to_string()),
            ..UserUpdatePayload::default()
        };

        let value = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(value, serde_json::json!({ "email": "new@example.com" }));
    }

    #[test]
    fn empty_payload_serializes_to_empty_object() {
        let value = serde_json::to_value(UserUpdatePayload::default()).expect("serialize");
        assert_eq!(value, serde_json::json!({}));
        assert!(UserUpdatePayload::default().is_empty());
    }

    #[test]
    fn payload_with_both_passwords_keeps_both() {
        let payload = UserUpdatePayload {
            old_password: Some("old-secret".to_string()),
            new_password: Some("new-secret".to_string()),
            ..UserUpdatePayload::default()
        };

        let value = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "old_password": "old-secret",
                "new_password": "new-secret",
            })
        );
    }

    #[test]
    fn profile_defaults_phone_to_empty_string() {
        let profile: ProtectedProfile =
            serde_json::from_value(serde_json::json!({
                "user_id": "u-1",
                "email": "user@example.com",
            }))
            .expect("deserialize");

        assert_eq!(profile.phone, "");
        assert_eq!(profile.email, "user@example.com");
    }

    #[test]
    fn http_error_carries_detail_verbatim() {
        let error = http_error(StatusCode::BAD_REQUEST, br#"{"detail":"Email already taken"}"#);
        match error {
            ApiError::Http { status, detail } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(detail.as_deref(), Some("Email already taken"));
            }
            other => assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn http_error_without_detail_yields_none() {
        for body in [&b""[..], b"not json", br#"{"detail":""}"#, br#"{"other":1}"#] {
            match http_error(StatusCode::INTERNAL_SERVER_ERROR, body) {
                ApiError::Http { detail, .. } => assert!(detail.is_none()),
                other => assert!(false, "unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn http_error_display_includes_status_and_detail() {
        let error = http_error(StatusCode::UNAUTHORIZED, br#"{"detail":"Invalid token"}"#);
        assert_eq!(error.to_string(), "http 401 Unauthorized: Invalid token");
    }
}
