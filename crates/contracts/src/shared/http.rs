//! Response classification shared by every API call.
//!
//! The browser client only moves bytes; deciding what a status/body pair means
//! happens here so it can be tested without a network.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// HTTP 401. The session has been cleared.
    #[error("{message}")]
    Unauthorized { message: String },

    /// Not sent: the session this request belonged to was already cleared.
    #[error("Session expired, please sign in again")]
    SessionExpired,

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("{0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. } | ApiError::SessionExpired)
    }
}

/// Body text verbatim, or `HTTP {status}` when the body is empty.
pub fn failure_message(status: u16, body: &str) -> String {
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        body.to_string()
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains(JSON_CONTENT_TYPE))
}

/// Successful response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Decode into `T`. Text bodies are offered as a JSON string, an empty body as `null`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let value = match self {
            Payload::Json(value) => value,
            Payload::Text(text) if text.is_empty() => Value::Null,
            Payload::Text(text) => Value::String(text),
        };
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Turn a finished HTTP exchange into a payload or an error.
pub fn interpret_response(status: u16, content_type: Option<&str>, body: String) -> Result<Payload, ApiError> {
    if !(200..300).contains(&status) {
        let message = failure_message(status, &body);
        return Err(if status == 401 {
            ApiError::Unauthorized { message }
        } else {
            ApiError::Server { status, message }
        });
    }
    if is_json_content_type(content_type) {
        if body.trim().is_empty() {
            return Ok(Payload::Json(Value::Null));
        }
        serde_json::from_str(&body)
            .map(Payload::Json)
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Ok(Payload::Text(body))
    }
}

/// Token snapshot for one load sequence or form submission.
///
/// After a 401 in the sequence, or once the session no longer holds the
/// snapshot token, every further request fails with `SessionExpired` unsent.
#[derive(Debug, Default)]
pub struct RequestScope {
    token: Option<String>,
    revoked: AtomicBool,
}

impl RequestScope {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token,
            revoked: AtomicBool::new(false),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_revoked(&self) -> bool {
        self.revoked.load(Ordering::Relaxed)
    }

    /// Call before sending, with the token the session holds right now.
    pub fn check(&self, current_token: Option<&str>) -> Result<(), ApiError> {
        if self.is_revoked() {
            return Err(ApiError::SessionExpired);
        }
        if self.token.is_some() && current_token != self.token.as_deref() {
            self.revoked.store(true, Ordering::Relaxed);
            return Err(ApiError::SessionExpired);
        }
        Ok(())
    }

    pub fn on_unauthorized(&self) {
        self.revoked.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Message {
        message: String,
    }

    #[test]
    fn test_error_body_is_kept_verbatim() {
        let err = interpret_response(500, Some("text/plain"), "  boom \n".into()).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: "  boom \n".into()
            }
        );
        assert_eq!(err.to_string(), "  boom \n");
    }

    #[test]
    fn test_empty_error_body_uses_status() {
        let err = interpret_response(404, None, String::new()).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 404");
    }

    #[test]
    fn test_unauthorized_is_distinct() {
        let err = interpret_response(401, Some(JSON_CONTENT_TYPE), r#"{"error":"expired"}"#.into())
            .unwrap_err();
        assert!(err.is_auth());
        assert_eq!(err.to_string(), r#"{"error":"expired"}"#);
        assert!(!ApiError::Transport("offline".into()).is_auth());
    }

    #[test]
    fn test_json_vs_text_by_content_type() {
        let ok = interpret_response(
            200,
            Some("application/json; charset=utf-8"),
            r#"{"message":"done"}"#.into(),
        )
        .unwrap();
        assert_eq!(
            ok.clone().decode::<Message>().unwrap(),
            Message {
                message: "done".into()
            }
        );

        let text = interpret_response(200, Some("text/html"), r#"{"message":"done"}"#.into()).unwrap();
        assert_eq!(text, Payload::Text(r#"{"message":"done"}"#.into()));
        assert_eq!(text.decode::<String>().unwrap(), r#"{"message":"done"}"#);
    }

    #[test]
    fn test_empty_bodies_decode_as_unit() {
        let ok = interpret_response(204, None, String::new()).unwrap();
        ok.decode::<()>().unwrap();
        let ok = interpret_response(200, Some(JSON_CONTENT_TYPE), String::new()).unwrap();
        assert_eq!(ok.decode::<Option<Message>>().unwrap(), None);
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let err = interpret_response(200, Some(JSON_CONTENT_TYPE), "{".into()).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_scope_stops_after_unauthorized() {
        let scope = RequestScope::new(Some("t1".into()));
        assert_eq!(scope.check(Some("t1")), Ok(()));

        let err = interpret_response(401, None, String::new()).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { .. }));
        scope.on_unauthorized();

        // Same token still stored, yet nothing else goes out.
        assert_eq!(scope.check(Some("t1")), Err(ApiError::SessionExpired));
        assert_eq!(scope.check(None), Err(ApiError::SessionExpired));
    }

    #[test]
    fn test_scope_fails_fast_when_session_cleared_elsewhere() {
        let scope = RequestScope::new(Some("t1".into()));
        assert_eq!(scope.check(None), Err(ApiError::SessionExpired));
        assert!(scope.is_revoked());

        let relogged = RequestScope::new(Some("t1".into()));
        assert_eq!(relogged.check(Some("t2")), Err(ApiError::SessionExpired));
    }

    #[test]
    fn test_anonymous_scope_is_never_revoked_by_session() {
        let scope = RequestScope::new(None);
        assert_eq!(scope.check(None), Ok(()));
        assert_eq!(scope.check(Some("t1")), Ok(()));
        assert_eq!(scope.token(), None);
    }
}
