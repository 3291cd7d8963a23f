//! Client-side error taxonomy for backend calls.
//!
//! Every failure is terminal for the action that triggered it; there are no
//! retries. Views log the full error and display their own canned message;
//! the backend's wording never reaches the screen verbatim.

/// What went wrong talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The action needs a session that is absent. Raised before any network
    /// I/O; the UI surfaces a login prompt.
    #[error("log in to continue")]
    AuthRequired,

    /// 401/403: the stored session is no longer valid. Callers clear the
    /// session and navigate to login.
    #[error("session expired")]
    Unauthorized,

    /// Any other non-2xx response, with the backend's message when one could
    /// be extracted from the body.
    #[error("request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    /// The request never completed (DNS, refused connection, aborted fetch).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 2xx with a body that doesn't match the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// True when the session should be discarded and the user sent to login.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Map a non-2xx response to an error. The message comes from a JSON
/// `message` field if present, else the raw body text, else a fallback.
pub(crate) fn error_from_response(status: u16, body: &str) -> ApiError {
    if status == 401 || status == 403 {
        return ApiError::Unauthorized;
    }

    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .or_else(|| {
            let text = body.trim();
            (!text.is_empty()).then(|| text.to_string())
        })
        .unwrap_or_else(|| "request failed".to_string());

    ApiError::RequestFailed { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_statuses() {
        assert!(error_from_response(401, "").is_unauthorized());
        assert!(error_from_response(403, r#"{"message":"nope"}"#).is_unauthorized());
        assert!(!error_from_response(500, "").is_unauthorized());
    }

    #[test]
    fn test_message_from_json_field() {
        let err = error_from_response(409, r#"{"message":"Already in wishlist"}"#);
        match err {
            ApiError::RequestFailed { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "Already in wishlist");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_message_falls_back_to_raw_text_then_canned() {
        match error_from_response(400, "Invalid email or password") {
            ApiError::RequestFailed { message, .. } => {
                assert_eq!(message, "Invalid email or password")
            }
            other => panic!("unexpected error: {other:?}"),
        }
        match error_from_response(500, "  ") {
            ApiError::RequestFailed { message, .. } => assert_eq!(message, "request failed"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
