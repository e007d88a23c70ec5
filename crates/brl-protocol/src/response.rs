use serde::{Deserialize, Serialize};

/// Fixed greeting returned by `ping` on both tables.
pub const PING_PAYLOAD: &str = "Hello, world!";

/// Reply envelope for both entry points.
///
/// `payload` carries the operation's result bytes rendered as a string (the
/// wire is JSON text throughout). `error` carries a descriptive failure
/// message naming the operation and key.
///
/// One operation populates both at once: `check_unique_real_estate_id`
/// answers `"false"` together with an explanatory error when the id is
/// taken. Callers must read the payload as the verdict and the error as
/// commentary, never the error alone as "unknown".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResponse {
    #[serde(default)]
    pub payload: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl OperationResponse {
    /// A successful reply carrying result text.
    pub fn payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
            error: None,
        }
    }

    /// A successful reply with no result (create, transfer).
    pub fn empty() -> Self {
        Self::default()
    }

    /// A failed reply carrying only an error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            payload: None,
            error: Some(message.into()),
        }
    }

    /// A reply carrying both a payload and an explanatory error, as
    /// `check_unique_real_estate_id` does for taken ids.
    pub fn payload_with_error(payload: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
            error: Some(message.into()),
        }
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}
