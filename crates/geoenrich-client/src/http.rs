//! Shared HTTP response helpers for the Geoenrichment endpoints.
//!
//! The service reports faults two ways: plain HTTP error statuses, and a
//! 200-OK JSON envelope of the form
//! `{"error": {"code": ..., "message": ..., "details": [...]}}`. Both paths
//! funnel through here so endpoint modules stay focused on request
//! construction and response mapping.

use serde::Deserialize;

use crate::error::ClientError;

/// Service fault code for an invalid token.
const TOKEN_INVALID: i64 = 498;
/// Service fault code for a missing token.
const TOKEN_REQUIRED: i64 = 499;

/// Fault payload carried inside a 200-OK error envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Fault {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Deserialize)]
struct FaultEnvelope {
    error: Fault,
}

/// Which operation a fault came from. Catalog reads and billed generation
/// calls classify their non-credential faults differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FaultScope {
    Catalog,
    Generation,
}

/// Check an HTTP response for status-level error conditions.
///
/// Returns the response unchanged on success. Maps:
/// - **401 / 403** → [`ClientError::Authentication`] (unless the body
///   reports credit exhaustion)
/// - **402** → [`ClientError::InsufficientCredits`]
/// - **5xx** → [`ClientError::Unavailable`]
/// - **other non-success** → [`ClientError::Protocol`]
pub(crate) async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    Err(match status.as_u16() {
        402 => ClientError::InsufficientCredits(message),
        401 | 403 => {
            if mentions_credits(&message) {
                ClientError::InsufficientCredits(message)
            } else {
                ClientError::Authentication(message)
            }
        }
        s if status.is_server_error() => ClientError::Unavailable(format!("HTTP {s}: {message}")),
        s => ClientError::Protocol(format!("HTTP {s}: {message}")),
    })
}

/// Check a parsed response body for a fault envelope.
///
/// Credential faults (498/499) always classify as `Authentication` and
/// credit-exhaustion messages as `InsufficientCredits`, regardless of
/// scope. Any other fault is `Generation` on the billed path and
/// `Protocol` on catalog reads.
pub(crate) fn check_envelope(value: &serde_json::Value, scope: FaultScope) -> Result<(), ClientError> {
    let Ok(FaultEnvelope { error: fault }) = FaultEnvelope::deserialize(value) else {
        return Ok(());
    };
    Err(classify_fault(fault, scope))
}

fn classify_fault(fault: Fault, scope: FaultScope) -> ClientError {
    let message = if fault.details.is_empty() {
        fault.message
    } else {
        format!("{} ({})", fault.message, fault.details.join("; "))
    };
    match fault.code {
        TOKEN_INVALID | TOKEN_REQUIRED => ClientError::Authentication(message),
        _ if mentions_credits(&message) => ClientError::InsufficientCredits(message),
        code => match scope {
            FaultScope::Generation => ClientError::Generation { code, message },
            FaultScope::Catalog => ClientError::Protocol(format!("service fault {code}: {message}")),
        },
    }
}

fn mentions_credits(message: &str) -> bool {
    message.to_ascii_lowercase().contains("credit")
}
