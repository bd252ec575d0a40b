//! Client error types.

use geoenrich_core::ValidationError;
use thiserror::Error;

/// Errors from interacting with the Geoenrichment service.
///
/// A closed set so callers can pattern-match on failure kind. Every remote
/// call may carry a credit cost, so errors are surfaced unmodified — the
/// client never retries or masks a failure; retrying is the caller's call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The credential was rejected (HTTP 401/403, or service fault 498/499).
    /// Credential problems always classify here, on every operation.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Network or transport failure reaching the service, or a server-side
    /// 5xx.
    #[error("geoenrichment service unavailable: {0}")]
    Unavailable(String),

    /// The bounded request timeout elapsed. Surfaced as its own kind so a
    /// billed generation call is never left ambiguous.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The service reported credit/quota exhaustion.
    #[error("insufficient credits: {0}")]
    InsufficientCredits(String),

    /// The service could not produce the artifact for the given inputs
    /// (e.g., no data coverage for the study area).
    #[error("report generation failed (fault {code}): {message}")]
    Generation { code: i64, message: String },

    /// The response could not be mapped to the expected schema.
    #[error("unexpected response from service: {0}")]
    Protocol(String),

    /// No Geoenrichment server is configured.
    #[error("no Geoenrichment server configured: {0}")]
    NotConfigured(String),

    /// The ISO2 country code is not in the service's country catalog.
    #[error("country '{0}' does not appear to be available")]
    UnknownCountry(String),

    /// The hierarchy is not offered for the given country.
    #[error("hierarchy '{hierarchy}' does not appear to be available for country '{country}'")]
    UnknownHierarchy { country: String, hierarchy: String },

    /// Input rejected locally; no request was made and no credits were
    /// touched.
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),

    /// Writing a generated artifact to disk failed.
    #[error(transparent)]
    Artifact(#[from] geoenrich_core::ArtifactError),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e.to_string())
        } else if e.is_decode() {
            Self::Protocol(e.to_string())
        } else {
            Self::Unavailable(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_convert() {
        let err: ClientError = ValidationError::EmptyStudyAreas.into();
        assert!(matches!(err, ClientError::InvalidInput(_)));
    }

    #[test]
    fn display_includes_fault_code() {
        let err = ClientError::Generation {
            code: 10012,
            message: "no data coverage for study area".into(),
        };
        assert_eq!(
            err.to_string(),
            "report generation failed (fault 10012): no data coverage for study area"
        );
    }
}
