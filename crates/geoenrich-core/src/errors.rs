//! Local error types.
//!
//! These errors are raised before any remote call is made. Remote-facing
//! errors (transport, authentication, credit exhaustion) are defined in
//! `geoenrich-client`.

use thiserror::Error;

/// Input validation failures. A rejected input never reaches the service
/// and never consumes credits.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// No study areas were supplied for a generation request.
    #[error("study area list is empty")]
    EmptyStudyAreas,

    /// A study area failed geometric validation.
    #[error("invalid study area: {0}")]
    InvalidStudyArea(String),

    /// An export format string is not one of the supported set.
    #[error("unknown export format '{0}' (expected one of: pdf, html, xlsx)")]
    UnknownFormat(String),

    /// A template identifier is empty.
    #[error("template identifier is empty")]
    EmptyTemplateId,
}

/// Failures when persisting a generation artifact to disk.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The artifact is a service-side URL; it must be downloaded before it
    /// can be written.
    #[error("artifact is a remote URL, not inline bytes — download it first")]
    NotInline,

    /// Filesystem write failure.
    #[error("failed to write artifact: {0}")]
    Io(#[from] std::io::Error),
}
