//! Generation results: the artifact handed back by the service and the
//! credit cost it reported for producing it.

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ArtifactError;
use crate::format::ExportFormat;

/// The output artifact of a generation call: either the document inlined in
/// the response or a URL the service expects the caller to retrieve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Artifact {
    Bytes { data: Vec<u8>, content_type: String },
    Url(String),
}

impl Artifact {
    /// Decode an inline base64 payload from a response envelope.
    ///
    /// # Errors
    ///
    /// Returns the underlying decode error if the payload is not valid
    /// base64.
    pub fn from_base64(
        encoded: &str,
        content_type: impl Into<String>,
    ) -> Result<Self, base64::DecodeError> {
        Ok(Self::Bytes {
            data: BASE64.decode(encoded)?,
            content_type: content_type.into(),
        })
    }

    /// Whether the document bytes are available without a further request.
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        matches!(self, Self::Bytes { .. })
    }
}

/// The outcome of one successful generation call.
///
/// Results are never fabricated locally: each one corresponds to exactly
/// one remote call, and `credits_used` is the figure the service reported
/// for that call — never computed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfographicResult {
    /// The template identifier the report was generated from.
    pub template: String,
    pub format: ExportFormat,
    pub artifact: Artifact,
    /// Credit cost reported by the service. Non-negative on success.
    pub credits_used: f64,
    pub generated_at: DateTime<Utc>,
}

impl InfographicResult {
    /// Write an inline artifact to `path`, normalizing the file extension
    /// to the export format.
    ///
    /// An extension already matching the format (including `htm` for HTML)
    /// is kept; otherwise the format's extension is appended. Returns the
    /// path actually written.
    ///
    /// # Errors
    ///
    /// [`ArtifactError::NotInline`] if the artifact is a URL, or
    /// [`ArtifactError::Io`] on a filesystem failure.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<PathBuf, ArtifactError> {
        let Artifact::Bytes { data, .. } = &self.artifact else {
            return Err(ArtifactError::NotInline);
        };
        let target = normalize_extension(path.as_ref(), self.format);
        fs::write(&target, data)?;
        Ok(target)
    }
}

/// Append the format's extension unless the path already carries a matching
/// one.
fn normalize_extension(path: &Path, format: ExportFormat) -> PathBuf {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if format.matches_extension(ext) {
        path.to_path_buf()
    } else {
        let mut name = path.file_name().map_or_else(String::new, |n| {
            n.to_string_lossy().into_owned()
        });
        name.push('.');
        name.push_str(format.extension());
        path.with_file_name(name)
    }
}
