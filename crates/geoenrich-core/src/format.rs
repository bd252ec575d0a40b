//! Export formats supported by the report generation endpoint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Output format for a generated infographic.
///
/// The service accepts exactly this set; anything else is rejected locally
/// before a request is issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Html,
    Xlsx,
}

impl ExportFormat {
    /// The string sent in the `format` request parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Html => "html",
            Self::Xlsx => "xlsx",
        }
    }

    /// The canonical file extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        self.as_str()
    }

    /// Whether `ext` already names this format. `htm` counts as HTML.
    #[must_use]
    pub fn matches_extension(self, ext: &str) -> bool {
        ext.eq_ignore_ascii_case(self.extension())
            || (self == Self::Html && ext.eq_ignore_ascii_case("htm"))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "html" => Ok(Self::Html),
            "xlsx" => Ok(Self::Xlsx),
            other => Err(ValidationError::UnknownFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert_eq!("Html".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
        assert_eq!("xlsx".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "docx".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, ValidationError::UnknownFormat(f) if f == "docx"));
    }

    #[test]
    fn htm_counts_as_html() {
        assert!(ExportFormat::Html.matches_extension("htm"));
        assert!(ExportFormat::Html.matches_extension("HTML"));
        assert!(!ExportFormat::Pdf.matches_extension("htm"));
    }

    #[test]
    fn default_is_pdf() {
        assert_eq!(ExportFormat::default(), ExportFormat::Pdf);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&ExportFormat::Xlsx).unwrap();
        assert_eq!(json, "\"xlsx\"");
    }
}
