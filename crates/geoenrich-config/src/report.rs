//! Report generation defaults.

use geoenrich_core::ExportFormat;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_format() -> String {
    "pdf".to_string()
}

fn default_country() -> String {
    "US".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Default export format for generated reports.
    #[serde(default = "default_format")]
    pub default_format: String,

    /// ISO2 country code used by catalog listings when none is given.
    #[serde(default = "default_country")]
    pub default_country: String,

    /// Data hierarchy to list under. Empty means every hierarchy the
    /// country offers.
    #[serde(default)]
    pub default_hierarchy: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            default_country: default_country(),
            default_hierarchy: String::new(),
        }
    }
}

impl ReportConfig {
    /// Parse the configured default format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the configured string is not
    /// a supported export format.
    pub fn format(&self) -> Result<ExportFormat, ConfigError> {
        self.default_format
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                field: "report.default_format".to_string(),
                reason: format!("{e}"),
            })
    }

    /// The configured hierarchy, or `None` for the service default set.
    pub fn hierarchy(&self) -> Option<&str> {
        if self.default_hierarchy.is_empty() {
            None
        } else {
            Some(&self.default_hierarchy)
        }
    }
}
