//! Template and country catalog records.
//!
//! These are read-only views of the remote catalog — fetched, never created
//! locally.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a template comes from the service's standard catalog or from an
/// organization's own report items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Standard,
    Custom,
}

impl TemplateCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A country supported by the enrichment service, with the data hierarchies
/// available for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO2 country code (e.g., `US`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ids of the data hierarchies offered for this country.
    pub hierarchies: Vec<String>,
}

impl Country {
    /// Whether `hierarchy` is one of this country's available hierarchies.
    #[must_use]
    pub fn has_hierarchy(&self, hierarchy: &str) -> bool {
        self.hierarchies.iter().any(|h| h == hierarchy)
    }
}

/// An infographic report template offered by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfographicTemplate {
    /// Standard-catalog report id. Absent for organization items, which are
    /// addressed by `item_id` alone.
    pub report_id: Option<String>,
    /// Portal item id backing the template.
    pub item_id: String,
    pub title: String,
    pub description: Option<String>,
    /// Export formats the template supports.
    pub formats: Vec<String>,
    /// Vintage of the underlying demographic data (e.g., `2024`).
    pub data_vintage: Option<String>,
    /// ISO2 codes of countries the template covers.
    pub countries: Vec<String>,
    /// Data hierarchy the template was listed under, if any.
    pub hierarchy: Option<String>,
    /// Owning user, for organization items.
    pub owner: Option<String>,
    pub category: TemplateCategory,
}

impl InfographicTemplate {
    /// The identifier submitted to the generation endpoint: the standard
    /// report id when present, otherwise the portal item id.
    #[must_use]
    pub fn identifier(&self) -> &str {
        self.report_id.as_deref().unwrap_or(&self.item_id)
    }
}
