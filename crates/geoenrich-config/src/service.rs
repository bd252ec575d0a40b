//! Geoenrichment service endpoint and credential configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Base URL of the Geoenrichment REST service
    /// (e.g., `https://geoenrich.example.com/arcgis/rest/services`).
    #[serde(default)]
    pub url: String,

    /// Base URL of the portal sharing API, used only for organization
    /// template search. Optional.
    #[serde(default)]
    pub portal_url: String,

    /// API token sent with every request. Read-only after client
    /// construction.
    #[serde(default)]
    pub token: String,
}

impl ServiceConfig {
    /// Check whether a Geoenrichment server and credential are configured.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.token.is_empty()
    }

    /// Whether organization template search is possible.
    pub fn can_search_organization(&self) -> bool {
        self.is_configured() && !self.portal_url.is_empty()
    }

    /// The service URL without a trailing slash.
    pub fn enrichment_base(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// The portal URL without a trailing slash.
    pub fn portal_base(&self) -> &str {
        self.portal_url.trim_end_matches('/')
    }
}
