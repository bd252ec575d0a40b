//! # geoenrich-client
//!
//! Async HTTP client for a hosted Geoenrichment REST service:
//! - Country catalog (which geographies and data hierarchies are offered)
//! - Standard infographic template listing per country/hierarchy
//! - Organization template search against the portal
//! - Infographic report generation against a study area
//!
//! Generation is a metered operation — every successful call consumes the
//! credit amount the service reports. The client therefore never retries,
//! caches, or masks a failed call; errors surface unmodified as
//! [`ClientError`] and retrying is an explicit caller decision. The one
//! exception is the read-only country catalog, which is memoized per client
//! instance because it exists only to validate inputs.
//!
//! Each operation is a single stateless request/response exchange. The
//! client is cheap to share across tasks: the only cross-call state is the
//! read-only credential and the country-catalog cell.

pub mod countries;
pub mod organization;
pub mod report;
pub mod standard;

mod error;
mod http;

pub use error::ClientError;

use std::time::Duration;

use geoenrich_config::{GeoenrichConfig, HttpConfig, ServiceConfig};
use geoenrich_core::{Country, InfographicTemplate};
use tokio::sync::OnceCell;

/// HTTP client for the Geoenrichment REST service.
pub struct GeoenrichClient {
    http: reqwest::Client,
    enrichment_base: String,
    portal_base: Option<String>,
    token: String,
    default_country: String,
    default_hierarchy: Option<String>,
    countries: OnceCell<Vec<Country>>,
}

impl GeoenrichClient {
    /// Create a client from the service endpoint and HTTP settings.
    ///
    /// Mirrors the service-availability check callers rely on: an
    /// unconfigured service section fails here, before any request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotConfigured`] if `service` lacks a URL or
    /// token.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    pub fn new(service: &ServiceConfig, http: &HttpConfig) -> Result<Self, ClientError> {
        if !service.is_configured() {
            return Err(ClientError::NotConfigured(
                "the [service] section needs both a url and a token".to_string(),
            ));
        }
        let client = reqwest::Client::builder()
            .user_agent(http.user_agent.clone())
            .timeout(Duration::from_secs(http.timeout_secs))
            .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
            .build()
            .expect("reqwest client should build");

        Ok(Self {
            http: client,
            enrichment_base: service.enrichment_base().to_string(),
            portal_base: service
                .can_search_organization()
                .then(|| service.portal_base().to_string()),
            token: service.token.clone(),
            default_country: "US".to_string(),
            default_hierarchy: None,
            countries: OnceCell::new(),
        })
    }

    /// Create a client from a full loaded configuration, picking up the
    /// report defaults (country, hierarchy).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotConfigured`] if the service section is
    /// incomplete.
    pub fn from_config(config: &GeoenrichConfig) -> Result<Self, ClientError> {
        let mut client = Self::new(&config.service, &config.http)?;
        client.default_country = config.report.default_country.clone();
        client.default_hierarchy = config.report.hierarchy().map(String::from);
        Ok(client)
    }

    /// List every template available to this client: the standard catalog
    /// for the default country, joined with the organization's own
    /// templates when a portal is configured. The two listings run
    /// concurrently.
    ///
    /// Failures propagate unmodified — a partial catalog could silently
    /// direct a caller to spend credits against a stale view.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if either listing fails.
    pub async fn list_templates(&self) -> Result<Vec<InfographicTemplate>, ClientError> {
        let standard =
            self.standard_templates(&self.default_country, self.default_hierarchy.as_deref());
        if self.portal_base.is_some() {
            let (standard, custom) = tokio::join!(standard, self.organization_templates());
            let mut templates = standard?;
            templates.extend(custom?);
            Ok(templates)
        } else {
            standard.await
        }
    }

    /// A GET request against the service with the `f=json` and `token`
    /// parameters every endpoint expects.
    pub(crate) fn get_json(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .query(&[("f", "json"), ("token", self.token.as_str())])
    }
}
