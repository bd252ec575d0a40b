//! Standard infographic catalog listing.
//!
//! Standard templates are published per country and data hierarchy. When no
//! hierarchy is given, every hierarchy the country offers is listed.

use geoenrich_core::{InfographicTemplate, TemplateCategory};

use crate::{
    GeoenrichClient,
    error::ClientError,
    http::{FaultScope, check_envelope, check_response},
};

#[derive(serde::Deserialize)]
struct ReportsResponse {
    #[serde(default)]
    reports: Vec<ReportRecord>,
}

#[derive(serde::Deserialize)]
struct ReportRecord {
    #[serde(rename = "reportID")]
    report_id: String,
    metadata: ReportMetadata,
}

#[derive(serde::Deserialize)]
struct ReportMetadata {
    title: String,
    #[serde(rename = "itemID")]
    item_id: String,
    #[serde(default)]
    formats: Vec<String>,
    #[serde(rename = "dataVintage")]
    data_vintage: Option<String>,
    #[serde(default)]
    countries: Vec<String>,
    hierarchy: Option<String>,
}

impl ReportRecord {
    fn into_template(self) -> InfographicTemplate {
        InfographicTemplate {
            report_id: Some(self.report_id),
            item_id: self.metadata.item_id,
            title: self.metadata.title,
            description: None,
            formats: self.metadata.formats,
            data_vintage: self.metadata.data_vintage,
            countries: self.metadata.countries,
            hierarchy: self.metadata.hierarchy,
            owner: None,
            category: TemplateCategory::Standard,
        }
    }
}

impl GeoenrichClient {
    /// List the standard infographic templates for a country.
    ///
    /// The ISO2 code is validated against the country catalog before any
    /// listing request, as is `hierarchy` when given; `None` lists every
    /// hierarchy the country offers. Hierarchies that publish no reports
    /// contribute nothing.
    ///
    /// # Errors
    ///
    /// [`ClientError::UnknownCountry`] / [`ClientError::UnknownHierarchy`]
    /// for inputs the catalog does not know, otherwise any [`ClientError`]
    /// the HTTP exchange produces.
    pub async fn standard_templates(
        &self,
        country_iso2: &str,
        hierarchy: Option<&str>,
    ) -> Result<Vec<InfographicTemplate>, ClientError> {
        let country = self.resolve_country(country_iso2, hierarchy).await?;
        let hierarchies: Vec<String> = match hierarchy {
            Some(h) => vec![h.to_string()],
            None => country.hierarchies.clone(),
        };

        let mut templates = Vec::new();
        for hierarchy in &hierarchies {
            let url = format!(
                "{}/Geoenrichment/Infographics/Standard/{}/{}",
                self.enrichment_base, country.id, hierarchy
            );
            tracing::debug!(%url, "listing standard infographics");
            let resp = check_response(self.get_json(&url).send().await?).await?;

            let body: serde_json::Value = resp.json().await?;
            check_envelope(&body, FaultScope::Catalog)?;
            let data: ReportsResponse = serde_json::from_value(body)
                .map_err(|e| ClientError::Protocol(format!("standard reports payload: {e}")))?;

            templates.extend(data.reports.into_iter().map(ReportRecord::into_template));
        }
        tracing::debug!(
            country = %country.id,
            count = templates.len(),
            "standard infographics listed"
        );
        Ok(templates)
    }
}
