//! Organization template search.
//!
//! Organizations can publish their own report templates as portal items.
//! The portal search surface is broader than infographics, so results are
//! filtered on the `infographic` type keyword before being mapped.

use geoenrich_core::{InfographicTemplate, TemplateCategory};

use crate::{
    GeoenrichClient,
    error::ClientError,
    http::{FaultScope, check_envelope, check_response},
};

#[derive(serde::Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<ItemRecord>,
}

#[derive(serde::Deserialize)]
struct ItemRecord {
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default, rename = "typeKeywords")]
    type_keywords: Vec<String>,
    #[serde(default)]
    properties: Option<ItemProperties>,
}

#[derive(Default, serde::Deserialize)]
struct ItemProperties {
    #[serde(default)]
    countries: Vec<String>,
    #[serde(default)]
    formats: Vec<String>,
}

impl ItemRecord {
    fn is_infographic(&self) -> bool {
        self.type_keywords
            .iter()
            .any(|kw| kw.to_lowercase().contains("infographic"))
    }

    fn into_template(self) -> InfographicTemplate {
        let properties = self.properties.unwrap_or_default();
        InfographicTemplate {
            report_id: None,
            item_id: self.id,
            title: self.title,
            description: self.description,
            formats: properties.formats,
            data_vintage: None,
            countries: properties.countries,
            hierarchy: None,
            owner: self.owner,
            category: TemplateCategory::Custom,
        }
    }
}

impl GeoenrichClient {
    /// List the organization's own infographic templates via portal item
    /// search.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotConfigured`] when no portal URL is configured,
    /// otherwise any [`ClientError`] the HTTP exchange produces.
    pub async fn organization_templates(
        &self,
    ) -> Result<Vec<InfographicTemplate>, ClientError> {
        let Some(portal_base) = self.portal_base.as_deref() else {
            return Err(ClientError::NotConfigured(
                "organization template search needs [service] portal_url".to_string(),
            ));
        };

        let url = format!(
            "{portal_base}/search?q={}&num=100",
            urlencoding::encode("type:\"Report Template\"")
        );
        tracing::debug!(%url, "searching organization report templates");
        let resp = check_response(self.get_json(&url).send().await?).await?;

        let body: serde_json::Value = resp.json().await?;
        check_envelope(&body, FaultScope::Catalog)?;
        let data: SearchResponse = serde_json::from_value(body)
            .map_err(|e| ClientError::Protocol(format!("portal search payload: {e}")))?;

        Ok(data
            .results
            .into_iter()
            .filter(ItemRecord::is_infographic)
            .map(ItemRecord::into_template)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "total": 3,
        "results": [
            {
                "id": "f1e2d3c4b5",
                "title": "Retail Trade Snapshot",
                "description": "Quarterly retail overview for franchise siting.",
                "owner": "gis_admin",
                "typeKeywords": ["Report Template", "Infographic", "esriReportTemplate"],
                "properties": { "countries": ["US"], "formats": ["pdf", "html"] }
            },
            {
                "id": "0a9b8c7d6e",
                "title": "Classic Demographic Report",
                "owner": "gis_admin",
                "typeKeywords": ["Report Template", "Summary Report"]
            },
            {
                "id": "5f4e3d2c1b",
                "title": "Tapestry Segmentation",
                "owner": "analyst",
                "typeKeywords": ["Report Template", "infographic"]
            }
        ]
    }"#;

    #[test]
    fn parse_search_response() {
        let data: SearchResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(data.results.len(), 3);
        assert_eq!(data.results[0].id, "f1e2d3c4b5");
        assert_eq!(data.results[0].owner.as_deref(), Some("gis_admin"));
    }

    #[test]
    fn keyword_filter_keeps_only_infographics() {
        let data: SearchResponse = serde_json::from_str(FIXTURE).unwrap();
        let templates: Vec<InfographicTemplate> = data
            .results
            .into_iter()
            .filter(ItemRecord::is_infographic)
            .map(ItemRecord::into_template)
            .collect();

        // the keyword match is case-insensitive; the plain summary report drops out
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].title, "Retail Trade Snapshot");
        assert_eq!(templates[1].title, "Tapestry Segmentation");
    }

    #[test]
    fn maps_to_custom_templates() {
        let data: SearchResponse = serde_json::from_str(FIXTURE).unwrap();
        let template = data
            .results
            .into_iter()
            .filter(ItemRecord::is_infographic)
            .map(ItemRecord::into_template)
            .next()
            .unwrap();

        assert_eq!(template.category, TemplateCategory::Custom);
        assert!(template.report_id.is_none());
        assert_eq!(template.identifier(), "f1e2d3c4b5");
        assert_eq!(template.formats, vec!["pdf", "html"]);
        assert_eq!(
            template.description.as_deref(),
            Some("Quarterly retail overview for franchise siting.")
        );
    }

    #[test]
    fn missing_properties_default_to_empty() {
        let data: SearchResponse = serde_json::from_str(FIXTURE).unwrap();
        let tapestry = data
            .results
            .into_iter()
            .filter(ItemRecord::is_infographic)
            .map(ItemRecord::into_template)
            .nth(1)
            .unwrap();
        assert!(tapestry.formats.is_empty());
        assert!(tapestry.countries.is_empty());
    }
}
