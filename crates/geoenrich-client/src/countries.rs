//! Country catalog: which countries and data hierarchies the enrichment
//! service offers.
//!
//! The catalog exists to validate caller input and to build the standard
//! template listing URLs, so it is fetched at most once per client and
//! memoized. Listing templates for an unknown country or hierarchy fails
//! here, locally, before any further request is issued.

use geoenrich_core::Country;

use crate::{
    GeoenrichClient,
    error::ClientError,
    http::{FaultScope, check_envelope, check_response},
};

#[derive(serde::Deserialize)]
struct CountriesResponse {
    #[serde(default)]
    countries: Vec<CountryRecord>,
}

#[derive(serde::Deserialize)]
struct CountryRecord {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    hierarchies: Vec<HierarchyRecord>,
}

#[derive(serde::Deserialize)]
struct HierarchyRecord {
    #[serde(rename = "ID")]
    id: String,
}

impl GeoenrichClient {
    /// The countries the enrichment service supports, with their available
    /// data hierarchies. Fetched once per client instance; an idempotent
    /// read.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the credential is
    /// rejected, or the response cannot be parsed.
    pub async fn countries(&self) -> Result<&[Country], ClientError> {
        let countries = self
            .countries
            .get_or_try_init(|| self.fetch_countries())
            .await?;
        Ok(countries.as_slice())
    }

    async fn fetch_countries(&self) -> Result<Vec<Country>, ClientError> {
        let url = format!("{}/Geoenrichment/Countries", self.enrichment_base);
        tracing::debug!(%url, "fetching country catalog");
        let resp = check_response(self.get_json(&url).send().await?).await?;

        let body: serde_json::Value = resp.json().await?;
        check_envelope(&body, FaultScope::Catalog)?;
        let data: CountriesResponse = serde_json::from_value(body)
            .map_err(|e| ClientError::Protocol(format!("countries payload: {e}")))?;

        Ok(data
            .countries
            .into_iter()
            .map(|c| Country {
                id: c.id,
                name: c.name.unwrap_or_default(),
                hierarchies: c.hierarchies.into_iter().map(|h| h.id).collect(),
            })
            .collect())
    }

    /// Resolve an ISO2 code against the catalog, optionally checking a
    /// hierarchy id against the country's available set.
    pub(crate) async fn resolve_country(
        &self,
        iso2: &str,
        hierarchy: Option<&str>,
    ) -> Result<Country, ClientError> {
        let countries = self.countries().await?;
        let country = countries
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(iso2))
            .ok_or_else(|| ClientError::UnknownCountry(iso2.to_string()))?;
        if let Some(hierarchy) = hierarchy {
            if !country.has_hierarchy(hierarchy) {
                return Err(ClientError::UnknownHierarchy {
                    country: country.id.clone(),
                    hierarchy: hierarchy.to_string(),
                });
            }
        }
        Ok(country.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "countries": [
            {
                "id": "US",
                "name": "United States",
                "hierarchies": [
                    { "ID": "census2020", "alias": "2020 Census" },
                    { "ID": "landscape", "alias": "Landscape" }
                ]
            },
            {
                "id": "CA",
                "name": "Canada",
                "hierarchies": [
                    { "ID": "census2021", "alias": "2021 Census" }
                ]
            }
        ]
    }"#;

    fn parse(fixture: &str) -> Vec<Country> {
        let data: CountriesResponse = serde_json::from_str(fixture).unwrap();
        data.countries
            .into_iter()
            .map(|c| Country {
                id: c.id,
                name: c.name.unwrap_or_default(),
                hierarchies: c.hierarchies.into_iter().map(|h| h.id).collect(),
            })
            .collect()
    }

    #[test]
    fn parse_countries_response() {
        let countries = parse(FIXTURE);
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].id, "US");
        assert_eq!(countries[0].name, "United States");
        assert_eq!(countries[0].hierarchies, vec!["census2020", "landscape"]);
        assert_eq!(countries[1].hierarchies, vec!["census2021"]);
    }

    #[test]
    fn parse_is_deterministic() {
        assert_eq!(parse(FIXTURE), parse(FIXTURE));
    }

    #[test]
    fn missing_fields_default() {
        let countries = parse(r#"{"countries": [{"id": "DE"}]}"#);
        assert_eq!(countries[0].id, "DE");
        assert!(countries[0].name.is_empty());
        assert!(countries[0].hierarchies.is_empty());
    }
}
