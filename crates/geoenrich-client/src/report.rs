//! Infographic report generation — the billed operation.
//!
//! Inputs are validated locally first; a rejected request never reaches the
//! service and never consumes credits. A successful call maps the response
//! envelope verbatim: the artifact (inline or URL) and the credit figure
//! the service reports. The credit cost is never computed here.

use std::path::{Path, PathBuf};

use chrono::Utc;
use geoenrich_core::{
    Artifact, ExportFormat, InfographicResult, StudyArea, ValidationError,
};

use crate::{
    GeoenrichClient,
    error::ClientError,
    http::{FaultScope, check_envelope, check_response},
};

#[derive(serde::Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    data: Option<String>,
    #[serde(default, rename = "contentType")]
    content_type: Option<String>,
    #[serde(rename = "creditsUsed")]
    credits_used: Option<f64>,
}

impl GenerateResponse {
    fn into_result(
        self,
        template: &str,
        format: ExportFormat,
    ) -> Result<InfographicResult, ClientError> {
        let credits_used = self
            .credits_used
            .ok_or_else(|| ClientError::Protocol("response missing creditsUsed".to_string()))?;
        if credits_used < 0.0 {
            return Err(ClientError::Protocol(format!(
                "service reported a negative credit cost: {credits_used}"
            )));
        }

        let artifact = if let Some(data) = self.data {
            let content_type = self
                .content_type
                .unwrap_or_else(|| "application/octet-stream".to_string());
            Artifact::from_base64(&data, content_type)
                .map_err(|e| ClientError::Protocol(format!("inline artifact: {e}")))?
        } else if let Some(url) = self.url {
            Artifact::Url(url)
        } else {
            return Err(ClientError::Protocol(
                "response carries neither inline data nor a result url".to_string(),
            ));
        };

        Ok(InfographicResult {
            template: template.to_string(),
            format,
            artifact,
            credits_used,
            generated_at: Utc::now(),
        })
    }
}

fn validate_inputs(study_areas: &[StudyArea], template: &str) -> Result<(), ValidationError> {
    if template.trim().is_empty() {
        return Err(ValidationError::EmptyTemplateId);
    }
    if study_areas.is_empty() {
        return Err(ValidationError::EmptyStudyAreas);
    }
    for area in study_areas {
        area.validate()?;
    }
    Ok(())
}

fn study_areas_payload(study_areas: &[StudyArea]) -> String {
    serde_json::Value::Array(study_areas.iter().map(StudyArea::to_request_json).collect())
        .to_string()
}

impl GeoenrichClient {
    /// Generate an infographic report for one or more study areas.
    ///
    /// `template` is an identifier previously returned by a listing call: a
    /// standard report id or a portal item id. Each successful call
    /// consumes the credit amount the service reports in the response.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidInput`] if the study areas or template id fail
    /// local validation (no request is made), otherwise the remote error
    /// kinds: `Authentication`, `InsufficientCredits`, `Generation`,
    /// `Timeout`, `Unavailable`, `Protocol`.
    pub async fn generate(
        &self,
        study_areas: &[StudyArea],
        template: &str,
        format: ExportFormat,
    ) -> Result<InfographicResult, ClientError> {
        validate_inputs(study_areas, template)?;

        let url = format!("{}/Geoenrichment/CreateReport", self.enrichment_base);
        tracing::debug!(%url, template, %format, areas = study_areas.len(), "creating report");
        let resp = self
            .http
            .post(&url)
            .form(&[
                ("studyAreas", study_areas_payload(study_areas).as_str()),
                ("report", template),
                ("format", format.as_str()),
                ("f", "json"),
                ("token", self.token.as_str()),
            ])
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let body: serde_json::Value = resp.json().await?;
        check_envelope(&body, FaultScope::Generation)?;
        let data: GenerateResponse = serde_json::from_value(body)
            .map_err(|e| ClientError::Protocol(format!("create report payload: {e}")))?;

        let result = data.into_result(template, format)?;
        tracing::debug!(credits = result.credits_used, template, "report generated");
        Ok(result)
    }

    /// Retrieve the document bytes for an artifact.
    ///
    /// A URL artifact is fetched with the same authenticated client; an
    /// inline artifact is returned as-is, without a network call.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`] the HTTP exchange produces.
    pub async fn download(&self, artifact: &Artifact) -> Result<Artifact, ClientError> {
        match artifact {
            Artifact::Bytes { .. } => Ok(artifact.clone()),
            Artifact::Url(url) => {
                tracing::debug!(%url, "downloading report artifact");
                let resp = check_response(self.get_json(url).send().await?).await?;
                let content_type = resp
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = resp.bytes().await?.to_vec();
                Ok(Artifact::Bytes { data, content_type })
            }
        }
    }

    /// Generate a report and persist it to `path`, downloading the artifact
    /// first if the service returned a URL. The file extension is
    /// normalized to `format`. Returns the path actually written.
    ///
    /// # Errors
    ///
    /// Any error from [`GeoenrichClient::generate`],
    /// [`GeoenrichClient::download`], or the filesystem write.
    pub async fn generate_to_file(
        &self,
        study_areas: &[StudyArea],
        template: &str,
        format: ExportFormat,
        path: impl AsRef<Path>,
    ) -> Result<PathBuf, ClientError> {
        let mut result = self.generate(study_areas, template, format).await?;
        if !result.artifact.is_inline() {
            result.artifact = self.download(&result.artifact).await?;
        }
        Ok(result.write_to(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const URL_FIXTURE: &str = r#"{
        "url": "https://geoenrich.example.com/files/population-summary-3f2a.pdf",
        "creditsUsed": 2.5
    }"#;

    // "geoenrichment" base64-encoded
    const INLINE_FIXTURE: &str = r#"{
        "data": "Z2VvZW5yaWNobWVudA==",
        "contentType": "application/pdf",
        "creditsUsed": 10.0
    }"#;

    #[test]
    fn url_response_maps_to_result() {
        let data: GenerateResponse = serde_json::from_str(URL_FIXTURE).unwrap();
        let result = data
            .into_result("population-summary", ExportFormat::Pdf)
            .unwrap();

        assert_eq!(result.template, "population-summary");
        assert_eq!(result.credits_used, 2.5);
        assert!(!result.artifact.is_inline());
    }

    #[test]
    fn inline_response_decodes_artifact() {
        let data: GenerateResponse = serde_json::from_str(INLINE_FIXTURE).unwrap();
        let result = data
            .into_result("population-summary", ExportFormat::Pdf)
            .unwrap();

        assert_eq!(result.credits_used, 10.0);
        let Artifact::Bytes { data, content_type } = &result.artifact else {
            panic!("expected inline artifact");
        };
        assert_eq!(data, b"geoenrichment");
        assert_eq!(content_type, "application/pdf");
    }

    #[test]
    fn missing_credits_is_protocol_error() {
        let data: GenerateResponse =
            serde_json::from_str(r#"{"url": "https://example.com/r.pdf"}"#).unwrap();
        let err = data
            .into_result("population-summary", ExportFormat::Pdf)
            .unwrap_err();
        assert!(matches!(err, ClientError::Protocol(_)));
    }

    #[test]
    fn negative_credits_is_protocol_error() {
        let data: GenerateResponse =
            serde_json::from_str(r#"{"url": "https://example.com/r.pdf", "creditsUsed": -1.0}"#)
                .unwrap();
        let err = data
            .into_result("population-summary", ExportFormat::Pdf)
            .unwrap_err();
        assert!(matches!(err, ClientError::Protocol(_)));
    }

    #[test]
    fn missing_artifact_is_protocol_error() {
        let data: GenerateResponse = serde_json::from_str(r#"{"creditsUsed": 1.0}"#).unwrap();
        let err = data
            .into_result("population-summary", ExportFormat::Pdf)
            .unwrap_err();
        assert!(matches!(err, ClientError::Protocol(_)));
    }

    #[test]
    fn empty_study_areas_rejected_locally() {
        let err = validate_inputs(&[], "population-summary").unwrap_err();
        assert!(matches!(err, ValidationError::EmptyStudyAreas));
    }

    #[test]
    fn blank_template_rejected_locally() {
        let areas = vec![StudyArea::point(-117.19, 34.05)];
        let err = validate_inputs(&areas, "  ").unwrap_err();
        assert!(matches!(err, ValidationError::EmptyTemplateId));
    }

    #[test]
    fn invalid_study_area_rejected_locally() {
        let areas = vec![StudyArea::point(-117.19, 95.0)];
        let err = validate_inputs(&areas, "population-summary").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidStudyArea(_)));
    }

    #[test]
    fn study_areas_payload_shape() {
        let areas = vec![
            StudyArea::point(-117.19, 34.05),
            StudyArea::address("Redlands, CA"),
        ];
        let payload: serde_json::Value =
            serde_json::from_str(&study_areas_payload(&areas)).unwrap();
        let list = payload.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["geometry"]["x"], -117.19);
        assert_eq!(list[1]["address"]["text"], "Redlands, CA");
    }
}
