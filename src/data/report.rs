use url::Url;

use crate::{
    error::{config::ConfigError, report::ReportError},
    model::report::{ReportKind, ReportPayload},
};

/// Client for the market report API.
///
/// Wraps a shared `reqwest::Client`; cloning is cheap.
#[derive(Clone)]
pub struct ReportClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ReportClient {
    /// Creates a client for the API rooted at `api_url`.
    ///
    /// # Returns
    /// - `Ok(ReportClient)` - URL is an absolute http(s) base URL
    /// - `Err(ConfigError::InvalidEnvVar)` - URL cannot be used as a base
    pub fn new(http: reqwest::Client, api_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEnvVar {
            name: "REPORT_API_URL".to_string(),
            value: api_url.to_string(),
            reason,
        };

        let base_url = Url::parse(api_url).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("URL cannot be a base".to_string()));
        }

        Ok(Self { http, base_url })
    }

    /// Builds `{api}/report/{kind}` with an optional `period` query.
    pub fn report_url(&self, kind: ReportKind, period: Option<u32>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["report", kind.path()]);
        }
        url.set_query(None);
        if let Some(period) = period {
            url.query_pairs_mut()
                .append_pair("period", &period.to_string());
        }
        url
    }

    /// Fetches the latest report of `kind`.
    ///
    /// # Arguments
    /// - `kind` - Profit or trends report
    /// - `period` - Number of days the API should aggregate over
    ///
    /// # Returns
    /// - `Ok(ReportPayload)` - Parsed report body
    /// - `Err(ReportError::Status)` - API answered with a non-success status
    /// - `Err(ReportError::Request)` - Network failure
    /// - `Err(ReportError::InvalidPayload)` - Body is not a report
    pub async fn fetch(
        &self,
        kind: ReportKind,
        period: Option<u32>,
    ) -> Result<ReportPayload, ReportError> {
        let url = self.report_url(kind, period);
        tracing::debug!("Requesting report from {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Report API returned status code: {}", status.as_u16());
            return Err(ReportError::Status(status));
        }

        let body = response.bytes().await?;
        parse_payload(&body)
    }
}

/// Decodes a report API response body.
fn parse_payload(body: &[u8]) -> Result<ReportPayload, ReportError> {
    Ok(serde_json::from_slice(body)?)
}
