//! HTTP client for the analytics API.
//!
//! Works both natively (CLI) and on `wasm32` where reqwest delegates to the
//! browser's `fetch`. No retries and no timeouts: one call, one request.

use crate::config;
use crate::endpoints::{
    CarbonRequest, EconomicRequest, Endpoint, InsightsRequest, TimeSeriesRequest,
};
use crate::error::ApiError;
use crate::models::{
    CarbonFootprintResponse, EconomicImpactResponse, InsightsResponse, TimeSeriesResponse,
};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Cheaply cloneable handle to the analytics backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config::resolve_api_url(Some(&base_url.into())),
        }
    }

    /// Client pointed at the base URL baked into this build.
    pub fn from_build_env() -> Self {
        Self::new(config::api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn ai_insights(&self, location: &str) -> Result<InsightsResponse, ApiError> {
        self.post(Endpoint::AiInsights, &InsightsRequest::new(location))
            .await
    }

    pub async fn carbon_footprint(
        &self,
        location: &str,
    ) -> Result<CarbonFootprintResponse, ApiError> {
        self.post(Endpoint::CarbonFootprint, &CarbonRequest::new(location))
            .await
    }

    pub async fn economic_impact(
        &self,
        location: &str,
        population: Option<u64>,
    ) -> Result<EconomicImpactResponse, ApiError> {
        self.post(
            Endpoint::EconomicImpact,
            &EconomicRequest::new(location, population),
        )
        .await
    }

    pub async fn time_series(&self, location: &str) -> Result<TimeSeriesResponse, ApiError> {
        self.post(Endpoint::TimeSeries, &TimeSeriesRequest::new(location))
            .await
    }

    async fn post<B, R>(&self, endpoint: Endpoint, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = endpoint.url(&self.base_url);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {}", url, e);
                ApiError::Transport(e.to_string())
            })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let result = decode_response(status, &text);
        if let Err(e) = &result {
            warn!("{} {}", endpoint.path(), e);
        }
        result
    }
}

/// Turn a raw status + body into either the typed payload or an `ApiError`.
pub fn decode_response<R: DeserializeOwned>(status: u16, body: &str) -> Result<R, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_failed_body(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success() {
        let body = r#"{"insights": "1. Summary\n- point", "generated_at": "2024-03-01T10:00:00"}"#;
        let response: InsightsResponse = decode_response(200, body).unwrap();
        assert_eq!(response.generated_at, "2024-03-01T10:00:00");
    }

    #[test]
    fn test_decode_failure_status() {
        let result: Result<InsightsResponse, _> =
            decode_response(500, r#"{"error": "Gemini quota exceeded"}"#);
        assert_eq!(
            result,
            Err(ApiError::Status {
                status: 500,
                message: Some("Gemini quota exceeded".to_string())
            })
        );
    }

    #[test]
    fn test_decode_schema_mismatch_fails_closed() {
        let result: Result<InsightsResponse, _> = decode_response(200, r#"{"insights": 3}"#);
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_client_normalizes_base_url() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
