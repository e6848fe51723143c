//! Endpoint paths and request bodies.
//!
//! Every call is a `POST` with a JSON body. The buffer radius and interval
//! are fixed analysis parameters.

use serde::Serialize;

/// Radius of the analysis area around the location, in kilometers.
pub const DEFAULT_BUFFER_RADIUS_KM: f64 = 2.0;

/// Spacing between time-series snapshots, in years.
pub const DEFAULT_INTERVAL_YEARS: u32 = 1;

/// The analytics endpoints consumed by the dashboard.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Endpoint {
    AiInsights,
    CarbonFootprint,
    EconomicImpact,
    TimeSeries,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::AiInsights => "/ai-insights",
            Endpoint::CarbonFootprint => "/carbon-footprint",
            Endpoint::EconomicImpact => "/economic-impact",
            Endpoint::TimeSeries => "/time-series",
        }
    }

    /// Full URL for this endpoint under `base_url` (trailing slashes ignored).
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }

    /// Message shown when a request fails without a backend explanation.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Endpoint::AiInsights => "Failed to generate AI insights",
            Endpoint::CarbonFootprint => "Failed to calculate carbon footprint",
            Endpoint::EconomicImpact => "Failed to calculate economic impact",
            Endpoint::TimeSeries => "Failed to fetch time-series data",
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct InsightsRequest {
    pub location: String,
    pub use_satellite_data: bool,
}

impl InsightsRequest {
    pub fn new(location: &str) -> Self {
        Self {
            location: location.to_string(),
            use_satellite_data: false,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct CarbonRequest {
    pub location: String,
    pub buffer_radius_km: f64,
}

impl CarbonRequest {
    pub fn new(location: &str) -> Self {
        Self {
            location: location.to_string(),
            buffer_radius_km: DEFAULT_BUFFER_RADIUS_KM,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct EconomicRequest {
    pub location: String,
    pub buffer_radius_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
}

impl EconomicRequest {
    pub fn new(location: &str, population: Option<u64>) -> Self {
        Self {
            location: location.to_string(),
            buffer_radius_km: DEFAULT_BUFFER_RADIUS_KM,
            population,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct TimeSeriesRequest {
    pub location: String,
    pub buffer_radius_km: f64,
    pub interval_years: u32,
}

impl TimeSeriesRequest {
    pub fn new(location: &str) -> Self {
        Self {
            location: location.to_string(),
            buffer_radius_km: DEFAULT_BUFFER_RADIUS_KM,
            interval_years: DEFAULT_INTERVAL_YEARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        assert_eq!(
            Endpoint::CarbonFootprint.url("http://localhost:5000/"),
            "http://localhost:5000/carbon-footprint"
        );
        assert_eq!(
            Endpoint::TimeSeries.url("https://api.example.org"),
            "https://api.example.org/time-series"
        );
    }

    #[test]
    fn test_request_bodies() {
        assert_eq!(
            serde_json::to_value(InsightsRequest::new("Mysuru")).unwrap(),
            json!({"location": "Mysuru", "use_satellite_data": false})
        );
        assert_eq!(
            serde_json::to_value(CarbonRequest::new("Mysuru")).unwrap(),
            json!({"location": "Mysuru", "buffer_radius_km": 2.0})
        );
        assert_eq!(
            serde_json::to_value(TimeSeriesRequest::new("Mysuru")).unwrap(),
            json!({"location": "Mysuru", "buffer_radius_km": 2.0, "interval_years": 1})
        );
    }

    #[test]
    fn test_economic_request_omits_unknown_population() {
        assert_eq!(
            serde_json::to_value(EconomicRequest::new("Mysuru", None)).unwrap(),
            json!({"location": "Mysuru", "buffer_radius_km": 2.0})
        );
        assert_eq!(
            serde_json::to_value(EconomicRequest::new("Mysuru", Some(920_550))).unwrap(),
            json!({"location": "Mysuru", "buffer_radius_km": 2.0, "population": 920550})
        );
    }
}
