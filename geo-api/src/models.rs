//! Response schemas for each analytics endpoint.
//!
//! Responses are decoded straight into these structs; a body missing a
//! required field is rejected rather than rendered partially.

use serde::{Deserialize, Serialize};

// ─── /ai-insights ───

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsResponse {
    /// Free-form generated text, one paragraph/heading/bullet per line.
    pub insights: String,
    /// Generation timestamp as sent by the backend (ISO 8601).
    pub generated_at: String,
}

// ─── /carbon-footprint ───

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonFootprintResponse {
    pub carbon_analysis: CarbonAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonAnalysis {
    pub net_carbon_impact: NetCarbonImpact,
    pub carbon_sequestration: CarbonSequestration,
    pub carbon_emissions: CarbonEmissions,
    pub area_km2: f64,
    pub area_hectares: f64,
    pub carbon_credit_rate_rupees_per_tonne: f64,
    pub methodology: String,
}

/// Net balance of sequestration minus emissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetCarbonImpact {
    /// Tonnes CO₂ per year; positive means the area is a net sink.
    pub co2_per_year: f64,
    pub status: String,
    pub value_rupees_per_year: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonSequestration {
    pub forest_co2_per_year: f64,
    pub vegetation_co2_per_year: f64,
    pub total_sequestration_co2_per_year: f64,
    pub value_rupees_per_year: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonEmissions {
    pub urban_co2_per_year: f64,
    pub cost_rupees_per_year: f64,
}

// ─── /economic-impact ───

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicImpactResponse {
    pub economic_analysis: EconomicAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicAnalysis {
    pub total_economic_value_rupees: f64,
    pub property_values_rupees: PropertyValues,
    pub tourism_potential_rupees_per_year: TourismPotential,
    pub agricultural_potential_rupees_per_year: f64,
    /// Only computed by the backend when a population is known.
    #[serde(default)]
    pub health_cost_savings_rupees_per_year: Option<f64>,
    pub area_km2: f64,
    pub land_cover_breakdown: LandCoverBreakdown,
    pub methodology: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValues {
    pub urban_property_value: f64,
    pub forest_property_value: f64,
    pub vegetation_property_value: f64,
    pub water_property_value: f64,
    pub total_property_value: f64,
    pub green_space_premium: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourismPotential {
    pub forest_tourism: f64,
    pub water_tourism: f64,
    pub vegetation_tourism: f64,
    pub urban_tourism: f64,
    pub total_tourism_potential: f64,
}

/// Land-cover areas in km².
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandCoverBreakdown {
    pub urban_km2: f64,
    pub forest_km2: f64,
    pub vegetation_km2: f64,
    pub water_km2: f64,
}

// ─── /time-series ───

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesResponse {
    #[serde(default)]
    pub time_series: Vec<YearSnapshot>,
    #[serde(default)]
    pub changes: Option<LandCoverChanges>,
    pub start_date: String,
    pub end_date: String,
    pub interval_years: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSnapshot {
    pub year: i32,
    pub land_cover: LandCoverShare,
}

/// Land-cover shares for one snapshot, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandCoverShare {
    pub urban: f64,
    pub forest: f64,
    pub vegetation: f64,
    pub water: f64,
}

/// Percentage-point changes between the first and last snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandCoverChanges {
    #[serde(default)]
    pub period_years: Option<f64>,
    #[serde(default)]
    pub urban_change: f64,
    #[serde(default)]
    pub forest_change: f64,
    #[serde(default)]
    pub vegetation_change: f64,
    #[serde(default)]
    pub water_change: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_time_series() {
        let body = r#"{
            "time_series": [
                {"year": 2019, "land_cover": {"urban": 40.5, "forest": 20.0, "vegetation": 30.0, "water": 9.5}},
                {"year": 2020, "land_cover": {"urban": 42.0, "forest": 19.0, "vegetation": 29.5, "water": 9.5}}
            ],
            "changes": {"period_years": 1, "urban_change": 1.5, "forest_change": -1.0, "vegetation_change": -0.5, "water_change": 0.0},
            "start_date": "2019-01-01",
            "end_date": "2020-12-31",
            "interval_years": 1
        }"#;
        let response: TimeSeriesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.time_series.len(), 2);
        assert_eq!(response.time_series[1].year, 2020);
        let changes = response.changes.unwrap();
        assert_eq!(changes.period_years, Some(1.0));
        assert!((changes.forest_change + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_decode_economic_without_health_savings() {
        let body = r#"{"economic_analysis": {
            "total_economic_value_rupees": 12500000,
            "property_values_rupees": {"urban_property_value": 1, "forest_property_value": 2,
                "vegetation_property_value": 3, "water_property_value": 4,
                "total_property_value": 10, "green_space_premium": 5},
            "tourism_potential_rupees_per_year": {"forest_tourism": 1, "water_tourism": 1,
                "vegetation_tourism": 1, "urban_tourism": 1, "total_tourism_potential": 4},
            "agricultural_potential_rupees_per_year": 5000,
            "area_km2": 12.57,
            "land_cover_breakdown": {"urban_km2": 5, "forest_km2": 3, "vegetation_km2": 4, "water_km2": 0.57},
            "methodology": "Benefit transfer"
        }}"#;
        let response: EconomicImpactResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.economic_analysis.health_cost_savings_rupees_per_year, None);
    }

    #[test]
    fn test_carbon_schema_mismatch_is_rejected() {
        let body = r#"{"carbon_analysis": {"net_carbon_impact": {"co2_per_year": 1.0}}}"#;
        assert!(serde_json::from_str::<CarbonFootprintResponse>(body).is_err());
    }
}
