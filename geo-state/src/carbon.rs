//! Display values for the carbon footprint panel.

use geo_api::models::CarbonAnalysis;
use geo_utils::change::format_signed;
use geo_utils::currency::{format_rupees, RupeeScale};

/// Whether the area absorbs more CO₂ than it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarbonBalance {
    Sink,
    Emitter,
}

impl CarbonBalance {
    /// Strictly positive net CO₂ uptake is a sink; zero counts as emitter.
    pub fn of(co2_per_year: f64) -> Self {
        if co2_per_year > 0.0 {
            CarbonBalance::Sink
        } else {
            CarbonBalance::Emitter
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CarbonBalance::Sink => "🌳",
            CarbonBalance::Emitter => "🏭",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CarbonBalance::Sink => "sink",
            CarbonBalance::Emitter => "emitter",
        }
    }
}

/// A labelled line of the carbon panel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarbonLine {
    pub label: &'static str,
    pub amount: String,
    pub rupees: String,
}

/// Everything the carbon panel renders, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct CarbonSummary {
    pub balance: CarbonBalance,
    pub net_amount: String,
    pub status: String,
    pub net_rupees: String,
    pub sequestration: Vec<CarbonLine>,
    pub emissions: Vec<CarbonLine>,
    pub area: String,
    pub credit_rate: String,
    pub methodology: String,
}

fn rupees(amount: f64) -> String {
    format_rupees(amount, RupeeScale::CroreLakh)
}

/// `value` split in proportion `part / total`; zero when the total is zero.
pub fn proportional_value(value: f64, part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        value * (part / total)
    }
}

impl CarbonSummary {
    pub fn from_analysis(analysis: &CarbonAnalysis) -> Self {
        let net = &analysis.net_carbon_impact;
        let seq = &analysis.carbon_sequestration;
        let emissions = &analysis.carbon_emissions;
        let total = seq.total_sequestration_co2_per_year;

        Self {
            balance: CarbonBalance::of(net.co2_per_year),
            net_amount: format!("{} tonnes CO₂/year", format_signed(net.co2_per_year, 2)),
            status: net.status.clone(),
            net_rupees: format!("{}/year", rupees(net.value_rupees_per_year.abs())),
            sequestration: vec![
                CarbonLine {
                    label: "Forest",
                    amount: format!("+{:.2} t CO₂/year", seq.forest_co2_per_year),
                    rupees: rupees(proportional_value(
                        seq.value_rupees_per_year,
                        seq.forest_co2_per_year,
                        total,
                    )),
                },
                CarbonLine {
                    label: "Vegetation",
                    amount: format!("+{:.2} t CO₂/year", seq.vegetation_co2_per_year),
                    rupees: rupees(proportional_value(
                        seq.value_rupees_per_year,
                        seq.vegetation_co2_per_year,
                        total,
                    )),
                },
                CarbonLine {
                    label: "Total Sequestration",
                    amount: format!("+{:.2} t CO₂/year", total),
                    rupees: format!("{}/year", rupees(seq.value_rupees_per_year)),
                },
            ],
            emissions: vec![CarbonLine {
                label: "Urban Areas",
                amount: format!("{:.2} t CO₂/year", emissions.urban_co2_per_year),
                rupees: format!("{}/year", rupees(emissions.cost_rupees_per_year)),
            }],
            area: format!(
                "{} km² ({} hectares)",
                analysis.area_km2, analysis.area_hectares
            ),
            credit_rate: format!(
                "₹{} per tonne CO₂",
                analysis.carbon_credit_rate_rupees_per_tonne
            ),
            methodology: analysis.methodology.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_api::models::{CarbonEmissions, CarbonSequestration, NetCarbonImpact};

    fn analysis(net_co2: f64) -> CarbonAnalysis {
        CarbonAnalysis {
            net_carbon_impact: NetCarbonImpact {
                co2_per_year: net_co2,
                status: if net_co2 > 0.0 { "Carbon Sink" } else { "Carbon Emitter" }.into(),
                value_rupees_per_year: net_co2 * 2000.0,
            },
            carbon_sequestration: CarbonSequestration {
                forest_co2_per_year: 300.0,
                vegetation_co2_per_year: 100.0,
                total_sequestration_co2_per_year: 400.0,
                value_rupees_per_year: 800_000.0,
            },
            carbon_emissions: CarbonEmissions {
                urban_co2_per_year: 150.0,
                cost_rupees_per_year: 300_000.0,
            },
            area_km2: 12.57,
            area_hectares: 1257.0,
            carbon_credit_rate_rupees_per_tonne: 2000.0,
            methodology: "IPCC Tier 1".into(),
        }
    }

    #[test]
    fn test_positive_net_is_sink() {
        let summary = CarbonSummary::from_analysis(&analysis(250.0));
        assert_eq!(summary.balance, CarbonBalance::Sink);
        assert_eq!(summary.balance.css_class(), "sink");
        assert_eq!(summary.net_amount, "+250.00 tonnes CO₂/year");
        assert_eq!(summary.net_rupees, "₹5.00 L/year");
    }

    #[test]
    fn test_zero_or_negative_net_is_emitter() {
        assert_eq!(CarbonBalance::of(0.0), CarbonBalance::Emitter);
        let summary = CarbonSummary::from_analysis(&analysis(-50.0));
        assert_eq!(summary.balance, CarbonBalance::Emitter);
        assert_eq!(summary.net_amount, "-50.00 tonnes CO₂/year");
        assert_eq!(summary.net_rupees, "₹1.00 L/year");
    }

    #[test]
    fn test_sequestration_shares() {
        let summary = CarbonSummary::from_analysis(&analysis(250.0));
        assert_eq!(summary.sequestration[0].rupees, "₹6.00 L");
        assert_eq!(summary.sequestration[1].rupees, "₹2.00 L");
        assert_eq!(summary.sequestration[2].rupees, "₹8.00 L/year");
        assert_eq!(summary.emissions[0].rupees, "₹3.00 L/year");
        assert_eq!(summary.area, "12.57 km² (1257 hectares)");
        assert_eq!(summary.credit_rate, "₹2000 per tonne CO₂");
    }

    #[test]
    fn test_proportional_value_zero_total() {
        assert_eq!(proportional_value(1000.0, 0.0, 0.0), 0.0);
    }
}
