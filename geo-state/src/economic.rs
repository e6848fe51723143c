//! Display values for the economic impact panel.

use geo_api::models::EconomicAnalysis;
use geo_utils::currency::{format_rupees, group_indian, RupeeScale};

/// A labelled amount, with an optional explanatory note.
#[derive(Debug, Clone, PartialEq)]
pub struct EconomicItem {
    pub label: &'static str,
    pub value: String,
    pub note: Option<String>,
    /// Rendered with emphasis (totals, premium, health).
    pub highlight: bool,
}

/// A titled group of items.
#[derive(Debug, Clone, PartialEq)]
pub struct EconomicSection {
    pub title: &'static str,
    pub items: Vec<EconomicItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EconomicSummary {
    pub total_value: String,
    pub sections: Vec<EconomicSection>,
    pub area: String,
    pub land_cover: String,
    pub methodology: String,
}

fn rupees(amount: f64) -> String {
    format_rupees(amount, RupeeScale::CroreLakhThousand)
}

fn item(label: &'static str, value: String) -> EconomicItem {
    EconomicItem {
        label,
        value,
        note: None,
        highlight: false,
    }
}

fn highlighted(label: &'static str, value: String) -> EconomicItem {
    EconomicItem {
        highlight: true,
        ..item(label, value)
    }
}

impl EconomicSummary {
    /// `population` is the hint the request was made with; it only appears
    /// in the health savings note.
    pub fn from_analysis(analysis: &EconomicAnalysis, population: Option<u64>) -> Self {
        let property = &analysis.property_values_rupees;
        let tourism = &analysis.tourism_potential_rupees_per_year;
        let per_year = |amount: f64| format!("{}/year", rupees(amount));

        let property_section = EconomicSection {
            title: "🏘️ Property Values",
            items: vec![
                item("Urban Property", rupees(property.urban_property_value)),
                item("Forest Land", rupees(property.forest_property_value)),
                item("Vegetation Land", rupees(property.vegetation_property_value)),
                item("Water Bodies", rupees(property.water_property_value)),
                highlighted("Total Property Value", rupees(property.total_property_value)),
                EconomicItem {
                    note: Some("Additional value from green space".to_string()),
                    ..highlighted(
                        "Green Space Premium",
                        format!("+{}", rupees(property.green_space_premium)),
                    )
                },
            ],
        };

        let tourism_section = EconomicSection {
            title: "🏖️ Tourism Potential (Annual)",
            items: vec![
                item("Forest Tourism", per_year(tourism.forest_tourism)),
                item("Water Tourism", per_year(tourism.water_tourism)),
                item("Vegetation Tourism", per_year(tourism.vegetation_tourism)),
                item("Urban Tourism", per_year(tourism.urban_tourism)),
                highlighted(
                    "Total Tourism Potential",
                    per_year(tourism.total_tourism_potential),
                ),
            ],
        };

        let mut benefit_items = vec![EconomicItem {
            note: Some("Based on vegetation area".to_string()),
            ..item(
                "Agricultural Productivity",
                per_year(analysis.agricultural_potential_rupees_per_year),
            )
        }];
        if let Some(savings) = analysis
            .health_cost_savings_rupees_per_year
            .filter(|s| *s != 0.0)
        {
            let population = population
                .map(|p| group_indian(p as f64))
                .unwrap_or_else(|| "N/A".to_string());
            benefit_items.push(EconomicItem {
                note: Some(format!(
                    "Savings from green space (Population: {})",
                    population
                )),
                ..highlighted("Health Cost Savings", per_year(savings))
            });
        }

        let breakdown = &analysis.land_cover_breakdown;
        Self {
            total_value: rupees(analysis.total_economic_value_rupees),
            sections: vec![
                property_section,
                tourism_section,
                EconomicSection {
                    title: "🌾 Agricultural & Health Benefits",
                    items: benefit_items,
                },
            ],
            area: format!("{} km²", analysis.area_km2),
            land_cover: format!(
                "Urban {} km², Forest {} km², Vegetation {} km², Water {} km²",
                breakdown.urban_km2,
                breakdown.forest_km2,
                breakdown.vegetation_km2,
                breakdown.water_km2
            ),
            methodology: analysis.methodology.clone(),
        }
    }
}
