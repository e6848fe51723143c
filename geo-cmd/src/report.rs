//! Plain-text reports for each endpoint, built from the same view models
//! the dashboard panels render.

use geo_api::models::{
    CarbonFootprintResponse, EconomicImpactResponse, InsightsResponse, TimeSeriesResponse,
};
use geo_state::carbon::CarbonSummary;
use geo_state::economic::EconomicSummary;
use geo_state::time_series::{change_summary, chart_rows};
use geo_utils::dates::format_timestamp;
use geo_utils::insight_text::{classify, InsightLine};

pub fn insights_report(response: &InsightsResponse) -> Vec<String> {
    let mut lines = vec![
        "AI-Powered Insights".to_string(),
        format!("Generated: {}", format_timestamp(&response.generated_at)),
        String::new(),
    ];
    for line in classify(&response.insights) {
        match line {
            InsightLine::Heading(text) => {
                lines.push(String::new());
                lines.push(text.trim().to_uppercase());
            }
            InsightLine::Bullet(text) => lines.push(format!("  {}", text.trim())),
            InsightLine::Paragraph(text) => lines.push(text.trim().to_string()),
        }
    }
    lines
}

pub fn carbon_report(response: &CarbonFootprintResponse) -> Vec<String> {
    let summary = CarbonSummary::from_analysis(&response.carbon_analysis);
    let mut lines = vec![
        "Carbon Footprint Analysis".to_string(),
        format!(
            "{} Net Carbon Impact: {} ({}), {}",
            summary.balance.icon(),
            summary.net_amount,
            summary.status,
            summary.net_rupees
        ),
        String::new(),
        "Carbon Sequestration".to_string(),
    ];
    for line in &summary.sequestration {
        lines.push(format!("  {:<20} {:<24} {}", line.label, line.amount, line.rupees));
    }
    lines.push("Carbon Emissions".to_string());
    for line in &summary.emissions {
        lines.push(format!("  {:<20} {:<24} {}", line.label, line.amount, line.rupees));
    }
    lines.push(String::new());
    lines.push(format!("Analysis Area: {}", summary.area));
    lines.push(format!("Carbon Credit Rate: {}", summary.credit_rate));
    lines.push(summary.methodology);
    lines
}

pub fn economic_report(response: &EconomicImpactResponse, population: Option<u64>) -> Vec<String> {
    let summary = EconomicSummary::from_analysis(&response.economic_analysis, population);
    let mut lines = vec![
        "Economic Impact Analysis (INR)".to_string(),
        format!("Total Economic Value: {}", summary.total_value),
    ];
    for section in &summary.sections {
        lines.push(String::new());
        lines.push(section.title.to_string());
        for item in &section.items {
            let mut line = format!("  {:<26} {}", item.label, item.value);
            if let Some(note) = &item.note {
                line.push_str(&format!("  ({})", note));
            }
            lines.push(line);
        }
    }
    lines.push(String::new());
    lines.push(format!("Analysis Area: {}", summary.area));
    lines.push(format!("Land Cover: {}", summary.land_cover));
    lines.push(summary.methodology);
    lines
}

pub fn time_series_report(response: &TimeSeriesResponse) -> Vec<String> {
    let rows = chart_rows(response);
    if rows.is_empty() {
        return vec!["No time-series data available".to_string()];
    }

    let mut lines = vec![
        "Time-Series Analysis".to_string(),
        format!(
            "Period: {} to {}, interval {} year(s)",
            response.start_date, response.end_date, response.interval_years
        ),
        String::new(),
        format!(
            "{:<6} {:>8} {:>8} {:>11} {:>8}",
            "Year", "Urban", "Forest", "Vegetation", "Water"
        ),
    ];
    for row in &rows {
        lines.push(format!(
            "{:<6} {:>7.1}% {:>7.1}% {:>10.1}% {:>7.1}%",
            row.year, row.urban, row.forest, row.vegetation, row.water
        ));
    }
    if let Some((period, entries)) = change_summary(response.changes.as_ref()) {
        lines.push(String::new());
        lines.push(format!("Changes Over {} Years", period));
        for entry in entries {
            lines.push(format!("  {}: {}", entry.label, entry.text));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time_series(json: &str) -> TimeSeriesResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_insights_report() {
        let response = InsightsResponse {
            insights: "1. Land Use\n\n- Urban share is rising\nOverall stable.".into(),
            generated_at: "2024-03-05T14:07:09".into(),
        };
        let lines = insights_report(&response);
        assert_eq!(lines[1], "Generated: 05/03/2024, 14:07:09");
        assert!(lines.contains(&"1. LAND USE".to_string()));
        assert!(lines.contains(&"  - Urban share is rising".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("Overall stable."));
    }

    #[test]
    fn test_time_series_report_with_changes() {
        let response = time_series(
            r#"{
                "time_series": [
                    {"year": 2020, "land_cover": {"urban": 41.0, "forest": 22.0, "vegetation": 28.0, "water": 9.0}},
                    {"year": 2021, "land_cover": {"urban": 43.5, "forest": 21.0, "vegetation": 26.5, "water": 9.0}}
                ],
                "changes": {"period_years": 1, "urban_change": 2.5, "forest_change": -1.0,
                            "vegetation_change": -1.5, "water_change": 0.0},
                "start_date": "2020-01-01",
                "end_date": "2021-12-31",
                "interval_years": 1
            }"#,
        );
        let lines = time_series_report(&response);
        assert_eq!(lines[1], "Period: 2020-01-01 to 2021-12-31, interval 1 year(s)");
        assert!(lines[4].starts_with("2020"));
        assert!(lines.contains(&"Changes Over 1 Years".to_string()));
        assert!(lines.contains(&"  Urban: +2.5%".to_string()));
        assert!(lines.contains(&"  Water: 0.0%".to_string()));
    }

    #[test]
    fn test_time_series_report_empty() {
        let response = time_series(
            r#"{"time_series": [], "start_date": "2020-01-01", "end_date": "2021-12-31", "interval_years": 1}"#,
        );
        assert_eq!(time_series_report(&response), vec!["No time-series data available"]);
    }
}
