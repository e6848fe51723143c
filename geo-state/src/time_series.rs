//! Reshaping of `/time-series` responses for the land-cover chart.

use geo_api::models::{LandCoverChanges, TimeSeriesResponse};
use geo_utils::change::{format_change, Trend};
use serde::Serialize;

/// Line or bar rendering of the land-cover chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartMode {
    #[default]
    Line,
    Bar,
}

impl ChartMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartMode::Line => "line",
            ChartMode::Bar => "bar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartMode::Line => "Line Chart",
            ChartMode::Bar => "Bar Chart",
        }
    }
}

/// Series names and colours, in legend order.
pub const LAND_COVER_SERIES: [(&str, &str); 4] = [
    ("Urban", "#8b5cf6"),
    ("Forest", "#10b981"),
    ("Vegetation", "#84cc16"),
    ("Water", "#3b82f6"),
];

/// One year of the chart, with the series names D3 keys on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub year: i32,
    #[serde(rename = "Urban")]
    pub urban: f64,
    #[serde(rename = "Forest")]
    pub forest: f64,
    #[serde(rename = "Vegetation")]
    pub vegetation: f64,
    #[serde(rename = "Water")]
    pub water: f64,
}

pub fn chart_rows(response: &TimeSeriesResponse) -> Vec<ChartRow> {
    response
        .time_series
        .iter()
        .map(|snapshot| ChartRow {
            year: snapshot.year,
            urban: snapshot.land_cover.urban,
            forest: snapshot.land_cover.forest,
            vegetation: snapshot.land_cover.vegetation,
            water: snapshot.land_cover.water,
        })
        .collect()
}

/// One entry of the "Changes Over N Years" summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEntry {
    pub label: &'static str,
    pub text: String,
    pub trend: Trend,
}

/// The change summary: period and entries, or `None` when the backend
/// reported no period.
pub fn change_summary(changes: Option<&LandCoverChanges>) -> Option<(f64, Vec<ChangeEntry>)> {
    let changes = changes?;
    let period = changes.period_years.filter(|p| *p != 0.0)?;
    let entry = |label, value: f64| ChangeEntry {
        label,
        text: format_change(value),
        trend: Trend::of(value),
    };
    Some((
        period,
        vec![
            entry("Urban", changes.urban_change),
            entry("Forest", changes.forest_change),
            entry("Vegetation", changes.vegetation_change),
            entry("Water", changes.water_change),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_api::models::{LandCoverShare, YearSnapshot};

    fn response() -> TimeSeriesResponse {
        TimeSeriesResponse {
            time_series: vec![
                YearSnapshot {
                    year: 2020,
                    land_cover: LandCoverShare {
                        urban: 41.0,
                        forest: 22.0,
                        vegetation: 28.0,
                        water: 9.0,
                    },
                },
                YearSnapshot {
                    year: 2021,
                    land_cover: LandCoverShare {
                        urban: 43.5,
                        forest: 21.0,
                        vegetation: 26.5,
                        water: 9.0,
                    },
                },
            ],
            changes: Some(LandCoverChanges {
                period_years: Some(1.0),
                urban_change: 2.5,
                forest_change: -1.0,
                vegetation_change: -1.5,
                water_change: 0.0,
            }),
            start_date: "2020-01-01".into(),
            end_date: "2021-12-31".into(),
            interval_years: 1.0,
        }
    }

    #[test]
    fn test_chart_rows_use_series_names() {
        let rows = chart_rows(&response());
        assert_eq!(rows.len(), 2);
        let json = serde_json::to_value(&rows[1]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"year": 2021, "Urban": 43.5, "Forest": 21.0, "Vegetation": 26.5, "Water": 9.0})
        );
    }

    #[test]
    fn test_change_summary() {
        let r = response();
        let (period, entries) = change_summary(r.changes.as_ref()).unwrap();
        assert_eq!(period, 1.0);
        assert_eq!(entries[0].text, "+2.5%");
        assert_eq!(entries[0].trend, Trend::Positive);
        assert_eq!(entries[1].text, "-1.0%");
        assert_eq!(entries[3].trend, Trend::Negative);
    }

    #[test]
    fn test_change_summary_requires_period() {
        let mut r = response();
        if let Some(changes) = r.changes.as_mut() {
            changes.period_years = None;
        }
        assert!(change_summary(r.changes.as_ref()).is_none());
        assert!(change_summary(None).is_none());
    }

    #[test]
    fn test_chart_mode_default() {
        assert_eq!(ChartMode::default(), ChartMode::Line);
        assert_eq!(ChartMode::Bar.as_str(), "bar");
    }
}
