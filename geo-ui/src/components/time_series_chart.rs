//! Land-cover time-series panel with a D3 line/bar chart.

use crate::components::{card_style, ChartContainer, ErrorDisplay, LoadingSpinner, PanelHeader, Placeholder};
use crate::js_bridge;
use crate::state::DashboardState;
use crate::theme::use_theme;
use dioxus::prelude::*;
use geo_api::endpoints::Endpoint;
use geo_api::models::TimeSeriesResponse;
use geo_api::{ApiClient, Location};
use geo_state::panel::{Panel, PanelState};
use geo_state::theme::Palette;
use geo_state::time_series::{change_summary, chart_rows, ChartMode, LAND_COVER_SERIES};
use geo_utils::change::Trend;
use log::warn;

const CHART_ID: &str = "land-cover-chart";

fn chart_config(mode: ChartMode, palette: &Palette) -> serde_json::Value {
    let series: Vec<serde_json::Value> = LAND_COVER_SERIES
        .iter()
        .map(|(key, color)| serde_json::json!({ "key": key, "color": color }))
        .collect();
    serde_json::json!({
        "mode": mode.as_str(),
        "series": series,
        "textColor": palette.text_secondary,
        "gridColor": palette.border,
        "yLabel": "Land cover (%)",
    })
}

fn trend_color(trend: Trend) -> &'static str {
    match trend {
        Trend::Positive => "#10b981",
        Trend::Negative => "#ef4444",
    }
}

fn mode_button_style(active: bool, palette: &Palette) -> String {
    if active {
        format!(
            "padding: 6px 12px; border-radius: 6px; cursor: pointer; border: 1px solid {}; background: {}; color: #ffffff;",
            palette.primary, palette.primary
        )
    } else {
        format!(
            "padding: 6px 12px; border-radius: 6px; cursor: pointer; border: 1px solid {}; background: transparent; color: {};",
            palette.border, palette.text
        )
    }
}

/// Fetches `/time-series` whenever the location changes and charts the
/// yearly land-cover shares.
#[component]
pub fn TimeSeriesChart() -> Element {
    let state = use_context::<DashboardState>();
    let client = use_context::<ApiClient>();
    let theme = use_theme();
    let palette = theme.palette();
    let mut mode = use_signal(ChartMode::default);
    let mut panel = use_signal(|| {
        Panel::<Location, TimeSeriesResponse>::new(Endpoint::TimeSeries.fallback_message())
    });

    use_effect(move || {
        let location = (state.location)();
        let Some((ticket, location)) = panel.write().observe(location) else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = client.time_series(&location.name).await;
            panel.write().resolve(ticket, result);
        });
    });

    // Redraw on new data, chart mode or theme.
    use_effect(move || {
        let rows = match panel.read().state().data() {
            Some(response) => chart_rows(response),
            None => return,
        };
        if rows.is_empty() {
            return;
        }
        let config = chart_config(mode(), theme.palette());
        match serde_json::to_string(&rows) {
            Ok(data_json) => {
                js_bridge::render_land_cover_chart(CHART_ID, &data_json, &config.to_string())
            }
            Err(e) => warn!("Failed to serialize chart rows: {}", e),
        }
    });

    use_drop(|| js_bridge::destroy_land_cover_chart(CHART_ID));

    if (state.location)().is_none() {
        return rsx! {
            Placeholder { icon: "📊", message: "Enter a location to view time-series analysis" }
        };
    }

    let view = panel.read().state().clone();
    let card = card_style(palette);
    let response = match view {
        PanelState::Idle => return rsx! {},
        PanelState::Loading => {
            return rsx! {
                div { style: "{card}", LoadingSpinner { message: "Analyzing historical data..." } }
            }
        }
        PanelState::Failed(message) => {
            return rsx! {
                div {
                    style: "{card}",
                    ErrorDisplay { message, on_dismiss: move |_| panel.write().dismiss() }
                }
            }
        }
        PanelState::Loaded(response) => response,
    };

    if response.time_series.is_empty() {
        return rsx! {
            Placeholder { icon: "📊", message: "No time-series data available" }
        };
    }

    let current_mode = mode();
    let changes = change_summary(response.changes.as_ref());

    rsx! {
        div {
            style: "{card}",
            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start;",
                PanelHeader { icon: "📊", title: "Time-Series Analysis" }
                div {
                    style: "display: flex; gap: 6px;",
                    for option in [ChartMode::Line, ChartMode::Bar] {
                        button {
                            key: "{option.as_str()}",
                            style: "{mode_button_style(option == current_mode, palette)}",
                            onclick: move |_| mode.set(option),
                            "{option.label()}"
                        }
                    }
                }
            }
            if let Some((period, entries)) = changes {
                div {
                    style: "padding: 12px; border-radius: 8px; background: {palette.background_secondary}; margin-bottom: 16px;",
                    h3 { style: "margin: 0 0 8px 0; font-size: 15px;", "Changes Over {period} Years" }
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 16px;",
                        for entry in entries {
                            div {
                                key: "{entry.label}",
                                span { style: "margin-right: 6px;", "{entry.label}:" }
                                span {
                                    class: "change-value {entry.trend.css_class()}",
                                    style: "font-weight: 700; color: {trend_color(entry.trend)};",
                                    "{entry.text}"
                                }
                            }
                        }
                    }
                }
            }
            ChartContainer { id: CHART_ID.to_string() }
            div {
                style: "margin-top: 12px; font-size: 13px; color: {palette.text_secondary};",
                p { strong { "Period: " } "{response.start_date} to {response.end_date}" }
                p { strong { "Interval: " } "{response.interval_years} year(s)" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_state::theme::ThemeId;

    #[test]
    fn test_chart_config_follows_mode_and_theme() {
        let palette = &ThemeId::Earth.theme().palette;
        let config = chart_config(ChartMode::Bar, palette);
        assert_eq!(config["mode"], "bar");
        assert_eq!(config["gridColor"], palette.border);
        assert_eq!(config["series"][0]["key"], "Urban");
        assert_eq!(config["series"][3]["color"], "#3b82f6");
    }
}
