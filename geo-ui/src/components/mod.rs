//! Reusable Dioxus RSX components for the geospatial dashboard.

mod ai_insights;
mod carbon_footprint;
mod chart_container;
mod economic_impact;
mod error_display;
mod loading_spinner;
mod location_form;
mod map_widget;
mod panel_header;
mod placeholder;
mod theme_toggle;
mod time_series_chart;
mod use_cases_page;

pub use ai_insights::AiInsights;
pub use carbon_footprint::CarbonFootprint;
pub use chart_container::ChartContainer;
pub use economic_impact::EconomicImpact;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use location_form::LocationForm;
pub use map_widget::MapWidget;
pub use panel_header::PanelHeader;
pub use placeholder::Placeholder;
pub use theme_toggle::ThemeToggle;
pub use time_series_chart::TimeSeriesChart;
pub use use_cases_page::UseCasesPage;

use geo_state::theme::Palette;

/// Card chrome shared by every panel.
pub(crate) fn card_style(palette: &Palette) -> String {
    format!(
        "background: {}; border: 1px solid {}; border-radius: 12px; padding: 20px; margin-bottom: 20px; color: {};",
        palette.card_bg, palette.border, palette.text
    )
}
