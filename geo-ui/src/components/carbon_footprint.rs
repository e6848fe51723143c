//! Carbon footprint panel.

use crate::components::{card_style, ErrorDisplay, LoadingSpinner, PanelHeader, Placeholder};
use crate::state::DashboardState;
use crate::theme::use_theme;
use dioxus::prelude::*;
use geo_api::endpoints::Endpoint;
use geo_api::models::CarbonFootprintResponse;
use geo_api::{ApiClient, Location};
use geo_state::carbon::{CarbonBalance, CarbonLine, CarbonSummary};
use geo_state::panel::{Panel, PanelState};
use geo_state::theme::Palette;

fn balance_colors(balance: CarbonBalance) -> (&'static str, &'static str) {
    match balance {
        CarbonBalance::Sink => ("rgba(16, 185, 129, 0.12)", "#10b981"),
        CarbonBalance::Emitter => ("rgba(239, 68, 68, 0.12)", "#ef4444"),
    }
}

fn carbon_lines(title: &str, lines: &[CarbonLine], palette: &Palette) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-width: 240px;",
            h3 { style: "font-size: 16px; margin: 0 0 10px 0;", "{title}" }
            for line in lines.iter() {
                div {
                    key: "{line.label}",
                    style: "display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid {palette.border};",
                    div {
                        div { style: "font-weight: 600;", "{line.label}" }
                        div { style: "font-size: 13px; color: {palette.text_secondary};", "{line.amount}" }
                    }
                    div { style: "font-weight: 600; color: {palette.accent};", "{line.rupees}" }
                }
            }
        }
    }
}

/// Fetches `/carbon-footprint` whenever the location changes.
#[component]
pub fn CarbonFootprint() -> Element {
    let state = use_context::<DashboardState>();
    let client = use_context::<ApiClient>();
    let palette = use_theme().palette();
    let mut panel = use_signal(|| {
        Panel::<Location, CarbonFootprintResponse>::new(Endpoint::CarbonFootprint.fallback_message())
    });

    use_effect(move || {
        let location = (state.location)();
        let Some((ticket, location)) = panel.write().observe(location) else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = client.carbon_footprint(&location.name).await;
            panel.write().resolve(ticket, result);
        });
    });

    if (state.location)().is_none() {
        return rsx! {
            Placeholder { icon: "🌱", message: "Enter a location to calculate carbon footprint" }
        };
    }

    let view = panel.read().state().clone();
    let card = card_style(palette);
    match view {
        PanelState::Idle => rsx! {},
        PanelState::Loading => rsx! {
            div { style: "{card}", LoadingSpinner { message: "Calculating carbon impact..." } }
        },
        PanelState::Failed(message) => rsx! {
            div {
                style: "{card}",
                ErrorDisplay { message, on_dismiss: move |_| panel.write().dismiss() }
            }
        },
        PanelState::Loaded(response) => {
            let summary = CarbonSummary::from_analysis(&response.carbon_analysis);
            let (tint, edge) = balance_colors(summary.balance);
            rsx! {
                div {
                    style: "{card}",
                    PanelHeader { icon: "🌱", title: "Carbon Footprint Analysis" }
                    div {
                        class: "carbon-status-card {summary.balance.css_class()}",
                        style: "display: flex; align-items: center; gap: 16px; padding: 16px; border-radius: 10px; background: {tint}; border: 1px solid {edge}; margin-bottom: 16px;",
                        div { style: "font-size: 40px;", "{summary.balance.icon()}" }
                        div {
                            style: "flex: 1;",
                            div { style: "font-size: 13px; color: {palette.text_secondary};", "Net Carbon Impact" }
                            div { style: "font-size: 22px; font-weight: 700;", "{summary.net_amount}" }
                            div { style: "font-size: 13px; color: {edge};", "{summary.status}" }
                        }
                        div { style: "font-size: 18px; font-weight: 700;", "{summary.net_rupees}" }
                    }
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 20px;",
                        {carbon_lines("🌲 Carbon Sequestration", &summary.sequestration, palette)}
                        {carbon_lines("🏭 Carbon Emissions", &summary.emissions, palette)}
                    }
                    div {
                        style: "margin-top: 16px; font-size: 13px; color: {palette.text_secondary};",
                        p { strong { "Analysis Area: " } "{summary.area}" }
                        p { strong { "Carbon Credit Rate: " } "{summary.credit_rate}" }
                        p { em { "{summary.methodology}" } }
                    }
                }
            }
        }
    }
}
