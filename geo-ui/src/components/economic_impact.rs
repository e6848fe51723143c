//! Economic impact panel.

use crate::components::{card_style, ErrorDisplay, LoadingSpinner, PanelHeader, Placeholder};
use crate::state::DashboardState;
use crate::theme::use_theme;
use dioxus::prelude::*;
use geo_api::endpoints::Endpoint;
use geo_api::models::EconomicImpactResponse;
use geo_api::{ApiClient, Location};
use geo_state::economic::{EconomicSection, EconomicSummary};
use geo_state::panel::{Panel, PanelState};
use geo_state::theme::Palette;

/// The economic panel re-fetches when either the location or the
/// population hint changes.
type EconomicKey = (Location, Option<u64>);

fn item_style(highlight: bool, palette: &Palette) -> String {
    if highlight {
        format!("padding: 10px; border-radius: 8px; border: 1px solid {};", palette.primary)
    } else {
        format!("padding: 10px; border-radius: 8px; background: {};", palette.background_secondary)
    }
}

fn section(section: &EconomicSection, palette: &Palette) -> Element {
    rsx! {
        div {
            style: "padding: 12px 0; border-top: 1px solid {palette.border};",
            h3 { style: "font-size: 16px; margin: 0 0 10px 0;", "{section.title}" }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 10px;",
                for item in section.items.iter() {
                    div {
                        key: "{item.label}",
                        style: "{item_style(item.highlight, palette)}",
                        div { style: "font-size: 13px; color: {palette.text_secondary};", "{item.label}" }
                        div { style: "font-size: 17px; font-weight: 700;", "{item.value}" }
                        if let Some(note) = item.note.as_ref() {
                            div { style: "font-size: 12px; color: {palette.text_secondary};", "{note}" }
                        }
                    }
                }
            }
        }
    }
}

/// Fetches `/economic-impact` whenever the location or population changes.
#[component]
pub fn EconomicImpact() -> Element {
    let state = use_context::<DashboardState>();
    let client = use_context::<ApiClient>();
    let palette = use_theme().palette();
    let mut panel = use_signal(|| {
        Panel::<EconomicKey, EconomicImpactResponse>::new(Endpoint::EconomicImpact.fallback_message())
    });

    use_effect(move || {
        let population = (state.population)();
        let key = (state.location)().map(|location| (location, population));
        let Some((ticket, (location, population))) = panel.write().observe(key) else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = client.economic_impact(&location.name, population).await;
            panel.write().resolve(ticket, result);
        });
    });

    if (state.location)().is_none() {
        return rsx! {
            Placeholder { icon: "💰", message: "Enter a location to calculate economic impact" }
        };
    }

    let view = panel.read().state().clone();
    let card = card_style(palette);
    match view {
        PanelState::Idle => rsx! {},
        PanelState::Loading => rsx! {
            div { style: "{card}", LoadingSpinner { message: "Calculating economic impact..." } }
        },
        PanelState::Failed(message) => rsx! {
            div {
                style: "{card}",
                ErrorDisplay { message, on_dismiss: move |_| panel.write().dismiss() }
            }
        },
        PanelState::Loaded(response) => {
            // The key the data was fetched for carries the population it used.
            let population = panel.read().key().and_then(|(_, population)| *population);
            let summary = EconomicSummary::from_analysis(&response.economic_analysis, population);
            rsx! {
                div {
                    style: "{card}",
                    PanelHeader { icon: "💰", title: "Economic Impact Analysis", badge: "INR (Indian Rupees)" }
                    div {
                        style: "text-align: center; padding: 20px; border-radius: 10px; background: {palette.header_gradient}; color: #ffffff; margin-bottom: 16px;",
                        div { style: "font-size: 14px; opacity: 0.9;", "Total Economic Value" }
                        div { style: "font-size: 32px; font-weight: 800;", "{summary.total_value}" }
                        div { style: "font-size: 12px; opacity: 0.8;", "Annual Economic Potential" }
                    }
                    for (index, entry) in summary.sections.iter().enumerate() {
                        div { key: "{index}", {section(entry, palette)} }
                    }
                    div {
                        style: "margin-top: 16px; font-size: 13px; color: {palette.text_secondary};",
                        p { strong { "Analysis Area: " } "{summary.area}" }
                        p { strong { "Land Cover: " } "{summary.land_cover}" }
                        p { em { "{summary.methodology}" } }
                    }
                }
            }
        }
    }
}
