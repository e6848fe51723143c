//! Geospatial Analytics Dashboard
//!
//! Data flow:
//! 1. The location form writes the selected location (and optional
//!    population) into `DashboardState`.
//! 2. Every panel reads that state and fetches its own endpoint; panels never
//!    wait on each other and each one fails on its own.
//! 3. The map widget loads the Google Maps script once and redraws on each
//!    coordinate change.
//! 4. D3.js is loaded once on mount and the land-cover chart script is
//!    evaluated at global scope.

use dioxus::prelude::*;
use geo_api::ApiClient;
use geo_ui::components::{
    AiInsights, CarbonFootprint, EconomicImpact, LocationForm, MapWidget, ThemeToggle,
    TimeSeriesChart, UseCasesPage,
};
use geo_ui::js_bridge;
use geo_ui::state::{DashboardState, Page};
use geo_ui::theme::{use_theme, ThemeProvider};
use log::{info, warn};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("main"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let client = use_context_provider(ApiClient::from_build_env);
    let state = use_context_provider(DashboardState::new);

    // ─── One-time: chart scripts and D3 ───
    use_effect(move || {
        info!("Analytics API at {}", client.base_url());
        js_bridge::init_charts();
        spawn(async move {
            if let Err(e) = js_bridge::load_d3().await {
                warn!("D3.js unavailable, charts disabled: {}", e);
            }
        });
    });

    rsx! {
        ThemeProvider {
            if (state.page)() == Page::UseCases {
                UseCasesPage {}
            } else {
                AnalysisPage {}
            }
        }
    }
}

#[component]
fn AnalysisPage() -> Element {
    let mut state = use_context::<DashboardState>();
    let palette = use_theme().palette();

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 24px 20px;",
            header {
                style: "display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 20px; padding: 20px 24px; margin-bottom: 20px; border-radius: 12px; background: {palette.header_gradient}; color: #ffffff;",
                div {
                    h1 { style: "margin: 0; font-size: 28px;", "🛰️ Geospatial Intelligence System" }
                    p {
                        style: "margin: 6px 0 0 0; opacity: 0.9;",
                        "Land cover, carbon and economic analysis from satellite imagery"
                    }
                    button {
                        style: "margin-top: 10px; background: rgba(255, 255, 255, 0.15); border: 1px solid rgba(255, 255, 255, 0.4); color: #ffffff; padding: 6px 12px; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| state.page.set(Page::UseCases),
                        "💡 Use Cases"
                    }
                }
                ThemeToggle {}
            }
            LocationForm {}
            MapWidget {}
            AiInsights {}
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 20px;",
                CarbonFootprint {}
                EconomicImpact {}
            }
            TimeSeriesChart {}
        }
    }
}
