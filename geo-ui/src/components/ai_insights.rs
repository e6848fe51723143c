//! AI insights panel. Unlike the other panels it only fetches on demand.

use crate::components::{card_style, ErrorDisplay, LoadingSpinner, PanelHeader, Placeholder};
use crate::state::DashboardState;
use crate::theme::use_theme;
use dioxus::prelude::*;
use geo_api::endpoints::Endpoint;
use geo_api::models::InsightsResponse;
use geo_api::{ApiClient, Location};
use geo_state::panel::{Panel, PanelState};
use geo_state::theme::Palette;
use geo_utils::dates::format_timestamp;
use geo_utils::insight_text::{classify, InsightLine};

fn insight_line(index: usize, line: InsightLine<'_>, palette: &Palette) -> Element {
    match line {
        InsightLine::Heading(text) => rsx! {
            h3 {
                key: "{index}",
                style: "margin: 16px 0 8px 0; font-size: 16px; color: {palette.primary};",
                "{text}"
            }
        },
        InsightLine::Bullet(text) => rsx! {
            div {
                key: "{index}",
                style: "margin: 4px 0 4px 12px; padding-left: 8px; border-left: 2px solid {palette.accent};",
                "{text}"
            }
        },
        InsightLine::Paragraph(text) => rsx! {
            p { key: "{index}", style: "margin: 8px 0; line-height: 1.6;", "{text}" }
        },
    }
}

fn insights_body(response: &InsightsResponse, palette: &Palette) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; font-size: 12px; color: {palette.text_secondary}; margin-bottom: 8px;",
            span { "Powered by Gemini 2.5 Flash" }
            span { "{format_timestamp(&response.generated_at)}" }
        }
        div {
            {classify(&response.insights).into_iter().enumerate().map(|(index, line)| insight_line(index, line, palette))}
        }
    }
}

#[component]
pub fn AiInsights() -> Element {
    let state = use_context::<DashboardState>();
    let client = use_context::<ApiClient>();
    let palette = use_theme().palette();
    let mut panel = use_signal(|| {
        Panel::<Location, InsightsResponse>::new(Endpoint::AiInsights.fallback_message())
    });

    use_effect(move || {
        let location = (state.location)();
        panel.write().track(location);
    });

    let on_generate = move |_: MouseEvent| {
        let Some((ticket, location)) = panel.write().trigger() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = client.ai_insights(&location.name).await;
            panel.write().resolve(ticket, result);
        });
    };

    if (state.location)().is_none() {
        return rsx! {
            Placeholder { icon: "🤖", message: "Enter a location to get AI-powered insights" }
        };
    }

    let view = panel.read().state().clone();
    // Earlier insights stay on screen while regenerating or after a failure.
    let shown = match &view {
        PanelState::Loaded(response) => Some(response.clone()),
        _ => panel.read().previous().cloned(),
    };
    let loading = view.is_loading();
    let card = card_style(palette);
    let button_style = format!(
        "padding: 8px 16px; border-radius: 8px; border: none; cursor: {}; background: {}; color: #ffffff; font-weight: 600; opacity: {};",
        if loading { "wait" } else { "pointer" },
        palette.header_gradient,
        if loading { "0.7" } else { "1" }
    );

    rsx! {
        div {
            style: "{card}",
            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start;",
                PanelHeader { icon: "🤖", title: "AI-Powered Insights" }
                button {
                    style: "{button_style}",
                    disabled: loading,
                    onclick: on_generate,
                    if loading { "Generating..." } else { "✨ Generate Insights" }
                }
            }
            {match view {
                PanelState::Idle => rsx! {
                    p {
                        style: "color: {palette.text_secondary}; text-align: center;",
                        "Click \"Generate Insights\" to get AI-powered analysis and recommendations"
                    }
                },
                PanelState::Loading => rsx! {
                    LoadingSpinner { message: "Generating insights..." }
                },
                PanelState::Failed(message) => rsx! {
                    ErrorDisplay { message, on_dismiss: move |_| panel.write().dismiss() }
                },
                PanelState::Loaded(_) => rsx! {},
            }}
            if let Some(response) = shown {
                {insights_body(&response, palette)}
            }
        }
    }
}
