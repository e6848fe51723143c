//! Static catalogue page. Makes no requests.

use crate::components::{card_style, ThemeToggle};
use crate::state::{DashboardState, Page};
use crate::theme::use_theme;
use crate::use_cases::USE_CASES;
use dioxus::prelude::*;

#[component]
pub fn UseCasesPage() -> Element {
    let mut state = use_context::<DashboardState>();
    let palette = use_theme().palette();
    let card = card_style(palette);
    let link_style = format!(
        "background: none; border: none; padding: 0; cursor: pointer; font-size: 15px; color: {};",
        palette.primary
    );

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 32px 20px;",
            header {
                style: "margin-bottom: 30px;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 20px; margin-bottom: 20px;",
                    div {
                        style: "flex: 1;",
                        h1 { style: "margin: 0; font-size: 32px;", "💡 Use Cases" }
                        p {
                            style: "margin: 8px 0 0 0; color: {palette.text_secondary};",
                            "Discover how our Geospatial Intelligence System can help solve real-world problems"
                        }
                    }
                    ThemeToggle {}
                }
                button {
                    style: "{link_style}",
                    onclick: move |_| state.page.set(Page::Analysis),
                    "← Back to Analysis"
                }
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(340px, 1fr)); gap: 20px;",
                for case in USE_CASES.iter() {
                    div {
                        key: "{case.id}",
                        style: "{card}",
                        div {
                            style: "display: flex; align-items: center; gap: 10px; margin-bottom: 12px;",
                            span { style: "font-size: 32px;", "{case.icon}" }
                            h2 { style: "margin: 0; font-size: 20px;", "{case.title}" }
                        }
                        p { style: "color: {palette.text_secondary}; line-height: 1.5;", "{case.description}" }
                        h3 { style: "font-size: 14px; margin: 16px 0 8px 0;", "Key Features:" }
                        ul {
                            style: "list-style: none; padding: 0; margin: 0;",
                            for feature in case.features.iter() {
                                li {
                                    key: "{feature}",
                                    style: "margin: 4px 0;",
                                    span { style: "color: {palette.accent}; margin-right: 8px;", "✓" }
                                    "{feature}"
                                }
                            }
                        }
                        h3 { style: "font-size: 14px; margin: 16px 0 8px 0;", "Real-World Application:" }
                        p { style: "color: {palette.text_secondary}; line-height: 1.5; margin: 0;", "{case.application}" }
                    }
                }
            }
            div {
                style: "{card} text-align: center; margin-top: 30px;",
                h2 { style: "margin: 0 0 8px 0;", "Ready to Get Started?" }
                p {
                    style: "color: {palette.text_secondary};",
                    "Start analyzing your region today and unlock insights from satellite imagery and geospatial data."
                }
                button {
                    style: "padding: 12px 24px; border-radius: 8px; border: none; cursor: pointer; background: {palette.header_gradient}; color: #ffffff; font-weight: 600; font-size: 16px;",
                    onclick: move |_| state.page.set(Page::Analysis),
                    "Start Analysis →"
                }
            }
        }
    }
}
