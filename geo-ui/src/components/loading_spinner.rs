//! Loading spinner component.

use crate::theme::use_theme;
use dioxus::prelude::*;

/// Loading indicator with a panel-specific message.
#[component]
pub fn LoadingSpinner(#[props(default = "Loading data...".to_string())] message: String) -> Element {
    let palette = use_theme().palette();
    rsx! {
        div {
            style: "display: flex; flex-direction: column; justify-content: center; align-items: center; gap: 12px; padding: 40px; color: {palette.text_secondary};",
            div {
                style: "width: 32px; height: 32px; border: 3px solid {palette.border}; border-top-color: {palette.primary}; border-radius: 50%; animation: spin 1s linear infinite;",
            }
            p { style: "margin: 0;", "{message}" }
        }
    }
}
