//! Prompt shown by a panel before it has anything to display.

use crate::components::card_style;
use crate::theme::use_theme;
use dioxus::prelude::*;

#[component]
pub fn Placeholder(icon: String, message: String) -> Element {
    let palette = use_theme().palette();
    let style = card_style(palette);
    rsx! {
        div {
            style: "{style} text-align: center; color: {palette.text_secondary};",
            span { style: "font-size: 40px; display: block; margin-bottom: 8px;", "{icon}" }
            p { style: "margin: 0;", "{message}" }
        }
    }
}
