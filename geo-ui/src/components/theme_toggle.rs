//! One button per theme.

use crate::theme::use_theme;
use dioxus::prelude::*;
use geo_state::theme::Palette;

fn button_style(palette: &Palette, active: bool) -> String {
    let (border, background, color) = if active {
        (palette.primary, palette.primary, "#ffffff")
    } else {
        (palette.border, "transparent", palette.text)
    };
    format!(
        "padding: 6px 10px; border-radius: 8px; cursor: pointer; border: 1px solid {}; background: {}; color: {};",
        border, background, color
    )
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let current = theme.theme();
    let palette = theme.palette();
    let next = current.next().theme();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            div {
                style: "font-size: 12px; text-transform: uppercase; letter-spacing: 0.05em; color: {palette.text_secondary};",
                "Theme"
            }
            div {
                style: "display: flex; gap: 6px;",
                for option in theme.themes().iter() {
                    button {
                        key: "{option.id}",
                        title: "{option.name}",
                        aria_label: "Switch to {option.name} theme",
                        style: "{button_style(palette, option.id == current)}",
                        onclick: move |_| {
                            theme.set_theme(option.id.as_str());
                        },
                        span { style: "margin-right: 4px;", "{option.icon}" }
                        span { "{option.name}" }
                    }
                }
                button {
                    title: "Next theme: {next.name}",
                    aria_label: "Cycle theme",
                    style: "{button_style(palette, false)}",
                    onclick: move |_| {
                        theme.toggle();
                    },
                    "⟳"
                }
            }
        }
    }
}
