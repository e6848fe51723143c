//! Panel title row.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PanelHeaderProps {
    pub icon: String,
    pub title: String,
    /// Small badge shown on the right (e.g. a currency note)
    #[props(default = String::new())]
    pub badge: String,
}

#[component]
pub fn PanelHeader(props: PanelHeaderProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
            h2 {
                style: "margin: 0; font-size: 20px; display: flex; align-items: center; gap: 8px;",
                span { "{props.icon}" }
                "{props.title}"
            }
            if !props.badge.is_empty() {
                span {
                    style: "font-size: 12px; padding: 4px 10px; border-radius: 999px; border: 1px solid currentColor; opacity: 0.8;",
                    "{props.badge}"
                }
            }
        }
    }
}
