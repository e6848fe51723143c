//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// When set, a close button is shown that calls this handler
    pub on_dismiss: Option<EventHandler<()>>,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "display: flex; align-items: center; gap: 8px; padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            span { "⚠️" }
            span { style: "flex: 1;", "{props.message}" }
            if let Some(on_dismiss) = props.on_dismiss {
                button {
                    aria_label: "Dismiss error",
                    style: "background: none; border: none; color: #C62828; cursor: pointer; font-size: 16px;",
                    onclick: move |_| on_dismiss.call(()),
                    "✕"
                }
            }
        }
    }
}
