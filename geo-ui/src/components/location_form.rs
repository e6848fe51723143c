//! Form for choosing the analysed location.

use crate::components::{card_style, ErrorDisplay};
use crate::state::DashboardState;
use crate::theme::use_theme;
use dioxus::prelude::*;
use geo_api::Location;
use log::info;

/// Parse the optional population field. Blank means unknown.
fn parse_population(raw: &str) -> Result<Option<u64>, String> {
    let raw = raw.trim().replace(',', "");
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u64>()
        .map(Some)
        .map_err(|_| "Population must be a whole number".to_string())
}

/// Name, latitude, longitude and optional population inputs. Submitting
/// replaces the location every panel reads.
#[component]
pub fn LocationForm() -> Element {
    let mut state = use_context::<DashboardState>();
    let palette = use_theme().palette();

    let mut name = use_signal(String::new);
    let mut latitude = use_signal(String::new);
    let mut longitude = use_signal(String::new);
    let mut population = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);

    let on_analyze = move |_: MouseEvent| {
        let parsed = Location::parse(&name.read(), &latitude.read(), &longitude.read())
            .map_err(|e| e.to_string())
            .and_then(|location| parse_population(&population.read()).map(|p| (location, p)));
        match parsed {
            Ok((location, population)) => {
                info!("Analysing {}", location.name);
                form_error.set(None);
                state.population.set(population);
                state.location.set(Some(location));
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    let on_clear = move |_: MouseEvent| {
        form_error.set(None);
        state.location.set(None);
        state.population.set(None);
    };

    let card = card_style(palette);
    let input_style = format!(
        "padding: 8px 10px; border-radius: 6px; border: 1px solid {}; background: {}; color: {}; min-width: 0;",
        palette.border, palette.background_secondary, palette.text
    );
    let button_style = format!(
        "padding: 8px 16px; border-radius: 6px; border: none; cursor: pointer; background: {}; color: #ffffff; font-weight: 600;",
        palette.header_gradient
    );
    let form_error_message = form_error();

    rsx! {
        div {
            style: "{card}",
            div {
                style: "display: grid; grid-template-columns: 2fr 1fr 1fr 1fr auto auto; gap: 8px; align-items: end;",
                label {
                    style: "display: flex; flex-direction: column; gap: 4px; font-size: 12px;",
                    "Location"
                    input {
                        style: "{input_style}",
                        placeholder: "e.g. Koramangala, Bengaluru",
                        value: "{name}",
                        oninput: move |evt: Event<FormData>| name.set(evt.value()),
                    }
                }
                label {
                    style: "display: flex; flex-direction: column; gap: 4px; font-size: 12px;",
                    "Latitude"
                    input {
                        r#type: "number",
                        step: "any",
                        style: "{input_style}",
                        value: "{latitude}",
                        oninput: move |evt: Event<FormData>| latitude.set(evt.value()),
                    }
                }
                label {
                    style: "display: flex; flex-direction: column; gap: 4px; font-size: 12px;",
                    "Longitude"
                    input {
                        r#type: "number",
                        step: "any",
                        style: "{input_style}",
                        value: "{longitude}",
                        oninput: move |evt: Event<FormData>| longitude.set(evt.value()),
                    }
                }
                label {
                    style: "display: flex; flex-direction: column; gap: 4px; font-size: 12px;",
                    "Population (optional)"
                    input {
                        r#type: "number",
                        min: "0",
                        style: "{input_style}",
                        value: "{population}",
                        oninput: move |evt: Event<FormData>| population.set(evt.value()),
                    }
                }
                button {
                    r#type: "button",
                    style: "{button_style}",
                    onclick: on_analyze,
                    "🔍 Analyze"
                }
                button {
                    r#type: "button",
                    style: "padding: 8px 12px; border-radius: 6px; cursor: pointer; background: transparent; border: 1px solid {palette.border}; color: {palette.text};",
                    onclick: on_clear,
                    "Clear"
                }
            }
            if let Some(message) = form_error_message {
                ErrorDisplay { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_population() {
        assert_eq!(parse_population(""), Ok(None));
        assert_eq!(parse_population("  "), Ok(None));
        assert_eq!(parse_population("12,34,567"), Ok(Some(1_234_567)));
        assert!(parse_population("-5").is_err());
        assert!(parse_population("many").is_err());
    }
}
