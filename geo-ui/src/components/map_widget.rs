//! Reference satellite imagery for the selected location.
//!
//! The map container stays mounted once the script is ready, with any
//! status view laid over it, so a redraw never races the element's creation.

use crate::js_bridge;
use crate::state::DashboardState;
use crate::theme::use_theme;
use dioxus::prelude::*;
use geo_api::config;
use geo_state::map::{
    info_window_lines, map_status, MapStatus, ScriptState, RENDER_FAILED_MESSAGE,
    SCRIPT_FAILED_MESSAGE,
};
use log::{info, warn};

const MAP_CONTAINER_ID: &str = "reference-map";

const OVERLAY_STYLE: &str = "position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; background-color: #f3f4f6; border-radius: 8px; padding: 20px; z-index: 20;";

#[component]
pub fn MapWidget() -> Element {
    let state = use_context::<DashboardState>();
    let palette = use_theme().palette();
    let api_key = use_hook(config::maps_api_key);
    let mut script = use_signal(|| ScriptState::Loading);
    let mut render_error = use_signal(|| None::<String>);

    let key_for_load = api_key.clone();
    use_effect(move || {
        let Ok(key) = key_for_load.clone() else {
            warn!("Google Maps API key not configured");
            return;
        };
        spawn(async move {
            match js_bridge::load_google_maps(&key).await {
                Ok(()) => script.set(ScriptState::Loaded),
                Err(e) => {
                    warn!("Google Maps unavailable: {}", e);
                    script.set(ScriptState::Failed(SCRIPT_FAILED_MESSAGE.to_string()));
                }
            }
        });
    });

    // Draw whenever the script becomes ready or the location changes.
    use_effect(move || {
        let ready = script() == ScriptState::Loaded;
        let location = (state.location)();
        let Some(location) = location.filter(|_| ready) else {
            return;
        };
        let coordinates = location.coordinates();
        if !coordinates.is_valid() {
            return;
        }
        let (title, position) = info_window_lines(&location.name, coordinates);
        match js_bridge::render_map(MAP_CONTAINER_ID, coordinates, &title, &position) {
            Ok(()) => {
                info!("Map centred on {}", position);
                render_error.set(None);
            }
            Err(e) => {
                warn!("Map render failed: {}", e);
                render_error.set(Some(RENDER_FAILED_MESSAGE.to_string()));
            }
        }
    });

    let coordinates = (state.location)().map(|l| l.coordinates());
    let status = map_status(
        &api_key,
        &script.read(),
        coordinates,
        render_error.read().as_deref(),
    );
    let container_mounted = script() == ScriptState::Loaded;

    let overlay = if let Some(message) = status.unavailable_message() {
        rsx! {
            div {
                style: "{OVERLAY_STYLE} border: 2px dashed #d1d5db;",
                div { style: "font-size: 48px; margin-bottom: 16px;", "⚠️" }
                p { style: "font-size: 14px; font-weight: 600; color: #111827; margin: 0 0 8px 0;", "Map Unavailable" }
                p { style: "font-size: 12px; color: #4b5563; text-align: center; max-width: 400px; margin: 0;", "{message}" }
            }
        }
    } else {
        match &status {
            MapStatus::Loading => rsx! {
                div {
                    style: "{OVERLAY_STYLE}",
                    div {
                        style: "width: 32px; height: 32px; border: 3px solid #e5e7eb; border-top: 3px solid {palette.primary}; border-radius: 50%; animation: spin 1s linear infinite; margin-bottom: 12px;",
                    }
                    p { style: "font-size: 14px; color: #4b5563; margin: 0;", "Loading map..." }
                }
            },
            MapStatus::NoLocation => rsx! {
                div {
                    style: "{OVERLAY_STYLE} border: 2px dashed #d1d5db;",
                    p { style: "font-size: 14px; color: #4b5563; margin: 0;", "Enter a location to view satellite imagery" }
                }
            },
            _ => rsx! {
                div {
                    style: "position: absolute; top: 16px; left: 16px; z-index: 10; background-color: rgba(255, 255, 255, 0.95); border-radius: 8px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); padding: 12px 16px; border: 1px solid #e5e7eb;",
                    div { style: "font-size: 12px; font-weight: 600; color: #111827; margin-bottom: 4px;", "Satellite View (Reference Imagery)" }
                    div { style: "font-size: 12px; color: #4b5563;", "Source: Google Maps" }
                }
            },
        }
    };

    rsx! {
        div {
            style: "position: relative; width: 100%; height: 400px; border-radius: 8px; overflow: hidden; margin-bottom: 20px;",
            if container_mounted {
                div {
                    id: MAP_CONTAINER_ID,
                    style: "width: 100%; height: 100%;",
                }
            }
            {overlay}
        }
    }
}
