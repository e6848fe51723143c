//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The land-cover chart lives in `assets/js/land-cover-chart.js` and is
//! evaluated as a global (no ES modules) exposing `window.renderLandCoverChart`.
//! The map is drawn directly against the Google Maps JS API once its script
//! has been loaded through [`crate::script_loader`].

use crate::script_loader::{self, global_path_exists, ExternalScript};
use geo_api::location::Coordinates;
use geo_state::script_cache::SharedLoad;
use wasm_bindgen::JsValue;

static LAND_COVER_CHART_JS: &str = include_str!("../assets/js/land-cover-chart.js");

pub const D3_URL: &str = "https://d3js.org/d3.v7.min.js";

const D3: ExternalScript = ExternalScript {
    existing_selector: "script[src*=\"d3js.org\"]",
    is_present: d3_present,
};

const GOOGLE_MAPS: ExternalScript = ExternalScript {
    existing_selector: "script[src*=\"maps.googleapis.com\"]",
    is_present: google_maps_present,
};

fn d3_present() -> bool {
    global_path_exists(&["d3"])
}

fn google_maps_present() -> bool {
    global_path_exists(&["google", "maps"])
}

/// A Rust string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Geo JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Execute JS and surface a thrown exception as an error string.
pub fn try_js(code: &str) -> Result<JsValue, String> {
    js_sys::eval(code).map_err(|e| {
        e.as_string()
            .or_else(|| {
                js_sys::Reflect::get(&e, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", e))
    })
}

/// Evaluate the chart script at global scope. Safe to call more than once.
pub fn init_charts() {
    if global_path_exists(&["__geoChartsReady"]) {
        return;
    }
    let store_js = format!(
        "window.__geoChartScripts = {};",
        js_string(LAND_COVER_CHART_JS)
    );
    call_js(&store_js);
    call_js(
        r#"
        (0, eval)(window.__geoChartScripts);
        delete window.__geoChartScripts;
        window.__geoChartsReady = true;
        console.log('Geo charts initialized');
        "#,
    );
}

/// Start (or join) loading D3.js.
pub fn load_d3() -> SharedLoad {
    script_loader::load_script(D3_URL, D3)
}

/// Render the land-cover chart into `container_id`.
///
/// Uses a polling loop to wait for D3.js to load, the chart script to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_land_cover_chart(container_id: &str, data_json: &str, config_json: &str) {
    let id = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                attempts += 1;
                if (window.__geoChartsReady &&
                    typeof d3 !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderLandCoverChart({id}, {data}, {config});
                    }} catch(e) {{ console.error('[Geo] renderLandCoverChart error:', e); }}
                }} else if (attempts > 100) {{
                    clearInterval(poll);
                    console.warn('[Geo] gave up waiting to render', {id});
                }}
            }}, 100);
        }})();
        "#,
    ));
}

pub fn destroy_land_cover_chart(container_id: &str) {
    call_js(&format!(
        "if (window.destroyLandCoverChart) {{ window.destroyLandCoverChart({}); }}",
        js_string(container_id)
    ));
}

pub fn maps_script_url(api_key: &str) -> String {
    format!(
        "https://maps.googleapis.com/maps/api/js?key={}&libraries=places",
        api_key
    )
}

/// Start (or join) loading the Google Maps JS API.
pub fn load_google_maps(api_key: &str) -> SharedLoad {
    script_loader::load_script(&maps_script_url(api_key), GOOGLE_MAPS)
}

/// Draw a hybrid satellite map centred on `coordinates` with a single marker
/// whose info window shows `title` and `position`. Any marker previously
/// placed in the same container is removed first.
pub fn render_map(
    container_id: &str,
    coordinates: Coordinates,
    title: &str,
    position: &str,
) -> Result<(), String> {
    let id = js_string(container_id);
    let title = js_string(title);
    let position = js_string(position);
    let lat = coordinates.latitude;
    let lng = coordinates.longitude;
    try_js(&format!(
        r#"
        (function() {{
            var el = document.getElementById({id});
            if (!el) {{ throw new Error('map container not found'); }}
            var g = window.google.maps;
            var center = {{ lat: {lat}, lng: {lng} }};
            var map = new g.Map(el, {{
                center: center,
                zoom: 15,
                mapTypeId: g.MapTypeId.HYBRID,
                mapTypeControl: true,
                mapTypeControlOptions: {{
                    style: g.MapTypeControlStyle.HORIZONTAL_BAR,
                    position: g.ControlPosition.TOP_RIGHT,
                    mapTypeIds: [g.MapTypeId.HYBRID, g.MapTypeId.SATELLITE, g.MapTypeId.ROADMAP]
                }},
                streetViewControl: false,
                fullscreenControl: true,
                zoomControl: true,
                scaleControl: true
            }});

            window.__geoMapMarkers = window.__geoMapMarkers || {{}};
            var previous = window.__geoMapMarkers[{id}];
            if (previous) {{ previous.setMap(null); }}

            var marker = new g.Marker({{
                position: center,
                map: map,
                title: {title},
                animation: g.Animation.DROP,
                icon: {{
                    url: 'https://maps.google.com/mapfiles/ms/icons/red-dot.png',
                    scaledSize: new g.Size(40, 40)
                }}
            }});

            var content = document.createElement('div');
            content.style.padding = '8px';
            var heading = document.createElement('strong');
            heading.textContent = {title};
            content.appendChild(heading);
            content.appendChild(document.createElement('br'));
            var coords = document.createElement('small');
            coords.textContent = {position};
            content.appendChild(coords);

            var info = new g.InfoWindow({{ content: content }});
            marker.addListener('click', function() {{ info.open(map, marker); }});
            window.__geoMapMarkers[{id}] = marker;
        }})();
        "#,
    ))
    .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes_quotes() {
        assert_eq!(js_string("O'Hare \"T1\""), r#""O'Hare \"T1\"""#);
        assert_eq!(js_string("a\nb"), r#""a\nb""#);
    }

    #[test]
    fn test_maps_script_url() {
        assert_eq!(
            maps_script_url("abc123"),
            "https://maps.googleapis.com/maps/api/js?key=abc123&libraries=places"
        );
    }
}
