//! Status of the reference-imagery map widget.

use geo_api::config::ConfigError;
use geo_api::location::Coordinates;

/// Label used for the marker when the location has no name.
pub const DEFAULT_MARKER_LABEL: &str = "Selected Locality";

pub const SCRIPT_FAILED_MESSAGE: &str =
    "Failed to load Google Maps. Please check your API key and network connection.";

pub const RENDER_FAILED_MESSAGE: &str = "Failed to initialize map. Please try again.";

/// Progress of the external maps script.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptState {
    Loading,
    Loaded,
    Failed(String),
}

/// What the map widget renders.
#[derive(Debug, Clone, PartialEq)]
pub enum MapStatus {
    /// No API key. Terminal until the app is rebuilt with one.
    MissingConfig(String),
    /// The script failed to load. Terminal, not retried.
    ScriptFailed(String),
    Loading,
    /// Script ready, nothing to show yet.
    NoLocation,
    /// Script ready and coordinates present; `error` is set when drawing
    /// the map failed.
    Ready { error: Option<String> },
}

impl MapStatus {
    /// Message for the "Map Unavailable" view, if this status shows it.
    pub fn unavailable_message(&self) -> Option<&str> {
        match self {
            MapStatus::MissingConfig(message) | MapStatus::ScriptFailed(message) => {
                Some(message.as_str())
            }
            MapStatus::Ready {
                error: Some(message),
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Resolve the widget status. Configuration problems take precedence over
/// script progress, which takes precedence over missing coordinates.
pub fn map_status(
    api_key: &Result<String, ConfigError>,
    script: &ScriptState,
    coordinates: Option<Coordinates>,
    render_error: Option<&str>,
) -> MapStatus {
    if let Err(e) = api_key {
        return MapStatus::MissingConfig(e.to_string());
    }
    match script {
        ScriptState::Failed(message) => MapStatus::ScriptFailed(message.clone()),
        ScriptState::Loading => MapStatus::Loading,
        ScriptState::Loaded => match coordinates.filter(Coordinates::is_valid) {
            None => MapStatus::NoLocation,
            Some(_) => MapStatus::Ready {
                error: render_error.map(str::to_string),
            },
        },
    }
}

/// Text of the marker's info popup.
pub fn info_window_lines(label: &str, coordinates: Coordinates) -> (String, String) {
    let label = if label.trim().is_empty() {
        DEFAULT_MARKER_LABEL
    } else {
        label
    };
    (
        label.to_string(),
        format!(
            "Lat: {:.6}, Lng: {:.6}",
            coordinates.latitude, coordinates.longitude
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords() -> Option<Coordinates> {
        Some(Coordinates {
            latitude: 12.9716,
            longitude: 77.5946,
        })
    }

    #[test]
    fn test_missing_key_takes_precedence() {
        let status = map_status(
            &Err(ConfigError::MissingMapsKey),
            &ScriptState::Loaded,
            coords(),
            None,
        );
        assert!(matches!(status, MapStatus::MissingConfig(_)));
        assert!(status.unavailable_message().unwrap().contains("API key not configured"));
    }

    #[test]
    fn test_script_progress() {
        let key = Ok("key".to_string());
        assert_eq!(map_status(&key, &ScriptState::Loading, coords(), None), MapStatus::Loading);
        assert_eq!(
            map_status(&key, &ScriptState::Failed(SCRIPT_FAILED_MESSAGE.into()), coords(), None),
            MapStatus::ScriptFailed(SCRIPT_FAILED_MESSAGE.into())
        );
    }

    #[test]
    fn test_no_location_and_ready() {
        let key = Ok("key".to_string());
        assert_eq!(map_status(&key, &ScriptState::Loaded, None, None), MapStatus::NoLocation);
        assert_eq!(
            map_status(&key, &ScriptState::Loaded, coords(), None),
            MapStatus::Ready { error: None }
        );
        let failed = map_status(&key, &ScriptState::Loaded, coords(), Some(RENDER_FAILED_MESSAGE));
        assert_eq!(failed.unavailable_message(), Some(RENDER_FAILED_MESSAGE));
    }

    #[test]
    fn test_info_window_lines() {
        let (title, position) = info_window_lines("", coords().unwrap());
        assert_eq!(title, "Selected Locality");
        assert_eq!(position, "Lat: 12.971600, Lng: 77.594600");
    }
}
