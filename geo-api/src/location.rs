use std::fmt;

/// The geographic point of interest driving every analysis request.
#[derive(Debug, PartialEq, Clone)]
pub struct Location {
    /// Locality name or address, sent to the backend as `location`.
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A latitude/longitude pair, used by the map widget.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Reasons a location form entry is rejected.
#[derive(Debug, PartialEq, Clone)]
pub enum LocationError {
    EmptyName,
    InvalidLatitude(String),
    InvalidLongitude(String),
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::EmptyName => write!(f, "Please enter a location name"),
            LocationError::InvalidLatitude(raw) => {
                write!(f, "Latitude must be a number between -90 and 90 (got '{}')", raw)
            }
            LocationError::InvalidLongitude(raw) => {
                write!(f, "Longitude must be a number between -180 and 180 (got '{}')", raw)
            }
        }
    }
}

impl std::error::Error for LocationError {}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Build a location from raw form input.
    ///
    /// The name is trimmed and must be non-empty; coordinates must parse as
    /// finite numbers within the usual geographic ranges.
    pub fn parse(name: &str, latitude: &str, longitude: &str) -> Result<Self, LocationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LocationError::EmptyName);
        }
        let latitude = parse_coordinate(latitude, 90.0)
            .ok_or_else(|| LocationError::InvalidLatitude(latitude.trim().to_string()))?;
        let longitude = parse_coordinate(longitude, 180.0)
            .ok_or_else(|| LocationError::InvalidLongitude(longitude.trim().to_string()))?;
        Ok(Self::new(name, latitude, longitude))
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

impl Coordinates {
    /// Whether both components are finite and in range.
    pub fn is_valid(&self) -> bool {
        in_range(self.latitude, 90.0) && in_range(self.longitude, 180.0)
    }
}

fn in_range(value: f64, limit: f64) -> bool {
    value.is_finite() && value.abs() <= limit
}

fn parse_coordinate(raw: &str, limit: f64) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| in_range(*value, limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_location() {
        let location = Location::parse("  Bengaluru ", "12.9716", "77.5946").unwrap();
        assert_eq!(location.name, "Bengaluru");
        assert!((location.latitude - 12.9716).abs() < f64::EPSILON);
        assert!((location.longitude - 77.5946).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        assert_eq!(
            Location::parse("   ", "12.0", "77.0"),
            Err(LocationError::EmptyName)
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            Location::parse("Nowhere", "91", "0"),
            Err(LocationError::InvalidLatitude("91".to_string()))
        );
        assert_eq!(
            Location::parse("Nowhere", "0", "abc"),
            Err(LocationError::InvalidLongitude("abc".to_string()))
        );
        assert!(Location::parse("Nowhere", "NaN", "0").is_err());
    }

    #[test]
    fn test_coordinates_validity() {
        assert!(Location::new("Pune", 18.52, 73.85).coordinates().is_valid());
        let bad = Coordinates {
            latitude: f64::INFINITY,
            longitude: 0.0,
        };
        assert!(!bad.is_valid());
    }
}
