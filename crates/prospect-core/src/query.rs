use std::str::FromStr;

use crate::CoreError;

/// A latitude/longitude pair in decimal degrees.
///
/// Renders and parses as `"lat,lng"`, the format the provider expects for its
/// `location` request parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for Coordinates {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidCoordinates(s.to_string());

        let (lat, lng) = s.split_once(',').ok_or_else(invalid)?;
        let lat = lat.trim().parse::<f64>().map_err(|_| invalid())?;
        let lng = lng.trim().parse::<f64>().map_err(|_| invalid())?;

        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(invalid());
        }

        Ok(Self { lat, lng })
    }
}

/// The parameters of one prospecting run.
///
/// `city`/`state` only refine the free-text query; the nearby search needs
/// `location` and `radius_m` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Business or legal name to look for.
    pub name: String,
    pub location: Option<Coordinates>,
    /// Search radius in meters.
    pub radius_m: Option<u32>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl SearchQuery {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
            radius_m: None,
            city: None,
            state: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: Coordinates, radius_m: u32) -> Self {
        self.location = Some(location);
        self.radius_m = Some(radius_m);
        self
    }

    #[must_use]
    pub fn with_region(mut self, city: Option<String>, state: Option<String>) -> Self {
        self.city = city.filter(|c| !c.trim().is_empty());
        self.state = state.filter(|s| !s.trim().is_empty());
        self
    }

    /// Builds the free-text query: `"{name} in {city}, {state}"`, with each
    /// suffix present only when the corresponding field is set.
    #[must_use]
    pub fn text_query(&self) -> String {
        let mut query = self.name.clone();
        if let Some(city) = &self.city {
            query.push_str(" in ");
            query.push_str(city);
        }
        if let Some(state) = &self.state {
            query.push_str(", ");
            query.push_str(state);
        }
        query
    }

    /// Location and radius, when both are known.
    #[must_use]
    pub fn area(&self) -> Option<(Coordinates, u32)> {
        self.location.zip(self.radius_m)
    }

    /// Returns the `"{city}, {state}"` address used for geocoding, if both
    /// parts are known.
    #[must_use]
    pub fn region_address(&self) -> Option<String> {
        match (&self.city, &self.state) {
            (Some(city), Some(state)) => Some(format!("{city}, {state}")),
            _ => None,
        }
    }
}
