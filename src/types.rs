//! API types for the RandomCoords SDK.

use serde::{Deserialize, Serialize};

/// Options for the coordinate listing operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoordinatesOptions {
    /// Number of coordinates to return, 1 to 100. Defaults to 1.
    pub limit: Option<i64>,
}

impl CoordinatesOptions {
    /// Options requesting `limit` coordinates.
    pub fn limit(limit: i64) -> Self {
        Self { limit: Some(limit) }
    }
}

/// A geographic region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    /// Region slug, e.g. `asia`.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// A country.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    /// Country slug, e.g. `united-states`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// ISO 3166-1 alpha-2 code.
    pub iso2: String,
}

/// A random coordinate within a region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    /// Country name.
    pub country: String,
    /// State or province, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// City name.
    pub city: String,
    /// Country slug.
    pub id: String,
    /// ISO 3166-1 alpha-2 code of the country.
    pub iso2: String,
    /// `[longitude, latitude]`.
    pub coordinates: [f64; 2],
}

impl Coordinate {
    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// A random coordinate within a country.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryCoordinate {
    /// City name.
    pub city: String,
    /// State or province.
    pub state: String,
    /// `[longitude, latitude]`.
    pub coordinates: [f64; 2],
}

impl CountryCoordinate {
    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Response from listing regions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionsResponse {
    /// Response kind, `"regions"` from the current API.
    #[serde(rename = "type")]
    pub response_type: String,
    /// Number of entries in `data`, as reported by the server.
    pub results: u32,
    /// Regions.
    pub data: Vec<Region>,
}

/// Response from listing countries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountriesResponse {
    /// Response kind, `"countries"` from the current API.
    #[serde(rename = "type")]
    pub response_type: String,
    /// Number of entries in `data`, as reported by the server.
    pub results: u32,
    /// Countries.
    pub data: Vec<Country>,
}

/// Response from fetching coordinates for a region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionCoordinatesResponse {
    /// Region slug.
    pub id: String,
    /// Region display name.
    pub name: String,
    /// Response kind, `"region"` from the current API.
    #[serde(rename = "type")]
    pub response_type: String,
    /// Number of entries in `data`, as reported by the server.
    pub results: u32,
    /// Coordinates.
    pub data: Vec<Coordinate>,
}

/// Response from fetching coordinates for a country.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryCoordinatesResponse {
    /// Country slug.
    pub id: String,
    /// Country display name.
    pub name: String,
    /// Response kind, `"country"` from the current API.
    #[serde(rename = "type")]
    pub response_type: String,
    /// Regions the country belongs to.
    pub regions: Vec<String>,
    /// ISO 3166-1 alpha-2 code.
    pub iso2: String,
    /// Number of entries in `data`, as reported by the server.
    pub results: u32,
    /// Coordinates.
    pub data: Vec<CountryCoordinate>,
}
