//! Main RandomCoords client implementation.

use crate::error::{classify_response, Error, Result};
use crate::types::*;
use crate::validate::{
    validate_identifier, validate_limit, API_TOKEN_MAX_LENGTH, API_TOKEN_MIN_LENGTH,
    IDENTIFIER_MAX_LENGTH, IDENTIFIER_MIN_LENGTH, LIMIT_MAX, LIMIT_MIN,
};
use crate::version::build_user_agent;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Url;
use std::fmt;
use tracing::{debug, warn};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.randomcoords.com/v1/";

const API_TOKEN_HEADER: &str = "x-api-token";

/// Builder for constructing a [`Client`].
pub struct ClientBuilder {
    api_token: String,
    base_url: String,
    user_agent_suffix: Option<String>,
}

impl ClientBuilder {
    /// Create a new client builder with the given API token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent_suffix: None,
        }
    }

    /// Set the API base URL.
    ///
    /// Request paths are resolved relative to this URL, so it should normally
    /// end with a slash.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom User-Agent suffix.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Build the client.
    ///
    /// Fails if the API token is malformed or the base URL cannot be parsed.
    pub fn build(self) -> Result<Client> {
        validate_identifier(
            &self.api_token,
            "apiToken",
            API_TOKEN_MIN_LENGTH,
            API_TOKEN_MAX_LENGTH,
        )?;

        let base_url = Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("invalid base URL '{}': {}", self.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "base URL '{}' cannot have paths resolved against it",
                self.base_url
            )));
        }

        if base_url.scheme() != "https" {
            warn!(
                base_url = %base_url,
                "API base URL is not using HTTPS. This is insecure."
            );
        }

        let mut token = HeaderValue::from_str(&self.api_token)
            .map_err(|_| Error::Config("API token is not a valid header value".into()))?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_TOKEN_HEADER, token);

        // Redirects are reported as API errors, never followed with the token.
        let http_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .default_headers(headers)
            .user_agent(build_user_agent(self.user_agent_suffix.as_deref()))
            .build()?;

        Ok(Client {
            base_url,
            http_client,
        })
    }
}

/// The RandomCoords API client.
///
/// The client is immutable once built. Clones share the underlying
/// connection pool and can issue requests concurrently.
///
/// # Example
///
/// ```rust,no_run
/// use randomcoords::{Client, CoordinatesOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), randomcoords::Error> {
///     let client = Client::new("your-api-token")?;
///
///     let asia = client
///         .get_region_coordinates("asia", CoordinatesOptions::limit(5))
///         .await?;
///
///     for point in &asia.data {
///         println!("{}: {:?}", point.city, point.coordinates);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    base_url: Url,
    http_client: reqwest::Client,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &"<redacted>")
            .finish()
    }
}

impl Client {
    /// Create a client for the default API root.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_token).build()
    }

    /// Create a new client builder.
    pub fn builder(api_token: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_token)
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// List all regions.
    pub async fn get_regions(&self) -> Result<RegionsResponse> {
        self.get("coordinates/regions").await
    }

    /// List all countries.
    pub async fn get_countries(&self) -> Result<CountriesResponse> {
        self.get("coordinates/countries").await
    }

    /// Fetch random coordinates within a region.
    pub async fn get_region_coordinates(
        &self,
        region: &str,
        options: CoordinatesOptions,
    ) -> Result<RegionCoordinatesResponse> {
        validate_identifier(region, "region", IDENTIFIER_MIN_LENGTH, IDENTIFIER_MAX_LENGTH)?;
        let limit = validate_limit(options.limit, LIMIT_MIN, LIMIT_MAX)?;

        self.get(&format!("coordinates/regions/{}?limit={}", region, limit))
            .await
    }

    /// Fetch random coordinates within a country.
    pub async fn get_country_coordinates(
        &self,
        country: &str,
        options: CoordinatesOptions,
    ) -> Result<CountryCoordinatesResponse> {
        validate_identifier(country, "country", IDENTIFIER_MIN_LENGTH, IDENTIFIER_MAX_LENGTH)?;
        let limit = validate_limit(options.limit, LIMIT_MIN, LIMIT_MAX)?;

        self.get(&format!("coordinates/countries/{}?limit={}", country, limit))
            .await
    }

    // === Internal methods ===

    fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Config(format!("cannot resolve '{}': {}", path, e)))
    }

    /// Send one GET request and classify the buffered response.
    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.resolve(path)?;
        debug!(url = %url, "Sending request");

        let response = self.http_client.get(url.clone()).send().await?;

        let status = response.status().as_u16();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));

        let body = response.bytes().await?;
        debug!(
            url = %url,
            status = status,
            is_json = is_json,
            bytes = body.len(),
            "Received response"
        );

        classify_response(status, is_json, &body, url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "test-token-123456";

    #[test]
    fn test_default_base_url() {
        let client = Client::new(TOKEN).unwrap();
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_against_base() {
        let client = Client::new(TOKEN).unwrap();
        let url = client.resolve("coordinates/regions/asia?limit=10").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.randomcoords.com/v1/coordinates/regions/asia?limit=10"
        );
    }

    #[test]
    fn test_build_rejects_bad_token() {
        let err = Client::new("short").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid 'apiToken': must be a non-empty string without spaces, between 10 and 700 characters long."
        );
    }

    #[test]
    fn test_build_rejects_bad_base_url() {
        let err = Client::builder(TOKEN).base_url("not a url").build().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_build_rejects_opaque_base_url() {
        let err = Client::builder(TOKEN).base_url("mailto:x").build().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_build_rejects_unrepresentable_token() {
        let err = Client::new("token\nwith-newline").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = Client::new(TOKEN).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains(TOKEN));
        assert!(debug.contains("<redacted>"));
    }
}
