//! Rust SDK for the RandomCoords API.
//!
//! RandomCoords serves random geographic coordinates, scoped to a world
//! region or to a single country.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use randomcoords::{Client, CoordinatesOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), randomcoords::Error> {
//!     let client = Client::new("your-api-token")?;
//!
//!     let regions = client.get_regions().await?;
//!     println!("{} regions", regions.results);
//!
//!     let usa = client
//!         .get_country_coordinates("united-states", CoordinatesOptions::limit(10))
//!         .await?;
//!     for point in &usa.data {
//!         println!("{}, {}: {:?}", point.city, point.state, point.coordinates);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Parameters are validated before any request is sent; see [`Error`] for the
//! failure modes.

mod client;
mod error;
mod types;
mod validate;
mod version;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use error::{
    fallback_message, Error, Result, SERVER_ERROR_MESSAGE, TOO_MANY_REQUESTS_MESSAGE,
    UNEXPECTED_ERROR_MESSAGE,
};
pub use types::*;
pub use validate::{
    validate_identifier, validate_limit, API_TOKEN_MAX_LENGTH, API_TOKEN_MIN_LENGTH,
    DEFAULT_LIMIT, IDENTIFIER_MAX_LENGTH, IDENTIFIER_MIN_LENGTH, LIMIT_MAX, LIMIT_MIN,
};
pub use version::{build_user_agent, SDK_VERSION};
