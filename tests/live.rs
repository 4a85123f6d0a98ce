//! End-to-end tests against the real API.
//!
//! Run with: `RANDOMCOORDS_API_TOKEN=your-token cargo test --test live -- --ignored`

use randomcoords::{Client, CoordinatesOptions};

fn client() -> Client {
    let token =
        std::env::var("RANDOMCOORDS_API_TOKEN").expect("RANDOMCOORDS_API_TOKEN must be set");
    Client::new(token).unwrap()
}

#[tokio::test]
#[ignore = "requires RANDOMCOORDS_API_TOKEN and network access"]
async fn live_get_regions() {
    let response = client().get_regions().await.unwrap();

    assert_eq!(response.response_type, "regions");
    assert!(response.results > 0);
    assert!(!response.data[0].id.is_empty());
    assert!(!response.data[0].name.is_empty());
}

#[tokio::test]
#[ignore = "requires RANDOMCOORDS_API_TOKEN and network access"]
async fn live_get_countries() {
    let response = client().get_countries().await.unwrap();

    assert_eq!(response.response_type, "countries");
    assert!(response.results > 0);
    assert!(!response.data[0].iso2.is_empty());
}

#[tokio::test]
#[ignore = "requires RANDOMCOORDS_API_TOKEN and network access"]
async fn live_get_region_coordinates() {
    let response = client()
        .get_region_coordinates("asia", CoordinatesOptions::limit(10))
        .await
        .unwrap();

    assert_eq!(response.id, "asia");
    assert_eq!(response.response_type, "region");
    assert_eq!(response.results, 10);
    assert_eq!(response.data.len(), 10);
    assert!(!response.data[0].city.is_empty());
}

#[tokio::test]
#[ignore = "requires RANDOMCOORDS_API_TOKEN and network access"]
async fn live_get_country_coordinates() {
    let response = client()
        .get_country_coordinates("united-states", CoordinatesOptions::limit(10))
        .await
        .unwrap();

    assert_eq!(response.id, "united-states");
    assert_eq!(response.response_type, "country");
    assert!(!response.regions.is_empty());
    assert_eq!(response.results, 10);
    assert!(response
        .data
        .iter()
        .all(|c| !c.city.is_empty() && !c.state.is_empty()));
}

#[tokio::test]
#[ignore = "requires network access"]
async fn live_unauthorized() {
    let client = Client::new("invalid-token").unwrap();
    let err = client.get_regions().await.unwrap_err();

    assert_eq!(err.status(), Some(401));
}
