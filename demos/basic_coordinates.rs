//! Basic coordinates example.
//!
//! This example fetches a handful of random coordinates in Asia.
//!
//! Run with: `RANDOMCOORDS_API_TOKEN=your-token cargo run --example basic_coordinates`

use randomcoords::{Client, CoordinatesOptions};

#[tokio::main]
async fn main() -> Result<(), randomcoords::Error> {
    // Create a client with your API token
    let api_token =
        std::env::var("RANDOMCOORDS_API_TOKEN").expect("RANDOMCOORDS_API_TOKEN must be set");
    let client = Client::new(api_token)?;

    let response = client
        .get_region_coordinates("asia", CoordinatesOptions::limit(5))
        .await?;

    println!("{} ({} results)", response.name, response.results);
    for point in &response.data {
        println!(
            "  {}, {}: lon {:.4}, lat {:.4}",
            point.city,
            point.country,
            point.longitude(),
            point.latitude()
        );
    }

    Ok(())
}
