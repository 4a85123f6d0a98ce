//! Full SDK Demo - Exercises every endpoint and the error paths
//!
//! Run with: cargo run --example full_demo

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use randomcoords::{Client, CoordinatesOptions, Error, DEFAULT_BASE_URL, SDK_VERSION};
use std::time::Duration;

// Configuration - Set via environment variables
fn get_api_token() -> String {
    std::env::var("RANDOMCOORDS_API_TOKEN")
        .expect("RANDOMCOORDS_API_TOKEN environment variable is required")
}
fn get_base_url() -> String {
    std::env::var("RANDOMCOORDS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into())
}

fn header(text: &str) {
    println!();
    println!("{}", format!(" {} ", text).on_blue().bold());
    println!();
}

fn info(label: &str, value: &str) {
    println!("  {}: {}", label.dimmed(), value);
}

fn success(text: &str) {
    println!("{} {}", "✔".green(), text);
}

fn error(text: &str) {
    println!("{} {}", "✖".red(), text);
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn report(err: &Error) {
    match err {
        Error::Api { status, url, .. } => error(&format!("{} ({} {})", err, status, url)),
        _ => error(&err.to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    header("Configuration");

    let api_token = get_api_token();
    let base_url = get_base_url();
    info("SDK Version", SDK_VERSION);
    info("Base URL", &base_url);
    info(
        "API Token",
        &format!("{}...", api_token.chars().take(4).collect::<String>()),
    );

    let client = Client::builder(&api_token)
        .base_url(&base_url)
        .user_agent_suffix("full-demo")
        .build()?;

    // ========== Listings ==========
    header("Regions and Countries");

    let pb = spinner("Fetching regions...");
    let regions = client.get_regions().await;
    pb.finish_and_clear();
    match regions {
        Ok(r) => {
            success(&format!("{} regions", r.results));
            for region in &r.data {
                info(&region.id, &region.name);
            }
        }
        Err(e) => report(&e),
    }

    let pb = spinner("Fetching countries...");
    let countries = client.get_countries().await;
    pb.finish_and_clear();
    match countries {
        Ok(c) => {
            success(&format!("{} countries", c.results));
            for country in c.data.iter().take(5) {
                info(&country.iso2, &country.name);
            }
        }
        Err(e) => report(&e),
    }

    // ========== Coordinates ==========
    header("Coordinates");

    let pb = spinner("Fetching coordinates in Asia...");
    let asia = client
        .get_region_coordinates("asia", CoordinatesOptions::limit(10))
        .await;
    pb.finish_and_clear();
    match asia {
        Ok(r) => {
            success(&format!("{}: {} coordinates", r.name, r.results));
            for point in &r.data {
                info(
                    &format!("{}, {}", point.city, point.country),
                    &format!("{:.4}, {:.4}", point.longitude(), point.latitude()),
                );
            }
        }
        Err(e) => report(&e),
    }

    let pb = spinner("Fetching coordinates in the United States...");
    let usa = client
        .get_country_coordinates("united-states", CoordinatesOptions::limit(10))
        .await;
    pb.finish_and_clear();
    match usa {
        Ok(r) => {
            success(&format!(
                "{} ({}): {} coordinates, regions {}",
                r.name,
                r.iso2,
                r.results,
                r.regions.join(", ")
            ));
            for point in &r.data {
                info(
                    &format!("{}, {}", point.city, point.state),
                    &format!("{:.4}, {:.4}", point.longitude(), point.latitude()),
                );
            }
        }
        Err(e) => report(&e),
    }

    // ========== Error handling ==========
    header("Error Handling");

    match client
        .get_region_coordinates("united states", CoordinatesOptions::default())
        .await
    {
        Ok(_) => error("expected a validation error"),
        Err(e) => success(&format!("validation: {}", e)),
    }

    match client
        .get_country_coordinates("canada", CoordinatesOptions::limit(1000))
        .await
    {
        Ok(_) => error("expected a validation error"),
        Err(e) => success(&format!("validation: {}", e)),
    }

    match client
        .get_region_coordinates("atlantis", CoordinatesOptions::default())
        .await
    {
        Ok(_) => error("expected an API error"),
        Err(e) => success(&format!("api: {} (status {:?})", e, e.status())),
    }

    println!();
    Ok(())
}
