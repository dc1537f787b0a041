use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::time::Duration;

use crate::config::NominatimConfig;
use crate::domain::Coordinate;

const USER_AGENT: &str = "tourscout/0.1.0";

/// Nominatim encodes coordinates as strings
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

/// Geocode a free-text place name to coordinates.
///
/// Sends a single-result search to the Nominatim API. Returns `Ok(None)`
/// when the service has no match for the place; transport and parse
/// failures surface as errors.
///
/// # Arguments
/// * `place` - Free-text place name (e.g., "Tirupati")
/// * `config` - Endpoint URL and timeout
pub fn geocode_place(place: &str, config: &NominatimConfig) -> Result<Option<Coordinate>> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .context("Failed to create HTTP client")?;

    let response = client
        .get(&config.url)
        .query(&[("q", place), ("format", "json"), ("limit", "1")])
        .send()
        .context("Failed to send request to Nominatim API")?;

    if !response.status().is_success() {
        bail!("Nominatim API returned error status: {}", response.status());
    }

    let results: Vec<SearchResult> = response
        .json()
        .context("Failed to parse Nominatim JSON response")?;

    let Some(result) = results.into_iter().next() else {
        return Ok(None);
    };

    let lat: f64 = result
        .lat
        .parse()
        .context("Failed to parse latitude from Nominatim response")?;
    let lon: f64 = result
        .lon
        .parse()
        .context("Failed to parse longitude from Nominatim response")?;

    Ok(Some(Coordinate::new(lat, lon)))
}
