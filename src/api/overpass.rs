use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::config::OverpassConfig;
use crate::domain::Coordinate;

const USER_AGENT: &str = "tourscout/0.1.0";

/// Raw Overpass API response
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A single element from Overpass
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub type_: String,
    pub id: u64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
}

/// Build an Overpass QL query selecting nodes with one tag within a radius
fn build_query(origin: Coordinate, tag_key: &str, tag_value: &str, radius_m: u32) -> String {
    format!(
        "[out:json];\nnode(around:{radius},{lat},{lon})[\"{key}\"=\"{value}\"];\nout;",
        radius = radius_m,
        lat = origin.lat,
        lon = origin.lon,
        key = tag_key,
        value = tag_value,
    )
}

/// Fetch map features near a coordinate matching one tag key/value pair.
///
/// This is the system's sole defensive boundary: a non-success status, an
/// empty or whitespace-only body, an unparseable body, or any transport
/// fault all yield an empty sequence. Callers cannot distinguish a service
/// outage from a genuine absence of features.
pub fn fetch_nearby(
    origin: Coordinate,
    tag_key: &str,
    tag_value: &str,
    radius_m: u32,
    config: &OverpassConfig,
) -> Vec<Element> {
    try_fetch_nearby(origin, tag_key, tag_value, radius_m, config).unwrap_or_default()
}

fn try_fetch_nearby(
    origin: Coordinate,
    tag_key: &str,
    tag_value: &str,
    radius_m: u32,
    config: &OverpassConfig,
) -> Result<Vec<Element>> {
    let query = build_query(origin, tag_key, tag_value, radius_m);

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .context("Failed to create HTTP client")?;

    // Overpass expects form-encoded POST data: data=<query>
    let response = client
        .post(&config.url)
        .form(&[("data", query.as_str())])
        .send()
        .context("Failed to send request to Overpass API")?;

    if !response.status().is_success() {
        return Ok(Vec::new());
    }

    // Body is read as text first so a blank response is caught before parsing
    let body = response
        .text()
        .context("Failed to read Overpass response body")?;
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parsed: OverpassResponse =
        serde_json::from_str(&body).context("Failed to parse Overpass JSON response")?;

    Ok(parsed.elements)
}
