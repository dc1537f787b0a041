use httpmock::prelude::*;
use tourscout::api::{fetch_nearby, geocode_place};
use tourscout::config::{NominatimConfig, OverpassConfig};
use tourscout::domain::Coordinate;

fn nominatim_config(server: &MockServer) -> NominatimConfig {
    NominatimConfig {
        url: server.url("/search"),
        timeout_secs: 5,
    }
}

fn overpass_config(server: &MockServer) -> OverpassConfig {
    OverpassConfig {
        url: server.url("/api/interpreter"),
        timeout_secs: 5,
    }
}

fn origin() -> Coordinate {
    Coordinate::new(13.6288, 79.4192)
}

#[test]
fn test_geocode_returns_first_match() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "Tirupati")
            .query_param("format", "json")
            .query_param("limit", "1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {
                    "lat": "13.6287901",
                    "lon": "79.4191795",
                    "display_name": "Tirupati, Tirupati District, Andhra Pradesh, India"
                }
            ]));
    });

    let coords = geocode_place("Tirupati", &nominatim_config(&server)).unwrap();
    mock.assert();

    let resolved = coords.expect("expected a geocoding match");
    assert!((resolved.lat - 13.6287901).abs() < 1e-9);
    assert!((resolved.lon - 79.4191795).abs() < 1e-9);
    assert!((-90.0..=90.0).contains(&resolved.lat));
    assert!((-180.0..=180.0).contains(&resolved.lon));
}

#[test]
fn test_geocode_zero_matches_is_not_found() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let coords = geocode_place("Nowhere At All", &nominatim_config(&server)).unwrap();
    mock.assert();
    assert!(coords.is_none());
}

#[test]
fn test_geocode_server_error_propagates() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(500);
    });

    let result = geocode_place("Tirupati", &nominatim_config(&server));
    assert!(result.is_err());
}

#[test]
fn test_geocode_malformed_body_propagates() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200).body("not json at all");
    });

    let result = geocode_place("Tirupati", &nominatim_config(&server));
    assert!(result.is_err());
}

#[test]
fn test_fetch_nearby_returns_elements() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/interpreter")
            .body_contains("attraction");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "elements": [
                    {"type": "node", "id": 1, "lat": 13.6301, "lon": 79.4203, "tags": {"name": "Kapila Theertham"}},
                    {"type": "node", "id": 2, "lat": 13.6352, "lon": 79.4188}
                ]
            }));
    });

    let elements = fetch_nearby(
        origin(),
        "tourism",
        "attraction",
        3000,
        &overpass_config(&server),
    );
    mock.assert();

    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].id, 1);
    assert_eq!(
        elements[0].tags.as_ref().unwrap().get("name"),
        Some(&"Kapila Theertham".to_string())
    );
}

#[test]
fn test_fetch_nearby_server_error_yields_empty() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/interpreter");
        then.status(503);
    });

    let elements = fetch_nearby(
        origin(),
        "amenity",
        "hospital",
        3000,
        &overpass_config(&server),
    );
    mock.assert();
    assert!(elements.is_empty());
}

#[test]
fn test_fetch_nearby_empty_body_yields_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/interpreter");
        then.status(200).body("");
    });

    let elements = fetch_nearby(
        origin(),
        "amenity",
        "hospital",
        3000,
        &overpass_config(&server),
    );
    assert!(elements.is_empty());
}

#[test]
fn test_fetch_nearby_whitespace_body_yields_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/interpreter");
        then.status(200).body("  \n\t  ");
    });

    let elements = fetch_nearby(
        origin(),
        "amenity",
        "hospital",
        3000,
        &overpass_config(&server),
    );
    assert!(elements.is_empty());
}

#[test]
fn test_fetch_nearby_malformed_body_yields_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/interpreter");
        then.status(200)
            .body("<html><body>rate limited</body></html>");
    });

    let elements = fetch_nearby(
        origin(),
        "amenity",
        "fuel",
        3000,
        &overpass_config(&server),
    );
    assert!(elements.is_empty());
}

#[test]
fn test_fetch_nearby_unreachable_service_yields_empty() {
    let config = OverpassConfig {
        url: "http://127.0.0.1:1/api/interpreter".to_string(),
        timeout_secs: 2,
    };

    let elements = fetch_nearby(origin(), "amenity", "restaurant", 3000, &config);
    assert!(elements.is_empty());
}
