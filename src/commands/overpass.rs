//! Overpass Queries
//!
//! Builds Overpass QL for nearby venues and stops and posts it to the
//! interpreter endpoint.

use gloo_net::http::Request;

use crate::config::QueryLimits;
use crate::error::{GuideError, GuideResult};
use crate::models::{Coordinate, OsmResponse, TransitKind};

/// Amenities that count as somewhere to eat
pub const FOOD_FILTER: &str = r#"["amenity"~"restaurant|cafe|fast_food|ice_cream|food_court"]"#;
pub const HOTEL_FILTER: &str = r#"["tourism"="hotel"]"#;

/// Nodes and ways matching `filter` around `at`, with way centers
pub fn area_query(filter: &str, limits: &QueryLimits, at: Coordinate) -> String {
    let around = format!("around:{},{},{}", limits.radius_m, at.latitude, at.longitude);
    format!(
        "[out:json][timeout:25];\n(\n  node({around}){filter};\n  way({around}){filter};\n); out center {};",
        limits.fetch,
    )
}

/// Stop nodes of one transit kind around `at`
pub fn stops_query(kind: TransitKind, limits: &QueryLimits, at: Coordinate) -> String {
    format!(
        "[out:json][timeout:25];\nnode(around:{},{},{}){};\nout body {};",
        limits.radius_m,
        at.latitude,
        at.longitude,
        kind.tag_filter(),
        limits.fetch,
    )
}

/// Post a query and decode the element list
pub async fn run_query(endpoint: &str, query: &str) -> GuideResult<OsmResponse> {
    log::debug!("[OVERPASS] {}", query);
    let resp = Request::post(endpoint)
        .header("Content-Type", "text/plain")
        .body(query)?
        .send()
        .await?;
    if !resp.ok() {
        return Err(GuideError::Status(resp.status()));
    }
    let data: OsmResponse = resp.json().await?;
    log::debug!("[OVERPASS] {} elements", data.elements.len());
    Ok(data)
}
