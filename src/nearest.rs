//! Nearest Stop Lookup
//!
//! Ranks transit stops around the user by great-circle distance.

use crate::commands;
use crate::config::GuideConfig;
use crate::error::GuideResult;
use crate::geo::haversine_km;
use crate::models::{Coordinate, NearbyStop, OsmElement, TransitKind};

/// Sort candidates by distance from `origin`, dropping anything beyond
/// `radius_km` or without a position, and keep the closest `limit`.
pub fn rank_stops(
    origin: Coordinate,
    elements: &[OsmElement],
    radius_km: f64,
    limit: usize,
) -> Vec<NearbyStop> {
    let mut stops: Vec<NearbyStop> = elements
        .iter()
        .filter_map(|el| {
            let coordinate = el.coordinate()?;
            let name = el.tag("name").or_else(|| el.tag("ref")).unwrap_or("Unnamed stop");
            Some(NearbyStop {
                name: name.to_string(),
                coordinate,
                distance_km: haversine_km(origin, coordinate),
            })
        })
        .filter(|s| s.distance_km <= radius_km)
        .collect();
    stops.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    stops.truncate(limit);
    stops
}

/// Distance badge text, one decimal
pub fn format_km(km: f64) -> String {
    format!("{:.1} km", km)
}

/// Query stops of `kind` near the user (or the city center) and rank them.
/// An empty list means the service found nothing nearby.
pub async fn find_nearest(cfg: &GuideConfig, kind: TransitKind) -> GuideResult<Vec<NearbyStop>> {
    let origin = commands::position_or(cfg.center, cfg.geolocation_timeout_ms).await;
    let query = commands::stops_query(kind, &cfg.transit, origin);
    let data = commands::run_query(&cfg.overpass_url, &query).await?;
    let stops = rank_stops(origin, &data.elements, cfg.transit.radius_km(), cfg.transit.keep);
    log::info!(
        "[TRANSIT] {} {} candidates, {} kept",
        kind.as_str(),
        data.elements.len(),
        stops.len()
    );
    Ok(stops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const ORIGIN: Coordinate = Coordinate::new(22.5726, 88.3639);

    fn node(id: u64, lat: f64, lon: f64, name: Option<&str>) -> OsmElement {
        let mut tags = HashMap::new();
        if let Some(n) = name {
            tags.insert("name".to_string(), n.to_string());
        }
        OsmElement {
            kind: "node".to_string(),
            id,
            lat: Some(lat),
            lon: Some(lon),
            center: None,
            tags,
        }
    }

    fn candidates() -> Vec<OsmElement> {
        (0..9)
            .map(|i| node(i, 22.5726 + 0.004 * (9 - i) as f64, 88.3639, Some(&format!("Stop {}", i))))
            .collect()
    }

    #[test]
    fn test_at_most_five_sorted() {
        let stops = rank_stops(ORIGIN, &candidates(), 6.0, 5);
        assert_eq!(stops.len(), 5);
        assert!(stops.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
        assert_eq!(stops[0].name, "Stop 8");
        assert!(stops.iter().all(|s| s.distance_km <= 6.0));
    }

    #[test]
    fn test_drops_far_and_unplaced() {
        let mut els = vec![node(1, 22.60, 88.3639, Some("Near")), node(2, 23.5, 88.3639, Some("Far"))];
        els.push(OsmElement {
            kind: "node".to_string(),
            id: 3,
            lat: None,
            lon: None,
            center: None,
            tags: HashMap::new(),
        });
        let stops = rank_stops(ORIGIN, &els, 6.0, 5);
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].name, "Near");
    }

    #[test]
    fn test_name_falls_back_to_ref_then_placeholder() {
        let mut with_ref = node(1, 22.573, 88.364, None);
        with_ref.tags.insert("ref".to_string(), "B12".to_string());
        let bare = node(2, 22.574, 88.364, None);
        let stops = rank_stops(ORIGIN, &[with_ref, bare], 6.0, 5);
        assert_eq!(stops[0].name, "B12");
        assert_eq!(stops[1].name, "Unnamed stop");
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_stops(ORIGIN, &[], 6.0, 5).is_empty());
    }

    #[test]
    fn test_sorts_on_exact_distance() {
        let els = vec![node(1, 22.57314, 88.3639, Some("B")), node(2, 22.57296, 88.3639, Some("A"))];
        let stops = rank_stops(ORIGIN, &els, 6.0, 5);
        assert_eq!(stops[0].name, "A");
    }

    #[test]
    fn test_format_km() {
        assert_eq!(format_km(1.26), "1.3 km");
        assert_eq!(format_km(0.0), "0.0 km");
    }
}
