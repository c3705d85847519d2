//! Venue Discovery
//!
//! Turns live Overpass results into food and hotel cards.

use crate::commands::{self, FOOD_FILTER, HOTEL_FILTER};
use crate::config::GuideConfig;
use crate::error::GuideResult;
use crate::geo::haversine_km;
use crate::models::{Coordinate, OsmElement, Venue};
use crate::nearest::format_km;

pub const UNNAMED_FOOD: &str = "Unnamed place";
pub const UNNAMED_HOTEL: &str = "Unnamed Hotel";

fn name_or(el: &OsmElement, placeholder: &str) -> String {
    el.tag("name").unwrap_or(placeholder).to_string()
}

/// First `keep` food results, in service order
pub fn food_venues(elements: &[OsmElement], keep: usize) -> Vec<Venue> {
    elements
        .iter()
        .take(keep)
        .map(|el| {
            let cuisine = el.tag("cuisine").map(|c| format!(" • {}", c)).unwrap_or_default();
            Venue {
                name: name_or(el, UNNAMED_FOOD),
                coordinate: el.coordinate(),
                note: format!("OpenStreetMap result{}", cuisine),
            }
        })
        .collect()
}

/// First `keep` hotel results, annotated with distance from `origin`
pub fn hotel_venues(origin: Coordinate, elements: &[OsmElement], keep: usize) -> Vec<Venue> {
    elements
        .iter()
        .take(keep)
        .map(|el| {
            let coordinate = el.coordinate();
            let note = match coordinate {
                Some(c) => format!("Approx. {} away", format_km(haversine_km(origin, c))),
                None => "Distance unknown".to_string(),
            };
            Venue { name: name_or(el, UNNAMED_HOTEL), coordinate, note }
        })
        .collect()
}

/// Live eateries around the user or the city center
pub async fn discover_food(cfg: &GuideConfig) -> GuideResult<Vec<Venue>> {
    let origin = commands::position_or(cfg.center, cfg.geolocation_timeout_ms).await;
    let query = commands::area_query(FOOD_FILTER, &cfg.food, origin);
    let data = commands::run_query(&cfg.overpass_url, &query).await?;
    Ok(food_venues(&data.elements, cfg.food.keep))
}

/// Live hotels around the user or the city center
pub async fn discover_hotels(cfg: &GuideConfig) -> GuideResult<Vec<Venue>> {
    let origin = commands::position_or(cfg.center, cfg.geolocation_timeout_ms).await;
    let query = commands::area_query(HOTEL_FILTER, &cfg.hotels, origin);
    let data = commands::run_query(&cfg.overpass_url, &query).await?;
    Ok(hotel_venues(origin, &data.elements, cfg.hotels.keep))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OsmResponse;

    fn elements(raw: &str) -> Vec<OsmElement> {
        serde_json::from_str::<OsmResponse>(raw).unwrap().elements
    }

    #[test]
    fn test_food_placeholder_and_cuisine() {
        let els = elements(
            r#"{"elements":[
                {"type":"node","id":1,"lat":22.57,"lon":88.36,"tags":{"name":"Kusum","cuisine":"indian"}},
                {"type":"node","id":2,"lat":22.57,"lon":88.36,"tags":{"amenity":"cafe"}}
            ]}"#,
        );
        let venues = food_venues(&els, 12);
        assert_eq!(venues[0].name, "Kusum");
        assert_eq!(venues[0].note, "OpenStreetMap result • indian");
        assert_eq!(venues[1].name, UNNAMED_FOOD);
        assert_eq!(venues[1].note, "OpenStreetMap result");
    }

    #[test]
    fn test_food_capped() {
        let many: Vec<String> = (0..30)
            .map(|i| format!(r#"{{"type":"node","id":{},"lat":22.5,"lon":88.3}}"#, i))
            .collect();
        let els = elements(&format!(r#"{{"elements":[{}]}}"#, many.join(",")));
        assert_eq!(food_venues(&els, 12).len(), 12);
        assert_eq!(hotel_venues(Coordinate::new(22.5, 88.3), &els, 18).len(), 18);
    }

    #[test]
    fn test_hotel_distance_from_center() {
        let els = elements(
            r#"{"elements":[
                {"type":"way","id":7,"center":{"lat":22.5816,"lon":88.3639},"tags":{"tourism":"hotel"}},
                {"type":"relation","id":8,"tags":{"name":"Floating"}}
            ]}"#,
        );
        let venues = hotel_venues(Coordinate::new(22.5726, 88.3639), &els, 18);
        assert_eq!(venues[0].name, UNNAMED_HOTEL);
        assert_eq!(venues[0].note, "Approx. 1.0 km away");
        assert_eq!(venues[1].name, "Floating");
        assert_eq!(venues[1].note, "Distance unknown");
    }
}
