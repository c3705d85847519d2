//! External map links

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::Coordinate;

/// Characters left alone by `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Map search for free text
pub fn search_url(query: &str) -> String {
    format!("https://www.google.com/maps/search/?api=1&query={}", encode_component(query))
}

/// Map search for a place name qualified by the city
pub fn city_search_url(name: &str, city: &str) -> String {
    search_url(&format!("{} {}", name, city))
}

/// Turn-by-turn directions to a raw coordinate
pub fn directions_url(to: Coordinate) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        to.latitude, to.longitude
    )
}

/// OpenStreetMap embed centered on `center`, spanning roughly `span` degrees
pub fn osm_embed_url(center: Coordinate, span: f64) -> String {
    let half = span / 2.0;
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={},{},{},{}&layer=mapnik&marker={},{}",
        center.longitude - half,
        center.latitude - half,
        center.longitude + half,
        center.latitude + half,
        center.latitude,
        center.longitude
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_like_browser() {
        assert_eq!(
            search_url("Nizam's Kolkata"),
            "https://www.google.com/maps/search/?api=1&query=Nizam's%20Kolkata"
        );
        assert_eq!(encode_component("Mitra Café & Co"), "Mitra%20Caf%C3%A9%20%26%20Co");
    }

    #[test]
    fn test_city_search_url() {
        assert_eq!(
            city_search_url("Flurys", "Kolkata"),
            "https://www.google.com/maps/search/?api=1&query=Flurys%20Kolkata"
        );
    }

    #[test]
    fn test_directions_url() {
        assert_eq!(
            directions_url(Coordinate::new(22.5, 88.25)),
            "https://www.google.com/maps/dir/?api=1&destination=22.5,88.25"
        );
    }

    #[test]
    fn test_embed_bbox_contains_center() {
        let url = osm_embed_url(Coordinate::new(22.5, 88.5), 0.5);
        assert!(url.contains("bbox=88.25,22.25,88.75,22.75"));
        assert!(url.ends_with("marker=22.5,88.5"));
    }
}
