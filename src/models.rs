//! Frontend Models
//!
//! Data structures for catalog entries, remote results and stored records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lon")]
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Catalog entry for a sightseeing spot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointOfInterest {
    pub name: &'static str,
    pub img: &'static str,
    pub desc: &'static str,
    /// Text handed to the map search
    pub query: &'static str,
}

/// Hand-picked food or hotel venue bundled with the app
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuratedVenue {
    pub name: &'static str,
    pub img: &'static str,
    pub desc: &'static str,
}

/// Kind of entity a saved item refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Tour,
    Food,
    Hotel,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tour => "tour",
            Category::Food => "food",
            Category::Hotel => "hotel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bookmarked entity, persisted under the `saved` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedItem {
    /// `name|category`
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub note: String,
}

impl SavedItem {
    pub fn new(name: &str, category: Category, img: &str, note: &str) -> Self {
        Self {
            id: saved_id(name, category),
            name: name.to_string(),
            category,
            img: img.to_string(),
            note: note.to_string(),
        }
    }
}

/// Identifier used for bookmark uniqueness
pub fn saved_id(name: &str, category: Category) -> String {
    format!("{}|{}", name, category)
}

/// Locally registered account: email, password and whatever else the
/// signup form carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Extra signup entries, kept verbatim whatever their JSON type
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl Account {
    /// Build from submitted form entries; `email` and `password` are lifted out.
    pub fn from_form(mut entries: BTreeMap<String, String>) -> Self {
        let email = entries.remove("email").unwrap_or_default();
        let password = entries.remove("password").unwrap_or_default();
        let fields = entries.into_iter().map(|(k, v)| (k, Value::String(v))).collect();
        Self { email, password, fields }
    }

    /// Name to greet the user with, falling back to the email
    pub fn display_name(&self) -> &str {
        self.fields
            .get("name")
            .and_then(Value::as_str)
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

/// Public transport stop kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitKind {
    Subway,
    Tram,
    Ferry,
    Bus,
}

impl TransitKind {
    pub const ALL: [TransitKind; 4] = [
        TransitKind::Subway,
        TransitKind::Bus,
        TransitKind::Tram,
        TransitKind::Ferry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransitKind::Subway => "subway",
            TransitKind::Tram => "tram",
            TransitKind::Ferry => "ferry",
            TransitKind::Bus => "bus",
        }
    }

    /// Overpass tag filter selecting this kind of stop
    pub fn tag_filter(&self) -> &'static str {
        match self {
            TransitKind::Subway => r#"["station"="subway"]"#,
            TransitKind::Tram => r#"["railway"="tram_stop"]"#,
            TransitKind::Ferry => r#"["amenity"="ferry_terminal"]"#,
            TransitKind::Bus => r#"["highway"="bus_stop"]"#,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransitKind::Subway => "Metro",
            TransitKind::Tram => "Tram",
            TransitKind::Ferry => "Ferry",
            TransitKind::Bus => "Bus",
        }
    }
}

/// One element of an Overpass JSON response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OsmElement {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub id: u64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// Present on ways queried with `out center`
    pub center: Option<Coordinate>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl OsmElement {
    /// Node position, or the way's center
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => self.center,
        }
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }
}

/// Overpass response envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OsmResponse {
    #[serde(default)]
    pub elements: Vec<OsmElement>,
}

/// Live venue shown as a card
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub name: String,
    pub coordinate: Option<Coordinate>,
    pub note: String,
}

/// Transit stop ranked by distance from the user
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyStop {
    pub name: String,
    pub coordinate: Coordinate,
    pub distance_km: f64,
}

/// Current conditions from the weather service
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
}

/// Nearest integer with halves going toward +inf; never yields `-0`
fn round_half_up(value: f64) -> f64 {
    let rounded = (value + 0.5).floor();
    if rounded == 0.0 { 0.0 } else { rounded }
}

impl CurrentWeather {
    /// Widget text: rounded temperature and raw wind speed
    pub fn summary(&self) -> String {
        format!("{}°C • {} km/h", round_half_up(self.temperature), self.windspeed)
    }

    pub fn icon_class(&self) -> &'static str {
        if self.temperature > 30.0 { "fa-sun" } else { "fa-cloud-sun" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_item_json_keys() {
        let item = SavedItem::new("Flurys", Category::Food, "f.jpg", "Tearoom");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "Flurys|food");
        assert_eq!(json["type"], "food");
    }

    #[test]
    fn test_account_keeps_extra_fields() {
        let raw = r#"{"name":"Asha","email":"a@x.com","password":"p","phone":"123"}"#;
        let account: Account = serde_json::from_str(raw).unwrap();
        assert_eq!(account.email, "a@x.com");
        assert_eq!(account.fields.get("phone").and_then(Value::as_str), Some("123"));
        assert_eq!(account.display_name(), "Asha");

        let back = serde_json::to_value(&account).unwrap();
        assert_eq!(back["name"], "Asha");
        assert_eq!(back["password"], "p");
    }

    #[test]
    fn test_element_coordinate_prefers_node_position() {
        let node: OsmElement =
            serde_json::from_str(r#"{"type":"node","id":1,"lat":22.5,"lon":88.3}"#).unwrap();
        assert_eq!(node.coordinate(), Some(Coordinate::new(22.5, 88.3)));

        let way: OsmElement = serde_json::from_str(
            r#"{"type":"way","id":2,"center":{"lat":22.6,"lon":88.4},"tags":{"name":"X"}}"#,
        )
        .unwrap();
        assert_eq!(way.coordinate(), Some(Coordinate::new(22.6, 88.4)));
        assert_eq!(way.tag("name"), Some("X"));
        assert_eq!(way.tag("cuisine"), None);
    }

    #[test]
    fn test_weather_summary() {
        let w = CurrentWeather { temperature: 31.6, windspeed: 7.2 };
        assert_eq!(w.summary(), "32°C • 7.2 km/h");
        assert_eq!(w.icon_class(), "fa-sun");
        let mild = CurrentWeather { temperature: 24.0, windspeed: 3.0 };
        assert_eq!(mild.icon_class(), "fa-cloud-sun");
    }

    #[test]
    fn test_weather_rounds_halves_up() {
        let at = |temperature| CurrentWeather { temperature, windspeed: 0.0 }.summary();
        assert_eq!(at(-2.5), "-2°C • 0 km/h");
        assert_eq!(at(2.5), "3°C • 0 km/h");
        assert_eq!(at(-0.4), "0°C • 0 km/h");
        assert_eq!(at(-2.6), "-3°C • 0 km/h");
    }

    #[test]
    fn test_account_non_string_fields() {
        let raw = r#"{"email":"b@x.com","age":30,"tags":["a"]}"#;
        let account: Account = serde_json::from_str(raw).unwrap();
        assert_eq!(account.password, "");
        assert_eq!(account.fields.get("age"), Some(&Value::from(30)));

        let back = serde_json::to_value(&account).unwrap();
        assert_eq!(back["age"], 30);
        assert_eq!(back["tags"][0], "a");
    }
}
