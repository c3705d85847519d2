//! Guide Configuration
//!
//! City, endpoints and query limits. Defaults describe Kolkata; a page can
//! override any field with `<meta name="guide-config" content='{...}'>`.

use serde::Deserialize;
use wasm_bindgen::JsCast;

use crate::models::Coordinate;

/// Search radius and result cap for one live query
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct QueryLimits {
    pub radius_m: u32,
    /// Elements requested from the service
    pub fetch: u32,
    /// Elements kept client-side
    pub keep: usize,
}

impl QueryLimits {
    pub fn radius_km(&self) -> f64 {
        f64::from(self.radius_m) / 1000.0
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    pub app_name: String,
    pub city: String,
    /// Prefix for the exported plan file
    pub slug: String,
    /// Used whenever geolocation is unavailable
    pub center: Coordinate,
    pub weather_url: String,
    pub overpass_url: String,
    pub food: QueryLimits,
    pub hotels: QueryLimits,
    pub transit: QueryLimits,
    pub geolocation_timeout_ms: u32,
    pub log_level: String,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            app_name: "Kolkata One".to_string(),
            city: "Kolkata".to_string(),
            slug: "kolkata".to_string(),
            center: Coordinate::new(22.5726, 88.3639),
            weather_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            overpass_url: "https://overpass-api.de/api/interpreter".to_string(),
            food: QueryLimits { radius_m: 3500, fetch: 30, keep: 12 },
            hotels: QueryLimits { radius_m: 6000, fetch: 24, keep: 18 },
            transit: QueryLimits { radius_m: 6000, fetch: 10, keep: 5 },
            geolocation_timeout_ms: 6000,
            log_level: "info".to_string(),
        }
    }
}

impl GuideConfig {
    /// Parse a JSON override; absent fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the override from the host page, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(r#"meta[name="guide-config"]"#).ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
            .map(|meta| meta.content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("[CONFIG] Ignoring invalid guide-config: {}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Title line of the exported plan
    pub fn plan_title(&self) -> String {
        format!("{} — My Plan", self.app_name)
    }

    pub fn plan_file_name(&self) -> String {
        format!("{}_plan.txt", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = GuideConfig::default();
        assert_eq!(cfg.center, Coordinate::new(22.5726, 88.3639));
        assert_eq!(cfg.food.radius_km(), 3.5);
        assert_eq!(cfg.food.keep, 12);
        assert_eq!(cfg.hotels.keep, 18);
        assert_eq!(cfg.transit.keep, 5);
        assert_eq!(cfg.geolocation_timeout_ms, 6000);
        assert_eq!(cfg.plan_file_name(), "kolkata_plan.txt");
        assert_eq!(cfg.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_override() {
        let cfg = GuideConfig::from_json(
            r#"{"city":"Howrah","center":{"lat":22.59,"lon":88.31},"log_level":"debug"}"#,
        )
        .unwrap();
        assert_eq!(cfg.city, "Howrah");
        assert_eq!(cfg.center, Coordinate::new(22.59, 88.31));
        assert_eq!(cfg.log_level(), log::LevelFilter::Debug);
        assert_eq!(cfg.hotels, GuideConfig::default().hotels);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let cfg = GuideConfig { log_level: "loud".into(), ..Default::default() };
        assert_eq!(cfg.log_level(), log::LevelFilter::Info);
    }
}
