//! Weather Commands
//!
//! Current conditions from Open-Meteo.

use gloo_net::http::Request;
use serde::Deserialize;

use crate::error::{GuideError, GuideResult};
use crate::models::{Coordinate, CurrentWeather};

#[derive(Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
}

pub fn forecast_url(base: &str, at: Coordinate) -> String {
    format!(
        "{}?latitude={}&longitude={}&current_weather=true",
        base, at.latitude, at.longitude
    )
}

pub async fn current_weather(base: &str, at: Coordinate) -> GuideResult<CurrentWeather> {
    let resp = Request::get(&forecast_url(base, at)).send().await?;
    if !resp.ok() {
        return Err(GuideError::Status(resp.status()));
    }
    let body: ForecastResponse = resp.json().await?;
    body.current_weather
        .ok_or_else(|| GuideError::Decode("missing current_weather".to_string()))
}
