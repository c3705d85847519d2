//! Weather Widget Component
//!
//! Current temperature and wind for the city center.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::CurrentWeather;

#[derive(Clone, Copy, PartialEq)]
enum WeatherState {
    Loading,
    Ready(CurrentWeather),
    Unavailable,
}

#[component]
pub fn WeatherWidget() -> impl IntoView {
    let config = use_app_context().config();
    let (state, set_state) = signal(WeatherState::Loading);

    spawn_local(async move {
        match commands::current_weather(&config.weather_url, config.center).await {
            Ok(weather) => set_state.set(WeatherState::Ready(weather)),
            Err(e) => {
                log::warn!("[WEATHER] {}", e);
                set_state.set(WeatherState::Unavailable);
            }
        }
    });

    view! {
        <span class="weather-widget">
            {move || match state.get() {
                WeatherState::Loading => view! { <span class="muted">"Loading weather..."</span> }.into_any(),
                WeatherState::Ready(weather) => view! {
                    <span>
                        <i class=format!("fa-solid {} mr-1", weather.icon_class())></i>
                        {weather.summary()}
                    </span>
                }.into_any(),
                WeatherState::Unavailable => view! { <span>"Weather unavailable"</span> }.into_any(),
            }}
        </span>
    }
}
