//! Map Page
//!
//! Embedded OpenStreetMap view of the city with links for each sight.

use leptos::prelude::*;

use crate::catalog::TOUR_SPOTS;
use crate::context::use_app_context;
use crate::links;

#[component]
pub fn MapPage() -> impl IntoView {
    let config = use_app_context().config();
    let embed = links::osm_embed_url(config.center, 0.12);

    view! {
        <section class="page-section">
            <h2 class="section-title">{format!("{} map", config.city)}</h2>
            <iframe class="map-frame" title="City map" src=embed prop:loading="lazy"></iframe>
            <ul class="list-group mt-3">
                {TOUR_SPOTS.iter().map(|spot| view! {
                    <li class="list-group-item d-flex justify-content-between align-items-center">
                        <strong>{spot.name}</strong>
                        <a
                            target="_blank"
                            rel="noopener"
                            href=links::city_search_url(spot.name, &config.city)
                        >
                            "Open in Google Maps"
                        </a>
                    </li>
                }).collect_view()}
            </ul>
        </section>
    }
}
