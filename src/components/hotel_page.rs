//! Hotel Page
//!
//! Curated hotels plus live results around the user. Unlike the food page,
//! a failed live query is reported.

use leptos::prelude::*;

use crate::catalog::{CURATED_HOTELS, HOTEL_PHOTO};
use crate::components::PlaceCard;
use crate::context::use_app_context;
use crate::links;
use crate::models::{Category, Venue};
use crate::task::spawn_for_view;
use crate::venues;

#[component]
pub fn HotelPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let city = config.city.clone();
    let (live, set_live) = signal(Vec::<Venue>::new());
    let (loading, set_loading) = signal(true);

    spawn_for_view("hotels", async move {
        match venues::discover_hotels(&config).await {
            Ok(found) => {
                log::info!("[HOTELS] {} live hotels", found.len());
                set_live.set(found);
            }
            Err(e) => {
                log::error!("[HOTELS] {}", e);
                ctx.message("Error", "Unable to load hotels right now.");
            }
        }
        set_loading.set(false);
    });

    let curated_city = city.clone();

    view! {
        <section class="page-section">
            <h2 class="section-title">"Places to stay"</h2>
            <Show when=move || loading.get()>
                <div class="text-center my-3 loading">
                    <i class="fa-solid fa-spinner fa-spin mr-2"></i>"Looking for hotels nearby..."
                </div>
            </Show>
            <div class="row">
                {CURATED_HOTELS.iter().map(|hotel| view! {
                    <PlaceCard
                        name=hotel.name
                        category=Category::Hotel
                        img=hotel.img
                        desc=hotel.desc
                        map_url=links::city_search_url(hotel.name, &curated_city)
                        map_label="Open in Maps"
                    />
                }).collect_view()}
                <For
                    each=move || live.get().into_iter().enumerate()
                    key=|(i, hotel)| (*i, hotel.name.clone())
                    children=move |(_, hotel)| view! {
                        <PlaceCard
                            name=hotel.name.clone()
                            category=Category::Hotel
                            img=HOTEL_PHOTO
                            desc=hotel.note.clone()
                            map_url=links::city_search_url(&hotel.name, &city)
                            map_label="Open in Maps"
                        />
                    }
                />
            </div>
        </section>
    }
}
