//! Food Page
//!
//! Curated eateries render at once; live nearby results are appended when
//! the Overpass query returns. A failed query leaves the curated list as is.

use leptos::prelude::*;

use crate::catalog::{CURATED_FOOD, LIVE_FOOD_PHOTO};
use crate::components::{FilterInput, PlaceCard};
use crate::context::use_app_context;
use crate::links;
use crate::models::{Category, Venue};
use crate::task::spawn_for_view;
use crate::venues;

#[component]
pub fn FoodPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let city = config.city.clone();
    let (filter, set_filter) = signal(String::new());
    let (live, set_live) = signal(Vec::<Venue>::new());
    let (loading, set_loading) = signal(true);

    spawn_for_view("food", async move {
        match venues::discover_food(&config).await {
            Ok(found) => {
                log::info!("[FOOD] {} live venues", found.len());
                set_live.set(found);
            }
            // curated cards stay; nothing is shown to the user
            Err(e) => log::warn!("[FOOD] Live results unavailable: {}", e),
        }
        set_loading.set(false);
    });

    let curated_city = city.clone();

    view! {
        <section class="page-section">
            <h2 class="section-title">"Food & drink"</h2>
            <FilterInput placeholder="Filter food..." set_filter=set_filter />
            <div class="row">
                {CURATED_FOOD.iter().map(|item| view! {
                    <PlaceCard
                        name=item.name
                        category=Category::Food
                        img=item.img
                        desc=item.desc
                        map_url=links::city_search_url(item.name, &curated_city)
                        filter=filter
                    />
                }).collect_view()}
                <For
                    each=move || live.get().into_iter().enumerate()
                    key=|(i, venue)| (*i, venue.name.clone())
                    children=move |(_, venue)| view! {
                        <PlaceCard
                            name=venue.name.clone()
                            category=Category::Food
                            img=LIVE_FOOD_PHOTO
                            desc=venue.note.clone()
                            map_url=links::city_search_url(&venue.name, &city)
                            filter=filter
                        />
                    }
                />
            </div>
            <Show when=move || loading.get()>
                <div class="text-center my-3 loading">
                    <i class="fa-solid fa-spinner fa-spin mr-2"></i>"Finding places near you..."
                </div>
            </Show>
        </section>
    }
}
