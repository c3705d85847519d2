//! Tour Page
//!
//! Catalog of sights with map links, bookmarks and "add to plan".

use leptos::prelude::*;

use crate::catalog::TOUR_SPOTS;
use crate::components::{FilterInput, PlaceCard};
use crate::context::use_app_context;
use crate::links;
use crate::models::Category;
use crate::store::{store_add_to_plan, use_app_store};

#[component]
pub fn TourPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (filter, set_filter) = signal(String::new());

    let add_to_plan = move |name: &'static str| {
        match store_add_to_plan(&store, name) {
            Ok(_) => ctx.message("Saved", format!("{} added to your itinerary.", name)),
            Err(e) => ctx.message("Error", e.user_message()),
        }
    };

    view! {
        <section class="page-section">
            <h2 class="section-title">"Explore the city"</h2>
            <FilterInput placeholder="Filter sights..." set_filter=set_filter />
            <div class="row">
                {TOUR_SPOTS.iter().map(|spot| view! {
                    <PlaceCard
                        name=spot.name
                        category=Category::Tour
                        img=spot.img
                        desc=spot.desc
                        map_url=links::search_url(spot.query)
                        filter=filter
                    >
                        <button class="btn btn-outline-light" on:click=move |_| add_to_plan(spot.name)>
                            <i class="fa-solid fa-plus"></i>" Add"
                        </button>
                    </PlaceCard>
                }).collect_view()}
            </div>
        </section>
    }
}
