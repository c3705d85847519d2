//! Home Page

use leptos::prelude::*;

use crate::components::{Modal, ModalBody};
use crate::context::use_app_context;
use crate::router::Page;

const TILES: &[(Page, &str, &str)] = &[
    (Page::Tour, "fa-solid fa-camera", "Top sights and heritage walks"),
    (Page::Food, "fa-solid fa-utensils", "Legendary eateries and live finds nearby"),
    (Page::Hotel, "fa-solid fa-bed", "Hotels around you"),
    (Page::Transport, "fa-solid fa-train-subway", "Nearest metro, bus, tram and ferry"),
    (Page::Map, "fa-solid fa-map", "The city at a glance"),
    (Page::Saved, "fa-solid fa-heart", "Your saved places and plan"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let city = ctx.config().city;

    view! {
        <section class="page-section hero text-center">
            <h1>{format!("Discover {}", city)}</h1>
            <p class="lead">"Sights, food, stays and getting around, in one place."</p>
            <button
                class="btn btn-success"
                on:click=move |_| ctx.show(Modal::new("Book Tour Guide", ModalBody::BookGuide))
            >
                <i class="fa-solid fa-user-tie mr-1"></i>"Book a tour guide"
            </button>
        </section>
        <div class="row">
            {TILES.iter().map(|&(page, icon, blurb)| view! {
                <div class="col-md-4 mb-4">
                    <div class="card tile" on:click=move |_| ctx.navigate(page)>
                        <div class="card-body">
                            <h4><i class=format!("{} mr-2", icon)></i>{page.title()}</h4>
                            <p class="muted">{blurb}</p>
                        </div>
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
}
