//! Saved Page
//!
//! Bookmarked items and the plain-text itinerary export.

use leptos::prelude::*;

use crate::commands;
use crate::context::use_app_context;
use crate::links;
use crate::saved::itinerary_document;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SavedPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let city = ctx.config().city;

    let export = move |_| {
        let cfg = ctx.config();
        let Some(text) = store.saved().with(|saved| itinerary_document(&cfg.plan_title(), saved)) else {
            ctx.message("Info", "Nothing to export yet.");
            return;
        };
        if let Err(e) = commands::download_text(&cfg.plan_file_name(), &text) {
            log::error!("[EXPORT] {}", e);
            ctx.message("Error", e.user_message());
        }
    };

    view! {
        <section class="page-section">
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h2 class="section-title">"My saved places"</h2>
                <button class="btn btn-outline-light" on:click=export>
                    <i class="fa-solid fa-download mr-1"></i>"Export plan"
                </button>
            </div>
            <Show when=move || store.saved().with(|saved| saved.is_empty())>
                <p class="muted">"Nothing saved yet. Tap the heart on any card."</p>
            </Show>
            <div class="row">
                <For
                    each=move || store.saved().get()
                    key=|item| item.id.clone()
                    children=move |item| {
                        let map_url = links::city_search_url(&item.name, &city);
                        view! {
                            <div class="col-md-6 col-lg-4 mb-4">
                                <div class="card">
                                    {(!item.img.is_empty()).then(|| view! {
                                        <img class="card-img-top" src=item.img.clone() alt=item.name.clone() />
                                    })}
                                    <div class="card-body">
                                        <span class="badge badge-gradient mb-2 text-uppercase">
                                            {item.category.as_str()}
                                        </span>
                                        <h5 class="card-title">{item.name.clone()}</h5>
                                        <p class="card-text muted">{item.note.clone()}</p>
                                        <a class="btn btn-primary" target="_blank" rel="noopener" href=map_url>
                                            "Open in Maps"
                                        </a>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
