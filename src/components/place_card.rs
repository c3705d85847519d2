//! Place Card Component
//!
//! Card for a sight, venue or hotel with a map link and a bookmark toggle.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{saved_id, Category, SavedItem};
use crate::router::matches_filter;
use crate::store::{store_toggle_saved, use_app_store, AppStateStoreFields};

/// Heart button toggling the bookmark for (name, category)
#[component]
pub fn SaveButton(
    #[prop(into)] name: String,
    category: Category,
    #[prop(into)] img: String,
    #[prop(into)] note: String,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = saved_id(&name, category);
    let is_saved = move || store.saved().with(|saved| saved.iter().any(|s| s.id == id));

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let item = SavedItem::new(&name, category, &img, &note);
        if let Err(e) = store_toggle_saved(&store, item) {
            log::error!("[SAVED] {}", e);
            ctx.message("Error", e.user_message());
        }
    };

    view! {
        <button class="save" title="Save" on:click=on_click>
            <i class=move || if is_saved() { "fa-solid fa-heart" } else { "fa-regular fa-heart" }></i>
        </button>
    }
}

/// Display card; hidden while `filter` does not match its text
#[component]
pub fn PlaceCard(
    #[prop(into)] name: String,
    category: Category,
    #[prop(into)] img: String,
    #[prop(into)] desc: String,
    #[prop(into)] map_url: String,
    #[prop(into, default = "Location".to_string())] map_label: String,
    #[prop(optional, into)] filter: Option<Signal<String>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let haystack = format!("{}\n{}", name, desc);
    let hidden = move || filter.map(|f| !matches_filter(&haystack, &f.get())).unwrap_or(false);
    let save_name = name.clone();
    let save_img = img.clone();
    let note = desc.clone();
    let alt = name.clone();

    view! {
        <div class="col-md-6 col-lg-4 mb-4" class:d-none=hidden>
            <div class="card position-relative">
                <SaveButton name=save_name category=category img=save_img note=note />
                <img class="card-img-top" src=img alt=alt />
                <div class="card-body">
                    <h5 class="card-title">{name}</h5>
                    <p class="card-text">{desc}</p>
                    <div class="d-flex">
                        <a class="btn btn-primary mr-2" target="_blank" rel="noopener" href=map_url>
                            <i class="fa-solid fa-map-location-dot mr-1"></i>
                            {map_label}
                        </a>
                        {children.map(|c| c())}
                    </div>
                </div>
            </div>
        </div>
    }
}
