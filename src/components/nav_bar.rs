//! Navigation Bar Component
//!
//! Brand, view links, global search, weather and session controls.

use leptos::prelude::*;

use crate::components::{Modal, ModalBody, WeatherWidget};
use crate::context::use_app_context;
use crate::router::{route_for_search, Page};
use crate::store::{store_logout, use_app_store, AppStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let app_name = ctx.config().app_name;

    let on_search = move |ev: web_sys::Event| {
        let term = event_target_value(&ev);
        if let Some(page) = route_for_search(&term) {
            ctx.navigate(page);
        }
    };

    let logout = move |_| {
        if let Err(e) = store_logout(&store) {
            ctx.message("Error", e.user_message());
            return;
        }
        ctx.navigate(Page::Login);
    };

    view! {
        <nav class="navbar navbar-expand-lg navbar-dark sticky-top">
            <a class="navbar-brand" href="#" on:click=move |ev| {
                ev.prevent_default();
                ctx.navigate(Page::Home);
            }>
                <i class="fa-solid fa-landmark mr-2"></i>{app_name}
            </a>
            <ul class="navbar-nav mr-auto">
                {Page::NAV.into_iter().map(|page| view! {
                    <li class="nav-item">
                        <a
                            href="#"
                            class=move || if ctx.route.get().page == page { "nav-link active" } else { "nav-link" }
                            on:click=move |ev| {
                                ev.prevent_default();
                                ctx.navigate(page);
                            }
                        >
                            {page.title()}
                        </a>
                    </li>
                }).collect_view()}
            </ul>
            <input
                type="search"
                class="form-control mr-2 global-search"
                placeholder="Search food, hotels, metro..."
                on:change=on_search
            />
            <WeatherWidget />
            <button
                class="btn btn-sm btn-outline-light ml-2"
                on:click=move |_| ctx.show(Modal::new("Community", ModalBody::Community))
            >
                "Community"
            </button>
            <button
                class="btn btn-sm btn-outline-light ml-2"
                on:click=move |_| ctx.show(Modal::new("Contact", ModalBody::Contact))
            >
                "Contact"
            </button>
            {move || match store.session().get() {
                Some(account) => view! {
                    <span class="navbar-text ml-3">{format!("Hi, {}", account.display_name())}</span>
                    <button class="btn btn-sm btn-outline-light ml-2" on:click=logout>"Logout"</button>
                }.into_any(),
                None => view! {
                    <button class="btn btn-sm btn-light ml-3" on:click=move |_| ctx.navigate(Page::Login)>
                        "Login"
                    </button>
                }.into_any(),
            }}
        </nav>
    }
}
