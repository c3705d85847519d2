//! City Guide App
//!
//! Root component: navbar, the active view and the message modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    FoodPage, HomePage, HotelPage, LoginForm, MapPage, MessageModal, Modal, NavBar, SavedPage,
    SignupForm, TourPage, TransportPage,
};
use crate::config::GuideConfig;
use crate::context::AppContext;
use crate::router::{Page, Route};
use crate::store::AppState;

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Login => view! { <LoginForm /> }.into_any(),
        Page::Signup => view! { <SignupForm /> }.into_any(),
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Tour => view! { <TourPage /> }.into_any(),
        Page::Food => view! { <FoodPage /> }.into_any(),
        Page::Hotel => view! { <HotelPage /> }.into_any(),
        Page::Transport => view! { <TransportPage /> }.into_any(),
        Page::Map => view! { <MapPage /> }.into_any(),
        Page::Saved => view! { <SavedPage /> }.into_any(),
    }
}

#[component]
pub fn App(config: GuideConfig) -> impl IntoView {
    // State
    let state = AppState::load();
    let initial = Page::initial(state.session.is_some());
    let store = Store::new(state);
    let (route, set_route) = signal(Route::new(initial));
    let (modal, set_modal) = signal(None::<Modal>);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((route, set_route), (modal, set_modal), config));

    log::info!("[APP] Starting on {:?}", initial);

    view! {
        <NavBar />
        <main class="container py-4">
            // Every navigation (including to the current page) remounts the view
            {move || {
                let current = route.get();
                log::debug!("[APP] Mounting {:?} (visit {})", current.page, current.visit);
                render_page(current.page)
            }}
        </main>
        <MessageModal />
    }
}
