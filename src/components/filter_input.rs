//! Filter Input Component

use leptos::prelude::*;

/// Text box narrowing the cards of the current page
#[component]
pub fn FilterInput(
    #[prop(into)] placeholder: String,
    set_filter: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <input
            type="search"
            class="form-control mb-3 filter-input"
            placeholder=placeholder
            on:input=move |ev| set_filter.set(event_target_value(&ev))
        />
    }
}
