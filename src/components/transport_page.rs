//! Transport Page
//!
//! Nearest metro/bus/tram/ferry stops and taxi tips.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Modal, ModalBody};
use crate::context::use_app_context;
use crate::models::TransitKind;
use crate::nearest;

fn icon(kind: TransitKind) -> &'static str {
    match kind {
        TransitKind::Subway => "fa-solid fa-train-subway",
        TransitKind::Bus => "fa-solid fa-bus",
        TransitKind::Tram => "fa-solid fa-train-tram",
        TransitKind::Ferry => "fa-solid fa-ferry",
    }
}

#[component]
pub fn TransportPage() -> impl IntoView {
    let ctx = use_app_context();
    let (busy, set_busy) = signal(None::<TransitKind>);
    let radius_km = ctx.config().transit.radius_km();

    let find = move |kind: TransitKind| {
        if busy.get_untracked().is_some() {
            return;
        }
        set_busy.set(Some(kind));
        let config = ctx.config();
        spawn_local(async move {
            match nearest::find_nearest(&config, kind).await {
                Ok(stops) if stops.is_empty() => ctx.message("Oops", "No nearby stops found."),
                Ok(stops) => ctx.show(Modal::new(
                    &format!("Nearest {}", kind.as_str()),
                    ModalBody::Stops(stops),
                )),
                Err(e) => {
                    log::error!("[TRANSIT] {}", e);
                    ctx.message("Error", e.user_message());
                }
            }
            set_busy.set(None);
        });
    };

    view! {
        <section class="page-section">
            <h2 class="section-title">"Getting around"</h2>
            <p class="muted">
                {format!("Find the closest stops within {} km of you (or the city center).", radius_km)}
            </p>
            <div class="d-flex flex-wrap">
                {TransitKind::ALL.into_iter().map(|kind| view! {
                    <button
                        class="btn btn-primary mr-2 mb-2"
                        disabled=move || busy.get().is_some()
                        on:click=move |_| find(kind)
                    >
                        {move || if busy.get() == Some(kind) {
                            view! { <i class="fa-solid fa-spinner fa-spin mr-1"></i> }.into_any()
                        } else {
                            view! { <i class=format!("{} mr-1", icon(kind))></i> }.into_any()
                        }}
                        {format!("Nearest {}", kind.label())}
                    </button>
                }).collect_view()}
                <button
                    class="btn btn-warning mb-2"
                    on:click=move |_| ctx.show(Modal::new("Hailing a yellow taxi", ModalBody::TaxiTips))
                >
                    <i class="fa-solid fa-taxi mr-1"></i>"Taxi tips"
                </button>
            </div>
        </section>
    }
}
