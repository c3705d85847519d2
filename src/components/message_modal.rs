//! Message Modal Component
//!
//! Single app-wide dialog for notices, errors, stop lists and small forms.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::links;
use crate::models::NearbyStop;
use crate::nearest::format_km;

/// What the modal body renders
#[derive(Clone, Debug, PartialEq)]
pub enum ModalBody {
    Text(String),
    /// Ranked transit stops with directions links
    Stops(Vec<NearbyStop>),
    Community,
    Contact,
    TaxiTips,
    BookGuide,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Modal {
    pub title: String,
    pub body: ModalBody,
}

impl Modal {
    pub fn new(title: &str, body: ModalBody) -> Self {
        Self { title: title.to_string(), body }
    }
}

fn today_iso() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    iso.split('T').next().unwrap_or_default().to_string()
}

#[component]
fn StopList(stops: Vec<NearbyStop>) -> impl IntoView {
    view! {
        <ul class="list-group">
            {stops.into_iter().map(|stop| view! {
                <li class="list-group-item d-flex justify-content-between align-items-center">
                    {stop.name}
                    <span class="badge badge-primary badge-pill">{format_km(stop.distance_km)}</span>
                    <a
                        class="btn btn-sm btn-outline-primary ml-2"
                        target="_blank"
                        rel="noopener"
                        href=links::directions_url(stop.coordinate)
                    >
                        "Go"
                    </a>
                </li>
            }).collect_view()}
        </ul>
    }
}

#[component]
fn CommunityLinks() -> impl IntoView {
    view! {
        <h5>"Join Our Community"</h5>
        <p>"Share tips, plans & meetups with travelers and locals."</p>
        <div class="text-center">
            <a class="btn btn-primary mr-2" target="_blank" rel="noopener" href="https://www.facebook.com/groups/">
                <i class="fab fa-facebook mr-1"></i>" Facebook"
            </a>
            <a class="btn btn-info mr-2" target="_blank" rel="noopener" href="https://t.me/">
                <i class="fab fa-telegram mr-1"></i>" Telegram"
            </a>
            <a class="btn btn-success" target="_blank" rel="noopener" href="https://wa.me/">
                <i class="fab fa-whatsapp mr-1"></i>" WhatsApp"
            </a>
        </div>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <p><i class="fas fa-phone mr-2"></i>" +91 98765 43210"</p>
        <p><i class="fas fa-envelope mr-2"></i>" hello@kolkata.one"</p>
        <p><i class="fas fa-map-marker-alt mr-2"></i>" Park Street, Kolkata 700016"</p>
    }
}

#[component]
fn TaxiTips() -> impl IntoView {
    view! {
        <ul>
            <li>"Wave at an empty taxi (roof light on). Tell the destination before boarding."</li>
            <li>"Use meter fares; carry small change. Night surcharges may apply."</li>
            <li>"For longer trips, compare with app-cab pricing."</li>
        </ul>
    }
}

/// Tour guide request form; nothing is sent anywhere
#[component]
fn BookGuideForm() -> impl IntoView {
    let ctx = use_app_context();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        log::info!("[GUIDE] Booking requested");
        ctx.close_modal();
        ctx.show_after(
            Modal::new(
                "Success",
                ModalBody::Text("Guide request submitted! We will contact you soon.".to_string()),
            ),
            400,
        );
    };

    view! {
        <form on:submit=on_submit>
            <div class="form-group">
                <label>"Date"</label>
                <input type="date" min=today_iso() class="form-control" required />
            </div>
            <div class="form-group">
                <label>"People"</label>
                <input type="number" class="form-control" min="1" max="20" required />
            </div>
            <div class="form-group">
                <label>"Language"</label>
                <select class="form-control" required>
                    <option value="">"Select"</option>
                    <option>"English"</option>
                    <option>"Bengali"</option>
                    <option>"Hindi"</option>
                </select>
            </div>
            <div class="form-group">
                <label>"Tour type"</label>
                <select class="form-control" required>
                    <option value="">"Select"</option>
                    <option>"Heritage Walk"</option>
                    <option>"Food Trail"</option>
                    <option>"Cultural"</option>
                    <option>"Custom"</option>
                </select>
            </div>
            <button class="btn btn-success btn-block">"Request Booking"</button>
        </form>
    }
}

fn render_body(body: ModalBody) -> AnyView {
    match body {
        ModalBody::Text(text) => view! { <p>{text}</p> }.into_any(),
        ModalBody::Stops(stops) => view! { <StopList stops=stops /> }.into_any(),
        ModalBody::Community => view! { <CommunityLinks /> }.into_any(),
        ModalBody::Contact => view! { <ContactDetails /> }.into_any(),
        ModalBody::TaxiTips => view! { <TaxiTips /> }.into_any(),
        ModalBody::BookGuide => view! { <BookGuideForm /> }.into_any(),
    }
}

/// App-wide message dialog driven by `AppContext::modal`
#[component]
pub fn MessageModal() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.modal.get().map(|modal| view! {
            <div class="modal-backdrop show" on:click=move |_| ctx.close_modal()></div>
            <div class="modal d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog modal-dialog-centered" role="document">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{modal.title}</h5>
                            <button type="button" class="close" on:click=move |_| ctx.close_modal()>
                                "×"
                            </button>
                        </div>
                        <div class="modal-body">{render_body(modal.body)}</div>
                    </div>
                </div>
            </div>
        })}
    }
}
