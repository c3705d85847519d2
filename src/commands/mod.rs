//! Remote Service and Browser Wrappers
//!
//! Async bindings to the services the guide consumes, organized by service.

mod download;
mod geolocation;
mod overpass;
mod weather;

pub use download::*;
pub use geolocation::*;
pub use overpass::*;
pub use weather::*;

use wasm_bindgen::JsValue;

/// Whether `target` exposes a property named `key`
fn has_property(target: &JsValue, key: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(key)).unwrap_or(false)
}

/// Register the offline service worker; failures only get logged.
///
/// Runs on the next tick so nothing here can hold up mounting the app.
pub fn register_service_worker(script: &str) {
    let script = script.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        let Some(window) = web_sys::window() else { return };
        let navigator = window.navigator();
        if !has_property(&navigator, "serviceWorker") {
            log::info!("[SW] Service workers unavailable, skipping {}", script);
            return;
        }
        let promise = navigator.service_worker().register(&script);
        if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
            log::warn!("[SW] Registration of {} failed: {:?}", script, e);
        }
    });
}
