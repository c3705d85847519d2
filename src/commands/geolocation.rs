//! Geolocation
//!
//! One-shot high-accuracy position lookup. Denial, timeout or a missing API
//! all come back as `None` so callers fall back to the city center.

use futures::channel::oneshot;
use futures::future::{select, Either};
use futures::pin_mut;
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Coordinate;

type Reply = Rc<RefCell<Option<oneshot::Sender<Option<Coordinate>>>>>;

fn number_at(value: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(value, &JsValue::from_str(key)).ok()?.as_f64()
}

/// Pull `coords.latitude/longitude` out of a GeolocationPosition
fn coords_of(position: &JsValue) -> Option<Coordinate> {
    let coords = js_sys::Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    Some(Coordinate::new(number_at(&coords, "latitude")?, number_at(&coords, "longitude")?))
}

fn answer(reply: &Reply, value: Option<Coordinate>) {
    if let Some(tx) = reply.borrow_mut().take() {
        let _ = tx.send(value);
    }
}

/// Ask the browser for the user's position, giving up after `timeout_ms`.
///
/// The platform timeout only starts once permission is granted, so the same
/// deadline is also enforced locally for prompts the user never answers.
pub async fn current_position(timeout_ms: u32) -> Option<Coordinate> {
    let geo = match web_sys::window()?.navigator().geolocation() {
        Ok(geo) => geo,
        Err(_) => {
            log::info!("[GEO] Geolocation unsupported");
            return None;
        }
    };

    let (tx, rx) = oneshot::channel();
    let reply: Reply = Rc::new(RefCell::new(Some(tx)));

    let ok_reply = reply.clone();
    let on_ok = Closure::once_into_js(move |pos: JsValue| answer(&ok_reply, coords_of(&pos)));
    let err_reply = reply;
    let on_err = Closure::once_into_js(move |err: JsValue| {
        log::info!("[GEO] Position unavailable: {:?}", number_at(&err, "code"));
        answer(&err_reply, None);
    });

    let options = web_sys::PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(timeout_ms);
    options.set_maximum_age(0);

    if let Err(e) = geo.get_current_position_with_error_callback_and_options(
        on_ok.unchecked_ref(),
        Some(on_err.unchecked_ref()),
        &options,
    ) {
        log::warn!("[GEO] getCurrentPosition threw: {:?}", e);
        return None;
    }

    let timer = TimeoutFuture::new(timeout_ms);
    pin_mut!(rx, timer);
    match select(rx, timer).await {
        Either::Left((Ok(position), _)) => position,
        Either::Left((Err(_), _)) => None,
        Either::Right(_) => {
            log::info!("[GEO] No answer within {} ms", timeout_ms);
            None
        }
    }
}

/// User position, or `fallback` when it cannot be determined
pub async fn position_or(fallback: Coordinate, timeout_ms: u32) -> Coordinate {
    current_position(timeout_ms).await.unwrap_or(fallback)
}
