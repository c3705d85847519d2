//! File Download
//!
//! Saves generated text through a temporary Blob URL.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::{GuideError, GuideResult};

fn js_err(e: JsValue) -> GuideError {
    GuideError::Storage(format!("{:?}", e))
}

/// Offer `text` to the user as a plain-text file named `file_name`
pub fn download_text(file_name: &str, text: &str) -> GuideResult<()> {
    let window = web_sys::window().ok_or(GuideError::Unsupported("window"))?;
    let document = window.document().ok_or(GuideError::Unsupported("document"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| GuideError::Unsupported("anchor element"))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
    log::info!("[EXPORT] Downloaded {} ({} bytes)", file_name, text.len());
    Ok(())
}
