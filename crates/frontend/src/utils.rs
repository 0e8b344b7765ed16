//! Browser utilities.

use wasm_bindgen::JsCast;

/// Hands `bytes` to the browser as a file download by routing them through
/// an object URL on a temporary anchor element.
pub fn download_file(bytes: &[u8], filename: &str, mime_type: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let array = js_sys::Uint8Array::from(bytes);
    let blob_parts = js_sys::Array::new();
    blob_parts.push(&array.buffer());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime_type);

    if let Ok(blob) = web_sys::Blob::new_with_buffer_source_sequence_and_options(&blob_parts, &options)
    {
        if let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) {
            if let Ok(a) = document.create_element("a") {
                let _ = a.set_attribute("href", &url);
                let _ = a.set_attribute("download", filename);
                if let Some(body) = document.body() {
                    let _ = body.append_child(&a);
                    if let Some(html_a) = a.dyn_ref::<web_sys::HtmlElement>() {
                        html_a.click();
                    }
                    let _ = body.remove_child(&a);
                }
                let _ = web_sys::Url::revoke_object_url(&url);
            }
        }
    }
}

/// Asks the operator to confirm an action. Treats an unavailable dialog as
/// a refusal.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
