use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, File, FileReader, HtmlAnchorElement, Storage, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
///
/// # Panics
/// Panics if no browser `window` is available.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Read a browser `File` into a self-describing data URI.
///
/// This is the photo-encoding suspension point of the souvenir pipeline: it
/// resolves once the `FileReader` finishes, or rejects when the read fails.
///
/// # Errors
/// Returns an error if the reader cannot be constructed, the read fails, or
/// the result is not a string.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn read_file_as_data_url(file: &File) -> Result<String, JsValue> {
    let reader = FileReader::new()?;

    let mut resolve_slot: Option<Function> = None;
    let mut reject_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, reject| {
        resolve_slot = Some(resolve);
        reject_slot = Some(reject);
    });
    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let reject = reject_slot.ok_or_else(|| JsValue::from_str("reject function should be set"))?;

    let reader_for_load = reader.clone();
    let onload = Closure::once(move || {
        let result = reader_for_load.result().unwrap_or(JsValue::UNDEFINED);
        let _ = resolve.call1(&JsValue::UNDEFINED, &result);
    });
    let onerror = Closure::once(move |_event: web_sys::Event| {
        let _ = reject.call1(&JsValue::UNDEFINED, &JsValue::from_str("photo read failed"));
    });

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader.read_as_data_url(file)?;
    onload.forget();
    onerror.forget();

    let value = JsFuture::from(promise).await?;
    value
        .as_string()
        .ok_or_else(|| JsValue::from_str("photo encoding produced no data"))
}

/// Trigger a client-local save of `href` under `file_name` by clicking a
/// temporary anchor element.
///
/// # Errors
/// Returns an error if the anchor cannot be created or attached.
pub fn trigger_download(href: &str, file_name: &str) -> Result<(), JsValue> {
    let doc = document();
    let anchor: HtmlAnchorElement = doc.create_element("a")?.dyn_into()?;
    anchor.set_href(href);
    anchor.set_download(file_name);
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("document body missing"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

/// Open an external URL in a new browser tab.
pub fn open_external(url: &str) {
    let _ = window().open_with_url_and_target(url, "_blank");
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}
