use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Request, Response, Window};

use crate::error::WebError;

/// Retrieve the global `window` object.
///
/// # Errors
/// Returns [`WebError::NoWindow`] outside of a browser context.
pub fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::NoWindow)
}

/// Retrieve the document object for DOM interactions.
///
/// # Errors
/// Returns an error when no window or document is reachable.
pub fn document() -> Result<Document, WebError> {
    window()?.document().ok_or(WebError::NoDocument)
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

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let window = window().map_err(|err| JsValue::from_str(&err.to_string()))?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if the fetch request fails or the response cannot be converted to `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_request(request: &Request) -> Result<Response, JsValue> {
    let window = window().map_err(|err| JsValue::from_str(&err.to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request)).await?;
    resp_value.dyn_into::<Response>()
}

/// Run `callback` once the document has been parsed.
///
/// Runs immediately when `DOMContentLoaded` has already fired.
///
/// # Errors
/// Returns an error if the document is unavailable or the listener cannot be attached.
pub fn on_dom_ready(callback: impl FnOnce() + 'static) -> Result<(), WebError> {
    let document = document()?;
    if document.ready_state() != "loading" {
        callback();
        return Ok(());
    }

    let closure = Closure::once(callback);
    document.add_event_listener_with_callback(
        "DOMContentLoaded",
        closure.as_ref().unchecked_ref(),
    )?;
    closure.forget();
    Ok(())
}
