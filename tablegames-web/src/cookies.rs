use tablegames_cart::CookieSource;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::dom;

/// Reads `document.cookie` afresh on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentCookies;

impl CookieSource for DocumentCookies {
    fn cookie_string(&self) -> String {
        dom::document()
            .ok()
            .and_then(|doc| doc.dyn_into::<HtmlDocument>().ok())
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }
}
