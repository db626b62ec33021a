//! Page-level configuration discovery.
//!
//! Templates may embed `<script type="application/json" id="cart-config">`
//! with any subset of [`CartConfig`] fields; everything else keeps its default.

use tablegames_cart::CartConfig;
use web_sys::Document;

use crate::dom;
use crate::error::WebError;

/// Id of the inline JSON configuration element.
pub const CONFIG_ELEMENT_ID: &str = "cart-config";

/// Configuration for the current page.
///
/// # Errors
/// Returns an error if the document is unavailable or the embedded JSON is invalid.
pub fn page_config() -> Result<CartConfig, WebError> {
    config_from_document(&dom::document()?)
}

/// Read the inline configuration element of `document`, if any.
///
/// # Errors
/// Returns [`WebError::Config`] if the element holds invalid JSON.
pub fn config_from_document(document: &Document) -> Result<CartConfig, WebError> {
    let embedded = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .filter(|json| !json.trim().is_empty());

    match embedded {
        Some(json) => Ok(CartConfig::from_json(&json)?),
        None => Ok(CartConfig::default()),
    }
}
