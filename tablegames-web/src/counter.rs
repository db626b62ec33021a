//! Navbar cart counter badge.

use tablegames_cart::{BadgeState, CartConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::WebError;

/// Write `count` into the counter badge, creating the badge under the cart link if needed.
///
/// Returns `Ok(false)` when there is neither a badge nor a cart link; the count is dropped.
///
/// # Errors
/// Returns an error if a DOM call fails or the badge is not an HTML element.
pub fn update_cart_counter(
    document: &Document,
    config: &CartConfig,
    count: i64,
) -> Result<bool, WebError> {
    let Some(counter) = find_or_create_counter(document, config)? else {
        return Ok(false);
    };

    let badge = BadgeState::for_count(count);
    counter.set_text_content(Some(&badge.text));
    counter
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| WebError::Js(format!("#{} is not an HTML element", config.counter_id)))?
        .style()
        .set_property("display", badge.display())?;
    Ok(true)
}

fn find_or_create_counter(
    document: &Document,
    config: &CartConfig,
) -> Result<Option<Element>, WebError> {
    if let Some(existing) = document.get_element_by_id(&config.counter_id) {
        return Ok(Some(existing));
    }
    let Some(cart_link) = document.query_selector(&config.cart_link_selector)? else {
        return Ok(None);
    };

    let counter = document.create_element("span")?;
    counter.set_id(&config.counter_id);
    counter.set_class_name(&config.counter_classes);
    cart_link.append_child(&counter)?;
    Ok(Some(counter))
}
