//! Page wiring: one delegated click listener plus the initial count fetch.
//!
//! The listener sits on the document and resolves the clicked button with
//! `Element::closest`, so buttons inserted after initialization work without
//! re-binding.

use std::rc::Rc;

use tablegames_cart::{
    CartClient, CartConfig, CartItemRequest, CartTransport, CartView, CookieSource, UpdateAction,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, EventTarget};

use crate::cookies::DocumentCookies;
use crate::error::WebError;
use crate::transport::FetchTransport;
use crate::view::DomView;
use crate::{dom, i18n};

/// The client as it runs on a storefront page.
pub type PageClient = CartClient<FetchTransport, DomView, DocumentCookies>;

/// A live click listener. Dropping it detaches the listener.
pub struct CartBinding {
    target: EventTarget,
    listener: Closure<dyn FnMut(Event)>,
}

impl CartBinding {
    /// Keep the listener attached for the rest of the page lifetime.
    pub fn persist(self) {
        std::mem::forget(self);
    }
}

impl Drop for CartBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("click", self.listener.as_ref().unchecked_ref());
    }
}

/// Build the page client from `config` and initialize it on the current document.
///
/// # Errors
/// Returns an error if the document is unavailable or the listener cannot be attached.
pub fn mount(config: CartConfig) -> Result<CartBinding, WebError> {
    let document = dom::document()?;
    i18n::set_lang(&config.lang);
    let view = DomView::new(config.clone());
    let client: Rc<PageClient> = Rc::new(CartClient::new(
        config,
        FetchTransport,
        view,
        DocumentCookies,
    ));
    initialize(&document, client)
}

/// Attach click handling and, when the page has add buttons, load the current count.
///
/// # Errors
/// Returns an error if a selector is invalid or the listener cannot be attached.
pub fn initialize<T, V, C>(
    document: &Document,
    client: Rc<CartClient<T, V, C>>,
) -> Result<CartBinding, WebError>
where
    T: CartTransport + 'static,
    V: CartView + 'static,
    C: CookieSource + 'static,
{
    let binding = bind(document, Rc::clone(&client))?;

    if document
        .query_selector(&client.config().add_button_selector)?
        .is_some()
    {
        spawn_local(async move {
            let _ = client.load_initial_count().await;
        });
    } else {
        log::debug!("no add-to-cart buttons on page; skipping count fetch");
    }
    Ok(binding)
}

/// Attach the delegated click listener to `document`.
///
/// # Errors
/// Returns an error if the listener cannot be attached.
pub fn bind<T, V, C>(
    document: &Document,
    client: Rc<CartClient<T, V, C>>,
) -> Result<CartBinding, WebError>
where
    T: CartTransport + 'static,
    V: CartView + 'static,
    C: CookieSource + 'static,
{
    let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        dispatch_click(&client, &event);
    });
    document.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;

    Ok(CartBinding {
        target: document.clone().into(),
        listener,
    })
}

fn dispatch_click<T, V, C>(client: &Rc<CartClient<T, V, C>>, event: &Event)
where
    T: CartTransport + 'static,
    V: CartView + 'static,
    C: CookieSource + 'static,
{
    let Some(target) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return;
    };
    let config = client.config();

    if let Some(button) = closest(&target, &config.add_button_selector) {
        let item = CartItemRequest::new(
            button.get_attribute(&config.item_id_attr).unwrap_or_default(),
            button.get_attribute(&config.item_name_attr).unwrap_or_default(),
        );
        let client = Rc::clone(client);
        spawn_local(async move {
            let _ = client.add_to_cart(&item).await;
        });
    } else if let Some(button) = closest(&target, &config.update_button_selector) {
        let item_id = button.get_attribute(&config.update_item_attr).unwrap_or_default();
        let Some(action) = button
            .get_attribute(&config.update_action_attr)
            .as_deref()
            .and_then(UpdateAction::from_attr)
        else {
            log::warn!("cart update button for item {item_id:?} has no valid action");
            return;
        };
        let client = Rc::clone(client);
        spawn_local(async move {
            let _ = client.update_item(&item_id, action).await;
        });
    }
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).unwrap_or_else(|err| {
        log::warn!("invalid selector {selector:?}: {}", dom::js_error_message(&err));
        None
    })
}
