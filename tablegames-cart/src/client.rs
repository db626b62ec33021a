//! The cart request/response adapter.
//!
//! [`CartClient`] turns page load and button clicks into requests against the
//! storefront cart endpoints and turns the replies into notifications and
//! counter updates. Every failure ends here: nothing is retried, queued or
//! propagated further than the returned outcome.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::api::{
    CartAddResponse, CartCountResponse, CartItemRequest, CartUpdateResponse, OutboundRequest,
    UpdateAction, UpdateRequestBody,
};
use crate::config::CartConfig;
use crate::cookie::get_cookie;
use crate::error::CartError;
use crate::i18n;
use crate::notification::Notification;
use crate::{CartTransport, CartView, CookieSource};

/// Result of one "add to cart" gesture.
#[derive(Debug)]
pub enum AddOutcome {
    /// Server accepted the item; `cart_total` is the new item count when reported.
    Added { cart_total: Option<i64> },
    /// Server answered `success: false`.
    Rejected { message: String },
    /// No usable answer: network failure, unreadable body or bad input.
    Failed(CartError),
    /// An add for the same item was still pending and the in-flight guard is on.
    Skipped,
}

/// Result of one cart line update.
#[derive(Debug)]
pub enum UpdateOutcome {
    Updated(CartUpdateResponse),
    Rejected { message: String },
    Failed(CartError),
}

pub struct CartClient<T, V, C> {
    config: CartConfig,
    transport: T,
    view: V,
    cookies: C,
    in_flight: RefCell<BTreeSet<String>>,
}

/// Marks an item as pending for as long as it is alive.
struct InFlight<'a> {
    set: &'a RefCell<BTreeSet<String>>,
    item_id: String,
}

impl<'a> InFlight<'a> {
    fn acquire(set: &'a RefCell<BTreeSet<String>>, item_id: &str) -> Option<Self> {
        set.borrow_mut().insert(item_id.to_string()).then(|| Self {
            set,
            item_id: item_id.to_string(),
        })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.set.borrow_mut().remove(&self.item_id);
    }
}

impl<T, V, C> CartClient<T, V, C>
where
    T: CartTransport,
    V: CartView,
    C: CookieSource,
{
    pub fn new(config: CartConfig, transport: T, view: V, cookies: C) -> Self {
        Self {
            config,
            transport,
            view,
            cookies,
            in_flight: RefCell::new(BTreeSet::new()),
        }
    }

    pub const fn config(&self) -> &CartConfig {
        &self.config
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Whether an add for `item_id` is currently awaiting its reply.
    pub fn is_in_flight(&self, item_id: &str) -> bool {
        self.in_flight.borrow().contains(item_id)
    }

    /// Current CSRF token, or an empty string when the cookie is absent.
    pub fn csrf_token(&self) -> String {
        get_cookie(&self.cookies.cookie_string(), &self.config.csrf_cookie).unwrap_or_else(|| {
            log::debug!(
                "cookie {:?} not set; sending empty {}",
                self.config.csrf_cookie,
                self.config.csrf_header
            );
            String::new()
        })
    }

    /// The POST issued for an add: JSON content type, CSRF header, no body.
    pub fn add_request(&self, item_id: &str) -> OutboundRequest {
        OutboundRequest::post_with_csrf(
            self.config.add_url(item_id),
            &self.config.csrf_header,
            &self.csrf_token(),
        )
    }

    /// Fetch the item count once and write it to the badge.
    ///
    /// Failures are logged and returned but never shown to the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the reply is not a count object.
    #[allow(clippy::future_not_send)] // Transports are bound to the browser event loop.
    pub async fn load_initial_count(&self) -> Result<i64, CartError> {
        let result = self.fetch_count().await;
        match &result {
            Ok(count) => self.apply_count(*count),
            Err(err) => log::warn!("initial cart count unavailable: {err}"),
        }
        result
    }

    #[allow(clippy::future_not_send)]
    async fn fetch_count(&self) -> Result<i64, CartError> {
        let request = OutboundRequest::get(self.config.count_url());
        let reply = self.transport.send(&request).await?;
        let data: CartCountResponse = reply.json()?;
        Ok(data.count)
    }

    /// Add one unit of `item` to the cart and report the result to the user.
    #[allow(clippy::future_not_send)]
    pub async fn add_to_cart(&self, item: &CartItemRequest) -> AddOutcome {
        let _pending = if self.config.guard_in_flight {
            match InFlight::acquire(&self.in_flight, &item.id) {
                Some(pending) => Some(pending),
                None => {
                    log::debug!("add for item {:?} already pending; click ignored", item.id);
                    return AddOutcome::Skipped;
                }
            }
        } else {
            None
        };

        let outcome = match self.submit_add(&item.id).await {
            Ok(data) if data.success => AddOutcome::Added {
                cart_total: data.cart_total,
            },
            Ok(data) => AddOutcome::Rejected {
                message: data.message.unwrap_or_else(|| i18n::t("cart.add_failed")),
            },
            Err(err) => AddOutcome::Failed(err),
        };

        match &outcome {
            AddOutcome::Added { cart_total } => {
                let mut vars = BTreeMap::new();
                vars.insert("name", item.name.as_str());
                self.view
                    .show_notification(&Notification::success(i18n::tr("cart.added", Some(&vars))));
                match cart_total {
                    Some(total) => self.apply_count(*total),
                    None => log::debug!("add reply carried no cart_total; badge left as is"),
                }
            }
            AddOutcome::Rejected { message } => {
                self.view.show_notification(&Notification::error(message.clone()));
            }
            AddOutcome::Failed(err) => {
                log::error!("add to cart failed for item {:?}: {err}", item.id);
                self.view
                    .show_notification(&Notification::error(i18n::t("cart.add_failed")));
            }
            AddOutcome::Skipped => {}
        }
        outcome
    }

    #[allow(clippy::future_not_send)]
    async fn submit_add(&self, item_id: &str) -> Result<CartAddResponse, CartError> {
        if item_id.is_empty() {
            return Err(CartError::EmptyItemId);
        }
        let reply = self.transport.send(&self.add_request(item_id)).await?;
        if !reply.ok() {
            log::debug!("add endpoint answered HTTP {}", reply.status);
        }
        reply.json()
    }

    /// Change the quantity of a cart line, or remove it.
    #[allow(clippy::future_not_send)]
    pub async fn update_item(&self, item_id: &str, action: UpdateAction) -> UpdateOutcome {
        let outcome = match self.submit_update(item_id, action).await {
            Ok(data) if data.success => UpdateOutcome::Updated(data),
            Ok(data) => UpdateOutcome::Rejected {
                message: data.message.unwrap_or_else(|| i18n::t("cart.update_failed")),
            },
            Err(err) => UpdateOutcome::Failed(err),
        };

        match &outcome {
            UpdateOutcome::Updated(data) => {
                if let Some(message) = &data.message {
                    self.view
                        .show_notification(&Notification::success(message.clone()));
                }
                match data.cart_items_count {
                    Some(count) => self.apply_count(count),
                    // Removals carry no count; ask the server for the new total.
                    None if data.deleted => {
                        let _ = self.load_initial_count().await;
                    }
                    None => {}
                }
            }
            UpdateOutcome::Rejected { message } => {
                self.view.show_notification(&Notification::error(message.clone()));
            }
            UpdateOutcome::Failed(err) => {
                log::error!("cart update {action:?} failed for item {item_id:?}: {err}");
                self.view
                    .show_notification(&Notification::error(i18n::t("cart.update_failed")));
            }
        }
        outcome
    }

    #[allow(clippy::future_not_send)]
    async fn submit_update(
        &self,
        item_id: &str,
        action: UpdateAction,
    ) -> Result<CartUpdateResponse, CartError> {
        if item_id.is_empty() {
            return Err(CartError::EmptyItemId);
        }
        let body = serde_json::to_string(&UpdateRequestBody { action })?;
        let request = OutboundRequest::post_with_csrf(
            self.config.update_url(item_id),
            &self.config.csrf_header,
            &self.csrf_token(),
        )
        .with_body(body);
        let reply = self.transport.send(&request).await?;
        reply.json()
    }

    fn apply_count(&self, count: i64) {
        if !self.view.update_counter(count) {
            log::debug!("no cart link for the counter badge; count {count} dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpReply;
    use std::cell::Cell;

    struct StaticReply(&'static str);

    impl CartTransport for StaticReply {
        async fn send(&self, _request: &OutboundRequest) -> Result<HttpReply, CartError> {
            Ok(HttpReply::new(200, self.0))
        }
    }

    #[derive(Default)]
    struct CountingView {
        notes: Cell<usize>,
    }

    impl CartView for CountingView {
        fn show_notification(&self, _notification: &Notification) {
            self.notes.set(self.notes.get() + 1);
        }

        fn update_counter(&self, _count: i64) -> bool {
            true
        }
    }

    #[test]
    fn in_flight_marker_releases_on_drop() {
        let set = RefCell::new(BTreeSet::new());
        let first = InFlight::acquire(&set, "g1");
        assert!(first.is_some());
        assert!(InFlight::acquire(&set, "g1").is_none());
        assert!(InFlight::acquire(&set, "g2").is_some());
        drop(first);
        assert!(InFlight::acquire(&set, "g1").is_some());
    }

    #[test]
    fn empty_item_id_fails_without_request() {
        let client = CartClient::new(
            CartConfig::default(),
            StaticReply(r#"{"success": true, "cart_total": 1}"#),
            CountingView::default(),
            "csrftoken=abc",
        );
        let item = CartItemRequest::new("", "X");
        let outcome = futures::executor::block_on(client.add_to_cart(&item));
        assert!(matches!(outcome, AddOutcome::Failed(CartError::EmptyItemId)));
        assert_eq!(client.view().notes.get(), 1);
    }

    #[test]
    fn missing_cookie_yields_empty_token() {
        let client = CartClient::new(
            CartConfig::default(),
            StaticReply("{}"),
            CountingView::default(),
            "sessionid=1",
        );
        assert_eq!(client.csrf_token(), "");
        assert_eq!(
            client.add_request("g1").header(crate::api::CSRF_HEADER),
            Some("")
        );
    }
}
