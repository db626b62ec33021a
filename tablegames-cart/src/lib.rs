//! Tablegames Cart Client
//!
//! Platform-agnostic core of the storefront "add to cart" adapter.
//! This crate decides which requests to send and what the user sees afterwards;
//! the browser specifics live behind the traits defined here.

pub mod api;
pub mod client;
pub mod config;
pub mod cookie;
pub mod counter;
pub mod error;
pub mod i18n;
pub mod notification;

// Re-export commonly used types
pub use api::{
    CSRF_HEADER, CartAddResponse, CartCountResponse, CartItemRequest, CartUpdateResponse,
    HttpMethod, HttpReply, OutboundRequest, UpdateAction,
};
pub use client::{AddOutcome, CartClient, UpdateOutcome};
pub use config::{CartConfig, Endpoints};
pub use cookie::get_cookie;
pub use counter::{BadgeState, COUNTER_CLASSES, COUNTER_ID};
pub use error::CartError;
pub use notification::{AUTO_DISMISS_MS, Notification, NotificationKind};

/// Trait for abstracting the HTTP round trip
/// Platform-specific implementations should provide this
#[allow(async_fn_in_trait)] // Implementations run on the single-threaded browser event loop.
pub trait CartTransport {
    /// Send a request and return the raw reply regardless of status code
    ///
    /// # Errors
    ///
    /// Returns an error if the request never produced a response or the body could not be read.
    async fn send(&self, request: &OutboundRequest) -> Result<HttpReply, CartError>;
}

/// Trait for abstracting the user-visible effects of the cart client
pub trait CartView {
    /// Display a transient notification banner
    fn show_notification(&self, notification: &Notification);

    /// Overwrite the counter badge with `count`
    ///
    /// Returns `false` when there is nowhere to put the badge and the update was dropped.
    fn update_counter(&self, count: i64) -> bool;
}

/// Trait for reading the raw cookie jar (`name=value; name2=value2`)
pub trait CookieSource {
    fn cookie_string(&self) -> String;
}

impl CookieSource for String {
    fn cookie_string(&self) -> String {
        self.clone()
    }
}

impl CookieSource for &str {
    fn cookie_string(&self) -> String {
        (*self).to_string()
    }
}
