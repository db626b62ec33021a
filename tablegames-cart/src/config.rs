//! Runtime configuration for the cart client.
//!
//! Every field has a default matching the storefront templates, so an empty
//! JSON object (or no configuration at all) yields a working client.

use serde::Deserialize;

use crate::counter::{COUNTER_CLASSES, COUNTER_ID};
use crate::error::CartError;
use crate::notification::AUTO_DISMISS_MS;

const ID_PLACEHOLDER: &str = "{id}";

/// Endpoint path templates; `{id}` is replaced verbatim by the item identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub add: String,
    pub count: String,
    pub update: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            add: "/cart/add/{id}/".to_string(),
            count: "/cart/count/".to_string(),
            update: "/cart/update/{id}/".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    pub add_button_selector: String,
    pub item_id_attr: String,
    pub item_name_attr: String,
    pub update_button_selector: String,
    pub update_item_attr: String,
    pub update_action_attr: String,
    pub counter_id: String,
    pub counter_classes: String,
    pub cart_link_selector: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub endpoints: Endpoints,
    /// Deployment prefix such as `/shop`; empty for root deployments.
    pub base_path: String,
    pub notification_timeout_ms: u32,
    /// Suppress a second add for an item while its first add is pending.
    pub guard_in_flight: bool,
    pub lang: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            add_button_selector: ".add-to-cart-btn".to_string(),
            item_id_attr: "data-game-id".to_string(),
            item_name_attr: "data-game-name".to_string(),
            update_button_selector: ".cart-update-btn".to_string(),
            update_item_attr: "data-item-id".to_string(),
            update_action_attr: "data-action".to_string(),
            counter_id: COUNTER_ID.to_string(),
            counter_classes: COUNTER_CLASSES.to_string(),
            cart_link_selector: r#"a[href*="cart"]"#.to_string(),
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: crate::api::CSRF_HEADER.to_string(),
            endpoints: Endpoints::default(),
            base_path: option_env!("PUBLIC_URL").unwrap_or("").to_string(),
            notification_timeout_ms: AUTO_DISMISS_MS,
            guard_in_flight: false,
            lang: crate::i18n::DEFAULT_LANG.to_string(),
        }
    }
}

impl CartConfig {
    /// Parse a configuration object, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Parse`] if `json` is not a valid configuration object.
    pub fn from_json(json: &str) -> Result<Self, CartError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn add_url(&self, item_id: &str) -> String {
        self.url(&self.endpoints.add.replace(ID_PLACEHOLDER, item_id))
    }

    #[must_use]
    pub fn count_url(&self) -> String {
        self.url(&self.endpoints.count)
    }

    #[must_use]
    pub fn update_url(&self, item_id: &str) -> String {
        self.url(&self.endpoints.update.replace(ID_PLACEHOLDER, item_id))
    }

    fn url(&self, path: &str) -> String {
        url_with_base(path, &self.base_path)
    }
}

fn url_with_base(path: &str, base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let rel = path.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}
