//! Wire types for the storefront cart endpoints.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CartError;

/// Header carrying the CSRF token on mutating requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A request as the client wants it sent; transports translate it to their own type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl OutboundRequest {
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// A JSON-typed POST carrying the CSRF token, with no body yet.
    #[must_use]
    pub fn post_with_csrf(url: impl Into<String>, csrf_header: &str, csrf_token: &str) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: vec![
                ("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string()),
                (csrf_header.to_string(), csrf_token.to_string()),
            ],
            body: None,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// Look up a header value, ignoring ASCII case in the name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body text of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub const fn ok(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Decode the body as JSON. The status code is not consulted.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Parse`] when the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, CartError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Item taken from an "add to cart" button.
///
/// `name` only feeds the notification text and is never sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemRequest {
    pub id: String,
    pub name: String,
}

impl CartItemRequest {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CartAddResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Total number of items in the cart after the add.
    #[serde(default)]
    pub cart_total: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CartCountResponse {
    pub count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateAction {
    Increase,
    Decrease,
    Remove,
}

impl UpdateAction {
    /// Parse the value of a `data-action` attribute.
    #[must_use]
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim() {
            "increase" => Some(Self::Increase),
            "decrease" => Some(Self::Decrease),
            "remove" => Some(Self::Remove),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdateRequestBody {
    pub action: UpdateAction,
}

/// Reply of the cart line update endpoint.
///
/// A removal answers with `deleted: true` and a message but no item count; a
/// quantity change answers with `cart_items_count`. The line quantity and
/// money totals the server also sends are not read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CartUpdateResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub cart_items_count: Option<i64>,
}
