use tablegames_cart::CartError;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::dom;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("`window` is unavailable")]
    NoWindow,
    #[error("`document` is unavailable")]
    NoDocument,
    #[error("document has no <body>")]
    NoBody,
    #[error("DOM call failed: {0}")]
    Js(String),
    #[error("Invalid cart configuration: {0}")]
    Config(#[from] CartError),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(dom::js_error_message(&value))
    }
}
