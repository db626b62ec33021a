//! `fetch`-backed transport for the cart client.

use tablegames_cart::{CartError, CartTransport, HttpReply, OutboundRequest};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit};

use crate::dom;

/// Sends cart requests with the browser's `fetch`, same-origin cookies included.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

impl CartTransport for FetchTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<HttpReply, CartError> {
        let browser_request = build_request(request).map_err(request_error)?;
        let response = dom::fetch_request(&browser_request)
            .await
            .map_err(request_error)?;

        let text_js = JsFuture::from(response.text().map_err(request_error)?)
            .await
            .map_err(request_error)?;
        let body = text_js
            .as_string()
            .ok_or_else(|| CartError::InvalidResponse("body is not text".to_string()))?;

        Ok(HttpReply::new(response.status(), body))
    }
}

fn build_request(request: &OutboundRequest) -> Result<Request, JsValue> {
    let init = RequestInit::new();
    init.set_method(request.method.as_str());

    let headers = Headers::new()?;
    for (name, value) in &request.headers {
        headers.set(name, value)?;
    }
    init.set_headers(&headers);

    if let Some(body) = &request.body {
        init.set_body(&JsValue::from_str(body));
    }

    Request::new_with_str_and_init(&request.url, &init)
}

fn request_error(err: JsValue) -> CartError {
    CartError::Request(dom::js_error_message(&err))
}
