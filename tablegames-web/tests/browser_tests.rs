#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use tablegames_cart::{
    CSRF_HEADER, CartClient, CartConfig, CartError, CartTransport, CookieSource, HttpReply,
    Notification, OutboundRequest, get_cookie,
};
use tablegames_web::config::config_from_document;
use tablegames_web::cookies::DocumentCookies;
use tablegames_web::counter::update_cart_counter;
use tablegames_web::notification::show_notification;
use tablegames_web::view::DomView;
use tablegames_web::{WebError, dom, initialize};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlDocument, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

struct StubTransport {
    body: &'static str,
    sent: RefCell<Vec<OutboundRequest>>,
}

impl CartTransport for StubTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<HttpReply, CartError> {
        self.sent.borrow_mut().push(request.clone());
        Ok(HttpReply::new(200, self.body))
    }
}

fn reset_body(html: &str) -> web_sys::Document {
    let doc = dom::document().expect("document");
    doc.body().expect("body").set_inner_html(html);
    doc
}

fn counter_display(doc: &web_sys::Document) -> String {
    doc.get_element_by_id("cart-counter")
        .expect("counter exists")
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .style()
        .get_property_value("display")
        .expect("display")
}

fn config() -> CartConfig {
    CartConfig {
        base_path: String::new(),
        ..CartConfig::default()
    }
}

#[wasm_bindgen_test]
fn counter_is_created_under_cart_link_and_toggles_visibility() {
    let doc = reset_body(r#"<nav><a href="/cart/">Корзина</a></nav>"#);

    assert!(update_cart_counter(&doc, &config(), 5).expect("update"));
    let counter = doc.get_element_by_id("cart-counter").expect("counter");
    assert_eq!(counter.text_content().as_deref(), Some("5"));
    assert_eq!(counter.parent_element().expect("parent").tag_name(), "A");
    assert!(counter.class_list().contains("badge"));
    assert_eq!(counter_display(&doc), "inline");

    assert!(update_cart_counter(&doc, &config(), 0).expect("update"));
    assert_eq!(counter.text_content().as_deref(), Some("0"));
    assert_eq!(counter_display(&doc), "none");
    assert_eq!(doc.query_selector_all("#cart-counter").expect("query").length(), 1);
}

#[wasm_bindgen_test]
fn counter_update_without_cart_link_is_dropped() {
    let doc = reset_body(r#"<a href="/games/">Игры</a>"#);
    assert!(!update_cart_counter(&doc, &config(), 3).expect("update"));
    assert!(doc.get_element_by_id("cart-counter").is_none());
}

#[wasm_bindgen_test]
fn document_cookies_feed_the_accessor() {
    let doc: HtmlDocument = dom::document().expect("document").dyn_into().expect("html document");
    doc.set_cookie("csrftoken=XYZ; path=/").expect("set cookie");
    let jar = DocumentCookies.cookie_string();
    assert_eq!(get_cookie(&jar, "csrftoken").as_deref(), Some("XYZ"));
    assert_eq!(get_cookie(&jar, "nope"), None);
}

#[wasm_bindgen_test]
async fn notification_expires_after_timeout() {
    let doc = reset_body("");
    let host = show_notification(&doc, &Notification::error("Out of stock"), 3000).expect("show");

    dom::sleep_ms(2900).await.expect("sleep");
    assert!(host.parent_node().is_some());
    assert!(host.class_list().contains("alert-danger"));
    assert!(host.text_content().unwrap_or_default().contains("Out of stock"));

    dom::sleep_ms(200).await.expect("sleep");
    assert!(host.parent_node().is_none());
}

#[wasm_bindgen_test]
async fn dismissed_notification_survives_its_timer() {
    let doc = reset_body("");
    let host = show_notification(&doc, &Notification::success("ok"), 300).expect("show");
    dom::sleep_ms(50).await.expect("render");

    let close: HtmlElement = host
        .query_selector(".btn-close")
        .expect("query")
        .expect("close button")
        .dyn_into()
        .expect("html element");
    assert_eq!(close.get_attribute("data-bs-dismiss").as_deref(), Some("alert"));
    close.click();
    assert!(host.parent_node().is_none());

    dom::sleep_ms(400).await.expect("sleep");
    assert!(host.parent_node().is_none());
    assert_eq!(doc.query_selector_all(".alert").expect("query").length(), 0);
}

#[wasm_bindgen_test]
async fn delegated_click_covers_buttons_added_later() {
    let doc = reset_body(r#"<a href="/cart/">Корзина</a>"#);
    let client = Rc::new(CartClient::new(
        config(),
        StubTransport {
            body: r#"{"success": true, "cart_total": 5}"#,
            sent: RefCell::default(),
        },
        DomView::new(config()),
        "a=1; csrftoken=XYZ; b=2",
    ));
    let binding = initialize(&doc, Rc::clone(&client)).expect("initialize");
    assert!(client.transport().sent.borrow().is_empty());

    let button = doc.create_element("button").expect("button");
    button.set_class_name("btn add-to-cart-btn");
    button.set_attribute("data-game-id", "g1").expect("attr");
    button.set_attribute("data-game-name", "Chess").expect("attr");
    button.set_inner_html("<span>В корзину</span>");
    doc.body().expect("body").append_child(&button).expect("append");

    let inner: HtmlElement = button
        .first_element_child()
        .expect("inner span")
        .dyn_into()
        .expect("html element");
    inner.click();
    dom::sleep_ms(50).await.expect("settle");

    {
        let sent = client.transport().sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "/cart/add/g1/");
        assert_eq!(sent[0].header(CSRF_HEADER), Some("XYZ"));
    }
    assert_eq!(
        doc.get_element_by_id("cart-counter")
            .and_then(|c| c.text_content())
            .as_deref(),
        Some("5")
    );
    assert_eq!(counter_display(&doc), "inline");
    let banner = doc.query_selector(".alert-success").expect("query").expect("banner");
    assert!(banner.text_content().unwrap_or_default().contains("\"Chess\""));

    drop(binding);
    inner.click();
    dom::sleep_ms(50).await.expect("settle");
    assert_eq!(client.transport().sent.borrow().len(), 1);
}

#[wasm_bindgen_test]
async fn initialize_fetches_count_only_when_buttons_exist() {
    let doc = reset_body(r#"<a href="/cart/">Корзина</a>"#);
    let client = Rc::new(CartClient::new(
        config(),
        StubTransport {
            body: r#"{"count": 2}"#,
            sent: RefCell::default(),
        },
        DomView::new(config()),
        "",
    ));
    let binding = initialize(&doc, Rc::clone(&client)).expect("initialize");
    dom::sleep_ms(20).await.expect("settle");
    assert!(client.transport().sent.borrow().is_empty());
    drop(binding);

    let doc = reset_body(
        r#"<a href="/cart/">Корзина</a>
           <button class="add-to-cart-btn" data-game-id="7" data-game-name="Go"></button>"#,
    );
    let binding = initialize(&doc, Rc::clone(&client)).expect("initialize");
    dom::sleep_ms(20).await.expect("settle");
    assert_eq!(client.transport().sent.borrow()[0].url, "/cart/count/");
    assert_eq!(
        doc.get_element_by_id("cart-counter")
            .and_then(|c| c.text_content())
            .as_deref(),
        Some("2")
    );
    drop(binding);
}

fn update_button(doc: &web_sys::Document, item_id: &str, action: &str) -> HtmlElement {
    let button: HtmlElement = doc
        .create_element("button")
        .expect("button")
        .dyn_into()
        .expect("html element");
    button.set_class_name("btn cart-update-btn");
    button.set_attribute("data-item-id", item_id).expect("attr");
    button.set_attribute("data-action", action).expect("attr");
    doc.body().expect("body").append_child(&button).expect("append");
    button
}

#[wasm_bindgen_test]
async fn delegated_update_click_posts_action() {
    let doc = reset_body(r#"<a href="/cart/">Корзина</a>"#);
    let client = Rc::new(CartClient::new(
        config(),
        StubTransport {
            body: r#"{"success": true, "quantity": 3, "cart_items_count": 6}"#,
            sent: RefCell::default(),
        },
        DomView::new(config()),
        "a=1; csrftoken=XYZ; b=2",
    ));
    let binding = initialize(&doc, Rc::clone(&client)).expect("initialize");

    update_button(&doc, "17", "increase").click();
    dom::sleep_ms(50).await.expect("settle");

    {
        let sent = client.transport().sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "/cart/update/17/");
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"action":"increase"}"#));
        assert_eq!(sent[0].header(CSRF_HEADER), Some("XYZ"));
    }
    assert_eq!(
        doc.get_element_by_id("cart-counter")
            .and_then(|c| c.text_content())
            .as_deref(),
        Some("6")
    );
    drop(binding);
}

#[wasm_bindgen_test]
async fn update_click_with_unknown_action_sends_nothing() {
    let doc = reset_body("");
    let client = Rc::new(CartClient::new(
        config(),
        StubTransport {
            body: r#"{"success": true}"#,
            sent: RefCell::default(),
        },
        DomView::new(config()),
        "csrftoken=XYZ",
    ));
    let binding = initialize(&doc, Rc::clone(&client)).expect("initialize");

    update_button(&doc, "17", "explode").click();
    update_button(&doc, "18", "").click();
    dom::sleep_ms(50).await.expect("settle");

    assert!(client.transport().sent.borrow().is_empty());
    assert_eq!(doc.query_selector_all(".alert").expect("query").length(), 0);
    drop(binding);
}

#[wasm_bindgen_test]
fn inline_config_overrides_only_given_fields() {
    let doc = reset_body(
        r#"<script type="application/json" id="cart-config">{"guard_in_flight": true}</script>"#,
    );
    let parsed = config_from_document(&doc).expect("config");
    assert!(parsed.guard_in_flight);
    assert_eq!(parsed.count_url(), CartConfig::default().count_url());
    assert_eq!(parsed.csrf_cookie, "csrftoken");

    let doc = reset_body(r#"<script type="application/json" id="cart-config">  </script>"#);
    assert_eq!(config_from_document(&doc).expect("config"), CartConfig::default());

    let doc = reset_body("");
    assert_eq!(config_from_document(&doc).expect("config"), CartConfig::default());
}

#[wasm_bindgen_test]
fn inline_config_with_invalid_json_is_an_error() {
    let doc = reset_body(r#"<script type="application/json" id="cart-config">{oops</script>"#);
    assert!(matches!(
        config_from_document(&doc),
        Err(WebError::Config(CartError::Parse(_)))
    ));
}
