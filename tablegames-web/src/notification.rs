//! Self-dismissing notification banners.
//!
//! Each banner gets its own host `<div>` appended to `<body>` and its own Yew
//! app rendering the message and close button into it. Banners are independent:
//! no queue, no stacking logic.

use tablegames_cart::notification::BANNER_STYLE;
use tablegames_cart::{Notification, i18n};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};
use yew::prelude::*;

use crate::dom;
use crate::error::WebError;

#[derive(Properties, PartialEq, Clone)]
pub struct NotificationBannerProps {
    pub message: AttrValue,
    pub on_dismiss: Callback<()>,
}

#[function_component(NotificationBanner)]
pub fn notification_banner(props: &NotificationBannerProps) -> Html {
    let on_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };
    html! {
        <>
            { props.message.clone() }
            <button
                type="button"
                class="btn-close"
                data-bs-dismiss="alert"
                aria-label={i18n::t("notification.close")}
                onclick={on_click}
            ></button>
        </>
    }
}

/// Attach a banner for `notification` and schedule its removal after `timeout_ms`.
///
/// A banner dismissed by the user before the timer fires is left alone by the timer.
///
/// # Errors
/// Returns an error if the document has no body or a DOM call fails.
pub fn show_notification(
    document: &Document,
    notification: &Notification,
    timeout_ms: u32,
) -> Result<Element, WebError> {
    let body = document.body().ok_or(WebError::NoBody)?;
    let host = document.create_element("div")?;
    host.set_class_name(&notification.class_name());
    host.set_attribute("style", BANNER_STYLE)?;
    host.set_attribute("role", "alert")?;
    body.append_child(&host)?;

    let on_dismiss = {
        let host = host.clone();
        Callback::from(move |()| host.remove())
    };
    let props = NotificationBannerProps {
        message: AttrValue::from(notification.message.clone()),
        on_dismiss,
    };
    let app =
        yew::Renderer::<NotificationBanner>::with_root_and_props(host.clone(), props).render();

    let expiring = host.clone();
    let delay = i32::try_from(timeout_ms).unwrap_or(i32::MAX);
    spawn_local(async move {
        if let Err(err) = dom::sleep_ms(delay).await {
            log::warn!("notification timer failed: {}", dom::js_error_message(&err));
        }
        if expiring.parent_node().is_some() {
            expiring.remove();
        }
        app.destroy();
    });

    Ok(host)
}
