use tablegames_cart::{CartConfig, CartView, Notification};

use crate::{counter, dom, notification};

/// Renders cart effects into the live document.
#[derive(Debug, Clone)]
pub struct DomView {
    config: CartConfig,
}

impl DomView {
    #[must_use]
    pub const fn new(config: CartConfig) -> Self {
        Self { config }
    }
}

impl CartView for DomView {
    fn show_notification(&self, notification: &Notification) {
        let shown = dom::document().and_then(|doc| {
            notification::show_notification(&doc, notification, self.config.notification_timeout_ms)
        });
        if let Err(err) = shown {
            log::error!("could not show notification {:?}: {err}", notification.message);
        }
    }

    fn update_counter(&self, count: i64) -> bool {
        match dom::document()
            .and_then(|doc| counter::update_cart_counter(&doc, &self.config, count))
        {
            Ok(placed) => placed,
            Err(err) => {
                log::error!("could not update cart counter: {err}");
                false
            }
        }
    }
}
