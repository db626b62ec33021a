#![forbid(unsafe_code)]
//! Browser front of the tablegames cart client.
//!
//! Loaded as a wasm module on every storefront page; wires the add-to-cart
//! buttons, shows notifications and keeps the navbar counter current.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod binding;
pub mod config;
pub mod cookies;
pub mod counter;
pub mod dom;
pub mod error;
pub mod i18n;
pub mod logger;
pub mod notification;
pub mod transport;
pub mod view;

pub use binding::{CartBinding, PageClient, bind, initialize, mount};
pub use error::WebError;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });

    let ready = dom::on_dom_ready(|| match config::page_config().and_then(mount) {
        Ok(binding) => binding.persist(),
        Err(err) => log::error!("cart client failed to start: {err}"),
    });
    if let Err(err) = ready {
        log::error!("cart client could not wait for the document: {err}");
    }
}
