//! Rack inventory frontend compiled to WebAssembly.
//!
//! Loaded by the server-rendered pages (`/ormari`, `/hardver`,
//! `/vizualizacije`, `/ormar_detalji?id=N`); on start it picks the
//! initializer for the current page, which fetches from the REST API and
//! renders into the page's containers.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

pub mod components;
pub mod constants; // DOM ids and UI text
pub mod dom_utils;
pub mod error;
pub mod models;
pub mod network;
pub mod pages;
pub mod toast;
pub mod utils;

use network::{ApiClient, ApiConfig};

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();
    // A second init (e.g. tests) only fails to replace the logger.
    let _ = console_log::init_with_level(log::Level::Debug);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    if still_loading(&document.ready_state()) {
        let doc = document.clone();
        let on_ready = Closure::<dyn FnMut()>::once(move || {
            if let Err(e) = boot(&doc) {
                log::error!("Initialization failed: {:?}", e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
        return Ok(());
    }

    boot(&document)
}

// `document.readyState` is "loading" until the DOM is parsed, then
// "interactive" and "complete".
fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

// Resolve the API configuration once and hand it to the page initializer.
fn boot(document: &Document) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let location = window.location();
    let path = location.pathname()?;
    let search = location.search()?;

    let config = ApiConfig::load(document);
    log::info!("API base URL: {}", config.base_url());

    pages::init_page(document, ApiClient::new(config), &path, &search)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_waits_only_while_parsing() {
        assert!(still_loading("loading"));
        assert!(!still_loading("interactive"));
        assert!(!still_loading("complete"));
    }
}
