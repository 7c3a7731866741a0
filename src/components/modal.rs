//! Shared modal helper used by the cabinet and hardware dialogs.
//!
//! The dialogs are Bootstrap modals declared in the page markup. When the
//! Bootstrap bundle is not loaded the backdrop is toggled directly.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom_utils;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Modal;

    #[wasm_bindgen(static_method_of = Modal, js_namespace = bootstrap, js_name = getOrCreateInstance, catch)]
    fn get_or_create_instance(el: &Element) -> Result<Modal, JsValue>;

    #[wasm_bindgen(method, catch, js_name = show)]
    fn show_modal(this: &Modal) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = hide)]
    fn hide_modal(this: &Modal) -> Result<(), JsValue>;
}

/// Show the modal with the given element id.
pub fn show(document: &Document, id: &str) -> Result<(), JsValue> {
    let el = dom_utils::element(document, id)?;
    if Modal::get_or_create_instance(&el).and_then(|m| m.show_modal()).is_err() {
        log::warn!("bootstrap.Modal unavailable, toggling #{} directly", id);
        dom_utils::show(&el);
    }
    Ok(())
}

/// Hide the modal with the given element id.
pub fn hide(document: &Document, id: &str) -> Result<(), JsValue> {
    let el = dom_utils::element(document, id)?;
    if Modal::get_or_create_instance(&el).and_then(|m| m.hide_modal()).is_err() {
        dom_utils::hide(&el);
    }
    Ok(())
}
