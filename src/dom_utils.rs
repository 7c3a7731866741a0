//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small wrappers for looking up the fixed elements of the served pages and
//! reading / writing form controls, so controllers don't repeat the
//! `get_element_by_id` + `dyn_into` dance.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

/// Remove the `hidden` class so the element becomes visible.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1("hidden");
    let _ = el.class_list().add_1("show");
    let _ = el.set_attribute("style", "display: block;");
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1("show");
    let _ = el.class_list().add_1("hidden");
    let _ = el.set_attribute("style", "display: none;");
}

/// Look up an element that the page is expected to contain.
pub fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{} not found", id)))
}

/// Current value of an `<input>` or `<select>` by id.
pub fn field_value(document: &Document, id: &str) -> Result<String, JsValue> {
    let el = element(document, id)?;
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Ok(input.value());
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return Ok(select.value());
    }
    Err(JsValue::from_str(&format!("#{} is not a form control", id)))
}

/// Set the value of an `<input>` or `<select>` by id.
pub fn set_field_value(document: &Document, id: &str, value: &str) -> Result<(), JsValue> {
    let el = element(document, id)?;
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
        return Ok(());
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
        return Ok(());
    }
    Err(JsValue::from_str(&format!("#{} is not a form control", id)))
}

/// Reset a `<form>` to its initial values.
pub fn reset_form(document: &Document, id: &str) -> Result<(), JsValue> {
    let form: HtmlFormElement = element(document, id)?.dyn_into()?;
    form.reset();
    Ok(())
}

/// Replace the text content of an element if it exists.
pub fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Parse the `data-id` attribute of an action button.
pub fn data_id(el: &Element) -> Option<u32> {
    el.get_attribute("data-id").and_then(|v| v.parse().ok())
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    // The page never tears its controllers down, so the closure lives forever.
    callback.forget();
    Ok(())
}

/// The element an event was dispatched on, if it is an element.
pub fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Blocking `window.confirm`; any failure counts as "cancel".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    fn field_round_trip_and_data_id() {
        let document = document();
        let input = document.create_element("input").unwrap();
        input.set_id("dom-utils-input");
        document.body().unwrap().append_child(&input).unwrap();

        set_field_value(&document, "dom-utils-input", "ORMAR-C3").unwrap();
        assert_eq!(field_value(&document, "dom-utils-input").unwrap(), "ORMAR-C3");

        input.set_attribute("data-id", "17").unwrap();
        assert_eq!(data_id(&input), Some(17));
        assert!(field_value(&document, "no-such-input").is_err());
    }
}
