//! Notification banner helper.
//! Writes a dismissible Bootstrap alert into the page's `#messageBox` region
//! and closes it again after a few seconds. Never panics: without a message
//! region the text only goes to the log.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::constants::{MESSAGE_BOX_ID, NOTIFICATION_TIMEOUT_MS};
use crate::utils::escape_html;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Alert;

    #[wasm_bindgen(static_method_of = Alert, js_namespace = bootstrap, js_name = getOrCreateInstance, catch)]
    fn get_or_create_instance(el: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn close(this: &Alert) -> Result<(), JsValue>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Danger,
}

impl NotifyKind {
    fn alert_class(self) -> &'static str {
        match self {
            NotifyKind::Success => "alert-success",
            NotifyKind::Danger => "alert-danger",
        }
    }
}

pub fn success(msg: &str) {
    notify(msg, NotifyKind::Success);
}

pub fn danger(msg: &str) {
    notify(msg, NotifyKind::Danger);
}

/// Markup of a single banner.
pub fn banner_html(message: &str, kind: NotifyKind) -> String {
    format!(
        "<div class=\"alert {} alert-dismissible fade show\" role=\"alert\">{}\
         <button type=\"button\" class=\"btn-close\" data-bs-dismiss=\"alert\" aria-label=\"Close\"></button></div>",
        kind.alert_class(),
        escape_html(message)
    )
}

pub fn notify(message: &str, kind: NotifyKind) {
    let message_box = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MESSAGE_BOX_ID));

    let Some(message_box) = message_box else {
        log::info!("Poruka ({:?}): {}", kind, message);
        return;
    };

    message_box.set_inner_html(&banner_html(message, kind));

    // Only this banner is closed by its timer; a newer one replacing it is
    // left alone.
    if let Ok(Some(alert)) = message_box.query_selector(".alert") {
        Timeout::new(NOTIFICATION_TIMEOUT_MS, move || dismiss(&alert)).forget();
    }
}

fn dismiss(alert: &Element) {
    if !alert.is_connected() {
        return;
    }
    let closed = Alert::get_or_create_instance(alert).and_then(|instance| instance.close());
    if closed.is_err() {
        alert.remove();
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_message_box_does_not_panic() {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(el) = document.get_element_by_id(MESSAGE_BOX_ID) {
            el.remove();
        }
        notify("nema regije", NotifyKind::Danger);
    }

    #[wasm_bindgen_test]
    fn banner_replaces_previous_content() {
        let document = web_sys::window().unwrap().document().unwrap();
        let region = document.create_element("div").unwrap();
        region.set_id(MESSAGE_BOX_ID);
        document.body().unwrap().append_child(&region).unwrap();

        notify("prva", NotifyKind::Success);
        notify("druga", NotifyKind::Danger);

        let alerts = region.query_selector_all(".alert").unwrap();
        assert_eq!(alerts.length(), 1);
        assert!(region.inner_html().contains("druga"));
        region.remove();
    }
}
