// Hardware list page: hardware table, cabinet select and the
// add/edit/delete controller.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::components::{hardware_form, modal, tables};
use crate::constants::{
    CABINET_SELECT_ID, CONFIRM_DELETE_HARDWARE, HARDWARE_FORM_ID, HARDWARE_LIST_ID, HARDWARE_MODAL_ID,
    MSG_CABINET_SELECT_UNAVAILABLE, MSG_HARDWARE_DELETED, MSG_HARDWARE_DELETE_FAILED,
    MSG_HARDWARE_UNAVAILABLE,
};
use crate::dom_utils;
use crate::error::AppError;
use crate::network::{ApiClient, ApiError};
use crate::pages::DeleteFeedback;
use crate::toast;
use crate::utils::{escape_html, now_iso};

pub fn init(document: &Document, api: ApiClient) -> Result<(), JsValue> {
    {
        let document = document.clone();
        let api = api.clone();
        spawn_local(async move { load_and_render(&document, &api, true).await });
    }
    setup_event_listeners(document, api)
}

pub fn refresh(document: Document, api: ApiClient) {
    spawn_local(async move { load_and_render(&document, &api, false).await });
}

/// Fetch hardware and cabinets side by side. The cabinets only supply names
/// (and the select options), so the table is drawn even if they fail.
async fn load_and_render(document: &Document, api: &ApiClient, populate_select: bool) {
    let (hardware, cabinets) = futures::join!(api.list_hardware(), api.list_cabinets());

    if let Err(e) = &cabinets {
        log::warn!("Greška pri dohvaćanju ormara: {}", e);
    }

    if populate_select {
        if let Some(select) = document.get_element_by_id(CABINET_SELECT_ID) {
            match &cabinets {
                Ok(cabinets) => select.set_inner_html(&tables::cabinet_options_html(cabinets)),
                Err(_) => select.set_inner_html(&format!(
                    "<option>{}</option>",
                    escape_html(MSG_CABINET_SELECT_UNAVAILABLE)
                )),
            }
        }
    }

    let Some(container) = document.get_element_by_id(HARDWARE_LIST_ID) else {
        return;
    };
    match hardware {
        Ok(hardware) => {
            let names = cabinets.as_deref().map(tables::cabinet_names).unwrap_or_default();
            tables::render_table(&container, &tables::hardware_table(&hardware, &names));
        }
        Err(e) => {
            log::error!("Greška pri dohvaćanju hardvera: {}", e);
            container.set_inner_html(&tables::list_error_html(MSG_HARDWARE_UNAVAILABLE));
        }
    }
}

fn setup_event_listeners(document: &Document, api: ApiClient) -> Result<(), JsValue> {
    if document.get_element_by_id(HARDWARE_MODAL_ID).is_none() {
        return Ok(());
    }

    let add_selector = format!("button[data-bs-target=\"#{}\"]", HARDWARE_MODAL_ID);
    if let Some(add_button) = document.query_selector(&add_selector)? {
        let doc = document.clone();
        dom_utils::listen(&add_button, "click", move |_| {
            if let Err(e) = hardware_form::prepare_create(&doc) {
                log::warn!("Failed to reset hardware form: {:?}", e);
            }
        })?;
    }

    let form = dom_utils::element(document, HARDWARE_FORM_ID)?;
    {
        let doc = document.clone();
        let api = api.clone();
        dom_utils::listen(&form, "submit", move |event| {
            event.prevent_default();
            let doc = doc.clone();
            let api = api.clone();
            spawn_local(async move { submit(&doc, &api).await });
        })?;
    }

    let list = dom_utils::element(document, HARDWARE_LIST_ID)?;
    let doc = document.clone();
    dom_utils::listen(&list, "click", move |event| {
        let Some(target) = dom_utils::event_element(&event) else {
            return;
        };
        let Some(id) = dom_utils::data_id(&target) else {
            return;
        };
        let classes = target.class_list();
        if classes.contains("btn-edit-hardver") {
            let doc = doc.clone();
            let api = api.clone();
            spawn_local(async move { open_edit(&doc, &api, id).await });
        } else if classes.contains("btn-delete-hardver") && dom_utils::confirm(CONFIRM_DELETE_HARDWARE) {
            let doc = doc.clone();
            let api = api.clone();
            spawn_local(async move { delete(&doc, &api, id).await });
        }
    })?;

    Ok(())
}

async fn submit(document: &Document, api: &ApiClient) {
    let editing = match hardware_form::editing_id(document) {
        Ok(editing) => editing,
        Err(e) => {
            log::error!("Hardware form unreadable: {:?}", e);
            return;
        }
    };

    match save(document, api, editing).await {
        Ok(()) => {
            toast::success(if editing.is_some() {
                "Hardver uspješno ažuriran."
            } else {
                "Hardver uspješno spremljen."
            });
            refresh(document.clone(), api.clone());
            if let Err(e) = modal::hide(document, HARDWARE_MODAL_ID) {
                log::warn!("Failed to close hardware dialog: {:?}", e);
            }
        }
        Err(e) => {
            log::error!("Saving hardware failed: {}", e);
            let fallback = if editing.is_some() {
                "Greška pri ažuriranju hardvera."
            } else {
                "Greška pri spremanju hardvera."
            };
            toast::danger(&e.user_message(fallback));
        }
    }
}

async fn save(document: &Document, api: &ApiClient, editing: Option<u32>) -> Result<(), AppError> {
    let values = hardware_form::read(document)?;
    match editing {
        Some(id) => api.update_hardware(id, &values.to_payload(None)).await?,
        None => api.create_hardware(&values.to_payload(Some(now_iso()))).await?,
    };
    Ok(())
}

async fn open_edit(document: &Document, api: &ApiClient, id: u32) {
    match api.get_hardware(id).await {
        Ok(unit) => {
            let shown = hardware_form::fill(document, &unit).and_then(|_| modal::show(document, HARDWARE_MODAL_ID));
            if let Err(e) = shown {
                log::error!("Failed to open hardware dialog: {:?}", e);
            }
        }
        Err(e) => {
            log::error!("Fetching hardware {} failed: {}", id, e);
            toast::danger("Hardver nije pronađen.");
        }
    }
}

async fn delete(document: &Document, api: &ApiClient, id: u32) {
    let result = api.delete_hardware(id).await;
    if let Err(e) = &result {
        log::warn!("Deleting hardware {} failed: {}", id, e);
    }
    let feedback = delete_feedback(result);
    feedback.show();
    if feedback.refresh {
        refresh(document.clone(), api.clone());
    }
}

fn delete_feedback(result: Result<(), ApiError>) -> DeleteFeedback {
    match result {
        Ok(()) => DeleteFeedback::done(MSG_HARDWARE_DELETED),
        Err(e) => DeleteFeedback::refused(e.user_message(MSG_HARDWARE_DELETE_FAILED)),
    }
}
