// Cabinet list page: table of cabinets plus the add/edit/delete controller.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::components::{cabinet_form, modal, tables};
use crate::constants::{
    CABINET_LIST_ID, CABINET_MODAL_ID, CONFIRM_DELETE_CABINET, MSG_CABINETS_UNAVAILABLE,
    MSG_CABINET_DELETED, MSG_CABINET_NOT_FOUND, MSG_UNKNOWN_ERROR,
};
use crate::dom_utils;
use crate::error::AppError;
use crate::models::DeleteOutcome;
use crate::network::{ApiClient, ApiError};
use crate::pages::DeleteFeedback;
use crate::toast;

pub fn init(document: &Document, api: ApiClient) -> Result<(), JsValue> {
    refresh(document.clone(), api.clone());
    setup_event_listeners(document, api)
}

/// Re-fetch the cabinets and redraw the table in the background.
pub fn refresh(document: Document, api: ApiClient) {
    spawn_local(async move { load_and_render(&document, &api).await });
}

async fn load_and_render(document: &Document, api: &ApiClient) {
    let Some(container) = document.get_element_by_id(CABINET_LIST_ID) else {
        return;
    };
    match api.list_cabinets().await {
        Ok(cabinets) => tables::render_table(&container, &tables::cabinet_table(&cabinets)),
        Err(e) => {
            log::error!("Greška pri dohvaćanju ormara: {}", e);
            container.set_inner_html(&tables::list_error_html(MSG_CABINETS_UNAVAILABLE));
        }
    }
}

fn setup_event_listeners(document: &Document, api: ApiClient) -> Result<(), JsValue> {
    if document.get_element_by_id(CABINET_MODAL_ID).is_none() {
        return Ok(());
    }

    // "Add" button opening the dialog
    let add_selector = format!("button[data-bs-target=\"#{}\"]", CABINET_MODAL_ID);
    if let Some(add_button) = document.query_selector(&add_selector)? {
        let doc = document.clone();
        dom_utils::listen(&add_button, "click", move |_| {
            if let Err(e) = cabinet_form::prepare_create(&doc) {
                log::warn!("Failed to reset cabinet form: {:?}", e);
            }
        })?;
    }

    // Create / update
    let form = dom_utils::element(document, crate::constants::CABINET_FORM_ID)?;
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

    // Row actions, delegated from the list container
    let list = dom_utils::element(document, CABINET_LIST_ID)?;
    let doc = document.clone();
    dom_utils::listen(&list, "click", move |event| {
        let Some(target) = dom_utils::event_element(&event) else {
            return;
        };
        let Some(id) = dom_utils::data_id(&target) else {
            return;
        };
        let classes = target.class_list();
        if classes.contains("btn-edit-ormar") {
            let doc = doc.clone();
            let api = api.clone();
            spawn_local(async move { open_edit(&doc, &api, id).await });
        } else if classes.contains("btn-delete-ormar") && dom_utils::confirm(CONFIRM_DELETE_CABINET) {
            let doc = doc.clone();
            let api = api.clone();
            spawn_local(async move { delete(&doc, &api, id).await });
        }
    })?;

    Ok(())
}

async fn submit(document: &Document, api: &ApiClient) {
    let editing = match cabinet_form::editing_id(document) {
        Ok(editing) => editing,
        Err(e) => {
            log::error!("Cabinet form unreadable: {:?}", e);
            return;
        }
    };

    match save(document, api, editing).await {
        Ok(()) => {
            toast::success(if editing.is_some() {
                "Ormar uspješno ažuriran."
            } else {
                "Ormar uspješno spremljen."
            });
            refresh(document.clone(), api.clone());
            if let Err(e) = modal::hide(document, CABINET_MODAL_ID) {
                log::warn!("Failed to close cabinet dialog: {:?}", e);
            }
        }
        Err(e) => {
            log::error!("Saving cabinet failed: {}", e);
            let fallback = if editing.is_some() {
                "Greška pri ažuriranju ormara."
            } else {
                "Greška pri spremanju ormara."
            };
            toast::danger(&e.user_message(fallback));
        }
    }
}

async fn save(document: &Document, api: &ApiClient, editing: Option<u32>) -> Result<(), AppError> {
    let payload = cabinet_form::read(document)?.to_payload();
    match editing {
        Some(id) => api.update_cabinet(id, &payload).await?,
        None => api.create_cabinet(&payload).await?,
    };
    Ok(())
}

async fn open_edit(document: &Document, api: &ApiClient, id: u32) {
    match api.get_cabinet(id).await {
        Ok(detail) => {
            let shown = cabinet_form::fill(document, &detail.cabinet)
                .and_then(|_| modal::show(document, CABINET_MODAL_ID));
            if let Err(e) = shown {
                log::error!("Failed to open cabinet dialog: {:?}", e);
            }
        }
        Err(e) => {
            log::error!("Fetching cabinet {} failed: {}", id, e);
            toast::danger(MSG_CABINET_NOT_FOUND);
        }
    }
}

async fn delete(document: &Document, api: &ApiClient, id: u32) {
    let result = api.delete_cabinet(id).await;
    if let Err(e) = &result {
        log::warn!("Deleting cabinet {} refused: {}", id, e);
    }
    let feedback = delete_feedback(result);
    feedback.show();
    if feedback.refresh {
        refresh(document.clone(), api.clone());
    }
}

/// The backend explains a refusal (e.g. a cabinet still holding hardware)
/// in `{error}`; that text is shown as is.
fn delete_feedback(result: Result<DeleteOutcome, ApiError>) -> DeleteFeedback {
    match result {
        Ok(outcome) => DeleteFeedback::done(outcome.message.as_deref().unwrap_or(MSG_CABINET_DELETED)),
        Err(e) => DeleteFeedback::refused(e.user_message(MSG_UNKNOWN_ERROR)),
    }
}
