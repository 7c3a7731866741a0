// Cabinet detail page: slot map and equipment list of one cabinet,
// selected by `?id=N`.

use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::components::rack::{self, RackLayout};
use crate::constants::{
    DETAIL_HEIGHT_ID, DETAIL_NAME_ID, EQUIPMENT_LIST_ID, MSG_CABINET_NOT_FOUND, MSG_MISSING_CABINET_ID,
    RACK_CONTAINER_ID,
};
use crate::dom_utils;
use crate::error::AppError;
use crate::network::{ApiClient, ApiError};
use crate::toast;
use crate::utils::query_param;

/// Cabinet id from the query string. A non-numeric id counts as missing.
pub fn cabinet_id(search: &str) -> Result<u32, AppError> {
    query_param(search, "id")
        .and_then(|id| id.trim().parse().ok())
        .ok_or(AppError::MissingParameter("id"))
}

pub fn init(document: &Document, api: ApiClient, search: &str) {
    match cabinet_id(search) {
        Ok(id) => {
            let document = document.clone();
            spawn_local(async move { load_and_render(&document, &api, id).await });
        }
        Err(e) => {
            // Terminal for this page: reported in the heading, not as a banner.
            log::error!("Nema ID-a ormara u URL-u: {}", e);
            dom_utils::set_text(document, DETAIL_NAME_ID, MSG_MISSING_CABINET_ID);
        }
    }
}

async fn load_and_render(document: &Document, api: &ApiClient, id: u32) {
    let detail = match api.get_cabinet(id).await {
        Ok(detail) => detail,
        Err(e) => {
            toast::danger(load_failure_message(&e));
            return;
        }
    };

    dom_utils::set_text(document, DETAIL_NAME_ID, &detail.cabinet.name);
    dom_utils::set_text(document, DETAIL_HEIGHT_ID, &detail.cabinet.capacity.to_string());

    let (Some(rack_el), Some(list_el)) = (
        document.get_element_by_id(RACK_CONTAINER_ID),
        document.get_element_by_id(EQUIPMENT_LIST_ID),
    ) else {
        log::warn!("#{} or #{} missing, slot map not drawn", RACK_CONTAINER_ID, EQUIPMENT_LIST_ID);
        return;
    };

    let layout = RackLayout::build(detail.cabinet.capacity, &detail.hardware);
    if let Err(e) = rack::render(document, &rack_el, &list_el, &layout) {
        log::error!("Rendering slot map failed: {:?}", e);
        return;
    }

    if !layout.issues.is_empty() {
        let descriptions: Vec<String> = layout.issues.iter().map(|issue| issue.describe()).collect();
        for description in &descriptions {
            log::warn!("{}: {}", detail.cabinet.name, description);
        }
        toast::danger(&descriptions.join(" "));
    }
}

/// Backend 404 texts are English; the page reports every failed load the
/// same way and keeps the server text for the log.
fn load_failure_message(e: &ApiError) -> &'static str {
    log::error!("Greška pri dohvaćanju detalja ormara: {}", e);
    MSG_CABINET_NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_load_is_reported_in_croatian() {
        let not_found = ApiError::rejected(404, r#"{"error": "Ormar not found"}"#);
        assert_eq!(load_failure_message(&not_found), "Ormar nije pronađen.");
        let decode = ApiError::Decode("expected value".into());
        assert_eq!(load_failure_message(&decode), MSG_CABINET_NOT_FOUND);
    }

    #[test]
    fn id_is_read_from_query_string() {
        assert_eq!(cabinet_id("?id=12").unwrap(), 12);
        assert_eq!(cabinet_id("?tab=1&id=3").unwrap(), 3);
    }

    #[test]
    fn missing_or_malformed_id_is_a_missing_parameter() {
        for search in ["", "?", "?id=", "?id=abc", "?cabinet=2"] {
            assert!(
                matches!(cabinet_id(search), Err(AppError::MissingParameter("id"))),
                "search {:?}",
                search
            );
        }
    }
}
