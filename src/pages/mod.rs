// src/pages/mod.rs
//
// One initializer per served page. The router picks exactly one based on
// the URL path.

pub mod cabinet_detail;
pub mod cabinets;
pub mod hardware;
pub mod visualizations;

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::network::ApiClient;
use crate::toast::{self, NotifyKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Cabinets,
    Hardware,
    Visualizations,
    CabinetDetail,
}

impl Page {
    pub fn from_path(path: &str) -> Option<Self> {
        if path == "/" || path.ends_with("/ormari") || path.ends_with("/ormari.html") {
            Some(Page::Cabinets)
        } else if path.ends_with("/hardver") || path.ends_with("/hardver.html") {
            Some(Page::Hardware)
        } else if path.ends_with("/vizualizacije") || path.ends_with("/vizualizacije.html") {
            Some(Page::Visualizations)
        } else if path.contains("/ormar_detalji") {
            Some(Page::CabinetDetail)
        } else {
            None
        }
    }
}

/// Banner shown after a delete, and whether the list is fetched again.
/// A refused delete leaves the list as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteFeedback {
    pub kind: NotifyKind,
    pub message: String,
    pub refresh: bool,
}

impl DeleteFeedback {
    fn done(message: &str) -> Self {
        Self { kind: NotifyKind::Success, message: message.to_string(), refresh: true }
    }

    fn refused(message: String) -> Self {
        Self { kind: NotifyKind::Danger, message, refresh: false }
    }

    fn show(&self) {
        toast::notify(&self.message, self.kind);
    }
}

/// Run the initializer for the page at `path` (`search` is the raw query
/// string, needed by the detail page).
pub fn init_page(document: &Document, api: ApiClient, path: &str, search: &str) -> Result<(), JsValue> {
    let Some(page) = Page::from_path(path) else {
        log::debug!("No initializer for {}", path);
        return Ok(());
    };
    log::debug!("Initializing {:?} page", page);

    match page {
        Page::Cabinets => cabinets::init(document, api),
        Page::Hardware => hardware::init(document, api),
        Page::Visualizations => {
            visualizations::init(document, api);
            Ok(())
        }
        Page::CabinetDetail => {
            cabinet_detail::init(document, api, search);
            Ok(())
        }
    }
}
