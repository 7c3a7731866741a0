//! Cabinet add/edit dialog: form <-> model conversion.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::constants::{CABINET_FORM_ID, CABINET_ID_INPUT, CABINET_MODAL_LABEL_ID};
use crate::dom_utils;
use crate::models::{Cabinet, CabinetPayload};
use crate::utils::parse_int;

const NAME: &str = "ime_ormara";
const ROW: &str = "pozicija_red";
const COLUMN: &str = "pozicija_stupac";
const CAPACITY: &str = "broj_rack_unita";
const LOCATION: &str = "lokacija";

pub const TITLE_CREATE: &str = "Dodaj novi ormar";
pub const TITLE_EDIT: &str = "Uredi Ormar";

/// Raw field contents of the cabinet form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CabinetFormValues {
    pub name: String,
    pub row: String,
    pub column: String,
    pub capacity: String,
    pub location: String,
}

impl CabinetFormValues {
    pub fn from_cabinet(cabinet: &Cabinet) -> Self {
        Self {
            name: cabinet.name.clone(),
            row: cabinet.row.to_string(),
            column: cabinet.column.to_string(),
            capacity: cabinet.capacity.to_string(),
            location: cabinet.location.clone(),
        }
    }

    pub fn to_payload(&self) -> CabinetPayload {
        CabinetPayload {
            name: self.name.clone(),
            row: parse_int(&self.row),
            column: parse_int(&self.column),
            capacity: parse_int(&self.capacity),
            location: self.location.clone(),
        }
    }
}

/// Hidden id field; `None` means the dialog is creating a new cabinet.
pub fn editing_id(document: &Document) -> Result<Option<u32>, JsValue> {
    Ok(dom_utils::field_value(document, CABINET_ID_INPUT)?.trim().parse().ok())
}

pub fn read(document: &Document) -> Result<CabinetFormValues, JsValue> {
    Ok(CabinetFormValues {
        name: dom_utils::field_value(document, NAME)?,
        row: dom_utils::field_value(document, ROW)?,
        column: dom_utils::field_value(document, COLUMN)?,
        capacity: dom_utils::field_value(document, CAPACITY)?,
        location: dom_utils::field_value(document, LOCATION)?,
    })
}

/// Clear the form for "add".
pub fn prepare_create(document: &Document) -> Result<(), JsValue> {
    dom_utils::set_text(document, CABINET_MODAL_LABEL_ID, TITLE_CREATE);
    dom_utils::reset_form(document, CABINET_FORM_ID)?;
    dom_utils::set_field_value(document, CABINET_ID_INPUT, "")
}

/// Fill the form from a fetched cabinet for "edit".
pub fn fill(document: &Document, cabinet: &Cabinet) -> Result<(), JsValue> {
    let values = CabinetFormValues::from_cabinet(cabinet);
    dom_utils::set_text(document, CABINET_MODAL_LABEL_ID, TITLE_EDIT);
    dom_utils::set_field_value(document, CABINET_ID_INPUT, &cabinet.id.to_string())?;
    dom_utils::set_field_value(document, NAME, &values.name)?;
    dom_utils::set_field_value(document, ROW, &values.row)?;
    dom_utils::set_field_value(document, COLUMN, &values.column)?;
    dom_utils::set_field_value(document, CAPACITY, &values.capacity)?;
    dom_utils::set_field_value(document, LOCATION, &values.location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_fields_are_integer_parsed() {
        let values = CabinetFormValues {
            name: "ORMAR-C3".into(),
            row: "2".into(),
            column: " 3".into(),
            capacity: "".into(),
            location: "Podatkovni Centar 2".into(),
        };
        let payload = values.to_payload();
        assert_eq!(payload.row, Some(2));
        assert_eq!(payload.column, Some(3));
        assert_eq!(payload.capacity, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["ime_ormara"], "ORMAR-C3");
        assert_eq!(json["broj_rack_unita"], serde_json::Value::Null);
    }

    #[test]
    fn edit_values_mirror_cabinet() {
        let cabinet = Cabinet {
            id: 1,
            name: "ORMAR-A1".into(),
            location: "Podatkovni Centar 1".into(),
            row: 1,
            column: 2,
            capacity: 42,
        };
        let values = CabinetFormValues::from_cabinet(&cabinet);
        assert_eq!(values.capacity, "42");
        let payload = values.to_payload();
        assert_eq!(payload.capacity, Some(42));
        assert_eq!(payload.column, Some(2));
    }
}
