//! Hardware add/edit dialog: form <-> model conversion.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::constants::{CABINET_SELECT_ID, HARDWARE_FORM_ID, HARDWARE_ID_INPUT, HARDWARE_MODAL_LABEL_ID};
use crate::dom_utils;
use crate::models::{HardwarePayload, HardwareUnit};
use crate::utils::{date_input_to_iso, date_input_value, parse_int};

const EQUIPMENT_TYPE: &str = "tip_opreme";
const MANUFACTURER: &str = "proizvodac";
const MODEL: &str = "model";
const SERIAL: &str = "serijski_broj";
const STATUS: &str = "status";
const SERVICE_DATE: &str = "datum_servisa";
const POSITION: &str = "pozicija_u_kabinetu";
const SIZE: &str = "rack_unit_size";

pub const TITLE_CREATE: &str = "Dodaj novi hardver";
pub const TITLE_EDIT: &str = "Uredi Hardver";

/// Raw field contents of the hardware form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardwareFormValues {
    pub equipment_type: String,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub cabinet_id: String,
    pub status: String,
    /// `YYYY-MM-DD` or empty
    pub service_date: String,
    pub position: String,
    pub size: String,
}

impl HardwareFormValues {
    pub fn from_hardware(unit: &HardwareUnit) -> Self {
        Self {
            equipment_type: unit.equipment_type.clone(),
            manufacturer: unit.manufacturer.clone(),
            model: unit.model.clone(),
            serial_number: unit.serial_number.to_string(),
            cabinet_id: unit.cabinet_id.to_string(),
            status: unit.status.clone(),
            service_date: date_input_value(unit.serviced_at.as_deref()),
            position: unit.position.to_string(),
            size: unit.size.to_string(),
        }
    }

    /// `installed_at` is only passed when creating.
    pub fn to_payload(&self, installed_at: Option<String>) -> HardwarePayload {
        HardwarePayload {
            equipment_type: self.equipment_type.clone(),
            manufacturer: self.manufacturer.clone(),
            model: self.model.clone(),
            serial_number: parse_int(&self.serial_number),
            cabinet_id: parse_int(&self.cabinet_id),
            status: self.status.clone(),
            serviced_at: date_input_to_iso(&self.service_date),
            position: parse_int(&self.position),
            size: parse_int(&self.size),
            installed_at,
        }
    }
}

/// Hidden id field; `None` means the dialog is creating new hardware.
pub fn editing_id(document: &Document) -> Result<Option<u32>, JsValue> {
    Ok(dom_utils::field_value(document, HARDWARE_ID_INPUT)?.trim().parse().ok())
}

pub fn read(document: &Document) -> Result<HardwareFormValues, JsValue> {
    Ok(HardwareFormValues {
        equipment_type: dom_utils::field_value(document, EQUIPMENT_TYPE)?,
        manufacturer: dom_utils::field_value(document, MANUFACTURER)?,
        model: dom_utils::field_value(document, MODEL)?,
        serial_number: dom_utils::field_value(document, SERIAL)?,
        cabinet_id: dom_utils::field_value(document, CABINET_SELECT_ID)?,
        status: dom_utils::field_value(document, STATUS)?,
        service_date: dom_utils::field_value(document, SERVICE_DATE)?,
        position: dom_utils::field_value(document, POSITION)?,
        size: dom_utils::field_value(document, SIZE)?,
    })
}

pub fn prepare_create(document: &Document) -> Result<(), JsValue> {
    dom_utils::set_text(document, HARDWARE_MODAL_LABEL_ID, TITLE_CREATE);
    dom_utils::reset_form(document, HARDWARE_FORM_ID)?;
    dom_utils::set_field_value(document, HARDWARE_ID_INPUT, "")
}

pub fn fill(document: &Document, unit: &HardwareUnit) -> Result<(), JsValue> {
    let values = HardwareFormValues::from_hardware(unit);
    dom_utils::set_text(document, HARDWARE_MODAL_LABEL_ID, TITLE_EDIT);
    dom_utils::set_field_value(document, HARDWARE_ID_INPUT, &unit.id.to_string())?;
    dom_utils::set_field_value(document, EQUIPMENT_TYPE, &values.equipment_type)?;
    dom_utils::set_field_value(document, MANUFACTURER, &values.manufacturer)?;
    dom_utils::set_field_value(document, MODEL, &values.model)?;
    dom_utils::set_field_value(document, SERIAL, &values.serial_number)?;
    dom_utils::set_field_value(document, CABINET_SELECT_ID, &values.cabinet_id)?;
    dom_utils::set_field_value(document, STATUS, &values.status)?;
    dom_utils::set_field_value(document, SERVICE_DATE, &values.service_date)?;
    dom_utils::set_field_value(document, POSITION, &values.position)?;
    dom_utils::set_field_value(document, SIZE, &values.size)
}
