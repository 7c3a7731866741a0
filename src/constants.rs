// DOM ids and UI text shared by the page controllers. The served pages are
// Croatian, so user-facing text is too.

// Backend used when nothing else configures the API origin
pub const DEFAULT_API_ORIGIN: &str = "http://127.0.0.1:5000";
pub const API_URL_META: &str = "rackmaster:api-url";
pub const JS_CONFIG_GLOBAL: &str = "__RACKMASTER_CONFIG__";

pub const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;
pub const MESSAGE_BOX_ID: &str = "messageBox";

// Cabinet list page
pub const CABINET_LIST_ID: &str = "ormariList";
pub const CABINET_MODAL_ID: &str = "ormarModal";
pub const CABINET_FORM_ID: &str = "ormarForm";
pub const CABINET_MODAL_LABEL_ID: &str = "ormarModalLabel";
pub const CABINET_ID_INPUT: &str = "ormar-id";

// Hardware list page
pub const HARDWARE_LIST_ID: &str = "hardverList";
pub const HARDWARE_MODAL_ID: &str = "hardverModal";
pub const HARDWARE_FORM_ID: &str = "hardverForm";
pub const HARDWARE_MODAL_LABEL_ID: &str = "hardverModalLabel";
pub const HARDWARE_ID_INPUT: &str = "hardver-id";
pub const CABINET_SELECT_ID: &str = "id_ormar";

// Cabinet detail page
pub const DETAIL_NAME_ID: &str = "ormar-ime";
pub const DETAIL_HEIGHT_ID: &str = "rack-height-units";
pub const RACK_CONTAINER_ID: &str = "rack-visualization";
pub const EQUIPMENT_LIST_ID: &str = "equipment-details-list";

// Visualization page
pub const STATUS_CHART_ID: &str = "statusChart";
pub const OCCUPANCY_CHART_ID: &str = "occupancyChart";

pub const STATUS_PALETTE: [&str; 5] = ["#28a745", "#ffc107", "#dc3545", "#17a2b8", "#6c757d"];
pub const OCCUPIED_COLOR: &str = "rgba(220, 53, 69, 0.7)";
pub const FREE_COLOR: &str = "rgba(40, 167, 69, 0.7)";

// Messages
pub const MSG_CABINETS_UNAVAILABLE: &str = "Nije moguće dohvatiti ormare.";
pub const MSG_HARDWARE_UNAVAILABLE: &str = "Nije moguće dohvatiti hardver.";
pub const MSG_CABINET_SELECT_UNAVAILABLE: &str = "Nije moguće učitati ormare";
pub const MSG_NO_CABINETS: &str = "Nema dostupnih ormara.";
pub const MSG_NO_HARDWARE: &str = "Nema dostupnog hardvera.";
pub const MSG_CABINET_NOT_FOUND: &str = "Ormar nije pronađen.";
pub const MSG_MISSING_CABINET_ID: &str = "Greška: ID ormara nije pronađen.";
pub const MSG_UNKNOWN_ERROR: &str = "Došlo je do nepoznate greške.";
pub const MSG_HARDWARE_DELETED: &str = "Hardver je uspješno obrisan.";
pub const MSG_HARDWARE_DELETE_FAILED: &str = "Brisanje nije uspjelo.";

pub const CONFIRM_DELETE_CABINET: &str =
    "Želite li obrisati ovaj ormar? Brisanje će uspjeti samo ako je ormar prazan.";
pub const CONFIRM_DELETE_HARDWARE: &str = "Jeste li sigurni da želite obrisati ovaj komad hardvera?";
pub const MSG_VISUALIZATION_UNAVAILABLE: &str = "Nije moguće dohvatiti podatke za vizualizaciju.";
pub const MSG_CABINET_DELETED: &str = "Prazan ormar je uspješno obrisan.";
