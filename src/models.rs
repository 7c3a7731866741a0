use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

// API models that match the backend schema. Field names on the wire are the
// backend's; the Rust side uses descriptive names.

/// Cabinet (ormar) as returned by `/ormari` and `/ormar/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cabinet {
    pub id: u32,
    #[serde(rename = "ime_ormara")]
    pub name: String,
    #[serde(rename = "lokacija")]
    pub location: String,
    #[serde(rename = "pozicija_red")]
    pub row: i32,
    #[serde(rename = "pozicija_stupac")]
    pub column: i32,
    // Plain integers on the backend; nothing stops 0 or negative values.
    #[serde(rename = "broj_rack_unita")]
    pub capacity: i64,
}

/// Hardware unit (hardver).
///
/// The backend embeds a whole cabinet object in `id_ormar` on some endpoints
/// and a bare id on others; both are normalized to `cabinet_id` here and the
/// cabinet itself is looked up separately when a name is needed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HardwareUnit {
    pub id: u32,
    #[serde(rename = "tip_opreme")]
    pub equipment_type: String,
    #[serde(rename = "proizvodac")]
    pub manufacturer: String,
    pub model: String,
    #[serde(rename = "serijski_broj")]
    pub serial_number: i64,
    #[serde(rename = "id_ormar", deserialize_with = "cabinet_ref_id")]
    pub cabinet_id: u32,
    pub status: String,
    #[serde(rename = "datum_instalacije", default)]
    pub installed_at: Option<String>,
    #[serde(rename = "datum_servisa", default)]
    pub serviced_at: Option<String>,
    #[serde(rename = "pozicija_u_kabinetu")]
    pub position: i64,
    #[serde(rename = "rack_unit_size")]
    pub size: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CabinetRef {
    Id(u32),
    Embedded { id: u32 },
}

fn cabinet_ref_id<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match CabinetRef::deserialize(deserializer)? {
        CabinetRef::Id(id) | CabinetRef::Embedded { id } => id,
    })
}

/// Response of `GET /ormar/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CabinetDetail {
    #[serde(rename = "ormar")]
    pub cabinet: Cabinet,
    #[serde(rename = "hardver", default)]
    pub hardware: Vec<HardwareUnit>,
}

/// Body sent on cabinet create/update. Numeric fields that failed to parse
/// are sent as `null` and left for the backend to reject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CabinetPayload {
    #[serde(rename = "ime_ormara")]
    pub name: String,
    #[serde(rename = "pozicija_red")]
    pub row: Option<i64>,
    #[serde(rename = "pozicija_stupac")]
    pub column: Option<i64>,
    #[serde(rename = "broj_rack_unita")]
    pub capacity: Option<i64>,
    #[serde(rename = "lokacija")]
    pub location: String,
}

/// Body sent on hardware create/update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HardwarePayload {
    #[serde(rename = "tip_opreme")]
    pub equipment_type: String,
    #[serde(rename = "proizvodac")]
    pub manufacturer: String,
    pub model: String,
    #[serde(rename = "serijski_broj")]
    pub serial_number: Option<i64>,
    #[serde(rename = "id_ormar")]
    pub cabinet_id: Option<i64>,
    pub status: String,
    #[serde(rename = "datum_servisa")]
    pub serviced_at: Option<String>,
    #[serde(rename = "pozicija_u_kabinetu")]
    pub position: Option<i64>,
    #[serde(rename = "rack_unit_size")]
    pub size: Option<i64>,
    // Only present on creation; the install date never changes afterwards.
    #[serde(rename = "datum_instalacije", skip_serializing_if = "Option::is_none")]
    pub installed_at: Option<String>,
}

/// `{message}` body returned by successful deletes
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteOutcome {
    #[serde(default)]
    pub message: Option<String>,
}

/// Hardware count per status label, `/vizualizacije/status`
pub type StatusCounts = BTreeMap<String, u64>;

/// One row of `/vizualizacije/popunjenost`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OccupancyRow {
    #[serde(rename = "ime_ormara")]
    pub cabinet_name: String,
    #[serde(rename = "zauzeti_rack_unita")]
    pub occupied_units: i64,
    #[serde(rename = "ukupni_rack_unita")]
    pub total_units: i64,
}

impl OccupancyRow {
    pub fn free_units(&self) -> i64 {
        self.total_units - self.occupied_units
    }
}
