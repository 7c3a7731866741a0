//! Chart renderers for the visualization page.
//!
//! Configs are plain serde structs mirroring the Chart.js config object;
//! aggregation is done by the backend, these only reshape it.

use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::constants::{FREE_COLOR, OCCUPIED_COLOR, STATUS_PALETTE};
use crate::models::{OccupancyRow, StatusCounts};

#[wasm_bindgen]
extern "C" {
    type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(item: &JsValue, config: &JsValue) -> Result<Chart, JsValue>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    Single(String),
    PerSlice(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<i64>,
    pub background_color: Colors,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: serde_json::Value,
}

/// Pie chart with one slice per status label.
pub fn status_chart_config(counts: &StatusCounts) -> ChartConfig {
    ChartConfig {
        kind: "pie",
        data: ChartData {
            labels: counts.keys().cloned().collect(),
            datasets: vec![Dataset {
                label: None,
                data: counts.values().map(|&n| n as i64).collect(),
                background_color: Colors::PerSlice(STATUS_PALETTE.iter().map(|c| c.to_string()).collect()),
            }],
        },
        options: json!({ "responsive": true, "plugins": { "legend": { "position": "top" } } }),
    }
}

/// Stacked bar chart, per cabinet an occupied and a free series.
pub fn occupancy_chart_config(rows: &[OccupancyRow]) -> ChartConfig {
    ChartConfig {
        kind: "bar",
        data: ChartData {
            labels: rows.iter().map(|r| r.cabinet_name.clone()).collect(),
            datasets: vec![
                Dataset {
                    label: Some("Zauzeto (RU)".into()),
                    data: rows.iter().map(|r| r.occupied_units).collect(),
                    background_color: Colors::Single(OCCUPIED_COLOR.into()),
                },
                Dataset {
                    label: Some("Slobodno (RU)".into()),
                    data: rows.iter().map(OccupancyRow::free_units).collect(),
                    background_color: Colors::Single(FREE_COLOR.into()),
                },
            ],
        },
        options: json!({
            "responsive": true,
            "scales": {
                "x": { "stacked": true },
                "y": { "stacked": true, "beginAtZero": true }
            }
        }),
    }
}

/// Draw `config` on the canvas with the given id. A page without that
/// canvas is left alone.
pub fn render(document: &Document, canvas_id: &str, config: &ChartConfig) -> Result<(), JsValue> {
    let Some(canvas) = document.get_element_by_id(canvas_id) else {
        log::debug!("#{} not on page, skipping chart", canvas_id);
        return Ok(());
    };
    let js_config = config
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)?;
    Chart::new(&canvas.into(), &js_config)?;
    Ok(())
}

pub fn render_status_chart(document: &Document, counts: &StatusCounts) -> Result<(), JsValue> {
    render(document, crate::constants::STATUS_CHART_ID, &status_chart_config(counts))
}

pub fn render_occupancy_chart(document: &Document, rows: &[OccupancyRow]) -> Result<(), JsValue> {
    render(document, crate::constants::OCCUPANCY_CHART_ID, &occupancy_chart_config(rows))
}
