//! List renderers for the cabinet and hardware pages.
//!
//! Tables are described as plain data ([`TableView`]) and turned into markup
//! in one place, so row/column logic is testable without a browser.

use std::collections::HashMap;

use web_sys::Element;

use crate::constants::{MSG_NO_CABINETS, MSG_NO_HARDWARE};
use crate::models::{Cabinet, HardwareUnit};
use crate::utils::escape_html;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Link { href: String, text: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// A record row; `entity` prefixes the action button classes
    /// (`btn-edit-{entity}` / `btn-delete-{entity}`).
    Record { id: u32, entity: &'static str, cells: Vec<Cell> },
    /// Single row spanning every column, used for empty collections.
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<&'static str>,
    pub rows: Vec<TableRow>,
}

impl TableView {
    /// Number of columns including the trailing actions column.
    pub fn column_count(&self) -> usize {
        self.headers.len() + 1
    }

    pub fn record_ids(&self) -> Vec<u32> {
        self.rows
            .iter()
            .filter_map(|row| match row {
                TableRow::Record { id, .. } => Some(*id),
                TableRow::Placeholder(_) => None,
            })
            .collect()
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<table class=\"table table-hover\"><thead><tr>");
        for header in &self.headers {
            html.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        html.push_str("<th class=\"text-end\">Akcije</th></tr></thead><tbody>");

        for row in &self.rows {
            match row {
                TableRow::Record { id, entity, cells } => {
                    html.push_str("<tr>");
                    for cell in cells {
                        html.push_str(&cell_html(cell));
                    }
                    html.push_str(&format!(
                        "<td class=\"text-end\">\
                         <button class=\"btn btn-sm btn-info btn-edit-{entity}\" data-id=\"{id}\">Uredi</button> \
                         <button class=\"btn btn-sm btn-danger btn-delete-{entity}\" data-id=\"{id}\">Obriši</button>\
                         </td></tr>"
                    ));
                }
                TableRow::Placeholder(text) => {
                    html.push_str(&format!(
                        "<tr><td colspan=\"{}\" class=\"text-center\">{}</td></tr>",
                        self.column_count(),
                        escape_html(text)
                    ));
                }
            }
        }

        html.push_str("</tbody></table>");
        html
    }
}

fn cell_html(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => format!("<td>{}</td>", escape_html(text)),
        Cell::Link { href, text } => {
            format!("<td><a href=\"{}\">{}</a></td>", escape_html(href), escape_html(text))
        }
    }
}

fn rows_or_placeholder(rows: Vec<TableRow>, placeholder: &str) -> Vec<TableRow> {
    if rows.is_empty() {
        vec![TableRow::Placeholder(placeholder.to_string())]
    } else {
        rows
    }
}

pub fn cabinet_table(cabinets: &[Cabinet]) -> TableView {
    let rows = cabinets
        .iter()
        .map(|c| TableRow::Record {
            id: c.id,
            entity: "ormar",
            cells: vec![
                Cell::Link { href: format!("/ormar_detalji?id={}", c.id), text: c.name.clone() },
                Cell::Text(c.location.clone()),
                Cell::Text(c.row.to_string()),
                Cell::Text(c.column.to_string()),
                Cell::Text(c.capacity.to_string()),
            ],
        })
        .collect();

    TableView {
        headers: vec!["Ime Ormara", "Lokacija", "Red", "Stupac", "Kapacitet (RU)"],
        rows: rows_or_placeholder(rows, MSG_NO_CABINETS),
    }
}

/// Hardware table; cabinet names come from a separate id → name lookup.
pub fn hardware_table(hardware: &[HardwareUnit], cabinet_names: &HashMap<u32, String>) -> TableView {
    let rows = hardware
        .iter()
        .map(|h| TableRow::Record {
            id: h.id,
            entity: "hardver",
            cells: vec![
                Cell::Text(h.equipment_type.clone()),
                Cell::Text(format!("{} {}", h.manufacturer, h.model)),
                Cell::Text(
                    cabinet_names
                        .get(&h.cabinet_id)
                        .cloned()
                        .unwrap_or_else(|| format!("#{}", h.cabinet_id)),
                ),
                Cell::Text(h.status.clone()),
            ],
        })
        .collect();

    TableView {
        headers: vec!["Tip", "Proizvođač / Model", "Ormar", "Status"],
        rows: rows_or_placeholder(rows, MSG_NO_HARDWARE),
    }
}

pub fn cabinet_names(cabinets: &[Cabinet]) -> HashMap<u32, String> {
    cabinets.iter().map(|c| (c.id, c.name.clone())).collect()
}

/// `<option>` list for the cabinet select of the hardware form.
pub fn cabinet_options_html(cabinets: &[Cabinet]) -> String {
    cabinets
        .iter()
        .map(|c| format!("<option value=\"{}\">{}</option>", c.id, escape_html(&c.name)))
        .collect()
}

/// Inline danger alert used when a list could not be fetched.
pub fn list_error_html(message: &str) -> String {
    format!("<div class=\"alert alert-danger\">{}</div>", escape_html(message))
}

pub fn render_table(container: &Element, view: &TableView) {
    container.set_inner_html(&view.to_html());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cabinet(id: u32, name: &str) -> Cabinet {
        Cabinet {
            id,
            name: name.to_string(),
            location: "Podatkovni Centar 1".to_string(),
            row: 1,
            column: id as i32,
            capacity: 42,
        }
    }

    fn hardware(id: u32, cabinet_id: u32) -> HardwareUnit {
        HardwareUnit {
            id,
            equipment_type: "Server".into(),
            manufacturer: "Dell".into(),
            model: "PowerEdge R750".into(),
            serial_number: 2000 + id as i64,
            cabinet_id,
            status: "Servis".into(),
            installed_at: None,
            serviced_at: None,
            position: 1,
            size: 2,
        }
    }

    #[test]
    fn empty_collection_renders_single_placeholder_spanning_all_columns() {
        let view = cabinet_table(&[]);
        assert_eq!(view.rows, vec![TableRow::Placeholder(MSG_NO_CABINETS.to_string())]);
        assert!(view.to_html().contains("colspan=\"6\""));

        let view = hardware_table(&[], &HashMap::new());
        assert_eq!(view.rows.len(), 1);
        assert!(view.to_html().contains("colspan=\"5\""));
        assert!(view.to_html().contains(MSG_NO_HARDWARE));
    }

    #[test]
    fn one_row_per_record_in_input_order() {
        let cabinets = vec![cabinet(9, "ORMAR-B2"), cabinet(2, "ORMAR-A1"), cabinet(5, "ORMAR-C3")];
        let view = cabinet_table(&cabinets);
        assert_eq!(view.record_ids(), vec![9, 2, 5]);
        assert_eq!(view.to_html().matches("<tr>").count(), 1 + 3);
    }

    #[test]
    fn cabinet_row_links_to_detail_and_tags_actions() {
        let html = cabinet_table(&[cabinet(4, "ORMAR-A1")]).to_html();
        assert!(html.contains("<a href=\"/ormar_detalji?id=4\">ORMAR-A1</a>"));
        assert!(html.contains("btn-edit-ormar\" data-id=\"4\""));
        assert!(html.contains("btn-delete-ormar\" data-id=\"4\""));
    }

    #[test]
    fn hardware_rows_resolve_cabinet_names() {
        let names = cabinet_names(&[cabinet(1, "ORMAR-A1")]);
        let view = hardware_table(&[hardware(10, 1), hardware(11, 8)], &names);
        match &view.rows[0] {
            TableRow::Record { cells, entity, .. } => {
                assert_eq!(*entity, "hardver");
                assert_eq!(cells[1], Cell::Text("Dell PowerEdge R750".into()));
                assert_eq!(cells[2], Cell::Text("ORMAR-A1".into()));
            }
            other => panic!("unexpected row {:?}", other),
        }
        match &view.rows[1] {
            TableRow::Record { cells, .. } => assert_eq!(cells[2], Cell::Text("#8".into())),
            other => panic!("unexpected row {:?}", other),
        }
    }

    #[test]
    fn record_text_is_escaped() {
        let html = cabinet_table(&[cabinet(1, "<script>")]).to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn options_list_cabinets() {
        let html = cabinet_options_html(&[cabinet(1, "ORMAR-A1"), cabinet(2, "ORMAR-B2")]);
        assert_eq!(html, "<option value=\"1\">ORMAR-A1</option><option value=\"2\">ORMAR-B2</option>");
    }
}
