//! Rack slot map for the cabinet detail page.
//!
//! [`RackLayout::build`] turns a cabinet capacity and its hardware into one
//! cell per rack unit plus the equipment list; [`render`] writes that layout
//! into the page. Overlapping or out-of-range items are still painted
//! (later items win on shared units, missing units are skipped) but are also
//! reported as [`LayoutIssue`]s.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::models::HardwareUnit;
use crate::utils::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Empty,
    Occupied,
    /// Occupied and carrying the item's name: the topmost unit of an item.
    Labeled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCell {
    pub unit: u32,
    pub state: SlotState,
    pub label: String,
}

impl SlotCell {
    pub fn is_occupied(&self) -> bool {
        self.state != SlotState::Empty
    }

    fn class_name(&self) -> &'static str {
        match self.state {
            SlotState::Empty => "rack-unit",
            SlotState::Occupied => "rack-unit occupied",
            SlotState::Labeled => "rack-unit occupied equipment-label",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentEntry {
    pub equipment_type: String,
    pub manufacturer: String,
    pub model: String,
    pub position: i64,
    pub size: i64,
}

impl EquipmentEntry {
    pub fn to_html(&self) -> String {
        format!(
            "<strong>{}</strong>: {} {} (Pozicija: {}U, Veličina: {}U)",
            escape_html(&self.equipment_type),
            escape_html(&self.manufacturer),
            escape_html(&self.model),
            self.position,
            self.size
        )
    }
}

/// Largest cabinet drawn; bigger capacities are cut down to this.
pub const MAX_RACK_UNITS: i64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutIssue {
    /// `later` was painted over units already used by `earlier`.
    Overlap { earlier: u32, later: u32, first_unit: u32 },
    /// Item range `start..=end` reaches outside `1..=capacity`.
    OutOfRange { hardware_id: u32, start: i64, end: i64, capacity: i64 },
    /// Capacity above [`MAX_RACK_UNITS`]; only the first `max` units are drawn.
    CapacityTooLarge { capacity: i64, max: i64 },
}

impl LayoutIssue {
    pub fn describe(&self) -> String {
        match self {
            LayoutIssue::Overlap { earlier, later, first_unit } => format!(
                "Hardver #{} preklapa hardver #{} (od {}U).",
                later, earlier, first_unit
            ),
            LayoutIssue::OutOfRange { hardware_id, start, end, capacity } => format!(
                "Hardver #{} zauzima {}U–{}U, izvan kapaciteta ormara ({}U).",
                hardware_id, start, end, capacity
            ),
            LayoutIssue::CapacityTooLarge { capacity, max } => format!(
                "Kapacitet ormara ({}U) je veći od {}U, prikazano je prvih {}U.",
                capacity, max, max
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RackLayout {
    /// Cells for units `1..=capacity`, in unit order.
    pub cells: Vec<SlotCell>,
    /// One entry per item, in input order.
    pub equipment: Vec<EquipmentEntry>,
    pub issues: Vec<LayoutIssue>,
}

impl RackLayout {
    /// A capacity of zero or less draws no cells.
    pub fn build(capacity: i64, hardware: &[HardwareUnit]) -> Self {
        let mut issues = Vec::new();
        if capacity > MAX_RACK_UNITS {
            issues.push(LayoutIssue::CapacityTooLarge { capacity, max: MAX_RACK_UNITS });
        }
        let units = capacity.clamp(0, MAX_RACK_UNITS);

        let mut cells: Vec<SlotCell> = (1..=units as u32)
            .map(|unit| SlotCell { unit, state: SlotState::Empty, label: unit.to_string() })
            .collect();
        let mut owner: Vec<Option<u32>> = vec![None; units as usize];
        let mut equipment = Vec::with_capacity(hardware.len());

        for item in hardware {
            let start = item.position;
            // Inclusive top unit; `size <= 0` paints nothing.
            let last = start.saturating_add(item.size).saturating_sub(1);
            if item.size > 0 && (start < 1 || last > units) {
                issues.push(LayoutIssue::OutOfRange {
                    hardware_id: item.id,
                    start,
                    end: last,
                    capacity: units,
                });
            }

            for unit in start.max(1)..=last.min(units) {
                let idx = (unit - 1) as usize;

                if let Some(earlier) = owner[idx] {
                    if earlier != item.id
                        && !issues.iter().any(|issue| {
                            matches!(issue, LayoutIssue::Overlap { earlier: e, later: l, .. }
                                if *e == earlier && *l == item.id)
                        })
                    {
                        issues.push(LayoutIssue::Overlap {
                            earlier,
                            later: item.id,
                            first_unit: unit as u32,
                        });
                    }
                }
                owner[idx] = Some(item.id);

                let cell = &mut cells[idx];
                if unit == last {
                    cell.state = SlotState::Labeled;
                    cell.label = format!("{} {}", item.manufacturer, item.model);
                } else {
                    cell.state = SlotState::Occupied;
                    cell.label.clear();
                }
            }

            equipment.push(EquipmentEntry {
                equipment_type: item.equipment_type.clone(),
                manufacturer: item.manufacturer.clone(),
                model: item.model.clone(),
                position: item.position,
                size: item.size,
            });
        }

        Self { cells, equipment, issues }
    }

    pub fn occupied_units(&self) -> Vec<u32> {
        self.cells.iter().filter(|c| c.is_occupied()).map(|c| c.unit).collect()
    }

    pub fn labeled_units(&self) -> Vec<u32> {
        self.cells
            .iter()
            .filter(|c| c.state == SlotState::Labeled)
            .map(|c| c.unit)
            .collect()
    }
}

/// Write the slot map into `rack` and the equipment list into `list`,
/// replacing whatever they held.
pub fn render(document: &Document, rack: &Element, list: &Element, layout: &RackLayout) -> Result<(), JsValue> {
    rack.set_inner_html("");
    list.set_inner_html("");

    for cell in &layout.cells {
        let el = document.create_element("div")?;
        el.set_class_name(cell.class_name());
        el.set_attribute("data-unit", &cell.unit.to_string())?;
        el.set_text_content(Some(&cell.label));
        rack.append_child(&el)?;
    }

    for entry in &layout.equipment {
        let li = document.create_element("li")?;
        li.set_class_name("list-group-item");
        li.set_inner_html(&entry.to_html());
        list.append_child(&li)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(super) fn item(id: u32, position: i64, size: i64) -> HardwareUnit {
        HardwareUnit {
            id,
            equipment_type: "Server".into(),
            manufacturer: "HP".into(),
            model: format!("M{}", id),
            serial_number: 1000 + id as i64,
            cabinet_id: 1,
            status: "Aktivan".into(),
            installed_at: None,
            serviced_at: None,
            position,
            size,
        }
    }

    #[test]
    fn empty_cabinet_shows_unit_numbers() {
        let layout = RackLayout::build(4, &[]);
        assert_eq!(layout.cells.len(), 4);
        for (i, cell) in layout.cells.iter().enumerate() {
            assert_eq!(cell.unit, i as u32 + 1);
            assert_eq!(cell.state, SlotState::Empty);
            assert_eq!(cell.label, (i + 1).to_string());
        }
        assert!(layout.equipment.is_empty());
        assert!(layout.issues.is_empty());
    }

    #[test]
    fn single_unit_item_is_labeled() {
        let layout = RackLayout::build(6, &[item(1, 3, 1)]);
        assert_eq!(layout.occupied_units(), vec![3]);
        assert_eq!(layout.labeled_units(), vec![3]);
        assert_eq!(layout.cells[2].label, "HP M1");
    }

    #[test]
    fn multi_unit_item_labels_topmost_only() {
        let layout = RackLayout::build(42, &[item(7, 1, 2), item(8, 4, 3)]);
        assert_eq!(layout.occupied_units(), vec![1, 2, 4, 5, 6]);
        assert_eq!(layout.labeled_units(), vec![2, 6]);
        assert_eq!(layout.cells[0].label, "");
        assert_eq!(layout.cells[3].label, "");
        assert_eq!(layout.cells[4].label, "");
        assert_eq!(layout.cells[5].label, "HP M8");
        assert_eq!(layout.cells[2].label, "3");
    }

    #[test]
    fn equipment_list_keeps_input_order() {
        let layout = RackLayout::build(10, &[item(2, 8, 1), item(1, 1, 2)]);
        let positions: Vec<i64> = layout.equipment.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![8, 1]);
        assert_eq!(
            layout.equipment[1].to_html(),
            "<strong>Server</strong>: HP M1 (Pozicija: 1U, Veličina: 2U)"
        );
    }

    #[test]
    fn out_of_range_units_are_skipped_and_reported() {
        let layout = RackLayout::build(4, &[item(3, 3, 4)]);
        assert_eq!(layout.cells.len(), 4);
        assert_eq!(layout.occupied_units(), vec![3, 4]);
        // Topmost unit (6) is outside the cabinet, so nothing is labeled.
        assert!(layout.labeled_units().is_empty());
        assert_eq!(
            layout.issues,
            vec![LayoutIssue::OutOfRange { hardware_id: 3, start: 3, end: 6, capacity: 4 }]
        );
        assert_eq!(layout.equipment.len(), 1);
    }

    #[test]
    fn position_zero_is_out_of_range() {
        let layout = RackLayout::build(4, &[item(5, 0, 2)]);
        assert_eq!(layout.occupied_units(), vec![1]);
        assert_eq!(layout.labeled_units(), vec![1]);
        assert!(matches!(layout.issues[0], LayoutIssue::OutOfRange { hardware_id: 5, .. }));
    }

    #[test]
    fn overlap_later_item_wins_and_is_reported_once() {
        let layout = RackLayout::build(10, &[item(1, 2, 3), item(2, 3, 2)]);
        // item 1: 2..=4 labeled at 4; item 2: 3..=4 labeled at 4 and overwrites 3.
        assert_eq!(layout.occupied_units(), vec![2, 3, 4]);
        assert_eq!(layout.labeled_units(), vec![4]);
        assert_eq!(layout.cells[3].label, "HP M2");
        assert_eq!(layout.cells[2].label, "");
        assert_eq!(
            layout.issues,
            vec![LayoutIssue::Overlap { earlier: 1, later: 2, first_unit: 3 }]
        );
    }

    #[test]
    fn zero_size_item_paints_nothing() {
        let layout = RackLayout::build(3, &[item(1, 2, 0)]);
        assert!(layout.occupied_units().is_empty());
        assert!(layout.issues.is_empty());
        assert_eq!(layout.equipment.len(), 1);
    }

    #[test]
    fn negative_position_is_clipped_and_reported() {
        let layout = RackLayout::build(4, &[item(1, 2, 1), item(2, -1, 3)]);
        // item 2 spans -1..=1, only U1 exists.
        assert_eq!(layout.occupied_units(), vec![1, 2]);
        assert_eq!(layout.labeled_units(), vec![1, 2]);
        assert_eq!(layout.cells[1].label, "HP M1");
        assert_eq!(
            layout.issues,
            vec![LayoutIssue::OutOfRange { hardware_id: 2, start: -1, end: 1, capacity: 4 }]
        );

        let below = RackLayout::build(4, &[item(3, -5, 2)]);
        assert!(below.occupied_units().is_empty());
        assert_eq!(below.issues.len(), 1);
        assert_eq!(below.equipment.len(), 1);
    }

    #[test]
    fn non_positive_capacity_draws_no_cells() {
        for capacity in [0, -3] {
            let layout = RackLayout::build(capacity, &[item(1, 1, 2)]);
            assert!(layout.cells.is_empty());
            assert_eq!(
                layout.issues,
                vec![LayoutIssue::OutOfRange { hardware_id: 1, start: 1, end: 2, capacity: 0 }]
            );
            assert_eq!(layout.equipment.len(), 1);
        }
    }

    #[test]
    fn negative_size_paints_nothing() {
        let layout = RackLayout::build(5, &[item(1, 3, -2)]);
        assert!(layout.occupied_units().is_empty());
        assert!(layout.issues.is_empty());
    }

    #[test]
    fn oversized_capacity_is_capped() {
        let layout = RackLayout::build(i64::from(u32::MAX), &[item(1, 999, 5)]);
        assert_eq!(layout.cells.len(), MAX_RACK_UNITS as usize);
        assert_eq!(layout.occupied_units(), vec![999, 1000]);
        assert_eq!(
            layout.issues,
            vec![
                LayoutIssue::CapacityTooLarge { capacity: i64::from(u32::MAX), max: MAX_RACK_UNITS },
                LayoutIssue::OutOfRange { hardware_id: 1, start: 999, end: 1003, capacity: MAX_RACK_UNITS },
            ]
        );
    }

    #[test]
    fn huge_positions_do_not_overflow() {
        let layout = RackLayout::build(42, &[item(1, i64::MAX, i64::MAX)]);
        assert!(layout.occupied_units().is_empty());
        assert_eq!(layout.issues.len(), 1);
    }

    #[test]
    fn issues_describe_themselves() {
        let overlap = LayoutIssue::Overlap { earlier: 1, later: 2, first_unit: 3 };
        assert!(overlap.describe().contains("#2"));
        let range = LayoutIssue::OutOfRange { hardware_id: 3, start: 40, end: 43, capacity: 42 };
        assert!(range.describe().contains("42U"));
        let cap = LayoutIssue::CapacityTooLarge { capacity: 5000, max: MAX_RACK_UNITS };
        assert!(cap.describe().contains("5000U"));
    }
}
