//! Property tests for the rack slot map.
//!
//! Run with: cargo test --test rack_layout_props

use std::collections::BTreeSet;

use proptest::prelude::*;
use rackmaster_frontend::components::{RackLayout, SlotState};
use rackmaster_frontend::models::HardwareUnit;

fn unit(id: u32, position: u32, size: u32) -> HardwareUnit {
    HardwareUnit {
        id,
        equipment_type: "Server".into(),
        manufacturer: "Cisco".into(),
        model: format!("UCS-{}", id),
        serial_number: i64::from(id),
        cabinet_id: 1,
        status: "Aktivan".into(),
        installed_at: None,
        serviced_at: None,
        position: i64::from(position),
        size: i64::from(size),
    }
}

/// Capacity plus a set of non-overlapping, in-range items built by stacking
/// (gap, size) pairs from the bottom until the cabinet is full.
fn rack_strategy() -> impl Strategy<Value = (u32, Vec<HardwareUnit>)> {
    (1u32..=48, prop::collection::vec((0u32..4, 1u32..6), 0..12)).prop_map(|(capacity, blocks)| {
        let mut items = Vec::new();
        let mut next = 1u32;
        for (i, (gap, size)) in blocks.into_iter().enumerate() {
            let start = next + gap;
            if start + size - 1 > capacity {
                break;
            }
            items.push(unit(i as u32 + 1, start, size));
            next = start + size;
        }
        (capacity, items)
    })
}

proptest! {
    #[test]
    fn cell_count_equals_capacity((capacity, items) in rack_strategy()) {
        let layout = RackLayout::build(i64::from(capacity), &items);
        prop_assert_eq!(layout.cells.len(), capacity as usize);
        prop_assert!(layout.issues.is_empty());
    }

    #[test]
    fn occupied_cells_are_union_of_ranges((capacity, items) in rack_strategy()) {
        let layout = RackLayout::build(i64::from(capacity), &items);
        let expected: BTreeSet<u32> = items
            .iter()
            .flat_map(|h| h.position..h.position + h.size)
            .map(|u| u as u32)
            .collect();
        let occupied: BTreeSet<u32> = layout.occupied_units().into_iter().collect();
        prop_assert_eq!(occupied, expected);
    }

    #[test]
    fn each_item_has_exactly_one_label_at_its_top((capacity, items) in rack_strategy()) {
        let layout = RackLayout::build(i64::from(capacity), &items);
        let tops: Vec<u32> = items.iter().map(|h| (h.position + h.size - 1) as u32).collect();
        prop_assert_eq!(layout.labeled_units(), tops);
        for h in &items {
            let top = &layout.cells[(h.position + h.size - 2) as usize];
            prop_assert_eq!(&top.label, &format!("{} {}", h.manufacturer, h.model));
            for u in h.position..h.position + h.size - 1 {
                let cell = &layout.cells[(u - 1) as usize];
                prop_assert_eq!(cell.state, SlotState::Occupied);
                prop_assert!(cell.label.is_empty());
            }
        }
    }

    #[test]
    fn free_cells_keep_their_index((capacity, items) in rack_strategy()) {
        let layout = RackLayout::build(i64::from(capacity), &items);
        for cell in layout.cells.iter().filter(|c| c.state == SlotState::Empty) {
            prop_assert_eq!(&cell.label, &cell.unit.to_string());
        }
        prop_assert_eq!(layout.equipment.len(), items.len());
    }

    #[test]
    fn arbitrary_rack_values_never_panic(
        capacity in -10i64..100,
        raw in prop::collection::vec((-20i64..120, -3i64..10), 0..8),
    ) {
        let items: Vec<HardwareUnit> = raw
            .iter()
            .enumerate()
            .map(|(i, &(position, size))| HardwareUnit { position, size, ..unit(i as u32 + 1, 1, 1) })
            .collect();
        let layout = RackLayout::build(capacity, &items);
        prop_assert_eq!(layout.cells.len(), capacity.max(0) as usize);
        prop_assert_eq!(layout.equipment.len(), items.len());
        prop_assert!(layout.occupied_units().iter().all(|&u| u >= 1 && i64::from(u) <= capacity));
    }
}

#[test]
fn empty_hardware_list_leaves_every_cell_free() {
    let layout = RackLayout::build(42, &[]);
    assert_eq!(layout.cells.len(), 42);
    assert!(layout.occupied_units().is_empty());
    assert_eq!(layout.cells[41].label, "42");
}
