pub mod cabinet_form;
pub mod charts;
pub mod hardware_form;
pub mod modal;
pub mod rack;
pub mod tables;

// Re-export commonly used items
pub use rack::{RackLayout, SlotState};
pub use tables::TableView;
