//! Layout persistence for the seesaw balance simulator.
//!
//! A layout is the serialized form of a balance model: one record per placed
//! weight, no ids, no rendering handles. The same JSON shape is used for the
//! browser's key-value store and for layout files on disk.

pub mod error;
pub mod layout;

pub use error::{LayoutError, Result};
pub use layout::{
    WeightRecord, layout_to_json, load_layout_file, parse_layout, restore_layout,
    save_layout_file, to_records,
};
