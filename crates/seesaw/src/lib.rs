//! seesaw: interactive torque-balance simulator.
//!
//! This is the umbrella crate re-exporting the balance model, the planar
//! math, and the layout persistence format. The browser front end lives in
//! `seesaw-web` and is not part of the native API surface.

pub use seesaw_format::{
    self, LayoutError, WeightRecord, layout_to_json, load_layout_file, parse_layout,
    restore_layout, save_layout_file, to_records,
};
pub use seesaw_math::{self, Vec2, rotate, unrotate_x};
pub use seesaw_model::{
    self, Balance, BalanceModel, Board, DEFAULT_BOARD_WIDTH, EDGE_MARGIN_FRACTION, MAX_TILT_DEG,
    SELECTABLE_MAGNITUDES, TILT_DIVISOR, Weight, tilt_from_torques,
};
