//! Model and derived state for the seesaw balance simulator.
//!
//! `BalanceModel` owns the placed weights and the monotonic id counter.
//! `Balance` is the derived state (torque per side, tilt angle), recomputed
//! from scratch after every insertion or removal.

pub mod board;
pub mod model;
pub mod weight;

pub use board::Board;
pub use model::{Balance, BalanceModel, tilt_from_torques};
pub use weight::{SELECTABLE_MAGNITUDES, Weight};

/// Hard limit on the board rotation (degrees).
pub const MAX_TILT_DEG: f64 = 30.0;

/// Torque difference divided by this gives the tilt angle.
pub const TILT_DIVISOR: f64 = 10.0;

/// Fraction of the board width kept clear at each edge.
pub const EDGE_MARGIN_FRACTION: f64 = 0.05;

/// Board width in pixels, fixed by the page layout.
pub const DEFAULT_BOARD_WIDTH: f64 = 700.0;
