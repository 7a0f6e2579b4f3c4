//! Board geometry.

use crate::{DEFAULT_BOARD_WIDTH, EDGE_MARGIN_FRACTION};

/// The seesaw board: a horizontal beam pivoting about its center.
///
/// All placement coordinates live on the board axis, from 0 at the left edge
/// to `width` at the right edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    /// Total width in pixels.
    pub width: f64,
}

impl Board {
    /// Create a board of the given width.
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    /// Pivot coordinate: half the width.
    pub fn center(&self) -> f64 {
        self.width / 2.0
    }

    /// Clear zone kept free at each edge.
    pub fn edge_margin(&self) -> f64 {
        self.width * EDGE_MARGIN_FRACTION
    }

    /// Clamp an absolute coordinate into the placeable span
    /// `[edge_margin, width - edge_margin]`.
    pub fn clamp_position(&self, position: f64) -> f64 {
        position.clamp(self.edge_margin(), self.width - self.edge_margin())
    }

    /// Signed offset from the pivot for an absolute coordinate.
    pub fn offset_from(&self, position: f64) -> f64 {
        position - self.center()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH)
    }
}
