//! Placed weights.

/// Magnitudes offered by the interactive selector.
pub const SELECTABLE_MAGNITUDES: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// A weight resting on the board.
///
/// Weights are never mutated after creation; they are only removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weight {
    /// Unique within a session, assigned by the model, never reused.
    pub id: u64,
    /// Weight value. Any positive number is accepted; the selector offers
    /// [`SELECTABLE_MAGNITUDES`].
    pub magnitude: f64,
    /// Signed distance from the pivot. Negative is left of the pivot,
    /// non-negative is right.
    pub offset: f64,
    /// Absolute coordinate on the board (`offset + center`), kept for
    /// rendering.
    pub position: f64,
}

impl Weight {
    /// Torque contribution about the pivot: magnitude times distance.
    pub fn torque(&self) -> f64 {
        self.magnitude * self.offset.abs()
    }

    /// True when the weight sits left of the pivot.
    pub fn is_left(&self) -> bool {
        self.offset < 0.0
    }
}
