//! The balance model: weight list, torque sums, tilt angle.

use seesaw_math::{Vec2, unrotate_x};

use crate::{Board, MAX_TILT_DEG, TILT_DIVISOR, Weight};

/// Derived balance quantities. Recomputed from the weight list after every
/// mutation; never updated incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Balance {
    /// Torque sum of all weights left of the pivot.
    pub left_torque: f64,
    /// Torque sum of all weights on or right of the pivot.
    pub right_torque: f64,
    /// Board rotation in degrees. Positive tilts the right side down.
    pub tilt_deg: f64,
}

/// Map a torque imbalance to a bounded tilt angle in degrees.
///
/// Linear and saturating at [`MAX_TILT_DEG`]; not a physical pendulum model.
pub fn tilt_from_torques(left_torque: f64, right_torque: f64) -> f64 {
    ((right_torque - left_torque) / TILT_DIVISOR).clamp(-MAX_TILT_DEG, MAX_TILT_DEG)
}

/// Owns the placed weights and the monotonic id counter.
///
/// The weight list is the entire mutable state. Every operation runs to
/// completion and leaves the cached [`Balance`] consistent with the list.
#[derive(Debug, Clone)]
pub struct BalanceModel {
    board: Board,
    weights: Vec<Weight>,
    next_id: u64,
    balance: Balance,
}

impl BalanceModel {
    /// Create an empty model over the given board.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            weights: Vec::new(),
            next_id: 0,
            balance: Balance::default(),
        }
    }

    /// The board this model places weights on.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Placed weights, in placement order.
    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    /// Current derived state.
    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// Current board rotation in degrees.
    pub fn tilt_deg(&self) -> f64 {
        self.balance.tilt_deg
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Place a weight from a pointer position.
    ///
    /// `pointer` is relative to the board center, in the visual frame, which
    /// is rotated by the current tilt. The point is rotated back onto the
    /// flat board, shifted to an absolute coordinate and clamped inside the
    /// edge margins before the weight is stored.
    pub fn place(&mut self, magnitude: f64, pointer: Vec2) -> Weight {
        let unrotated = unrotate_x(pointer, self.balance.tilt_deg);
        let position = self.board.clamp_position(unrotated + self.board.center());
        let offset = self.board.offset_from(position);
        self.insert(magnitude, offset, position)
    }

    /// Re-insert a previously saved weight.
    ///
    /// Stored values are trusted: no un-rotation and no clamping, so a
    /// layout loads exactly as it was saved even if the board geometry has
    /// changed since.
    pub fn restore(&mut self, magnitude: f64, offset: f64, position: f64) -> Weight {
        self.insert(magnitude, offset, position)
    }

    fn insert(&mut self, magnitude: f64, offset: f64, position: f64) -> Weight {
        let weight = Weight {
            id: self.next_id,
            magnitude,
            offset,
            position,
        };
        self.next_id += 1;
        self.weights.push(weight);
        self.recompute();
        weight
    }

    /// Remove the weight with the given id.
    ///
    /// Returns whether a removal occurred. Removing an unknown id is a no-op
    /// and leaves the balance untouched.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.weights.iter().position(|w| w.id == id) {
            Some(idx) => {
                self.weights.remove(idx);
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// Remove every weight. The id counter keeps counting.
    pub fn reset(&mut self) {
        self.weights.clear();
        self.recompute();
    }

    /// Torque sums per side: magnitude times absolute offset, accumulated
    /// left for negative offsets and right otherwise.
    pub fn torques(&self) -> (f64, f64) {
        let mut left = 0.0;
        let mut right = 0.0;
        for w in &self.weights {
            if w.is_left() {
                left += w.torque();
            } else {
                right += w.torque();
            }
        }
        (left, right)
    }

    fn recompute(&mut self) {
        let (left, right) = self.torques();
        self.balance = Balance {
            left_torque: left,
            right_torque: right,
            tilt_deg: tilt_from_torques(left, right),
        };
    }
}

impl Default for BalanceModel {
    fn default() -> Self {
        Self::new(Board::default())
    }
}
