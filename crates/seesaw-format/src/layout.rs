//! Saved weight layouts and their JSON round-trip.

use std::path::Path;

use serde::{Deserialize, Serialize};

use seesaw_model::BalanceModel;

use crate::error::Result;

/// One saved weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    /// Weight value.
    pub magnitude: f64,
    /// Signed distance from the pivot.
    pub offset: f64,
    /// Absolute coordinate on the board. Redundant with `offset + center`;
    /// kept so a loaded layout renders without consulting the geometry.
    #[serde(default)]
    pub position: f64,
}

/// Snapshot the model's weights as serializable records.
pub fn to_records(model: &BalanceModel) -> Vec<WeightRecord> {
    model
        .weights()
        .iter()
        .map(|w| WeightRecord {
            magnitude: w.magnitude,
            offset: w.offset,
            position: w.position,
        })
        .collect()
}

/// Re-insert saved records into the model, in order.
///
/// Values are restored verbatim, without re-clamping against the model's
/// board. Callers that save on every mutation must not save while this runs.
pub fn restore_layout(model: &mut BalanceModel, records: &[WeightRecord]) {
    for r in records {
        model.restore(r.magnitude, r.offset, r.position);
    }
}

/// Parse a JSON layout.
pub fn parse_layout(json: &str) -> Result<Vec<WeightRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize records as a JSON layout.
pub fn layout_to_json(records: &[WeightRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

/// Write the model's layout to a JSON file.
pub fn save_layout_file<P: AsRef<Path>>(path: P, model: &BalanceModel) -> Result<()> {
    let json = layout_to_json(&to_records(model))?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Read a layout file written by [`save_layout_file`].
pub fn load_layout_file<P: AsRef<Path>>(path: P) -> Result<Vec<WeightRecord>> {
    let json = std::fs::read_to_string(path)?;
    parse_layout(&json)
}
