use seesaw_format::WeightRecord;
use web_sys::Storage;

const KEY: &str = "seesawWeights";

fn storage() -> Option<Storage> {
    crate::dom::window().local_storage().ok().flatten()
}

/// Load the saved layout. An absent key means no saved layout. A value that
/// fails to parse is warned about, discarded, and the key cleared.
pub fn load() -> Vec<WeightRecord> {
    let Some(s) = storage() else { return vec![] };
    let Some(json) = s.get_item(KEY).ok().flatten() else {
        return vec![];
    };
    match seesaw_format::parse_layout(&json) {
        Ok(records) => records,
        Err(e) => {
            web_sys::console::warn_1(&format!("failed to load saved layout: {e}").into());
            s.remove_item(KEY).ok();
            vec![]
        }
    }
}

/// Persist the layout, replacing whatever was stored.
pub fn save(records: &[WeightRecord]) {
    let Some(s) = storage() else { return };
    if let Ok(json) = seesaw_format::layout_to_json(records) {
        s.set_item(KEY, &json).ok();
    }
}
