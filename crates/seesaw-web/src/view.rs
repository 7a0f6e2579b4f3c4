//! DOM rendering: board rotation, torque readouts, weight elements.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use seesaw_model::{BalanceModel, Weight};

use crate::dom;

/// Placement animation length; the `placing` class comes off afterwards.
const PLACING_MS: i32 = 400;
/// Removal shrink animation length.
const REMOVAL_MS: i32 = 200;
/// Reset spin-out animation length.
const RESET_MS: i32 = 300;

/// Push the model's derived state to the page: rounded torque readouts and
/// the board rotation.
pub fn render_balance(model: &BalanceModel) {
    let b = model.balance();
    dom::set_text("left-torque", &format!("{}", b.left_torque.round() as i64));
    dom::set_text("right-torque", &format!("{}", b.right_torque.round() as i64));
    dom::set_style(
        "seesaw-board",
        &format!(
            "transform: translateX(-50%) translateY(-50%) rotate({}deg)",
            b.tilt_deg
        ),
    );
}

/// Build the element for a placed weight and attach it to the board.
///
/// `animate` adds the transient `placing` class, dropped again once the
/// placement animation has played. Restored weights pass `false`.
pub fn spawn_weight_el(weight: &Weight, animate: bool) {
    let doc = dom::document();
    let el: HtmlElement = doc
        .create_element("div")
        .expect("create div")
        .dyn_into()
        .expect("div not HtmlElement");
    el.set_class_name(if animate { "weight placing" } else { "weight" });
    el.set_attribute("data-id", &weight.id.to_string()).ok();
    el.set_attribute("style", &format!("left: {}px", weight.position))
        .ok();

    let block = doc.create_element("div").expect("create div");
    block.set_class_name("weight-block");
    block
        .set_attribute("data-weight", &format!("{}", weight.magnitude))
        .ok();
    block.set_text_content(Some(&format!("{}", weight.magnitude)));
    el.append_child(&block).ok();

    dom::get_el("seesaw-board").append_child(&el).ok();

    if animate {
        dom::set_timeout(move || el.set_class_name("weight"), PLACING_MS);
    }
}

/// Id of the weight element containing the event target, if any.
pub fn weight_id_at(e: &web_sys::MouseEvent) -> Option<u64> {
    let target = e.target()?;
    let el = target.dyn_ref::<web_sys::Element>()?;
    let weight_el = el.closest(".weight").ok()??;
    weight_el.get_attribute("data-id")?.parse().ok()
}

/// Shrink a weight element out, then detach it.
pub fn dismiss_weight_el(id: u64) {
    let Some(el) = weight_el(id) else { return };
    let base = el.get_attribute("style").unwrap_or_default();
    el.set_attribute(
        "style",
        &format!("{base}; transform: translateX(-50%) scale(0); opacity: 0"),
    )
    .ok();
    dom::set_timeout(move || el.remove(), REMOVAL_MS);
}

/// Spin every weight element out, then detach them all and run `then`.
pub fn dismiss_all_weight_els(then: impl FnOnce() + 'static) {
    let els = all_weight_els();
    for el in &els {
        let base = el.get_attribute("style").unwrap_or_default();
        el.set_attribute(
            "style",
            &format!("{base}; transform: translateX(-50%) scale(0) rotate(360deg); opacity: 0"),
        )
        .ok();
    }
    dom::set_timeout(
        move || {
            for el in &els {
                el.remove();
            }
            then();
        },
        RESET_MS,
    );
}

fn weight_el(id: u64) -> Option<HtmlElement> {
    dom::document()
        .query_selector(&format!(".weight[data-id='{id}']"))
        .ok()
        .flatten()?
        .dyn_into()
        .ok()
}

fn all_weight_els() -> Vec<HtmlElement> {
    let Ok(list) = dom::document().query_selector_all(".weight") else {
        return vec![];
    };
    let mut els = Vec::new();
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<HtmlElement>() {
                els.push(el);
            }
        }
    }
    els
}
