use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use seesaw_format::{restore_layout, to_records};
use seesaw_math::Vec2;
use seesaw_model::{BalanceModel, SELECTABLE_MAGNITUDES};

use crate::dom;
use crate::storage;
use crate::view;

/// Shared interactive state.
struct App {
    model: BalanceModel,
    selected_magnitude: f64,
}

impl App {
    fn persist(&self) {
        storage::save(&to_records(&self.model));
    }
}

/// Main application entry point.
pub fn run() {
    web_sys::console::log_1(&"seesaw starting...".into());

    let app = Rc::new(RefCell::new(App {
        model: BalanceModel::default(),
        selected_magnitude: SELECTABLE_MAGNITUDES[0],
    }));

    // Restore the saved layout before wiring events; loading never writes
    // the key back.
    {
        let mut a = app.borrow_mut();
        let records = storage::load();
        restore_layout(&mut a.model, &records);
        for w in a.model.weights() {
            view::spawn_weight_el(w, false);
        }
        view::render_balance(&a.model);
    }

    wire_board(&app);
    wire_magnitude_buttons(&app);
    wire_reset(&app);
    wire_resize(&app);
}

fn wire_board(app: &Rc<RefCell<App>>) {
    let board = dom::get_el("seesaw-board");

    // Clicking an existing weight removes it; anywhere else places one.
    let a = app.clone();
    let click = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        match view::weight_id_at(&e) {
            Some(id) => remove_weight(&a, id),
            None => place_at_pointer(&a, &e),
        }
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);
    board
        .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())
        .ok();
    click.forget();

    // Right click removes too; the context menu never opens over the board.
    let a2 = app.clone();
    let contextmenu = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        e.prevent_default();
        if let Some(id) = view::weight_id_at(&e) {
            remove_weight(&a2, id);
        }
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);
    board
        .add_event_listener_with_callback("contextmenu", contextmenu.as_ref().unchecked_ref())
        .ok();
    contextmenu.forget();
}

fn place_at_pointer(app: &Rc<RefCell<App>>, e: &web_sys::MouseEvent) {
    // Pointer relative to the board center, in viewport coordinates. The
    // board may be rotated; the model un-rotates before placing.
    let rect = dom::get_el("seesaw-board").get_bounding_client_rect();
    let center_x = rect.left() + rect.width() / 2.0;
    let center_y = rect.top() + rect.height() / 2.0;
    let pointer = Vec2::new(
        e.client_x() as f64 - center_x,
        e.client_y() as f64 - center_y,
    );

    let mut a = app.borrow_mut();
    let magnitude = a.selected_magnitude;
    let weight = a.model.place(magnitude, pointer);
    view::spawn_weight_el(&weight, true);
    view::render_balance(&a.model);
    a.persist();
}

fn remove_weight(app: &Rc<RefCell<App>>, id: u64) {
    let mut a = app.borrow_mut();
    if !a.model.remove(id) {
        return;
    }
    view::dismiss_weight_el(id);
    view::render_balance(&a.model);
    a.persist();
}

fn wire_magnitude_buttons(app: &Rc<RefCell<App>>) {
    let Ok(buttons) = dom::document().query_selector_all(".weight-btn") else {
        return;
    };
    for i in 0..buttons.length() {
        let Some(node) = buttons.item(i) else { continue };
        let Ok(btn) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        let magnitude: f64 = btn
            .get_attribute("data-weight")
            .and_then(|v| v.parse().ok())
            .unwrap_or(SELECTABLE_MAGNITUDES[0]);

        let a = app.clone();
        let el = btn.clone();
        let cb = Closure::wrap(Box::new(move || {
            select_magnitude(&a, &el, magnitude);
        }) as Box<dyn FnMut()>);
        btn.set_onclick(Some(cb.as_ref().unchecked_ref()));
        cb.forget();
    }
}

fn select_magnitude(app: &Rc<RefCell<App>>, btn: &web_sys::HtmlElement, magnitude: f64) {
    if let Ok(buttons) = dom::document().query_selector_all(".weight-btn") {
        for i in 0..buttons.length() {
            if let Some(node) = buttons.item(i) {
                if let Ok(el) = node.dyn_into::<web_sys::Element>() {
                    el.set_class_name("weight-btn");
                }
            }
        }
    }
    btn.set_class_name("weight-btn active");
    app.borrow_mut().selected_magnitude = magnitude;
}

fn wire_reset(app: &Rc<RefCell<App>>) {
    let a = app.clone();
    let cb = Closure::wrap(Box::new(move || {
        // The model clears once the spin-out animation has played, matching
        // the element removal.
        let inner = a.clone();
        view::dismiss_all_weight_els(move || {
            let mut a = inner.borrow_mut();
            a.model.reset();
            view::render_balance(&a.model);
            a.persist();
        });
    }) as Box<dyn FnMut()>);
    dom::get_el("reset-btn").set_onclick(Some(cb.as_ref().unchecked_ref()));
    cb.forget();
}

fn wire_resize(app: &Rc<RefCell<App>>) {
    let a = app.clone();
    let cb = Closure::wrap(Box::new(move || {
        // Board width is fixed; just re-derive the display.
        view::render_balance(&a.borrow().model);
    }) as Box<dyn FnMut()>);
    dom::window()
        .add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
        .ok();
    cb.forget();
}
