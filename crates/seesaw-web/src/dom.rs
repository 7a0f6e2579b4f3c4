use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

pub fn window() -> Window {
    web_sys::window().expect("no global window")
}

pub fn document() -> Document {
    window().document().expect("no document")
}

pub fn get_el(id: &str) -> HtmlElement {
    document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("no #{id}"))
        .dyn_into()
        .unwrap_or_else(|_| panic!("#{id} not HtmlElement"))
}

pub fn set_text(id: &str, text: &str) {
    if let Some(el) = document().get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_style(id: &str, style: &str) {
    if let Some(el) = document().get_element_by_id(id) {
        el.set_attribute("style", style).ok();
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(f: impl FnOnce() + 'static, ms: i32) {
    let cb = Closure::once(f);
    window()
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)
        .expect("setTimeout failed");
    cb.forget();
}
