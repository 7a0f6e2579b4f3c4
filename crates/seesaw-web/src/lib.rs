use wasm_bindgen::prelude::*;

mod app;
mod dom;
mod storage;
mod view;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook_set();
    app::run();
}

fn console_error_panic_hook_set() {
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        web_sys::console::error_1(&msg.into());
    }));
}
