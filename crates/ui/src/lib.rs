//! Bill splitter in the browser
//!
//! Wires the `bill-split` arithmetic to the page: fills the people dropdown
//! on load, binds the calculate and theme buttons, and installs
//! `calculateBill`, `fillPeopleDropdown` and `toggleTheme` on `window` so
//! scripts and test harnesses can drive the widget directly.

mod controller;
mod dom;

use wasm_bindgen::prelude::*;
use web_sys::{window, Window};

pub use controller::init_when_ready;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    if let Some(win) = window() {
        expose_on_window(&win)?;
    }
    controller::start()
}

/// Install the public operations as globals on `window`
pub fn expose_on_window(win: &Window) -> Result<(), JsValue> {
    install(win, "calculateBill", controller::calculate_bill)?;
    install(win, "fillPeopleDropdown", controller::fill_people_dropdown)?;
    install(win, "toggleTheme", controller::toggle_theme)?;
    Ok(())
}

fn install(win: &Window, name: &str, op: fn()) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(op) as Box<dyn FnMut()>);
    js_sys::Reflect::set(win, &name.into(), cb.as_ref())?;
    cb.forget();
    Ok(())
}

/// Compute the split from the page controls and show the results
#[wasm_bindgen(js_name = calculateBill)]
pub fn calculate_bill() {
    controller::calculate_bill();
}

/// Switch between light and dark mode
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    controller::toggle_theme();
}

/// Fill the people dropdown with 1-10 if it is empty
#[wasm_bindgen(js_name = fillPeopleDropdown)]
pub fn fill_people_dropdown() {
    controller::fill_people_dropdown();
}

/// Bind the calculate and theme buttons
#[wasm_bindgen(js_name = setupEvents)]
pub fn setup_events() {
    controller::setup_events();
}

/// Fill the dropdown and bind the buttons; runs once at startup
#[wasm_bindgen(js_name = init)]
pub fn init() {
    controller::init();
}
