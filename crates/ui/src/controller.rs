//! Bill splitter controller
//!
//! Each operation looks up the controls it needs on every call and returns
//! quietly when any of them (or the document itself) is missing.

use bill_split::config::{
    AMOUNT_ID, CALCULATE_ID, PEOPLE_ID, PER_PERSON_ID, TIP_AMOUNT_ID, TIP_ID, TOGGLE_THEME_ID,
};
use bill_split::people::DEFAULT_SELECTION;
use bill_split::{
    format_currency, needs_population, people_options, BillInputs, Theme, DARK_MODE_CLASS, RUPEE,
};
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentReadyState, HtmlOptionElement, HtmlSelectElement};

use crate::dom::{get_document, input_by_id, select_by_id};

/// Read amount, tip and party size; write tip amount and per-person share
pub fn calculate_bill() {
    let Some(doc) = get_document() else { return };

    let (Some(amount), Some(tip), Some(people), Some(tip_out), Some(per_person_out)) = (
        input_by_id(&doc, AMOUNT_ID),
        input_by_id(&doc, TIP_ID),
        select_by_id(&doc, PEOPLE_ID),
        doc.get_element_by_id(TIP_AMOUNT_ID),
        doc.get_element_by_id(PER_PERSON_ID),
    ) else {
        debug!("calculateBill: controls missing, skipping");
        return;
    };

    let split = BillInputs::from_raw(&amount.value(), &tip.value(), &people.value()).split();

    tip_out.set_text_content(Some(&format_currency(RUPEE, split.tip_amount)));
    per_person_out.set_text_content(Some(&format_currency(RUPEE, split.per_person)));
}

/// Flip the dark-mode class on the body and relabel the toggle control
pub fn toggle_theme() {
    let Some(doc) = get_document() else { return };

    let (Some(button), Some(body)) = (doc.get_element_by_id(TOGGLE_THEME_ID), doc.body()) else {
        debug!("toggleTheme: toggle control missing, skipping");
        return;
    };

    match body.class_list().toggle(DARK_MODE_CLASS) {
        Ok(dark) => button.set_text_content(Some(Theme::from_dark_flag(dark).label())),
        Err(err) => warn!(?err, "toggleTheme failed"),
    }
}

/// Fill the people dropdown, but only while it has no options
pub fn fill_people_dropdown() {
    let Some(doc) = get_document() else { return };

    let Some(select) = select_by_id(&doc, PEOPLE_ID) else {
        debug!("fillPeopleDropdown: people control missing, skipping");
        return;
    };
    if !needs_population(select.length()) {
        return;
    }

    if let Err(err) = populate(&doc, &select) {
        warn!(?err, "fillPeopleDropdown failed");
    }
}

fn populate(doc: &Document, select: &HtmlSelectElement) -> Result<(), JsValue> {
    for choice in people_options() {
        let option = doc.create_element("option")?.dyn_into::<HtmlOptionElement>()?;
        option.set_value(&choice.value);
        option.set_text_content(Some(&choice.label));
        select.append_child(&option)?;
    }
    select.set_value(&DEFAULT_SELECTION.to_string());
    Ok(())
}

/// Bind calculate and theme toggle to their triggers
pub fn setup_events() {
    let Some(doc) = get_document() else { return };

    if let Err(err) = bind_click(&doc, CALCULATE_ID, calculate_bill) {
        warn!(?err, "setupEvents: binding calculate failed");
    }
    if let Err(err) = bind_click(&doc, TOGGLE_THEME_ID, toggle_theme) {
        warn!(?err, "setupEvents: binding toggle theme failed");
    }
}

fn bind_click(doc: &Document, id: &str, handler: fn()) -> Result<(), JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

/// Populate the dropdown, then wire events
pub fn init() {
    fill_people_dropdown();
    setup_events();
    info!("bill splitter initialized");
}

/// Run `init` now, or once the document has finished loading
pub fn start() -> Result<(), JsValue> {
    let Some(doc) = get_document() else {
        info!("no document, skipping startup");
        return Ok(());
    };
    init_when_ready(&doc, doc.ready_state())
}

/// Defer `init` to `DOMContentLoaded` while `state` is still loading
pub fn init_when_ready(doc: &Document, state: DocumentReadyState) -> Result<(), JsValue> {
    if state == DocumentReadyState::Loading {
        let cb = Closure::<dyn FnMut()>::once(init);
        doc.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())?;
        cb.forget();
    } else {
        init();
    }
    Ok(())
}
