use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlInputElement, HtmlSelectElement};

/// Get document helper
pub fn get_document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Look up an `<input>` by id; `None` if missing or not an input
pub fn input_by_id(doc: &Document, id: &str) -> Option<HtmlInputElement> {
    doc.get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

/// Look up a `<select>` by id; `None` if missing or not a select
pub fn select_by_id(doc: &Document, id: &str) -> Option<HtmlSelectElement> {
    doc.get_element_by_id(id)?.dyn_into::<HtmlSelectElement>().ok()
}
