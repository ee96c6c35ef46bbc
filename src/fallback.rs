use crate::constants::{FALLBACK_ID, FALLBACK_STYLE, FALLBACK_TEXT};
use crate::dom;
use web_sys as web;

/// Replace the globe with the static placeholder disc.
///
/// Reuses an existing `#globe-fallback` element when the page provides one,
/// otherwise inserts it right after the canvas.
pub fn show(canvas: &web::HtmlCanvasElement) {
    _ = canvas.set_attribute("style", "display:none");
    let Some(document) = dom::window_document() else {
        return;
    };
    show_in(&document, Some(canvas));
}

/// Show the placeholder when there is no canvas to replace.
pub fn show_without_canvas() {
    if let Some(document) = dom::window_document() {
        show_in(&document, None);
    }
}

fn show_in(document: &web::Document, canvas: Option<&web::HtmlCanvasElement>) {
    let el = match document.get_element_by_id(FALLBACK_ID) {
        Some(el) => el,
        None => {
            let Ok(el) = document.create_element("div") else {
                return;
            };
            el.set_id(FALLBACK_ID);
            let inserted = match canvas {
                Some(c) => c.after_with_node_1(&el).is_ok(),
                None => document
                    .body()
                    .map(|b| b.append_child(&el).is_ok())
                    .unwrap_or(false),
            };
            if !inserted {
                log::warn!("[fallback] could not insert placeholder");
                return;
            }
            el
        }
    };
    el.set_inner_html(FALLBACK_TEXT);
    _ = el.set_attribute("style", FALLBACK_STYLE);
}
