use crate::dom;
use web_sys as web;

const OVERLAY_ID: &str = "start-overlay";
const PROGRESS_ID: &str = "load-progress";
const START_BUTTON_ID: &str = "start-button";

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.set_attribute("style", "display:none");
    }
}

/// Reflect asset load progress; the start button stays disabled until every clip settles.
pub fn update_progress(document: &web::Document, settled: usize, total: usize, failed: usize) {
    let text = if settled < total {
        format!("Loading sounds... {}/{}", settled, total)
    } else if failed > 0 {
        format!("Ready ({} of {} sounds unavailable)", failed, total)
    } else {
        "Ready".to_string()
    };
    dom::set_text(document, PROGRESS_ID, &text);
    dom::set_disabled(document, START_BUTTON_ID, settled < total);
}

pub fn start_button_id() -> &'static str {
    START_BUTTON_ID
}
