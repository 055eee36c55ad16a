use crate::constants::{READOUT_ALPHA_ID, READOUT_BETA_ID, READOUT_GAMMA_ID, ROTATE_HINT_ID};
use level_core::AngleReadout;
use web_sys as web;

#[inline]
pub fn show_rotate_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(ROTATE_HINT_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_rotate_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(ROTATE_HINT_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_rotate_hint_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(ROTATE_HINT_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    true
}

/// Ask for landscape while live sensor data is shown on a portrait screen.
pub fn sync_rotate_hint(document: &web::Document, want_hint: bool) {
    let hidden = is_rotate_hint_hidden(document);
    if want_hint && hidden {
        show_rotate_hint(document);
    } else if !want_hint && !hidden {
        hide_rotate_hint(document);
    }
}

/// Write the current angles into the readout lines, if the page has them.
pub fn update_readout(document: &web::Document, readout: &AngleReadout) {
    for (id, text) in [
        (READOUT_ALPHA_ID, &readout.z),
        (READOUT_BETA_ID, &readout.x),
        (READOUT_GAMMA_ID, &readout.y),
    ] {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }
}
