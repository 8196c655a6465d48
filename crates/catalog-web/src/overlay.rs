//! Slide-in configuration drawer.

use crate::constants::DRAWER_ID;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(DRAWER_ID) {
        let _ = el.class_list().add_1("open");
        let _ = el.set_attribute("aria-hidden", "false");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(DRAWER_ID) {
        let _ = el.class_list().remove_1("open");
        let _ = el.set_attribute("aria-hidden", "true");
    }
}

#[inline]
pub fn is_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(DRAWER_ID)
        .map(|el| el.class_list().contains("open"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_open(document) {
        hide(document);
    } else {
        show(document);
    }
}

pub fn wire(document: &web::Document) {
    let doc = document.clone();
    crate::dom::add_click_listener(document, "configure-open", move || show(&doc));
    let doc = document.clone();
    crate::dom::add_click_listener(document, "configure-close", move || hide(&doc));
}
