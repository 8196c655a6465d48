use crate::overlay;
use crate::panel::{self, SharedConfig};
use catalog_core::ConfigUpdate;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keys typed into form fields belong to the field.
#[inline]
fn typing_in_control(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
        .unwrap_or(false)
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    document: &web::Document,
    config: &SharedConfig,
) {
    let key = ev.key();
    if key == "Escape" {
        overlay::hide(document);
        return;
    }
    if typing_in_control(ev) || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    match key.as_str() {
        "o" | "O" => {
            let open = config.borrow().is_open;
            panel::dispatch(document, config, ConfigUpdate::SetOpen(!open));
            log::info!("[key] {}", if open { "closing" } else { "opening" });
        }
        "d" | "D" => {
            let debug = config.borrow().show_debug;
            panel::dispatch(document, config, ConfigUpdate::SetShowDebug(!debug));
        }
        "c" | "C" => overlay::toggle(document),
        _ => return,
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(document: &web::Document, config: SharedConfig) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &doc, &config);
            }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
