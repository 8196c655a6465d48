//! Configuration panel: binds the drawer's form controls to `Config`.
//!
//! Every control emits a `ConfigUpdate`; `dispatch` swaps in the new record
//! and re-syncs the controls so state changed from elsewhere (keyboard
//! shortcuts) shows up in the panel as well.

use crate::dom;
use catalog_core::{Config, ConfigUpdate, FoilType, FontFamily, Rgb};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedConfig = Rc<RefCell<Config>>;

pub fn dispatch(document: &web::Document, config: &SharedConfig, update: ConfigUpdate) {
    let next = config.borrow().apply(update);
    sync_controls(document, &next);
    *config.borrow_mut() = next;
}

fn foil_button_id(t: FoilType) -> &'static str {
    match t {
        FoilType::Metallic => "foil-metallic",
        FoilType::Gloss => "foil-gloss",
        FoilType::Matte => "foil-matte",
    }
}

/// Fill the typeface `<select>` from the font catalog.
pub fn populate_fonts(document: &web::Document) {
    let Some(select) = dom::element::<web::HtmlSelectElement>(document, "font-family") else {
        log::warn!("[panel] missing #font-family");
        return;
    };
    select.set_inner_html("");
    for family in FontFamily::ALL {
        let Ok(el) = document.create_element("option") else {
            continue;
        };
        if let Ok(option) = el.dyn_into::<web::HtmlOptionElement>() {
            option.set_value(family.name());
            option.set_text(family.name());
            let _ = select.append_child(&option);
        }
    }
}

/// Reflect `cfg` in every control.
pub fn sync_controls(document: &web::Document, cfg: &Config) {
    dom::set_class(document, "state-open", "active", cfg.is_open);
    dom::set_class(document, "state-closed", "active", !cfg.is_open);
    for t in FoilType::ALL {
        dom::set_class(document, foil_button_id(t), "active", cfg.foil_type == t);
    }

    dom::set_control_value(document, "paper-color", &cfg.paper_color.to_hex());
    dom::set_text(
        document,
        "paper-color-hex",
        &cfg.paper_color.to_hex().to_uppercase(),
    );

    // chrome ignores the foil color
    let metallic = cfg.foil_type == FoilType::Metallic;
    dom::set_visible(document, "foil-color-row", !metallic);
    dom::set_visible(document, "foil-chrome-note", metallic);
    dom::set_control_value(document, "foil-color", &cfg.foil_color.to_hex());

    dom::set_control_value(document, "font-family", cfg.font.family.name());
    dom::set_control_value(document, "font-size", &cfg.font.size.to_string());
    dom::set_control_value(document, "line-height", &cfg.font.line_height.to_string());
    dom::set_control_value(
        document,
        "letter-spacing",
        &cfg.font.letter_spacing.to_string(),
    );
    dom::set_text(
        document,
        "letter-spacing-value",
        &format!("{:.2}em", cfg.font.letter_spacing),
    );
    dom::set_checked(document, "uppercase", cfg.font.uppercase);
    dom::set_checked(document, "show-debug", cfg.show_debug);

    dom::set_control_value(document, "front-text", &cfg.front_text);
    dom::set_control_value(document, "back-text", &cfg.back_text);
}

fn parse_slider(raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok()
}

fn parse_color(id: &str, raw: &str) -> Option<Rgb> {
    match Rgb::from_hex(raw) {
        Ok(c) => Some(c),
        Err(e) => {
            log::warn!("[panel] #{id}: {e}");
            None
        }
    }
}

pub fn wire(document: &web::Document, config: SharedConfig) {
    // open / closed
    for (id, open) in [("state-open", true), ("state-closed", false)] {
        let doc = document.clone();
        let cfg = config.clone();
        dom::add_click_listener(document, id, move || {
            dispatch(&doc, &cfg, ConfigUpdate::SetOpen(open));
        });
    }

    // foil finish
    for t in FoilType::ALL {
        let doc = document.clone();
        let cfg = config.clone();
        dom::add_click_listener(document, foil_button_id(t), move || {
            dispatch(&doc, &cfg, ConfigUpdate::SetFoilType(t));
        });
    }

    // colors
    {
        let doc = document.clone();
        let cfg = config.clone();
        dom::add_value_listener(document, "paper-color", "input", move |v| {
            if let Some(c) = parse_color("paper-color", &v) {
                dispatch(&doc, &cfg, ConfigUpdate::SetPaperColor(c));
            }
        });
    }
    {
        let doc = document.clone();
        let cfg = config.clone();
        dom::add_value_listener(document, "foil-color", "input", move |v| {
            if let Some(c) = parse_color("foil-color", &v) {
                dispatch(&doc, &cfg, ConfigUpdate::SetFoilColor(c));
            }
        });
    }

    // typography
    {
        let doc = document.clone();
        let cfg = config.clone();
        dom::add_value_listener(document, "font-family", "change", move |v| {
            let family = FontFamily::resolve(&v);
            dispatch(&doc, &cfg, ConfigUpdate::SetFontFamily(family));
        });
    }
    let sliders: [(&str, fn(f32) -> ConfigUpdate); 3] = [
        ("font-size", ConfigUpdate::SetFontSize),
        ("line-height", ConfigUpdate::SetLineHeight),
        ("letter-spacing", ConfigUpdate::SetLetterSpacing),
    ];
    for (id, make) in sliders {
        let doc = document.clone();
        let cfg = config.clone();
        dom::add_value_listener(document, id, "input", move |v| match parse_slider(&v) {
            Some(x) => dispatch(&doc, &cfg, make(x)),
            None => log::warn!("[panel] #{id}: not a number: {v:?}"),
        });
    }
    {
        let doc = document.clone();
        let cfg = config.clone();
        dom::add_checked_listener(document, "uppercase", move |on| {
            dispatch(&doc, &cfg, ConfigUpdate::SetUppercase(on));
        });
    }
    {
        let doc = document.clone();
        let cfg = config.clone();
        dom::add_checked_listener(document, "show-debug", move |on| {
            dispatch(&doc, &cfg, ConfigUpdate::SetShowDebug(on));
        });
    }

    // copy
    {
        let doc = document.clone();
        let cfg = config.clone();
        dom::add_value_listener(document, "front-text", "input", move |v| {
            dispatch(&doc, &cfg, ConfigUpdate::SetFrontText(v));
        });
    }
    {
        let doc = document.clone();
        let cfg = config;
        dom::add_value_listener(document, "back-text", "input", move |v| {
            dispatch(&doc, &cfg, ConfigUpdate::SetBackText(v));
        });
    }
}
