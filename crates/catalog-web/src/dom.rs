use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element<T: JsCast>(document: &web::Document, element_id: &str) -> Option<T> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{element_id}");
    }
}

/// Calls `handler` with the control's current value whenever `event` fires.
/// Works for `<input>`, `<select>` and `<textarea>`.
pub fn add_value_listener(
    document: &web::Document,
    element_id: &str,
    event: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("[dom] missing #{element_id}");
        return;
    };
    let source = el.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(v) = control_value(&source) {
            handler(v);
        }
    }) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn add_checked_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(bool) + 'static,
) {
    let Some(input) = element::<web::HtmlInputElement>(document, element_id) else {
        log::warn!("[dom] missing checkbox #{element_id}");
        return;
    };
    let source = input.clone();
    let closure = Closure::wrap(Box::new(move || handler(source.checked())) as Box<dyn FnMut()>);
    let _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn control_value(el: &web::Element) -> Option<String> {
    if let Some(i) = el.dyn_ref::<web::HtmlInputElement>() {
        Some(i.value())
    } else if let Some(s) = el.dyn_ref::<web::HtmlSelectElement>() {
        Some(s.value())
    } else {
        el.dyn_ref::<web::HtmlTextAreaElement>().map(|t| t.value())
    }
}

/// Writes a control's value only when it differs, so the caret of a focused
/// field is left alone.
pub fn set_control_value(document: &web::Document, element_id: &str, value: &str) {
    let Some(el) = document.get_element_by_id(element_id) else {
        return;
    };
    if control_value(&el).as_deref() == Some(value) {
        return;
    }
    if let Some(i) = el.dyn_ref::<web::HtmlInputElement>() {
        i.set_value(value);
    } else if let Some(s) = el.dyn_ref::<web::HtmlSelectElement>() {
        s.set_value(value);
    } else if let Some(t) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        t.set_value(value);
    }
}

pub fn set_checked(document: &web::Document, element_id: &str, checked: bool) {
    if let Some(i) = element::<web::HtmlInputElement>(document, element_id) {
        if i.checked() != checked {
            i.set_checked(checked);
        }
    }
}

pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_visible(document: &web::Document, element_id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let _ = el.set_attribute("style", if visible { "" } else { "display:none" });
    }
}

#[inline]
pub fn set_class(document: &web::Document, element_id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let _ = el.class_list().toggle_with_force(class, on);
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Keep the canvas backing store at CSS size × devicePixelRatio.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
