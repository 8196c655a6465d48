use crate::input::{self, DragMode, MouseState};
use catalog_core::OrbitCamera;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub mouse: Rc<RefCell<MouseState>>,
}

fn listen<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Orbit controls: drag to rotate, secondary drag to pan, wheel to dolly.
pub fn wire_pointer_handlers(w: PointerWiring) {
    // pointerdown
    {
        let mouse = w.mouse.clone();
        let canvas = w.canvas.clone();
        listen(&w.canvas, "pointerdown", move |ev: web::PointerEvent| {
            let mode = input::drag_mode_for(&ev);
            if mode == DragMode::None {
                return;
            }
            let _ = canvas.set_pointer_capture(ev.pointer_id());
            let mut ms = mouse.borrow_mut();
            ms.x = ev.client_x() as f32;
            ms.y = ev.client_y() as f32;
            ms.mode = mode;
            ms.pointer_id = ev.pointer_id();
            log::debug!("[pointer] begin {:?}", mode);
            ev.prevent_default();
        });
    }

    // pointermove
    {
        let mouse = w.mouse.clone();
        let camera = w.camera.clone();
        let canvas = w.canvas.clone();
        listen(&w.canvas, "pointermove", move |ev: web::PointerEvent| {
            let mut ms = mouse.borrow_mut();
            if ms.mode == DragMode::None || ev.pointer_id() != ms.pointer_id {
                return;
            }
            let x = ev.client_x() as f32;
            let y = ev.client_y() as f32;
            let (dx, dy) = (x - ms.x, y - ms.y);
            ms.x = x;
            ms.y = y;
            let h = input::viewport_height(&canvas);
            let mut cam = camera.borrow_mut();
            match ms.mode {
                DragMode::Rotate => cam.rotate(dx, dy, h),
                DragMode::Pan => cam.pan(dx, dy, h),
                DragMode::None => {}
            }
        });
    }

    // pointerup / pointercancel
    for event in ["pointerup", "pointercancel"] {
        let mouse = w.mouse.clone();
        let canvas = w.canvas.clone();
        listen(&w.canvas, event, move |ev: web::PointerEvent| {
            let mut ms = mouse.borrow_mut();
            if ms.mode != DragMode::None && ev.pointer_id() == ms.pointer_id {
                let _ = canvas.release_pointer_capture(ev.pointer_id());
                log::debug!("[pointer] end {:?}", ms.mode);
                ms.mode = DragMode::None;
            }
        });
    }

    // wheel
    {
        let camera = w.camera.clone();
        listen(&w.canvas, "wheel", move |ev: web::WheelEvent| {
            camera.borrow_mut().zoom(ev.delta_y() as f32);
            ev.prevent_default();
        });
    }

    // secondary button pans; keep the browser menu away
    listen(&w.canvas, "contextmenu", move |ev: web::MouseEvent| {
        ev.prevent_default();
    });
}
