use web_sys as web;

/// What a held pointer button does to the camera.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    None,
    Rotate,
    Pan,
}

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    /// Last pointer position in CSS pixels (client coordinates).
    pub x: f32,
    pub y: f32,
    pub mode: DragMode,
    pub pointer_id: i32,
}

/// Primary drags orbit, secondary drags pan; a modifier turns an orbit into a pan.
#[inline]
pub fn drag_mode_for(ev: &web::PointerEvent) -> DragMode {
    match ev.button() {
        0 if ev.shift_key() || ev.ctrl_key() || ev.meta_key() => DragMode::Pan,
        0 => DragMode::Rotate,
        2 => DragMode::Pan,
        _ => DragMode::None,
    }
}

/// Viewport height in CSS pixels, which the orbit math is expressed in.
#[inline]
pub fn viewport_height(canvas: &web::HtmlCanvasElement) -> f32 {
    (canvas.client_height() as f32).max(1.0)
}

#[inline]
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}
