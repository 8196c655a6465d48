use crate::fonts::FontEpoch;
use crate::input;
use crate::panel::SharedConfig;
use crate::render;
use crate::text::{self, CanvasText};
use catalog_core::{OpenAnimation, OrbitCamera, SceneFrame, SceneModel};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub config: SharedConfig,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub font_epoch: FontEpoch,
    pub canvas: web::HtmlCanvasElement,

    pub model: SceneModel,
    pub animation: OpenAnimation,
    pub text: CanvasText,
    pub gpu: render::GpuState<'a>,

    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let scene = {
            let cfg = self.config.borrow();
            self.animation.sync(cfg.is_open);
            let o = self.animation.step(dt_sec);
            self.model.build(&cfg, o)
        };
        self.refresh_text(&scene);

        let camera = {
            let mut orbit = self.camera.borrow_mut();
            orbit.update();
            orbit.camera(input::canvas_aspect(&self.canvas))
        };

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        match self.gpu.render(&scene, &camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    /// Re-rasterize a side only when its copy, typography or loaded fonts changed.
    fn refresh_text(&mut self, scene: &SceneFrame) {
        let epoch = self.font_epoch.get();
        for draw in &scene.texts {
            let key = text::text_key(draw, epoch);
            if self.gpu.text_key(draw.side) == Some(key) {
                continue;
            }
            match self.text.rasterize(draw, key) {
                Ok(Some(bitmap)) => self.gpu.upload_text(draw.side, &bitmap),
                Ok(None) => self.gpu.clear_text(draw.side, key),
                Err(e) => {
                    log::error!("[text] {:?}: {e}", draw.side);
                    self.gpu.clear_text(draw.side, key);
                }
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    model: &SceneModel,
) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas, model.dims()).await
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
