#![cfg(target_arch = "wasm32")]
mod constants;
mod dom;
mod events;
mod fonts;
mod frame;
mod input;
mod overlay;
mod panel;
mod render;
mod text;

use catalog_core::{Config, OpenAnimation, OrbitCamera, SceneModel};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("catalog-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::wire_canvas_resize(&canvas);

    // Panel state
    let config: panel::SharedConfig = Rc::new(RefCell::new(Config::default()));
    panel::populate_fonts(&document);
    panel::sync_controls(&document, &config.borrow());
    panel::wire(&document, config.clone());
    overlay::wire(&document);
    events::wire_global_keydown(&document, config.clone());

    let font_epoch: fonts::FontEpoch = Rc::new(Cell::new(0));
    fonts::load_all(&document, font_epoch.clone());

    // Camera controls
    let camera = Rc::new(RefCell::new(OrbitCamera::default()));
    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        camera: camera.clone(),
        mouse: Rc::new(RefCell::new(input::MouseState::default())),
    });

    let model = SceneModel::default();
    let gpu = frame::init_gpu(&canvas, &model).await?;
    let text = text::CanvasText::new(&document)?;
    let animation = OpenAnimation::new(config.borrow().is_open);
    log::info!("[init] renderer ready");

    let ctx = frame::FrameContext {
        config,
        camera,
        font_epoch,
        canvas,
        model,
        animation,
        text,
        gpu,
        last_instant: Instant::now(),
    };
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}
