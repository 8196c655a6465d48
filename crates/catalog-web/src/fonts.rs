use catalog_core::FontFamily;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Bumped every time a face finishes loading, so cached text gets redrawn
/// with the real glyphs instead of the fallback face.
pub type FontEpoch = Rc<Cell<u32>>;

async fn load_face(document: web::Document, family: FontFamily) -> anyhow::Result<()> {
    let source = format!("url({})", family.url());
    let face = web::FontFace::new_with_str(family.name(), &source)
        .map_err(|e| anyhow::anyhow!("FontFace {}: {:?}", family, e))?;
    let promise = face
        .load()
        .map_err(|e| anyhow::anyhow!("load {}: {:?}", family, e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("load {}: {:?}", family, e))?;
    document
        .fonts()
        .add(&face)
        .map_err(|e| anyhow::anyhow!("add {}: {:?}", family, e))?;
    Ok(())
}

/// Start loading the whole catalog in the background.
pub fn load_all(document: &web::Document, epoch: FontEpoch) {
    for family in FontFamily::ALL {
        let document = document.clone();
        let epoch = epoch.clone();
        spawn_local(async move {
            match load_face(document, family).await {
                Ok(()) => {
                    epoch.set(epoch.get().wrapping_add(1));
                    log::info!("[font] loaded {}", family);
                }
                Err(e) => log::warn!("[font] {e}; text falls back to the browser default"),
            }
        });
    }
}
