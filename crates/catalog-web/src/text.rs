//! Glyph rasterization through an offscreen canvas 2D context.
//!
//! Line breaking comes from `catalog_core::text::layout`; this module only
//! supplies the browser's glyph metrics and paints the laid-out lines into
//! an RGBA bitmap whose alpha channel is the glyph coverage.

use crate::constants::{TEXT_FILL, TEXT_MAX_TEXTURE_PX, TEXT_PX_PER_UNIT};
use catalog_core::text::{layout, TextLayout, TextMeasure};
use catalog_core::{FontFamily, TextDraw};
use fnv::FnvHasher;
use std::hash::{Hash, Hasher};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct TextBitmap {
    pub key: u64,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    /// Block size in scene units.
    pub block_w: f32,
    pub block_h: f32,
}

/// Identity of a rendered block: changes whenever anything that affects the
/// bitmap changes.
pub fn text_key(draw: &TextDraw, font_epoch: u32) -> u64 {
    let mut h = FnvHasher::default();
    draw.text.hash(&mut h);
    draw.font.family.hash(&mut h);
    draw.font.size.to_bits().hash(&mut h);
    draw.font.letter_spacing.to_bits().hash(&mut h);
    draw.font.line_height.to_bits().hash(&mut h);
    draw.placement.max_width.to_bits().hash(&mut h);
    font_epoch.hash(&mut h);
    h.finish()
}

fn css_font(family: FontFamily, size_units: f32) -> String {
    format!(
        "{}px \"{}\", sans-serif",
        size_units * TEXT_PX_PER_UNIT,
        family.name()
    )
}

pub struct CanvasText {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

/// Browser glyph advances, converted back to scene units.
struct CanvasMeasure<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
    family: FontFamily,
}

impl TextMeasure for CanvasMeasure<'_> {
    fn advance(&self, text: &str, font_size: f32) -> f32 {
        self.ctx.set_font(&css_font(self.family, font_size));
        self.ctx
            .measure_text(text)
            .map(|m| m.width() as f32 / TEXT_PX_PER_UNIT)
            .unwrap_or(0.0)
    }
}

impl CanvasText {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("not a canvas: {:?}", e))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("2d context: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("2d context: {:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    pub fn layout(&self, draw: &TextDraw) -> TextLayout {
        let measure = CanvasMeasure {
            ctx: &self.ctx,
            family: draw.font.family,
        };
        layout(&draw.text, &draw.font, draw.placement.max_width, &measure)
    }

    /// Paint a text block. Returns `None` for copy with no visible lines.
    pub fn rasterize(&self, draw: &TextDraw, key: u64) -> anyhow::Result<Option<TextBitmap>> {
        let laid = self.layout(draw);
        if laid.lines.iter().all(|l| l.text.trim().is_empty()) {
            return Ok(None);
        }
        let to_px = |units: f32| {
            ((units * TEXT_PX_PER_UNIT).ceil() as u32).clamp(1, TEXT_MAX_TEXTURE_PX)
        };
        let width = to_px(laid.width);
        let height = to_px(laid.height);
        // scene size actually covered, after clamping
        let block_w = width as f32 / TEXT_PX_PER_UNIT;
        let block_h = height as f32 / TEXT_PX_PER_UNIT;

        self.canvas.set_width(width);
        self.canvas.set_height(height);
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        ctx.set_font(&css_font(draw.font.family, laid.font_size));
        ctx.set_text_baseline("top");
        ctx.set_fill_style_str(TEXT_FILL);

        let half_leading = (laid.line_advance - laid.font_size) * 0.5;
        let spacing_px = (laid.letter_spacing * TEXT_PX_PER_UNIT) as f64;
        for line in &laid.lines {
            let y = ((line.top + half_leading) * TEXT_PX_PER_UNIT) as f64;
            if spacing_px == 0.0 {
                ctx.fill_text(&line.text, 0.0, y)
                    .map_err(|e| anyhow::anyhow!("fill_text: {:?}", e))?;
                continue;
            }
            let mut x = 0.0f64;
            let mut buf = [0u8; 4];
            for ch in line.text.chars() {
                let glyph: &str = ch.encode_utf8(&mut buf);
                ctx.fill_text(glyph, x, y)
                    .map_err(|e| anyhow::anyhow!("fill_text: {:?}", e))?;
                let advance = ctx.measure_text(glyph).map(|m| m.width()).unwrap_or(0.0);
                x += advance + spacing_px;
            }
        }

        let image = ctx
            .get_image_data(0.0, 0.0, width as f64, height as f64)
            .map_err(|e| anyhow::anyhow!("get_image_data: {:?}", e))?;
        log::debug!(
            "[text] rasterized {} lines into {}x{} px",
            laid.lines.len(),
            width,
            height
        );
        Ok(Some(TextBitmap {
            key,
            width,
            height,
            pixels: image.data().0,
            block_w,
            block_h,
        }))
    }
}
