// Front-end tuning values; scene constants live in catalog-core.

pub const CANVAS_ID: &str = "catalog-canvas";
pub const DRAWER_ID: &str = "config-drawer";

// Text rasterization
pub const TEXT_PX_PER_UNIT: f32 = 8.0; // canvas pixels per scene unit (mm)
pub const TEXT_MAX_TEXTURE_PX: u32 = 4096;
pub const TEXT_FILL: &str = "#ffffff"; // only coverage is sampled; tint comes from the foil

// Renderer
pub const DRAW_SLOTS: usize = 32; // per-draw uniform slots per frame
pub const EDGE_INFLATE: f32 = 0.02; // absolute growth of slab outlines to keep them above the faces
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
