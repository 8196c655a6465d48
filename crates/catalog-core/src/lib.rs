pub mod appearance;
pub mod belt;
pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod dims;
pub mod error;
pub mod fonts;
pub mod hinge;
pub mod mesh;
pub mod scene;
pub mod spring;
pub mod text;

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use appearance::*;
pub use camera::*;
pub use color::*;
pub use config::*;
pub use dims::*;
pub use error::*;
pub use fonts::*;
pub use hinge::*;
pub use mesh::*;
pub use scene::*;
pub use spring::*;
