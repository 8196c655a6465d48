//! Scene composition.
//!
//! A frame is a pure function of the configuration and the fold scalar: the
//! renderer rebuilds it wholesale every tick instead of patching a retained
//! graph.

use crate::appearance::FoilAppearance;
use crate::belt::belt_mesh;
use crate::color::{const_color, Rgb};
use crate::config::{Config, FontConfig};
use crate::constants::{
    EDGE_FAINT_COLOR, EDGE_FAINT_OPACITY, EDGE_FAINT_THRESHOLD_DEG, EDGE_STRONG_COLOR,
    EDGE_STRONG_THRESHOLD_DEG, PAPER_METALNESS, PAPER_ROUGHNESS, ROOT_TILT_DEG, SHADOW_OPACITY,
    SHADOW_SCALE, SHADOW_Y,
};
use crate::dims::Dims;
use crate::hinge::{PanelId, PanelShape, PanelTree, Pose};
use crate::mesh::{Aabb, Mesh};
use crate::text::{display_text, TextPlacement};
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub roughness: f32,
    pub metalness: f32,
    pub opacity: f32,
}

impl Material {
    pub fn paper(color: Rgb) -> Self {
        Self {
            color,
            roughness: PAPER_ROUGHNESS,
            metalness: PAPER_METALNESS,
            opacity: 1.0,
        }
    }

    pub fn foil(foil: FoilAppearance) -> Self {
        Self {
            color: foil.base_color,
            roughness: foil.roughness,
            metalness: foil.reflectivity,
            opacity: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PanelDraw {
    pub id: PanelId,
    pub shape: PanelShape,
    /// Body frame in world space.
    pub world: Mat4,
    /// `world` with the slab scale applied; maps the unit box (or the belt
    /// cap mesh) into world space.
    pub model: Mat4,
    pub material: Material,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextSide {
    Front,
    Back,
}

#[derive(Clone, Debug)]
pub struct TextDraw {
    pub side: TextSide,
    pub panel: PanelId,
    /// Copy after case conversion.
    pub text: String,
    pub font: FontConfig,
    pub placement: TextPlacement,
    pub panel_world: Mat4,
    pub material: Material,
}

impl TextDraw {
    /// World transform of a `width` × `height` block anchored at the padded
    /// top-left corner of the panel's outward face.
    pub fn block_world(&self, width: f32, height: f32) -> Mat4 {
        self.panel_world * self.placement.block_transform(width, height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStyle {
    pub color: Rgb,
    pub opacity: f32,
    pub threshold_deg: f32,
}

impl EdgeStyle {
    /// Strong outlines in debug mode, a faint hairline otherwise.
    pub fn for_debug(show_debug: bool) -> Self {
        if show_debug {
            Self {
                color: const_color(EDGE_STRONG_COLOR),
                opacity: 1.0,
                threshold_deg: EDGE_STRONG_THRESHOLD_DEG,
            }
        } else {
            Self {
                color: const_color(EDGE_FAINT_COLOR),
                opacity: EDGE_FAINT_OPACITY,
                threshold_deg: EDGE_FAINT_THRESHOLD_DEG,
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowDraw {
    /// Maps the unit ground quad onto the shadow patch.
    pub model: Mat4,
    pub opacity: f32,
}

#[derive(Clone, Debug)]
pub struct SceneFrame {
    pub open_factor: f32,
    pub pose: Pose,
    pub panels: Vec<PanelDraw>,
    pub texts: [TextDraw; 2],
    pub edges: EdgeStyle,
    pub foil: FoilAppearance,
    pub shadow: ShadowDraw,
}

impl SceneFrame {
    pub fn panel(&self, id: PanelId) -> Option<&PanelDraw> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub fn text(&self, side: TextSide) -> &TextDraw {
        match side {
            TextSide::Front => &self.texts[0],
            TextSide::Back => &self.texts[1],
        }
    }
}

/// Static part of the scene: panel tree, belt cap geometry and the centring
/// offset. Built once at startup.
#[derive(Clone, Debug)]
pub struct SceneModel {
    dims: Dims,
    tree: PanelTree,
    belt: Mesh,
    belt_bounds: Aabb,
    center_offset: Vec3,
}

impl SceneModel {
    pub fn new(dims: Dims) -> Self {
        let tree = PanelTree::catalog(&dims);
        let belt = belt_mesh(&dims);
        let belt_bounds = belt.bounds();
        let mut model = Self {
            dims,
            tree,
            belt,
            belt_bounds,
            center_offset: Vec3::ZERO,
        };
        // centred once on the open pose the app starts in
        let open = model.bounds(1.0);
        model.center_offset = -open.center();
        log::debug!(
            "[scene] open bounds size=({:.1},{:.1},{:.1}) center offset=({:.1},{:.1},{:.1})",
            open.size().x,
            open.size().y,
            open.size().z,
            model.center_offset.x,
            model.center_offset.y,
            model.center_offset.z
        );
        model
    }

    pub fn dims(&self) -> &Dims {
        &self.dims
    }

    pub fn tree(&self) -> &PanelTree {
        &self.tree
    }

    pub fn belt_mesh(&self) -> &Mesh {
        &self.belt
    }

    pub fn center_offset(&self) -> Vec3 {
        self.center_offset
    }

    /// Model root: tilt back about X, then recentre.
    pub fn root_transform(&self) -> Mat4 {
        Mat4::from_translation(self.center_offset)
            * Mat4::from_rotation_x(ROOT_TILT_DEG.to_radians())
    }

    /// World bounds of all panels at fold scalar `o`.
    pub fn bounds(&self, o: f32) -> Aabb {
        let root = self.root_transform();
        let pose = self.tree.pose(o);
        self.tree.nodes().iter().fold(Aabb::EMPTY, |acc, node| {
            let local = node.shape.local_bounds(self.belt_bounds);
            acc.union(local.transformed(&(root * pose.world(node.id))))
        })
    }

    pub fn build(&self, config: &Config, o: f32) -> SceneFrame {
        let root = self.root_transform();
        let pose = self.tree.pose(o);
        let paper = Material::paper(config.paper_color);
        let foil = FoilAppearance::resolve(config.foil_type, config.foil_color);

        let panels = self
            .tree
            .nodes()
            .iter()
            .map(|node| {
                let world = root * pose.world(node.id);
                PanelDraw {
                    id: node.id,
                    shape: node.shape,
                    world,
                    model: world * Mat4::from_scale(node.shape.scale()),
                    material: paper,
                }
            })
            .collect();

        let text = |side: TextSide, panel: PanelId, copy: &str| {
            let (w, h) = match side {
                TextSide::Front => (self.dims.front_w, self.dims.front_h),
                TextSide::Back => (self.dims.back_w, self.dims.back_h),
            };
            TextDraw {
                side,
                panel,
                text: display_text(copy, config.font.uppercase).into_owned(),
                font: config.font.clone(),
                placement: TextPlacement::for_panel(w, h, self.dims.paper_thickness),
                panel_world: root * pose.world(panel),
                material: Material::foil(foil),
            }
        };
        let texts = [
            text(TextSide::Front, PanelId::Front, &config.front_text),
            text(TextSide::Back, PanelId::Back, &config.back_text),
        ];

        SceneFrame {
            open_factor: pose.open_factor(),
            pose,
            panels,
            texts,
            edges: EdgeStyle::for_debug(config.show_debug),
            foil,
            shadow: ShadowDraw {
                model: Mat4::from_translation(Vec3::new(0.0, SHADOW_Y, 0.0))
                    * Mat4::from_scale(Vec3::new(SHADOW_SCALE, 1.0, SHADOW_SCALE)),
                opacity: SHADOW_OPACITY,
            },
        }
    }
}

impl Default for SceneModel {
    fn default() -> Self {
        Self::new(Dims::default())
    }
}
