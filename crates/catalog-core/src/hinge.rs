//! Hinged panel model.
//!
//! The catalog is a tree of rigid paper panels. Every panel except the root
//! hangs off its parent by a hinge: the hinge pivot is expressed in the
//! parent's body frame, the panel rotates about one local axis through that
//! pivot, and the panel's own body is then offset from the pivot by half its
//! extent so its geometry stays centred.
//!
//! All hinge angles derive from the same fold scalar `o` (0 = closed,
//! 1 = open): `angle = sweep · (1 − o)`. World transforms are composed top-down,
//! so moving the spine carries the front panel and the belt with it.

use crate::dims::Dims;
use crate::mesh::Aabb;
use glam::{Mat4, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelId {
    Back,
    TopFlap,
    BottomFlap,
    SideFlap,
    Spine,
    Front,
    BeltTab,
    BeltCap,
}

impl PanelId {
    pub const COUNT: usize = 8;
    pub const ALL: [PanelId; PanelId::COUNT] = [
        PanelId::Back,
        PanelId::TopFlap,
        PanelId::BottomFlap,
        PanelId::SideFlap,
        PanelId::Spine,
        PanelId::Front,
        PanelId::BeltTab,
        PanelId::BeltCap,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            PanelId::Back => "back",
            PanelId::TopFlap => "top flap",
            PanelId::BottomFlap => "bottom flap",
            PanelId::SideFlap => "side flap",
            PanelId::Spine => "spine",
            PanelId::Front => "front",
            PanelId::BeltTab => "belt tab",
            PanelId::BeltCap => "belt cap",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    pub fn rotation(self, radians: f32) -> Mat4 {
        match self {
            Axis::X => Mat4::from_rotation_x(radians),
            Axis::Y => Mat4::from_rotation_y(radians),
        }
    }
}

/// Rotational joint. `sweep_deg` is the angle at `o = 0`; the joint is
/// straight (0°) at `o = 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hinge {
    pub axis: Axis,
    pub sweep_deg: f32,
}

impl Hinge {
    pub const fn new(axis: Axis, sweep_deg: f32) -> Self {
        Self { axis, sweep_deg }
    }

    #[inline]
    pub fn angle_deg(&self, o: f32) -> f32 {
        self.sweep_deg * (1.0 - o)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelShape {
    /// Box of width × height × thickness centred on the body origin.
    Slab {
        width: f32,
        height: f32,
        thickness: f32,
    },
    /// The extruded belt cap; geometry lives in `belt::belt_mesh`.
    BeltCap,
}

impl PanelShape {
    /// Body-space bounds. The belt cap's bounds come from its mesh.
    pub fn local_bounds(&self, belt_bounds: Aabb) -> Aabb {
        match *self {
            PanelShape::Slab {
                width,
                height,
                thickness,
            } => {
                let half = Vec3::new(width, height, thickness) * 0.5;
                Aabb {
                    min: -half,
                    max: half,
                }
            }
            PanelShape::BeltCap => belt_bounds,
        }
    }

    /// Scale applied to the unit box (identity for the belt cap).
    pub fn scale(&self) -> Vec3 {
        match *self {
            PanelShape::Slab {
                width,
                height,
                thickness,
            } => Vec3::new(width, height, thickness),
            PanelShape::BeltCap => Vec3::ONE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelNode {
    pub id: PanelId,
    pub parent: Option<PanelId>,
    /// Hinge position in the parent's body frame.
    pub pivot: Vec3,
    pub hinge: Option<Hinge>,
    /// Offset from the pivot to the centre of this panel's body.
    pub body_offset: Vec3,
    pub shape: PanelShape,
}

impl PanelNode {
    pub fn angle_deg(&self, o: f32) -> f32 {
        self.hinge.map_or(0.0, |h| h.angle_deg(o))
    }

    /// Body transform relative to the parent's body frame.
    pub fn local(&self, o: f32) -> Mat4 {
        let rotation = match self.hinge {
            Some(h) => h.axis.rotation(h.angle_deg(o).to_radians()),
            None => Mat4::IDENTITY,
        };
        Mat4::from_translation(self.pivot) * rotation * Mat4::from_translation(self.body_offset)
    }
}

/// Panels ordered so that every parent precedes its children.
#[derive(Clone, Debug)]
pub struct PanelTree {
    nodes: SmallVec<[PanelNode; PanelId::COUNT]>,
}

impl PanelTree {
    /// The folded catalog: back panel at the root; top, bottom and side flaps
    /// on its edges; spine on its left edge carrying the front panel, which in
    /// turn carries the belt tab and the rounded belt cap.
    pub fn catalog(d: &Dims) -> Self {
        let t = d.paper_thickness;
        let slab = |width: f32, height: f32| PanelShape::Slab {
            width,
            height,
            thickness: t,
        };
        let nodes = [
            PanelNode {
                id: PanelId::Back,
                parent: None,
                pivot: Vec3::ZERO,
                hinge: None,
                body_offset: Vec3::ZERO,
                shape: slab(d.back_w, d.back_h),
            },
            PanelNode {
                id: PanelId::TopFlap,
                parent: Some(PanelId::Back),
                pivot: Vec3::new(0.0, d.back_h / 2.0, 0.0),
                hinge: Some(Hinge::new(Axis::X, -179.0)),
                body_offset: Vec3::new(0.0, d.flap_top_h / 2.0, t / 2.0),
                shape: slab(d.back_w, d.flap_top_h),
            },
            PanelNode {
                id: PanelId::BottomFlap,
                parent: Some(PanelId::Back),
                pivot: Vec3::new(0.0, -d.back_h / 2.0, 0.0),
                hinge: Some(Hinge::new(Axis::X, 179.0)),
                body_offset: Vec3::new(0.0, -d.flap_bottom_h / 2.0, t / 2.0),
                shape: slab(d.back_w, d.flap_bottom_h),
            },
            PanelNode {
                id: PanelId::SideFlap,
                parent: Some(PanelId::Back),
                pivot: Vec3::new(d.back_w / 2.0, 0.0, 0.0),
                hinge: Some(Hinge::new(Axis::Y, -179.0)),
                body_offset: Vec3::new(d.flap_side_w / 2.0, 0.0, t / 2.0),
                shape: slab(d.flap_side_w, d.back_h),
            },
            PanelNode {
                id: PanelId::Spine,
                parent: Some(PanelId::Back),
                pivot: Vec3::new(-d.back_w / 2.0, 0.0, 0.0),
                hinge: Some(Hinge::new(Axis::Y, 90.0)),
                body_offset: Vec3::new(-d.spine_w / 2.0, 0.0, 0.0),
                shape: slab(d.spine_w, d.back_h),
            },
            PanelNode {
                id: PanelId::Front,
                parent: Some(PanelId::Spine),
                pivot: Vec3::new(-d.spine_w / 2.0, 0.0, 0.0),
                hinge: Some(Hinge::new(Axis::Y, 90.0)),
                body_offset: Vec3::new(-d.front_w / 2.0, 0.0, 0.0),
                shape: slab(d.front_w, d.front_h),
            },
            PanelNode {
                id: PanelId::BeltTab,
                parent: Some(PanelId::Front),
                pivot: Vec3::new(-d.front_w / 2.0, 0.0, 0.0),
                hinge: Some(Hinge::new(Axis::Y, -90.0)),
                body_offset: Vec3::new(-d.belt_tab_w / 2.0, 0.0, 0.0),
                shape: slab(d.belt_tab_w, d.belt_h),
            },
            PanelNode {
                id: PanelId::BeltCap,
                parent: Some(PanelId::BeltTab),
                pivot: Vec3::new(-d.belt_tab_w / 2.0, 0.0, 0.0),
                hinge: Some(Hinge::new(Axis::Y, -90.0)),
                body_offset: Vec3::ZERO,
                shape: PanelShape::BeltCap,
            },
        ];
        Self {
            nodes: nodes.into_iter().collect(),
        }
    }

    pub fn nodes(&self) -> &[PanelNode] {
        &self.nodes
    }

    pub fn node(&self, id: PanelId) -> Option<&PanelNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Hinge angles and model-space body transforms for fold scalar `o`.
    /// `o` is clamped to \[0, 1\].
    pub fn pose(&self, o: f32) -> Pose {
        let o = o.clamp(0.0, 1.0);
        let mut pose = Pose {
            o,
            angles: [0.0; PanelId::COUNT],
            world: [Mat4::IDENTITY; PanelId::COUNT],
        };
        for node in &self.nodes {
            let parent = node
                .parent
                .map_or(Mat4::IDENTITY, |p| pose.world[p.index()]);
            pose.angles[node.id.index()] = node.angle_deg(o);
            pose.world[node.id.index()] = parent * node.local(o);
        }
        pose
    }
}

/// Evaluated tree for one value of the fold scalar.
#[derive(Clone, Debug)]
pub struct Pose {
    o: f32,
    angles: [f32; PanelId::COUNT],
    world: [Mat4; PanelId::COUNT],
}

impl Pose {
    pub fn open_factor(&self) -> f32 {
        self.o
    }

    pub fn angle_deg(&self, id: PanelId) -> f32 {
        self.angles[id.index()]
    }

    /// Body transform in model space (before the scene's root tilt).
    pub fn world(&self, id: PanelId) -> Mat4 {
        self.world[id.index()]
    }

    /// Model-space position of the panel's body centre.
    pub fn body_center(&self, id: PanelId) -> Vec3 {
        self.world[id.index()].transform_point3(Vec3::ZERO)
    }
}
