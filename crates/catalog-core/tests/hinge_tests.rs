// Host-side tests for the hinged panel model.

use catalog_core::{Axis, Dims, Hinge, PanelId, PanelShape, PanelTree, DIMS};
use glam::Vec3;

const EPS: f32 = 1e-3;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

fn approx_v(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPS
}

fn tree() -> PanelTree {
    PanelTree::catalog(&DIMS)
}

#[test]
fn flap_angles_follow_the_fold_scalar() {
    let t = tree();
    for i in 0..=20 {
        let o = i as f32 / 20.0;
        let pose = t.pose(o);
        assert!(approx(pose.angle_deg(PanelId::TopFlap), -179.0 * (1.0 - o)));
        assert!(approx(pose.angle_deg(PanelId::BottomFlap), 179.0 * (1.0 - o)));
        assert!(approx(pose.angle_deg(PanelId::SideFlap), -179.0 * (1.0 - o)));
        assert!(approx(
            pose.angle_deg(PanelId::TopFlap),
            -pose.angle_deg(PanelId::BottomFlap)
        ));
    }
}

#[test]
fn closed_pose_angles() {
    let pose = tree().pose(0.0);
    assert!(approx(pose.angle_deg(PanelId::TopFlap), -179.0));
    assert!(approx(pose.angle_deg(PanelId::BottomFlap), 179.0));
    assert!(approx(pose.angle_deg(PanelId::SideFlap), -179.0));
    assert!(approx(pose.angle_deg(PanelId::Spine), 90.0));
    assert!(approx(pose.angle_deg(PanelId::Front), 90.0));
    assert!(approx(pose.angle_deg(PanelId::BeltTab), -90.0));
    assert!(approx(pose.angle_deg(PanelId::BeltCap), -90.0));
    assert_eq!(pose.angle_deg(PanelId::Back), 0.0);
}

#[test]
fn open_pose_is_flat() {
    let pose = tree().pose(1.0);
    for id in PanelId::ALL {
        assert_eq!(pose.angle_deg(id), 0.0, "{} not flat", id.name());
    }
}

#[test]
fn open_pose_lays_panels_out_in_one_plane() {
    let d = DIMS;
    let t = d.paper_thickness;
    let pose = tree().pose(1.0);
    assert!(approx_v(pose.body_center(PanelId::Back), Vec3::ZERO));
    assert!(approx_v(
        pose.body_center(PanelId::TopFlap),
        Vec3::new(0.0, d.back_h / 2.0 + d.flap_top_h / 2.0, t / 2.0)
    ));
    assert!(approx_v(
        pose.body_center(PanelId::BottomFlap),
        Vec3::new(0.0, -d.back_h / 2.0 - d.flap_bottom_h / 2.0, t / 2.0)
    ));
    assert!(approx_v(
        pose.body_center(PanelId::SideFlap),
        Vec3::new(d.back_w / 2.0 + d.flap_side_w / 2.0, 0.0, t / 2.0)
    ));
    assert!(approx_v(
        pose.body_center(PanelId::Spine),
        Vec3::new(-d.back_w / 2.0 - d.spine_w / 2.0, 0.0, 0.0)
    ));
    let front_x = -d.back_w / 2.0 - d.spine_w - d.front_w / 2.0;
    assert!(approx_v(
        pose.body_center(PanelId::Front),
        Vec3::new(front_x, 0.0, 0.0)
    ));
    let tab_x = front_x - d.front_w / 2.0 - d.belt_tab_w / 2.0;
    assert!(approx_v(
        pose.body_center(PanelId::BeltTab),
        Vec3::new(tab_x, 0.0, 0.0)
    ));
    assert!(approx_v(
        pose.body_center(PanelId::BeltCap),
        Vec3::new(tab_x - d.belt_tab_w / 2.0, 0.0, 0.0)
    ));
}

#[test]
fn closed_front_panel_lies_over_the_back_panel() {
    let d = DIMS;
    let pose = tree().pose(0.0);
    // spine stands perpendicular, front folds flat one spine width in front of the back
    let spine = pose.body_center(PanelId::Spine);
    assert!(approx_v(
        spine,
        Vec3::new(-d.back_w / 2.0, 0.0, d.spine_w / 2.0)
    ));
    let front = pose.body_center(PanelId::Front);
    assert!(approx_v(front, Vec3::new(0.0, 0.0, d.spine_w)));
    let front_normal = pose.world(PanelId::Front).transform_vector3(Vec3::Z);
    assert!(approx(front_normal.z.abs(), 1.0));
}

#[test]
fn descendants_move_with_their_ancestors() {
    let t = tree();
    let a = t.pose(0.3);
    let b = t.pose(0.7);
    // front panel rides on the spine, so its pivot follows the spine's far edge
    for pose in [&a, &b] {
        let spine = t.node(PanelId::Spine).unwrap();
        let front = t.node(PanelId::Front).unwrap();
        let spine_far_edge = pose.world(PanelId::Spine).transform_point3(front.pivot);
        let front_pivot = pose
            .world(PanelId::Front)
            .transform_point3(-front.body_offset);
        assert!(approx_v(spine_far_edge, front_pivot));
        assert_eq!(spine.parent, Some(PanelId::Back));
    }
    assert!(!approx_v(
        a.body_center(PanelId::BeltCap),
        b.body_center(PanelId::BeltCap)
    ));
}

#[test]
fn every_parent_precedes_its_children() {
    let t = tree();
    let order: Vec<PanelId> = t.nodes().iter().map(|n| n.id).collect();
    for (i, node) in t.nodes().iter().enumerate() {
        if let Some(p) = node.parent {
            let pi = order.iter().position(|id| *id == p).unwrap();
            assert!(pi < i, "{} listed before its parent", node.id.name());
        }
    }
    assert_eq!(t.nodes().len(), PanelId::COUNT);
    assert!(t.nodes()[0].parent.is_none());
}

#[test]
fn fold_scalar_is_clamped() {
    let t = tree();
    assert!(approx(t.pose(-1.0).angle_deg(PanelId::Spine), 90.0));
    assert!(approx(t.pose(2.0).angle_deg(PanelId::Spine), 0.0));
    assert_eq!(t.pose(2.0).open_factor(), 1.0);
}

#[test]
fn hinge_angle_formula() {
    let h = Hinge::new(Axis::Y, 90.0);
    assert_eq!(h.angle_deg(0.0), 90.0);
    assert_eq!(h.angle_deg(0.5), 45.0);
    assert_eq!(h.angle_deg(1.0), 0.0);
}

#[test]
fn slab_shapes_match_the_dimension_table() {
    let d = Dims::default();
    let t = PanelTree::catalog(&d);
    match t.node(PanelId::Front).unwrap().shape {
        PanelShape::Slab {
            width,
            height,
            thickness,
        } => {
            assert_eq!(width, d.front_w);
            assert_eq!(height, d.front_h);
            assert_eq!(thickness, d.paper_thickness);
        }
        PanelShape::BeltCap => panic!("front should be a slab"),
    }
    assert_eq!(t.node(PanelId::BeltCap).unwrap().shape, PanelShape::BeltCap);
}
