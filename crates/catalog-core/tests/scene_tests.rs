// Host-side tests for scene composition.

use catalog_core::{
    Config, ConfigUpdate, FoilType, OpenAnimation, PanelId, Rgb, SceneModel, TextSide,
    INITIAL_FRONT_TEXT,
};
use glam::Vec3;

const EPS: f32 = 1e-3;

#[test]
fn default_config_renders_an_open_catalog_with_chrome_foil() {
    let model = SceneModel::default();
    let config = Config::default();
    let frame = model.build(&config, 1.0);
    assert_eq!(frame.pose.angle_deg(PanelId::TopFlap), 0.0);
    assert_eq!(frame.foil.base_color, Rgb::WHITE);
    assert_eq!(frame.foil.reflectivity, 0.9);
    let front = frame.text(TextSide::Front);
    assert_eq!(front.material.color, Rgb::WHITE);
    assert_eq!(front.material.metalness, 0.9);
    assert_eq!(front.material.roughness, 0.15);
}

#[test]
fn closing_settles_into_the_folded_pose() {
    let model = SceneModel::default();
    let config = Config::default().apply(ConfigUpdate::SetOpen(false));
    let mut anim = OpenAnimation::new(true);
    anim.sync(config.is_open);
    for _ in 0..600 {
        anim.step(1.0 / 60.0);
    }
    let frame = model.build(&config, anim.value());
    assert_eq!(frame.open_factor, 0.0);
    assert!((frame.pose.angle_deg(PanelId::TopFlap) + 179.0).abs() < EPS);
    assert!((frame.pose.angle_deg(PanelId::Spine) - 90.0).abs() < EPS);
}

#[test]
fn gloss_foil_uses_the_chosen_color() {
    let model = SceneModel::default();
    let config = Config::default()
        .apply(ConfigUpdate::SetFoilType(FoilType::Gloss))
        .apply(ConfigUpdate::SetFoilColor(Rgb::from_hex("#00FF00").unwrap()));
    let frame = model.build(&config, 1.0);
    for side in [TextSide::Front, TextSide::Back] {
        let m = frame.text(side).material;
        assert_eq!(m.color.to_hex(), "#00ff00");
        assert_eq!(m.metalness, 0.2);
        assert_eq!(m.roughness, 0.1);
    }
}

#[test]
fn uppercase_changes_only_the_rendered_copy() {
    let model = SceneModel::default();
    let config = Config::default().apply(ConfigUpdate::SetUppercase(true));
    let frame = model.build(&config, 1.0);
    assert_eq!(
        frame.text(TextSide::Front).text,
        INITIAL_FRONT_TEXT.to_uppercase()
    );
    assert_eq!(config.front_text, INITIAL_FRONT_TEXT);
}

#[test]
fn panels_share_the_paper_material() {
    let model = SceneModel::default();
    let config = Config::default().apply(ConfigUpdate::SetPaperColor(Rgb::new(10, 20, 30)));
    let frame = model.build(&config, 0.5);
    assert_eq!(frame.panels.len(), PanelId::COUNT);
    for p in &frame.panels {
        assert_eq!(p.material.color, Rgb::new(10, 20, 30));
        assert_eq!(p.material.roughness, 0.9);
        assert_eq!(p.material.metalness, 0.0);
    }
}

#[test]
fn open_model_is_centred_on_the_origin() {
    let model = SceneModel::default();
    assert!(model.bounds(1.0).center().length() < EPS);
    // closing moves the panels but not the centring offset
    let before = model.center_offset();
    let _ = model.build(&Config::default(), 0.0);
    assert_eq!(model.center_offset(), before);
}

#[test]
fn root_tilt_leans_the_model_back() {
    let model = SceneModel::default();
    let up = model.root_transform().transform_vector3(Vec3::Y);
    // -45 degrees about X takes +Y toward -Z
    assert!(up.z < 0.0);
    assert!((up.y - up.z.abs()).abs() < EPS);
}

#[test]
fn texts_ride_on_their_panels() {
    let model = SceneModel::default();
    let frame = model.build(&Config::default(), 0.3);
    let front = frame.text(TextSide::Front);
    assert_eq!(front.panel, PanelId::Front);
    assert_eq!(
        front.panel_world,
        frame.panel(PanelId::Front).unwrap().world
    );
    let back = frame.text(TextSide::Back);
    assert_eq!(back.panel, PanelId::Back);
    assert_eq!(back.placement.max_width, model.dims().back_w - 24.0);
}

#[test]
fn slab_models_scale_the_unit_box() {
    let model = SceneModel::default();
    let frame = model.build(&Config::default(), 1.0);
    let back = frame.panel(PanelId::Back).unwrap();
    let corner = back.model.transform_point3(Vec3::splat(0.5));
    let origin = back.world.transform_point3(Vec3::ZERO);
    let d = model.dims();
    let expected = Vec3::new(d.back_w, d.back_h, d.paper_thickness).length() / 2.0;
    assert!(((corner - origin).length() - expected).abs() < EPS);
}

#[test]
fn debug_mode_strengthens_outlines() {
    let model = SceneModel::default();
    let normal = model.build(&Config::default(), 1.0).edges;
    let debug = model
        .build(&Config::default().apply(ConfigUpdate::SetShowDebug(true)), 1.0)
        .edges;
    assert_eq!(normal.opacity, 0.1);
    assert_eq!(normal.color, Rgb::BLACK);
    assert_eq!(debug.opacity, 1.0);
    assert_eq!(debug.color.to_hex(), "#222222");
    assert!(debug.threshold_deg < normal.threshold_deg);
}

#[test]
fn contact_shadow_sits_below_the_model() {
    let frame = SceneModel::default().build(&Config::default(), 1.0);
    let centre = frame.shadow.model.transform_point3(Vec3::ZERO);
    assert!((centre - Vec3::new(0.0, -120.0, 0.0)).length() < EPS);
    assert_eq!(frame.shadow.opacity, 0.4);
}

#[test]
fn building_is_pure() {
    let model = SceneModel::default();
    let config = Config::default();
    let a = model.build(&config, 0.42);
    let b = model.build(&config, 0.42);
    for (pa, pb) in a.panels.iter().zip(&b.panels) {
        assert_eq!(pa.model, pb.model);
    }
    assert_eq!(a.text(TextSide::Back).text, b.text(TextSide::Back).text);
}
