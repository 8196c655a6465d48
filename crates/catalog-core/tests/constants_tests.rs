// Host-side tests for the tuning tables and their relationships.

use catalog_core::constants::*;
use catalog_core::{const_color, Config, DIMS};

fn in_range(v: f32, (min, max, step): (f32, f32, f32)) -> bool {
    step > 0.0 && min < max && (min..=max).contains(&v)
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_constants_are_physical() {
    assert!(SPRING_MASS > 0.0);
    assert!(SPRING_TENSION > 0.0);
    assert!(SPRING_FRICTION > 0.0);
    assert!(SPRING_STEP_SEC < SPRING_MAX_DT_SEC);
    assert!(SPRING_EPSILON > 0.0 && SPRING_EPSILON < 0.01);
}

#[test]
fn default_font_sits_inside_the_slider_ranges() {
    let font = Config::default().font;
    assert!(in_range(font.size, FONT_SIZE_RANGE));
    assert!(in_range(font.line_height, LINE_HEIGHT_RANGE));
    assert!(in_range(font.letter_spacing, LETTER_SPACING_RANGE));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn dimension_table_is_consistent() {
    let d = DIMS;
    assert_eq!(d.front_w, d.back_w);
    assert_eq!(d.front_h, d.back_h);
    assert!(d.belt_h < d.front_h);
    assert!(d.belt_w > d.belt_h / 2.0);
    assert!(d.paper_thickness > 0.0 && d.paper_thickness < d.spine_w);
    assert!(2.0 * TEXT_PADDING < d.front_w);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn outline_styles() {
    assert!(EDGE_STRONG_THRESHOLD_DEG < EDGE_FAINT_THRESHOLD_DEG);
    assert!(EDGE_FAINT_OPACITY > 0.0 && EDGE_FAINT_OPACITY < 1.0);
}

#[test]
fn color_tables_parse() {
    for hex in [EDGE_STRONG_COLOR, EDGE_FAINT_COLOR, BACKGROUND_COLOR] {
        assert!(catalog_core::Rgb::from_hex(hex).is_ok(), "{hex}");
    }
    assert_eq!(const_color(BACKGROUND_COLOR).to_hex(), "#f3f4f6");
    assert_eq!(const_color("not a color"), catalog_core::Rgb::BLACK);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frames_the_model() {
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_DISTANCE);
    assert!(CAMERA_DISTANCE < CAMERA_ZFAR);
    assert!(ORBIT_MIN_DISTANCE <= CAMERA_DISTANCE && CAMERA_DISTANCE <= ORBIT_MAX_DISTANCE);
    assert!(ORBIT_ZOOM_SCALE > 0.0 && ORBIT_ZOOM_SCALE < 1.0);
    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING <= 1.0);
    // shadow catcher stays below the tilted model
    assert!(SHADOW_Y < -(DIMS.back_h / 2.0));
}
