// Host-side tests for text placement and line layout.

use catalog_core::text::{display_text, layout, MonospaceMeasure, TextMeasure, TextPlacement};
use catalog_core::FontConfig;
use glam::Vec3;
use std::borrow::Cow;

const EPS: f32 = 1e-4;

/// Every character advances by exactly one unit per point of font size.
struct UnitMeasure;

impl TextMeasure for UnitMeasure {
    fn advance(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size
    }
}

fn font(size: f32, letter_spacing: f32, line_height: f32) -> FontConfig {
    FontConfig {
        size,
        letter_spacing,
        line_height,
        ..FontConfig::default()
    }
}

#[test]
fn uppercase_is_display_only() {
    let stored = String::from("Sit with that");
    assert_eq!(display_text(&stored, true), "SIT WITH THAT");
    assert!(matches!(display_text(&stored, false), Cow::Borrowed(_)));
    assert_eq!(stored, "Sit with that");
}

#[test]
fn words_wrap_greedily() {
    let l = layout("aaaa bbbb cccc", &font(1.0, 0.0, 1.0), 10.0, &UnitMeasure);
    let lines: Vec<&str> = l.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(lines, ["aaaa bbbb", "cccc"]);
    assert!((l.lines[0].width - 9.0).abs() < EPS);
    assert!((l.width - 9.0).abs() < EPS);
}

#[test]
fn line_tops_advance_by_line_height() {
    let l = layout("a\nb\nc", &font(5.0, 0.0, 1.4), 100.0, &UnitMeasure);
    assert_eq!(l.lines.len(), 3);
    for (i, line) in l.lines.iter().enumerate() {
        assert!((line.top - i as f32 * 7.0).abs() < EPS);
    }
    assert!((l.height - 21.0).abs() < EPS);
}

#[test]
fn blank_lines_are_kept() {
    let l = layout("top\n\nbottom", &font(1.0, 0.0, 1.0), 100.0, &UnitMeasure);
    let lines: Vec<&str> = l.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(lines, ["top", "", "bottom"]);
    assert_eq!(l.lines[1].width, 0.0);
}

#[test]
fn carriage_returns_are_ignored() {
    let l = layout("one\r\ntwo", &font(1.0, 0.0, 1.0), 100.0, &UnitMeasure);
    assert_eq!(l.lines[0].text, "one");
    assert_eq!(l.lines[1].text, "two");
}

#[test]
fn leading_indent_is_kept() {
    let l = layout("   indented\nx", &font(1.0, 0.0, 1.0), 100.0, &UnitMeasure);
    let lines: Vec<&str> = l.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(lines, ["   indented", "x"]);
    assert!((l.lines[0].width - 11.0).abs() < EPS);

    let blank = layout("  ", &font(1.0, 0.0, 1.0), 100.0, &UnitMeasure);
    assert_eq!(blank.lines[0].text, "  ");
}

#[test]
fn long_words_overflow_instead_of_splitting() {
    let l = layout("a verylongword b", &font(1.0, 0.0, 1.0), 5.0, &UnitMeasure);
    let lines: Vec<&str> = l.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(lines, ["a", "verylongword", "b"]);
    assert!(l.width > 5.0);
}

#[test]
fn letter_spacing_widens_lines() {
    let tight = layout("abcd", &font(2.0, 0.0, 1.0), 100.0, &UnitMeasure);
    let loose = layout("abcd", &font(2.0, 0.25, 1.0), 100.0, &UnitMeasure);
    // 0.25 em at size 2 adds half a unit per character
    assert!((loose.width - tight.width - 2.0).abs() < EPS);
    assert!((loose.letter_spacing - 0.5).abs() < EPS);
}

#[test]
fn empty_text_has_no_lines() {
    let l = layout("", &FontConfig::default(), 100.0, &MonospaceMeasure::default());
    assert!(l.lines.is_empty());
    assert_eq!(l.height, 0.0);
    assert_eq!(l.width, 0.0);
}

#[test]
fn monospace_measure_scales_with_size() {
    let m = MonospaceMeasure::default();
    assert!((m.advance("abc", 10.0) - 18.0).abs() < EPS);
    assert_eq!(m.advance("", 10.0), 0.0);
}

#[test]
fn initial_copy_fits_the_front_panel() {
    let cfg = catalog_core::Config::default();
    let placement = TextPlacement::for_panel(160.0, 220.0, 0.5);
    let l = layout(
        &cfg.front_text,
        &cfg.font,
        placement.max_width,
        &MonospaceMeasure::default(),
    );
    assert!(l.width <= placement.max_width);
    assert!(l.height < 220.0 - 24.0);
}

#[test]
fn placement_pads_from_the_top_left_corner() {
    let p = TextPlacement::for_panel(160.0, 220.0, 0.5);
    assert_eq!(p.max_width, 136.0);
    assert!((p.anchor - Vec3::new(-68.0, 98.0, 0.01)).length() < EPS);
}

#[test]
fn text_block_sits_just_outside_the_outward_face() {
    let p = TextPlacement::for_panel(160.0, 220.0, 0.5);
    let corner = p.block_transform(10.0, 10.0).transform_point3(Vec3::ZERO);
    // half a turn about Y mirrors x and pushes the block past the -Z face
    assert!((corner - Vec3::new(68.0, 98.0, -0.31)).length() < EPS);
    // the block reads outward: its +x runs toward body -x
    let far = p.block_transform(10.0, 10.0).transform_point3(Vec3::X);
    assert!(far.x < corner.x);
}
