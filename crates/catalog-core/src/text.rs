//! Placement and line layout of the printed copy.
//!
//! Glyph shaping and rasterization belong to the frontend; this module only
//! decides where a text block sits on a panel and how the copy breaks into
//! lines for a given advance measure.

use crate::config::FontConfig;
use crate::constants::{TEXT_FACE_OFFSET, TEXT_PADDING, TEXT_SURFACE_OFFSET};
use glam::{Mat4, Vec3};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::f32::consts::PI;

/// Copy as displayed; the stored text is never modified.
pub fn display_text(text: &str, uppercase: bool) -> Cow<'_, str> {
    if uppercase {
        Cow::Owned(text.to_uppercase())
    } else {
        Cow::Borrowed(text)
    }
}

/// Where a text block sits relative to its panel's body frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPlacement {
    /// Body frame → text frame: moves onto the outward (−Z) face and turns
    /// half a revolution about Y so the copy reads from outside.
    pub face: Mat4,
    /// Top-left corner of the block inside the text frame.
    pub anchor: Vec3,
    pub max_width: f32,
}

impl TextPlacement {
    pub fn for_panel(width: f32, height: f32, thickness: f32) -> Self {
        let face = Mat4::from_translation(Vec3::new(0.0, 0.0, -thickness / 2.0 - TEXT_FACE_OFFSET))
            * Mat4::from_rotation_y(PI);
        Self {
            face,
            anchor: Vec3::new(
                -width / 2.0 + TEXT_PADDING,
                height / 2.0 - TEXT_PADDING,
                TEXT_SURFACE_OFFSET,
            ),
            max_width: (width - 2.0 * TEXT_PADDING).max(0.0),
        }
    }

    /// Transform placing a top-left anchored unit quad (x ∈ \[0, 1\],
    /// y ∈ \[−1, 0\]) as a `width` × `height` block, relative to the panel body.
    pub fn block_transform(&self, width: f32, height: f32) -> Mat4 {
        self.face
            * Mat4::from_translation(self.anchor)
            * Mat4::from_scale(Vec3::new(width.max(0.0), height.max(0.0), 1.0))
    }
}

/// Horizontal advance of a run of text at a font size, in scene units,
/// excluding letter spacing.
pub trait TextMeasure {
    fn advance(&self, text: &str, font_size: f32) -> f32;
}

/// Fixed-pitch approximation used when no glyph metrics are available.
#[derive(Clone, Copy, Debug)]
pub struct MonospaceMeasure {
    /// Advance per character in ems.
    pub em_advance: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { em_advance: 0.6 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn advance(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * self.em_advance * font_size
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// Top of the line box, measured downward from the block's top edge.
    pub top: f32,
    pub width: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLayout {
    pub lines: SmallVec<[TextLine; 16]>,
    pub font_size: f32,
    pub line_advance: f32,
    pub letter_spacing: f32,
    /// Widest line; may exceed the max width when a single word overflows.
    pub width: f32,
    pub height: f32,
}

/// Break `text` into left-aligned lines no wider than `max_width`.
///
/// Hard breaks on `\n` are kept (blank lines included). Within a paragraph
/// words are packed greedily; a word wider than the limit gets a line of its
/// own and overflows rather than being split. Leading spaces of a paragraph
/// are kept as typed.
pub fn layout(
    text: &str,
    font: &FontConfig,
    max_width: f32,
    measure: &impl TextMeasure,
) -> TextLayout {
    let size = font.size;
    let spacing = font.letter_spacing * size;
    let line_advance = size * font.line_height;
    let run_width = |s: &str| -> f32 {
        let n = s.chars().count();
        if n == 0 {
            0.0
        } else {
            measure.advance(s, size) + spacing * n as f32
        }
    };

    let mut out = TextLayout {
        font_size: size,
        line_advance,
        letter_spacing: spacing,
        ..TextLayout::default()
    };
    if text.is_empty() {
        return out;
    }

    let push = |out: &mut TextLayout, line: String| {
        let width = run_width(&line);
        let top = out.lines.len() as f32 * line_advance;
        out.width = out.width.max(width);
        out.lines.push(TextLine {
            text: line,
            top,
            width,
        });
    };

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        let body = paragraph.trim_start_matches(' ');
        // the indent stays glued to the first word
        let mut current = paragraph[..paragraph.len() - body.len()].to_string();
        let mut line_start = true;
        for word in body.split(' ') {
            if line_start {
                current.push_str(word);
                line_start = false;
                continue;
            }
            let candidate_width = run_width(&current) + run_width(" ") + run_width(word);
            if candidate_width <= max_width {
                current.push(' ');
                current.push_str(word);
            } else {
                push(&mut out, std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        push(&mut out, current);
    }
    out.height = out.lines.len() as f32 * line_advance;
    out
}
