//! The single user-editable configuration record.
//!
//! `Config` is owned by the frontend and handed to the scene builder by
//! reference every frame. Edits never mutate in place: each control produces a
//! `ConfigUpdate` and `Config::apply` returns a fresh record with exactly one
//! field replaced, so a half-applied edit is never observable.

use crate::color::Rgb;
use crate::constants::{FONT_SIZE_RANGE, LETTER_SPACING_RANGE, LINE_HEIGHT_RANGE};
use crate::error::CatalogError;
use crate::fonts::FontFamily;
use std::fmt;
use std::str::FromStr;

pub const INITIAL_FRONT_TEXT: &str = "\u{201c}SIT WITH THAT\u{201d}

An exhibition of photography not about interiors,
but certainly about interiors

Co-curated by
FOR SCALE and
HOLLY HAY

USM
28-30 GREENE STREET, NEW YORK, NEW YORK

5 FEBRUARY 2026 \u{2013} 30 APRIL 2026";

pub const INITIAL_BACK_TEXT: &str = "Alessandro Furchino Capria
Brian Griffin
Takashi Homma
Yushi Li
Joanna Piotrowska
Scheltens & Abbenes
Dorothea Sing Zhang
Alec Soth
Hannah Starkey
Larry Sultan";

pub const DEFAULT_PAPER_COLOR: Rgb = Rgb::new(0xd8, 0x26, 0x2c);
pub const DEFAULT_FOIL_COLOR: Rgb = Rgb::new(0xe6, 0xe6, 0xe6);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FoilType {
    #[default]
    Metallic,
    Gloss,
    Matte,
}

impl FoilType {
    pub const ALL: [FoilType; 3] = [FoilType::Metallic, FoilType::Gloss, FoilType::Matte];

    pub fn name(self) -> &'static str {
        match self {
            FoilType::Metallic => "metallic",
            FoilType::Gloss => "gloss",
            FoilType::Matte => "matte",
        }
    }
}

impl FromStr for FoilType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metallic" => Ok(FoilType::Metallic),
            "gloss" => Ok(FoilType::Gloss),
            "matte" => Ok(FoilType::Matte),
            _ => Err(CatalogError::UnknownFoil(s.to_string())),
        }
    }
}

impl fmt::Display for FoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FontConfig {
    pub family: FontFamily,
    pub size: f32,
    /// Extra advance per glyph, in ems.
    pub letter_spacing: f32,
    /// Line advance as a multiple of `size`.
    pub line_height: f32,
    pub uppercase: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: FontFamily::Inter,
            size: 5.0,
            letter_spacing: 0.02,
            line_height: 1.4,
            uppercase: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub is_open: bool,
    pub show_debug: bool,
    pub paper_color: Rgb,
    /// Only used by non-metallic finishes.
    pub foil_color: Rgb,
    pub foil_type: FoilType,
    pub front_text: String,
    pub back_text: String,
    pub font: FontConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            is_open: true,
            show_debug: false,
            paper_color: DEFAULT_PAPER_COLOR,
            foil_color: DEFAULT_FOIL_COLOR,
            foil_type: FoilType::Metallic,
            front_text: INITIAL_FRONT_TEXT.to_string(),
            back_text: INITIAL_BACK_TEXT.to_string(),
            font: FontConfig::default(),
        }
    }
}

/// One discrete edit from the configuration panel.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigUpdate {
    SetOpen(bool),
    SetShowDebug(bool),
    SetPaperColor(Rgb),
    SetFoilColor(Rgb),
    SetFoilType(FoilType),
    SetFrontText(String),
    SetBackText(String),
    SetFontFamily(FontFamily),
    SetFontSize(f32),
    SetLineHeight(f32),
    SetLetterSpacing(f32),
    SetUppercase(bool),
}

impl Config {
    /// Shallow copy with one field overridden. Slider values are clamped to
    /// the ranges the panel's inputs allow; non-finite values keep the old value.
    pub fn apply(&self, update: ConfigUpdate) -> Config {
        log::debug!("[config] {:?}", update);
        let mut next = self.clone();
        match update {
            ConfigUpdate::SetOpen(v) => next.is_open = v,
            ConfigUpdate::SetShowDebug(v) => next.show_debug = v,
            ConfigUpdate::SetPaperColor(c) => next.paper_color = c,
            ConfigUpdate::SetFoilColor(c) => next.foil_color = c,
            ConfigUpdate::SetFoilType(t) => next.foil_type = t,
            ConfigUpdate::SetFrontText(s) => next.front_text = s,
            ConfigUpdate::SetBackText(s) => next.back_text = s,
            ConfigUpdate::SetFontFamily(f) => next.font.family = f,
            ConfigUpdate::SetFontSize(v) => {
                next.font.size = clamp_slider(v, FONT_SIZE_RANGE, self.font.size)
            }
            ConfigUpdate::SetLineHeight(v) => {
                next.font.line_height = clamp_slider(v, LINE_HEIGHT_RANGE, self.font.line_height)
            }
            ConfigUpdate::SetLetterSpacing(v) => {
                next.font.letter_spacing =
                    clamp_slider(v, LETTER_SPACING_RANGE, self.font.letter_spacing)
            }
            ConfigUpdate::SetUppercase(v) => next.font.uppercase = v,
        }
        next
    }
}

#[inline]
fn clamp_slider(v: f32, (min, max, _step): (f32, f32, f32), previous: f32) -> f32 {
    if v.is_finite() {
        v.clamp(min, max)
    } else {
        previous
    }
}
