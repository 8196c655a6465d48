use crate::color::Rgb;
use crate::config::FoilType;

/// Material parameters of the printed foil.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoilAppearance {
    pub base_color: Rgb,
    /// Metalness in \[0, 1\].
    pub reflectivity: f32,
    pub roughness: f32,
}

impl FoilAppearance {
    /// Neutral finish used when the requested one is not recognised.
    pub fn neutral(color: Rgb) -> Self {
        Self {
            base_color: color,
            reflectivity: 0.0,
            roughness: 0.4,
        }
    }

    /// Map a finish and the chosen foil color to material parameters.
    ///
    /// Metallic foil is always chrome: the chosen color is ignored.
    pub fn resolve(foil_type: FoilType, foil_color: Rgb) -> Self {
        match foil_type {
            FoilType::Metallic => Self {
                base_color: Rgb::WHITE,
                reflectivity: 0.9,
                roughness: 0.15,
            },
            FoilType::Gloss => Self {
                base_color: foil_color,
                reflectivity: 0.2,
                roughness: 0.1,
            },
            FoilType::Matte => Self {
                base_color: foil_color,
                reflectivity: 0.0,
                roughness: 0.9,
            },
        }
    }
}

/// Resolve a finish given by name (as it arrives from a form control).
pub fn resolve_foil_name(name: &str, foil_color: Rgb) -> FoilAppearance {
    match name.parse::<FoilType>() {
        Ok(t) => FoilAppearance::resolve(t, foil_color),
        Err(e) => {
            log::warn!("[foil] {e}, using neutral finish");
            FoilAppearance::neutral(foil_color)
        }
    }
}
