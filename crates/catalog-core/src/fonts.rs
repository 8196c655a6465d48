use crate::error::CatalogError;
use std::fmt;
use std::str::FromStr;

/// The fixed typeface catalog offered by the configuration panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    #[default]
    Inter,
    Roboto,
    PlayfairDisplay,
    Lora,
    Oswald,
    Montserrat,
}

impl FontFamily {
    pub const ALL: [FontFamily; 6] = [
        FontFamily::Inter,
        FontFamily::Roboto,
        FontFamily::PlayfairDisplay,
        FontFamily::Lora,
        FontFamily::Oswald,
        FontFamily::Montserrat,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter",
            FontFamily::Roboto => "Roboto",
            FontFamily::PlayfairDisplay => "Playfair Display",
            FontFamily::Lora => "Lora",
            FontFamily::Oswald => "Oswald",
            FontFamily::Montserrat => "Montserrat",
        }
    }

    /// Loadable WOFF resource for the face.
    pub fn url(self) -> &'static str {
        match self {
            FontFamily::Inter => "https://fonts.gstatic.com/s/inter/v12/UcCO3FwrK3iLTeHuS_fvQtMwCp50KnMw2boKoduKmMEVuLyfAZ9hjp-Ek-_EeA.woff",
            FontFamily::Roboto => "https://fonts.gstatic.com/s/roboto/v30/KFOmCnqEu92Fr1Mu4mxK.woff",
            FontFamily::PlayfairDisplay => "https://fonts.gstatic.com/s/playfairdisplay/v30/nuFvD-vYSZviVYUb_rj3ij__anPXJzDwcbmjWBN2PKdFvXDXbtM.woff",
            FontFamily::Lora => "https://fonts.gstatic.com/s/lora/v32/0QI6MX1D_JOuGQbT0gvTJPa787weuxJBk18AVPtMyo4.woff",
            FontFamily::Oswald => "https://fonts.gstatic.com/s/oswald/v49/TK3iWkUHHAIjg75oxSD03E0v.woff",
            FontFamily::Montserrat => "https://fonts.gstatic.com/s/montserrat/v25/JTUSjIg1_i6t8kCHKm459Wlhyw.woff",
        }
    }

    /// Lenient lookup used by the UI: unknown names render with the default face.
    pub fn resolve(name: &str) -> FontFamily {
        name.parse().unwrap_or_else(|e| {
            log::warn!("[font] {e}, using {}", FontFamily::default());
            FontFamily::default()
        })
    }
}

impl FromStr for FontFamily {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FontFamily::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownFont(s.to_string()))
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
