use thiserror::Error;

/// Parse failures for values that arrive as strings from form controls.
///
/// Callers on the UI side normally go through the lenient helpers
/// (`FontFamily::resolve`, `resolve_foil_name`) which log and fall back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("invalid color {0:?}: expected #rrggbb or #rgb")]
    InvalidColor(String),
    #[error("unknown foil finish {0:?}")]
    UnknownFoil(String),
    #[error("unknown typeface {0:?}")]
    UnknownFont(String),
}
