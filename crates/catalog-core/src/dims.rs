//! Physical measurements of the folded catalog.
//!
//! One scene unit is one millimetre. The table is immutable; every consumer
//! borrows the single `DIMS` constant.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dims {
    pub front_w: f32,
    pub front_h: f32,
    pub back_w: f32,
    pub back_h: f32,
    pub flap_top_h: f32,
    pub flap_bottom_h: f32,
    pub flap_side_w: f32,
    pub belt_w: f32,
    pub belt_h: f32,
    /// Width of the flat belt segment between the front panel and the rounded cap.
    pub belt_tab_w: f32,
    pub spine_w: f32,
    pub paper_thickness: f32,
}

pub const DIMS: Dims = Dims {
    front_w: 160.0,
    front_h: 220.0,
    back_w: 160.0,
    back_h: 220.0,
    flap_top_h: 60.0,
    flap_bottom_h: 60.0,
    flap_side_w: 80.0,
    belt_w: 50.0,
    belt_h: 30.0,
    belt_tab_w: 12.0,
    spine_w: 8.0,
    paper_thickness: 0.5,
};

impl Default for Dims {
    fn default() -> Self {
        DIMS
    }
}
