// Host-side tests for the configuration record and its edits.

use catalog_core::{
    CatalogError, Config, ConfigUpdate, FoilType, FontFamily, Rgb, INITIAL_BACK_TEXT,
    INITIAL_FRONT_TEXT,
};

#[test]
fn defaults() {
    let c = Config::default();
    assert!(c.is_open);
    assert!(!c.show_debug);
    assert_eq!(c.paper_color.to_hex(), "#d8262c");
    assert_eq!(c.foil_color.to_hex(), "#e6e6e6");
    assert_eq!(c.foil_type, FoilType::Metallic);
    assert_eq!(c.front_text, INITIAL_FRONT_TEXT);
    assert_eq!(c.back_text, INITIAL_BACK_TEXT);
    assert_eq!(c.font.family, FontFamily::Inter);
    assert_eq!(c.font.size, 5.0);
    assert_eq!(c.font.letter_spacing, 0.02);
    assert_eq!(c.font.line_height, 1.4);
    assert!(!c.font.uppercase);
}

#[test]
fn initial_copy() {
    assert!(INITIAL_FRONT_TEXT.starts_with('\u{201c}'));
    assert!(INITIAL_FRONT_TEXT.ends_with("5 FEBRUARY 2026 \u{2013} 30 APRIL 2026"));
    assert_eq!(INITIAL_BACK_TEXT.lines().count(), 10);
    assert_eq!(INITIAL_BACK_TEXT.lines().last(), Some("Larry Sultan"));
}

#[test]
fn apply_replaces_exactly_one_field() {
    let c = Config::default();
    let next = c.apply(ConfigUpdate::SetFrontText("hello".into()));
    assert_eq!(next.front_text, "hello");
    assert_eq!(c.front_text, INITIAL_FRONT_TEXT);
    let restored = Config {
        front_text: c.front_text.clone(),
        ..next
    };
    assert_eq!(restored, c);
}

#[test]
fn every_update_lands_in_its_field() {
    let c = Config::default()
        .apply(ConfigUpdate::SetOpen(false))
        .apply(ConfigUpdate::SetShowDebug(true))
        .apply(ConfigUpdate::SetPaperColor(Rgb::new(1, 2, 3)))
        .apply(ConfigUpdate::SetFoilColor(Rgb::new(4, 5, 6)))
        .apply(ConfigUpdate::SetFoilType(FoilType::Matte))
        .apply(ConfigUpdate::SetBackText("back".into()))
        .apply(ConfigUpdate::SetFontFamily(FontFamily::Lora))
        .apply(ConfigUpdate::SetFontSize(8.0))
        .apply(ConfigUpdate::SetLineHeight(2.0))
        .apply(ConfigUpdate::SetLetterSpacing(0.1))
        .apply(ConfigUpdate::SetUppercase(true));
    assert!(!c.is_open);
    assert!(c.show_debug);
    assert_eq!(c.paper_color, Rgb::new(1, 2, 3));
    assert_eq!(c.foil_color, Rgb::new(4, 5, 6));
    assert_eq!(c.foil_type, FoilType::Matte);
    assert_eq!(c.back_text, "back");
    assert_eq!(c.font.family, FontFamily::Lora);
    assert_eq!(c.font.size, 8.0);
    assert_eq!(c.font.line_height, 2.0);
    assert_eq!(c.font.letter_spacing, 0.1);
    assert!(c.font.uppercase);
}

#[test]
fn uppercase_leaves_stored_text_alone() {
    let c = Config::default().apply(ConfigUpdate::SetUppercase(true));
    assert_eq!(c.front_text, INITIAL_FRONT_TEXT);
    assert_eq!(c.back_text, INITIAL_BACK_TEXT);
}

#[test]
fn sliders_clamp_to_their_ranges() {
    let c = Config::default();
    assert_eq!(c.apply(ConfigUpdate::SetFontSize(100.0)).font.size, 20.0);
    assert_eq!(c.apply(ConfigUpdate::SetFontSize(0.0)).font.size, 2.0);
    assert_eq!(c.apply(ConfigUpdate::SetLineHeight(9.0)).font.line_height, 2.5);
    assert_eq!(
        c.apply(ConfigUpdate::SetLetterSpacing(-1.0)).font.letter_spacing,
        -0.1
    );
}

#[test]
fn non_finite_slider_values_are_ignored() {
    let c = Config::default();
    assert_eq!(c.apply(ConfigUpdate::SetFontSize(f32::NAN)).font.size, 5.0);
    assert_eq!(
        c.apply(ConfigUpdate::SetLineHeight(f32::INFINITY)).font.line_height,
        1.4
    );
}

#[test]
fn hex_colors_parse() {
    assert_eq!(Rgb::from_hex("#00FF00").unwrap(), Rgb::new(0, 255, 0));
    assert_eq!(Rgb::from_hex("d8262c").unwrap(), Rgb::new(0xd8, 0x26, 0x2c));
    assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb::WHITE);
    assert_eq!("#e6e6e6".parse::<Rgb>().unwrap().to_string(), "#e6e6e6");
}

#[test]
fn bad_hex_colors_are_rejected() {
    for bad in ["", "#12345", "#gggggg", "#12345678", "#ééé"] {
        assert!(
            matches!(Rgb::from_hex(bad), Err(CatalogError::InvalidColor(_))),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn linear_conversion_keeps_the_endpoints() {
    assert_eq!(Rgb::BLACK.to_linear_f32(), [0.0, 0.0, 0.0]);
    let white = Rgb::WHITE.to_linear_f32();
    assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-6));
    let mid = Rgb::new(128, 128, 128).to_linear_f32()[0];
    assert!(mid > 0.2 && mid < 0.23);
}

#[test]
fn foil_names_round_trip() {
    for t in FoilType::ALL {
        assert_eq!(t.name().parse::<FoilType>().unwrap(), t);
    }
    assert_eq!("GLOSS".parse::<FoilType>().unwrap(), FoilType::Gloss);
    assert!(matches!(
        "holographic".parse::<FoilType>(),
        Err(CatalogError::UnknownFoil(_))
    ));
}

#[test]
fn font_catalog_lookup() {
    assert_eq!(FontFamily::ALL.len(), 6);
    assert_eq!(
        "playfair display".parse::<FontFamily>().unwrap(),
        FontFamily::PlayfairDisplay
    );
    assert!(matches!(
        "Comic Sans".parse::<FontFamily>(),
        Err(CatalogError::UnknownFont(_))
    ));
    assert_eq!(FontFamily::resolve("Comic Sans"), FontFamily::Inter);
    for f in FontFamily::ALL {
        assert!(f.url().starts_with("https://"));
        assert!(f.url().ends_with(".woff"));
    }
}
