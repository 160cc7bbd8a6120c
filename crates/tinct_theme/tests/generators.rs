use tinct_core::Color;
use tinct_theme::{
    font_sizes, font_weights, overlays, palette, scale, FontScaleConfig, FontWeightConfig,
    PaletteConfig, TokenError, TokenValue,
};

fn luminance_of(value: &TokenValue) -> f32 {
    match value {
        TokenValue::Color(c) => c.luminance(),
        other => panic!("expected a color token, got {other:?}"),
    }
}

#[test]
fn palette_is_monotone_from_light_to_dark() {
    for base in [
        Color::from_hex(0x1E66F5),
        Color::from_hex(0xD20F39),
        Color::from_hex(0x40A02B),
        Color::from_hex(0x777777),
    ] {
        let ramp = palette(base, &PaletteConfig::default());
        let luminances: Vec<f32> = ramp.iter().map(|t| luminance_of(&t.value)).collect();
        assert!(
            luminances.windows(2).all(|w| w[0] >= w[1]),
            "ramp for {base:?} not monotone: {luminances:?}"
        );
    }
}

#[test]
fn palette_names_are_exactly_prefix_1_through_9() {
    let ramp = palette(Color::from_hex(0x1E66F5), &PaletteConfig::with_prefix("brand"));
    let names: Vec<&str> = ramp.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "brand-1", "brand-2", "brand-3", "brand-4", "brand-5", "brand-6", "brand-7",
            "brand-8", "brand-9"
        ]
    );
}

#[test]
fn generators_are_idempotent() {
    let base = Color::from_hex(0x8839EF);
    let config = PaletteConfig::default();

    assert_eq!(palette(base, &config), palette(base, &config));
    assert_eq!(overlays(base, "accent"), overlays(base, "accent"));
    assert_eq!(
        font_sizes(&FontScaleConfig::default()),
        font_sizes(&FontScaleConfig::default())
    );
    assert_eq!(
        font_weights(&FontWeightConfig::default()),
        font_weights(&FontWeightConfig::default())
    );
}

#[test]
fn overlay_alphas_follow_the_step_table() {
    let base = Color::from_hex(0x04A5E5);
    let set = overlays(base, "info");
    let alphas: Vec<f32> = set
        .iter()
        .map(|t| match t.value {
            TokenValue::Color(c) => c.a,
            other => panic!("expected a color token, got {other:?}"),
        })
        .collect();
    assert_eq!(alphas, vec![0.1, 0.2, 0.4, 0.7]);
}

#[test]
fn scale_accepts_integers_and_half() {
    assert_eq!(scale(3.0), Ok(24.0));
    assert_eq!(scale(0.5), Ok(4.0));
    assert_eq!(scale(2.0), Ok(16.0));
}

#[test]
fn scale_rejects_off_grid_multiples() {
    assert_eq!(
        scale(1.3),
        Err(TokenError::InvalidMultiple { multiple: 1.3 })
    );
}

#[test]
fn font_size_tokens_are_strictly_descending() {
    let set = font_sizes(&FontScaleConfig::default());
    assert_eq!(set.len(), 8);
    let px: Vec<f32> = set
        .iter()
        .map(|t| match t.value {
            TokenValue::Length(v) => v,
            other => panic!("expected a length token, got {other:?}"),
        })
        .collect();
    assert_eq!(px, vec![24.0, 20.0, 18.0, 16.0, 14.0, 12.0, 11.0, 10.0]);
}

#[test]
fn font_weight_tokens_are_ascending() {
    let set = font_weights(&FontWeightConfig::default());
    assert_eq!(set.len(), 5);
    let weights: Vec<f32> = set
        .iter()
        .map(|t| match t.value {
            TokenValue::Number(v) => v,
            other => panic!("expected a number token, got {other:?}"),
        })
        .collect();
    assert_eq!(weights, vec![300.0, 400.0, 600.0, 700.0, 800.0]);
}

#[test]
fn token_sets_serialize_to_json() {
    let ramp = palette(Color::from_hex(0x1E66F5), &PaletteConfig::default());
    let json = serde_json::to_value(&ramp).unwrap();
    assert_eq!(json["tokens"].as_array().unwrap().len(), 9);
}
