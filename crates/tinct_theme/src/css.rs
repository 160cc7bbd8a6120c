//! CSS emission
//!
//! Renders token sets into `:root` custom-property blocks and the
//! typographic scales into utility class rules. Declarations appear in token
//! generation order.

use crate::tokens::{
    FontScaleConfig, FontSizeToken, FontWeightConfig, FontWeightToken, TokenSet,
};

/// Render a token set as a `:root { --name: value; }` block
pub fn custom_properties(set: &TokenSet) -> String {
    let mut css = String::from(":root {\n");
    for token in set.iter() {
        css.push_str(&format!("  --{}: {};\n", token.name, token.value.to_css()));
    }
    css.push_str("}\n");
    css
}

/// Utility class rules for the font-size scale
///
/// `tiny-caps` additionally forces uppercase at the class level; the
/// corresponding custom property stays a plain length.
pub fn font_size_classes(config: &FontScaleConfig) -> String {
    let mut css = String::new();
    for token in FontSizeToken::all() {
        css.push_str(&format!(
            ".{}-{} {{\n  font-size: {}px;\n",
            config.prefix,
            token.suffix(),
            token.px()
        ));
        if token.uppercase() {
            css.push_str("  text-transform: uppercase;\n");
        }
        css.push_str("}\n");
    }
    css
}

/// Utility class rules for the font-weight scale
pub fn font_weight_classes(config: &FontWeightConfig) -> String {
    let mut css = String::new();
    for token in FontWeightToken::all() {
        css.push_str(&format!(
            ".{}-{} {{\n  font-weight: {};\n}}\n",
            config.prefix,
            token.suffix(),
            token.weight()
        ));
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{palette, PaletteConfig};
    use tinct_core::Color;

    #[test]
    fn custom_properties_emit_in_generation_order() {
        let ramp = palette(Color::from_hex(0x1E66F5), &PaletteConfig::default());
        let block = custom_properties(&ramp);

        assert!(block.starts_with(":root {\n"));
        assert!(block.contains("--primary-6: #1e66f5;"));

        let mut last = 0;
        for i in 1..=9 {
            let pos = block
                .find(&format!("--primary-{i}:"))
                .unwrap_or_else(|| panic!("missing --primary-{i}"));
            assert!(pos > last, "--primary-{i} out of order");
            last = pos;
        }
    }

    #[test]
    fn tiny_caps_class_uppercases() {
        let css = font_size_classes(&FontScaleConfig::default());
        let tiny_caps = css
            .split(".font-tiny-caps")
            .nth(1)
            .expect("missing .font-tiny-caps rule");
        assert!(tiny_caps.contains("font-size: 10px;"));
        assert!(tiny_caps
            .split('}')
            .next()
            .unwrap()
            .contains("text-transform: uppercase;"));
        // Uppercase stays out of every other rule.
        assert_eq!(css.matches("text-transform").count(), 1);
    }

    #[test]
    fn weight_classes_cover_the_scale() {
        let css = font_weight_classes(&FontWeightConfig::default());
        for (suffix, value) in [
            ("light", 300),
            ("regular", 400),
            ("semibold", 600),
            ("bold", 700),
            ("black", 800),
        ] {
            assert!(css.contains(&format!(".font-weight-{suffix} {{")));
            assert!(css.contains(&format!("font-weight: {value};")));
        }
    }
}
