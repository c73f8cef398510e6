//! Tests for render option defaults and validation

#[cfg(test)]
mod tests {
    use kolam::KolamError;
    use kolam::io::configuration::{DEFAULT_BACKGROUND, DEFAULT_STROKE_COLOR};
    use kolam::render::options::{Background, RenderOptions, checked_color};

    // Tests defaults match the configuration module
    // Verified by defaulting show_dots to false
    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(
            options.background,
            Background::Solid(DEFAULT_BACKGROUND.to_string())
        );
        assert!(options.show_dots);
        assert_eq!(options.stroke_color, DEFAULT_STROKE_COLOR);
        assert!(options.dot_color.is_none());
        assert!(options.padding.abs() < f64::EPSILON);
    }

    // Tests background parsing recognises the transparent keyword
    // Verified by matching the keyword case-sensitively
    #[test]
    fn test_background_parse() {
        assert_eq!(Background::parse("Transparent"), Background::Transparent);
        assert_eq!(
            Background::parse(" #fff "),
            Background::Solid("#fff".to_string())
        );
    }

    // Tests validation fills the dot colour from the stroke colour
    // Verified by defaulting the dot colour to black
    #[test]
    fn test_validated_dot_color() {
        let validated = RenderOptions::default()
            .validate()
            .unwrap_or_else(|e| panic!("validate: {e}"));
        assert_eq!(validated.dot_color(), DEFAULT_STROKE_COLOR);
        assert_eq!(validated.background(), Some(DEFAULT_BACKGROUND));

        let custom = RenderOptions {
            background: Background::Transparent,
            dot_color: Some("rgb(10, 20, 30)".to_string()),
            ..RenderOptions::default()
        }
        .validate()
        .unwrap_or_else(|e| panic!("validate: {e}"));
        assert_eq!(custom.dot_color(), "rgb(10, 20, 30)");
        assert_eq!(custom.background(), None);
    }

    // Tests markup-breaking colours are rejected
    // Verified by allowing double quotes
    #[test]
    fn test_color_rejects_markup() {
        for bad in ["", "  ", "red\" onload=\"x", "<script>", "red;}", "a{b"] {
            assert!(
                matches!(
                    checked_color("stroke_color", bad),
                    Err(KolamError::Render { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
        assert_eq!(
            checked_color("stroke_color", " #92400e ").ok().as_deref(),
            Some("#92400e")
        );
    }

    // Tests negative or non-finite lengths are rejected
    // Verified by accepting negative padding
    #[test]
    fn test_lengths_validated() {
        let negative_padding = RenderOptions {
            padding: -1.0,
            ..RenderOptions::default()
        };
        assert!(negative_padding.validate().is_err());

        let infinite_width = RenderOptions {
            stroke_width: f64::INFINITY,
            ..RenderOptions::default()
        };
        assert!(infinite_width.validate().is_err());
    }
}
