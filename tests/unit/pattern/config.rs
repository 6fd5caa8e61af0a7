//! Tests for configuration defaults, clamping, JSON shape and random draws

#[cfg(test)]
mod tests {
    use patterncss::PatternConfig;
    use rand::{SeedableRng, rngs::StdRng};

    fn with_numbers(density: f64, thickness: f64, softness: f64, scale: f64) -> PatternConfig {
        PatternConfig {
            density,
            thickness,
            softness,
            scale,
            ..PatternConfig::default()
        }
    }

    // Tests the default configuration values
    // Verified by changing the default density
    #[test]
    fn test_default_values() {
        let config = PatternConfig::default();
        assert_eq!(config.primary_color, "#5b8dff");
        assert_eq!(config.secondary_color, "#0c111f");
        assert_eq!(config.accent_color, "#9b6cff");
        assert!((config.angle - 128.0).abs() < f64::EPSILON);
        assert!((config.density - 46.0).abs() < f64::EPSILON);
        assert!((config.thickness - 18.0).abs() < f64::EPSILON);
        assert!((config.softness - 32.0).abs() < f64::EPSILON);
        assert!((config.scale - 100.0).abs() < f64::EPSILON);
    }

    // Tests in-range values pass through and scale becomes a factor
    // Verified by skipping the division by 100
    #[test]
    fn test_clamped_in_range() {
        let clamped = PatternConfig::default().clamped();
        assert!((clamped.density - 46.0).abs() < f64::EPSILON);
        assert!((clamped.thickness - 18.0).abs() < f64::EPSILON);
        assert!((clamped.blur_strength - 32.0).abs() < f64::EPSILON);
        assert!((clamped.scale_factor - 1.0).abs() < f64::EPSILON);
        assert!((clamped.tile_size() - 46.0).abs() < f64::EPSILON);
        assert!((clamped.coverage() - 18.0 / 46.0).abs() < f64::EPSILON);
    }

    // Tests every numeric field clamps to its range
    // Verified by clamping thickness against the raw density
    #[test]
    fn test_clamped_out_of_range() {
        let low = with_numbers(1.0, 0.0, -10.0, 5.0).clamped();
        assert!((low.density - 10.0).abs() < f64::EPSILON);
        assert!((low.thickness - 2.0).abs() < f64::EPSILON);
        assert!(low.blur_strength.abs() < f64::EPSILON);
        assert!((low.scale_factor - 0.4).abs() < f64::EPSILON);

        let high = with_numbers(900.0, 900.0, 250.0, 900.0).clamped();
        assert!((high.density - 180.0).abs() < f64::EPSILON);
        assert!((high.thickness - 180.0).abs() < f64::EPSILON);
        assert!((high.blur_strength - 100.0).abs() < f64::EPSILON);
        assert!((high.scale_factor - 2.0).abs() < f64::EPSILON);
    }

    // Tests thickness never exceeds the clamped density
    // Verified by removing the density bound on thickness
    #[test]
    fn test_thickness_bounded_by_density() {
        let clamped = with_numbers(30.0, 45.0, 0.0, 100.0).clamped();
        assert!((clamped.thickness - 30.0).abs() < f64::EPSILON);
        assert!((clamped.coverage() - 1.0).abs() < f64::EPSILON);
    }

    // Tests angles pass through verbatim unless they are not finite
    // Verified by normalizing the angle modulo 360
    #[test]
    fn test_angle_passthrough() {
        let mut config = PatternConfig {
            angle: 725.0,
            ..PatternConfig::default()
        };
        assert!((config.clamped().angle - 725.0).abs() < f64::EPSILON);

        config.angle = -45.0;
        assert!((config.clamped().angle + 45.0).abs() < f64::EPSILON);

        config.angle = f64::NAN;
        assert!(config.clamped().angle.abs() < f64::EPSILON);
    }

    // Tests NaN numbers fall back to their lower bounds
    // Verified by letting NaN reach the clamped config
    #[test]
    fn test_nan_fields_clamp_to_lower_bounds() {
        let clamped = with_numbers(f64::NAN, f64::NAN, f64::NAN, f64::NAN).clamped();
        assert!((clamped.density - 10.0).abs() < f64::EPSILON);
        assert!((clamped.thickness - 2.0).abs() < f64::EPSILON);
        assert!(clamped.blur_strength.abs() < f64::EPSILON);
        assert!((clamped.scale_factor - 0.4).abs() < f64::EPSILON);
    }

    // Tests JSON uses camelCase keys and fills missing fields with defaults
    // Verified by removing the serde default attribute
    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(PatternConfig::default()).expect("Failed to serialize");
        assert_eq!(value["primaryColor"], "#5b8dff");
        assert_eq!(value["density"], 46.0);

        let partial: PatternConfig =
            serde_json::from_str(r#"{"density": 80, "accentColor": "gold"}"#)
                .expect("Failed to parse partial config");
        assert!((partial.density - 80.0).abs() < f64::EPSILON);
        assert_eq!(partial.accent_color, "gold");
        assert_eq!(partial.primary_color, "#5b8dff");
    }

    // Tests random configurations are reproducible and in range
    // Verified by seeding the second generator differently
    #[test]
    fn test_random_is_seeded_and_in_range() {
        let first = PatternConfig::random(&mut StdRng::seed_from_u64(7));
        let second = PatternConfig::random(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);

        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let config = PatternConfig::random(&mut rng);
            assert!(config.primary_color.starts_with("hsl("));
            assert!(config.secondary_color.starts_with("hsl("));
            assert!(config.accent_color.starts_with("hsl("));
            assert!((0.0..360.0).contains(&config.angle));
            assert!((16.0..=120.0).contains(&config.density));
            assert!(config.thickness >= 2.0 && config.thickness <= config.density / 2.0);
            assert!((0.0..=80.0).contains(&config.softness));
            assert!((60.0..=160.0).contains(&config.scale));
        }
    }
}
