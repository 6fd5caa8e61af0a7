//! Tests for argument parsing, snapshot layering and rendered output

#[cfg(test)]
mod tests {
    use clap::Parser;
    use patterncss::PatternKind;
    use patterncss::io::cli::{Cli, OutputFormat, Renderer};
    use patterncss::pattern::presets::PRESETS;
    use std::fs;

    fn render(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(std::iter::once("patterncss").chain(args.iter().copied()))
            .expect("Failed to parse arguments");
        let mut out = Vec::new();
        Renderer::new(cli).run(&mut out).expect("Failed to render");
        String::from_utf8(out).expect("Output is UTF-8")
    }

    // Tests defaults parse without any arguments
    // Verified by changing the default output format
    #[test]
    fn test_default_arguments() {
        let cli = Cli::try_parse_from(["patterncss"]).expect("Failed to parse");
        assert_eq!(cli.kind, None);
        assert_eq!(cli.format, OutputFormat::Css);
        assert_eq!(cli.seed, 42);
        assert!(!cli.random);
    }

    // Tests the CSS output carries descriptor, score and layer comments before the rule
    // Verified by printing the rule before the comments
    #[test]
    fn test_css_output() {
        let output = render(&["stripes"]);
        let mut lines = output.lines();

        assert_eq!(
            lines.next(),
            Some("/* Stripes · 18px bands at 128° every 46px · 39% coverage · 46px tile · 32% softness */")
        );
        assert_eq!(lines.next(), Some("/* complexity 44 */"));
        assert!(output.contains("/* layer 1: Diagonal bands: "));
        assert!(output.contains("/* layer 2: Perpendicular wash: "));
        assert!(output.contains(".pattern-surface {\n  background-color: #0c111f;\n"));
        assert!(output.trim_end().ends_with('}'));
        assert!(output.contains("*/\n.pattern-surface {"));
    }

    // Tests overrides apply on top of the preset and the kind argument wins
    // Verified by applying the preset after the overrides
    #[test]
    fn test_preset_with_overrides() {
        let cli = Cli::try_parse_from([
            "patterncss",
            "dots",
            "--preset",
            "Aurora Stripes",
            "--density",
            "70",
            "--thickness",
            "16",
            "--angle",
            "-45",
        ])
        .expect("Failed to parse");
        let session = Renderer::new(cli).session().expect("Failed to build session");

        assert_eq!(session.kind(), PatternKind::Dots);
        assert!((session.config().density - 70.0).abs() < f64::EPSILON);
        assert!((session.config().angle + 45.0).abs() < f64::EPSILON);
        assert!(session.preview().style.descriptor.starts_with("Dots · 16px radius"));
    }

    // Tests unknown kinds render the solid fallback instead of failing
    // Verified by rejecting unknown kinds during parsing
    #[test]
    fn test_unknown_kind_renders_fallback() {
        let output = render(&["hexagon"]);
        assert!(output.contains("Unknown pattern 'hexagon'"));
        assert!(!output.contains("background-image"));
        assert!(output.contains("background-color: #0c111f;"));
    }

    // Tests the JSON report shape
    // Verified by renaming the complexity field
    #[test]
    fn test_json_output() {
        let output = render(&["chevron", "--format", "json", "--selector", "#hero"]);
        let report: serde_json::Value =
            serde_json::from_str(&output).expect("Output is valid JSON");

        assert_eq!(report["kind"], "chevron");
        assert_eq!(report["complexity"], 44);
        assert_eq!(report["config"]["primaryColor"], "#5b8dff");
        assert_eq!(report["style"]["metrics"]["tileSize"], 46.0);
        assert_eq!(
            report["style"]["declarations"]["background-position"],
            "0 0, 12px 12px, 0 0"
        );
        assert!(report["css"].as_str().unwrap_or_default().starts_with("#hero {"));
    }

    // Tests seeded random configurations render identically
    // Verified by seeding from the clock
    #[test]
    fn test_random_is_reproducible() {
        let first = render(&["weave", "--random", "--seed", "3"]);
        let second = render(&["weave", "--random", "--seed", "3"]);
        let default = render(&["weave"]);

        assert_eq!(first, second);
        assert_ne!(first, default);
        assert!(first.contains("hsl("));
    }

    // Tests the preset listing prints one line per preset
    // Verified by skipping the last preset
    #[test]
    fn test_list_presets() {
        let output = render(&["--list-presets"]);
        assert_eq!(output.lines().count(), PRESETS.len());
        assert!(output.lines().any(|line| line.starts_with("Midnight Circuit")));

        let quiet = render(&["--list-presets", "--quiet"]);
        assert_eq!(quiet.lines().next(), Some("Aurora Stripes"));
    }

    // Tests the CSS rule is copied to the requested file
    // Verified by copying the full output with comments
    #[test]
    fn test_copy_to_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("copy.css");
        let path_arg = path.to_string_lossy().to_string();

        let output = render(&["grid", "--quiet", "--copy-to", &path_arg]);
        let copied = fs::read_to_string(&path).expect("Copy exists");

        assert!(copied.starts_with(".pattern-surface {"));
        assert!(output.contains(&copied));
        assert!(!copied.contains("/*"));
    }

    // Tests an unknown preset is an error
    // Verified by silently ignoring unknown presets
    #[test]
    fn test_unknown_preset_fails() {
        let cli = Cli::try_parse_from(["patterncss", "--preset", "Nope"]).expect("Failed to parse");
        let mut out = Vec::new();
        assert!(Renderer::new(cli).run(&mut out).is_err());
        assert!(out.is_empty());
    }
}
