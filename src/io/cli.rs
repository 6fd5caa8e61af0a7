//! Command-line front end: pick a snapshot, preview it, optionally copy the CSS

use crate::io::clipboard::{FileSink, copy_to_sink};
use crate::io::configuration::DEFAULT_SEED;
use crate::io::error::{Result, WithPath};
use crate::io::session::{Session, load_config};
use crate::math::complexity::score;
use crate::pattern::compiler::compile_named;
use crate::pattern::config::PatternConfig;
use crate::pattern::kind::PatternKind;
use crate::pattern::presets::PRESETS;
use crate::style::derived::DerivedStyle;
use crate::style::serializer::serialize_with_selector;
use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Output representation of a compiled pattern
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Descriptor and layers as comments, followed by the CSS rule
    #[default]
    Css,
    /// Full report as pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "patterncss")]
#[command(
    author,
    version,
    about = "Compile layered CSS background patterns from a handful of sliders"
)]
/// Command-line arguments for the pattern compiler
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Pattern kind: stripes, grid, dots, weave or chevron
    #[arg(value_name = "KIND")]
    pub kind: Option<String>,

    /// Start from a named preset (kind and configuration)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Start from a JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start from a random configuration
    #[arg(short, long)]
    pub random: bool,

    /// Seed used with --random
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Primary color override
    #[arg(long)]
    pub primary: Option<String>,

    /// Secondary color override
    #[arg(long)]
    pub secondary: Option<String>,

    /// Accent color override
    #[arg(long)]
    pub accent: Option<String>,

    /// Angle override, in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub angle: Option<f64>,

    /// Density override, in pixels
    #[arg(long, allow_hyphen_values = true)]
    pub density: Option<f64>,

    /// Thickness override, in pixels
    #[arg(long, allow_hyphen_values = true)]
    pub thickness: Option<f64>,

    /// Softness override, 0 to 100
    #[arg(long, allow_hyphen_values = true)]
    pub softness: Option<f64>,

    /// Scale override, in percent
    #[arg(long, allow_hyphen_values = true)]
    pub scale: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Css)]
    pub format: OutputFormat,

    /// Selector wrapping the CSS declarations
    #[arg(long)]
    pub selector: Option<String>,

    /// Also copy the CSS rule to this file
    #[arg(long, value_name = "FILE")]
    pub copy_to: Option<PathBuf>,

    /// List presets and exit
    #[arg(short, long)]
    pub list_presets: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Log debug events
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply every per-field override to `config`
    pub fn apply_overrides(&self, config: &mut PatternConfig) {
        if let Some(primary) = &self.primary {
            config.primary_color.clone_from(primary);
        }
        if let Some(secondary) = &self.secondary {
            config.secondary_color.clone_from(secondary);
        }
        if let Some(accent) = &self.accent {
            config.accent_color.clone_from(accent);
        }
        if let Some(angle) = self.angle {
            config.angle = angle;
        }
        if let Some(density) = self.density {
            config.density = density;
        }
        if let Some(thickness) = self.thickness {
            config.thickness = thickness;
        }
        if let Some(softness) = self.softness {
            config.softness = softness;
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
    }
}

/// JSON shape of a compiled pattern
#[derive(Debug, Serialize)]
struct Report<'a> {
    kind: &'a str,
    config: &'a PatternConfig,
    complexity: u8,
    style: &'a DerivedStyle,
    css: &'a str,
}

/// Resolves the snapshot described by the arguments and renders it
pub struct Renderer {
    cli: Cli,
}

impl Renderer {
    /// Create a renderer for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the session the arguments describe
    ///
    /// Sources are layered in order: defaults, preset, configuration file,
    /// random draw, then individual overrides. A kind argument that parses
    /// replaces the preset's kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the preset is unknown or the configuration file
    /// cannot be loaded
    pub fn session(&self) -> Result<Session> {
        let mut session = Session::default();

        if let Some(name) = &self.cli.preset {
            session.apply_preset_named(name)?;
        }
        if let Some(path) = &self.cli.config {
            session.replace(load_config(path)?);
        }
        if self.cli.random {
            let mut rng = StdRng::seed_from_u64(self.cli.seed);
            session.replace(PatternConfig::random(&mut rng));
        }
        session.update(|config| self.cli.apply_overrides(config));

        if let Some(kind) = self
            .cli
            .kind
            .as_deref()
            .and_then(|name| name.parse::<PatternKind>().ok())
        {
            session.set_kind(kind);
        }
        if let Some(selector) = &self.cli.selector {
            session.set_selector(selector.as_str());
        }

        Ok(session)
    }

    /// Render the output the arguments ask for into `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be resolved or `out` cannot be
    /// written
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        if self.cli.list_presets {
            return self.list_presets(out);
        }

        let session = self.session()?;
        let kind_name = self
            .cli
            .kind
            .as_deref()
            .unwrap_or_else(|| session.kind().name());

        // Unknown kind names still render, as a solid fallback surface
        let style = compile_named(kind_name, session.config());
        let css = serialize_with_selector(&style, session.selector());
        let complexity = score(session.config());

        match self.cli.format {
            OutputFormat::Css => Self::write_css(out, &style, &css, complexity)?,
            OutputFormat::Json => {
                let report = Report {
                    kind: kind_name,
                    config: session.config(),
                    complexity,
                    style: &style,
                    css: &css,
                };
                let json = serde_json::to_string_pretty(&report)?;
                writeln!(out, "{json}").with_path("<output>", "write report")?;
            }
        }

        if let Some(path) = &self.cli.copy_to {
            self.copy(path.clone(), &css);
        }

        Ok(())
    }

    fn write_css(
        out: &mut impl Write,
        style: &DerivedStyle,
        css: &str,
        complexity: u8,
    ) -> Result<()> {
        writeln!(out, "/* {} */", style.descriptor).with_path("<output>", "write css")?;
        writeln!(out, "/* complexity {complexity} */").with_path("<output>", "write css")?;
        for (index, label) in style.layering.iter().enumerate() {
            writeln!(out, "/* layer {}: {label} */", index + 1)
                .with_path("<output>", "write css")?;
        }
        writeln!(out, "{css}").with_path("<output>", "write css")
    }

    fn list_presets(&self, out: &mut impl Write) -> Result<()> {
        for preset in PRESETS {
            let written = if self.cli.quiet {
                writeln!(out, "{}", preset.name)
            } else {
                writeln!(
                    out,
                    "{:<18} {:<8} {}",
                    preset.name, preset.kind, preset.description
                )
            };
            written.with_path("<output>", "list presets")?;
        }
        Ok(())
    }

    // Allow print for user feedback on the copy outcome
    #[allow(clippy::print_stderr)]
    fn copy(&self, path: PathBuf, css: &str) {
        let mut sink = FileSink::new(path);
        let status = copy_to_sink(&mut sink, css);
        if !self.cli.quiet || !status.is_copied() {
            eprintln!("{}", status.message());
        }
    }
}
