//! Command-line interface: generate, color, render and save one artwork

use crate::algorithm::Subdivision;
use crate::io::configuration::{
    COLOR_SEED_OFFSET, DEFAULT_HEIGHT, DEFAULT_ITERATIONS, DEFAULT_MOSAIC_NOISE, DEFAULT_OUTPUT,
    DEFAULT_PALETTE_NOISE, DEFAULT_SCALE, DEFAULT_SEED, DEFAULT_WIDTH, GIF_FRAME_DELAY_MS,
    GenerationConfig,
};
use crate::io::error::Result;
use crate::io::image::{RenderMode, RenderOptions, export_png, render};
use crate::io::palette::{ColorSource, Colormap, GradientPalette, NoisyPalette, REFERENCE_PALETTE};
use crate::io::progress::ProgressReporter;
use crate::io::visualization::VisualizationCapture;
use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// How rectangle colors are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaletteKind {
    /// Evenly sample a colormap in rectangle order
    Gradient,
    /// Jitter randomly chosen reference colors
    Noisy,
}

#[derive(Parser)]
#[command(name = "subdivart")]
#[command(
    author,
    version,
    about = "Generate abstract art by area-weighted random rectangle subdivision"
)]
/// Command-line arguments for the generator
pub struct Cli {
    /// Canvas width in canvas units
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    pub width: i64,

    /// Canvas height in canvas units
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT, allow_negative_numbers = true)]
    pub height: i64,

    /// Number of splits to perform
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS, allow_negative_numbers = true)]
    pub iterations: i64,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Color strategy
    #[arg(short, long, value_enum, default_value_t = PaletteKind::Gradient)]
    pub palette: PaletteKind,

    /// Colormap sampled by the gradient palette
    #[arg(short, long, value_enum, default_value_t = Colormap::Viridis)]
    pub colormap: Colormap,

    /// Largest per-channel offset applied by the noisy palette
    #[arg(long, default_value_t = DEFAULT_PALETTE_NOISE)]
    pub palette_noise: u8,

    /// Drawing technique
    #[arg(short, long, value_enum, default_value_t = RenderMode::Fill)]
    pub render: RenderMode,

    /// Largest per-channel offset applied to each mosaic cell
    #[arg(long, default_value_t = DEFAULT_MOSAIC_NOISE)]
    pub mosaic_noise: u8,

    /// Pixels per canvas unit
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Skip the black outline around filled rectangles
    #[arg(long)]
    pub no_outline: bool,

    /// Also write an animated GIF replaying every split
    #[arg(long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generation parameters from the parsed arguments
    pub const fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            width: self.width,
            height: self.height,
            iterations: self.iterations,
            seed: self.seed,
        }
    }

    /// Rendering parameters from the parsed arguments
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions {
            mode: self.render,
            scale: self.scale,
            mosaic_noise: self.mosaic_noise,
            outline: !self.no_outline,
        }
    }

    /// Palette selected on the command line
    ///
    /// # Errors
    ///
    /// Returns an error if the palette cannot be constructed
    pub fn color_source(&self) -> Result<Box<dyn ColorSource>> {
        Ok(match self.palette {
            PaletteKind::Gradient => Box::new(GradientPalette {
                colormap: self.colormap,
            }),
            PaletteKind::Noisy => Box::new(NoisyPalette::new(
                REFERENCE_PALETTE.to_vec(),
                self.palette_noise,
            )?),
        })
    }
}

/// Runs one generation from parsed arguments to files on disk
pub struct ArtProcessor {
    cli: Cli,
}

impl ArtProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate, color, render and save the artwork
    ///
    /// Returns the path of the written PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas or iteration count is invalid, the
    /// palette or render settings are rejected, or an output cannot be written
    pub fn process(&self) -> Result<PathBuf> {
        let start_time = Instant::now();
        let config = self.cli.generation_config();

        let mut engine = Subdivision::new(config.width, config.height, config.seed)?;
        let progress = ProgressReporter::new(
            config.iterations.max(0) as u64,
            self.cli.should_show_progress(),
        );
        let mut capture = self
            .cli
            .visualize
            .then(|| VisualizationCapture::new(config.width, config.height));

        engine.run(config.iterations, |record, tiling| {
            progress.advance(tiling.len());
            if let Some(capture) = capture.as_mut() {
                capture.record(record);
            }
        })?;
        let splits = progress.finish();

        let mut color_rng = StdRng::seed_from_u64(config.seed.wrapping_add(COLOR_SEED_OFFSET));
        let tiling = engine.finish();
        let colors = self.cli.color_source()?.colors(tiling.len(), &mut color_rng);
        let tiling = tiling.assign_colors(colors)?;
        tiling.verify()?;

        tracing::info!(
            splits,
            rectangles = tiling.len(),
            palette = ?self.cli.palette,
            elapsed = ?start_time.elapsed(),
            "tiling generated"
        );

        let options = self.cli.render_options();
        let img = render(&tiling, &options, &mut color_rng)?;
        export_png(&img, &self.cli.output)?;

        if let Some(capture) = capture {
            if capture.record_count() == 0 {
                tracing::warn!("no splits to replay, skipping visualization");
            } else {
                let viz_path = Self::get_visualization_path(&self.cli.output);
                capture.export_gif(&tiling, options.scale, &viz_path, GIF_FRAME_DELAY_MS)?;
            }
        }

        Ok(self.cli.output.clone())
    }

    /// Path of the animation written next to `output_path`
    pub fn get_visualization_path(output_path: &Path) -> PathBuf {
        let stem = output_path.file_stem().unwrap_or_default();
        let viz_name = format!("{}_visualization.gif", stem.to_string_lossy());

        if let Some(parent) = output_path.parent() {
            parent.join(viz_name)
        } else {
            PathBuf::from(viz_name)
        }
    }
}
