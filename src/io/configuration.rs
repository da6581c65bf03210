//! Algorithm constants and runtime configuration defaults

// Canvas defaults match a landscape 3:2 print
/// Default canvas width in canvas units
pub const DEFAULT_WIDTH: i64 = 1200;
/// Default canvas height in canvas units
pub const DEFAULT_HEIGHT: i64 = 800;

/// Default number of splits
pub const DEFAULT_ITERATIONS: i64 = 30;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Safety limit keeping areas within u64 and image buffers allocatable
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: i64 = 1 << 20;

/// Re-draws of a break fraction before clamping into the interior
pub const MAX_BREAK_RESAMPLES: usize = 64;

// Palette settings
/// Maximum per-channel offset applied to the reference palette
pub const DEFAULT_PALETTE_NOISE: u8 = 24;
/// Maximum per-channel offset applied to each mosaic cell
pub const DEFAULT_MOSAIC_NOISE: u8 = 12;

// Output settings
/// Default output image path
pub const DEFAULT_OUTPUT: &str = "subdivision.png";
/// Pixels per canvas unit
pub const DEFAULT_SCALE: u32 = 1;
/// Largest accepted rendered side in pixels
pub const MAX_IMAGE_DIMENSION: u64 = 16_384;
/// Outline color drawn around each filled rectangle
pub const OUTLINE_COLOR: [u8; 4] = [0, 0, 0, 255];

// Visualization settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 120;
/// Upper bound on captured frames; longer runs skip intermediate splits
pub const MAX_VISUALIZATION_FRAMES: usize = 200;
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Parameters for a single generation run
#[derive(Clone, Debug)]
pub struct GenerationConfig {
    /// Canvas width in canvas units
    pub width: i64,
    /// Canvas height in canvas units
    pub height: i64,
    /// Number of splits to perform
    pub iterations: i64,
    /// Seed for the random source
    pub seed: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            iterations: DEFAULT_ITERATIONS,
            seed: DEFAULT_SEED,
        }
    }
}

// Logging
/// Log filter used when `RUST_LOG` is unset, indexed by `-v` count
pub const LOG_LEVELS: [&str; 4] = ["warn", "info", "debug", "trace"];
/// Offset added to the seed for the palette and mosaic random source
pub const COLOR_SEED_OFFSET: u64 = 1;
