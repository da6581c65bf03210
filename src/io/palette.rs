//! Color palettes for finished tilings
//!
//! A palette turns a rectangle count into exactly that many colors, which
//! are then assigned to the tiling by position.

use clap::ValueEnum;
use rand::{Rng, RngCore};

use crate::io::error::{Result, invalid_parameter};
use crate::math::interpolation::{sample_gradient, sample_positions};
use crate::spatial::Color;

/// Source of one color per rectangle
pub trait ColorSource {
    /// Produce exactly `count` colors
    fn colors(&self, count: usize, rng: &mut dyn RngCore) -> Vec<Color>;
}

/// Named perceptual colormaps, stored as evenly spaced stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Colormap {
    /// Dark purple through teal to yellow
    Viridis,
    /// Deep blue through magenta to yellow
    Plasma,
    /// Black through red to pale yellow
    Inferno,
    /// Black through purple to cream
    Magma,
    /// Navy through grey to yellow
    Cividis,
}

const VIRIDIS: [[u8; 3]; 9] = [
    [0x44, 0x01, 0x54],
    [0x47, 0x2d, 0x7b],
    [0x3b, 0x52, 0x8b],
    [0x2c, 0x72, 0x8e],
    [0x21, 0x91, 0x8c],
    [0x28, 0xae, 0x80],
    [0x5e, 0xc9, 0x62],
    [0xad, 0xdc, 0x30],
    [0xfd, 0xe7, 0x25],
];

const PLASMA: [[u8; 3]; 9] = [
    [0x0d, 0x08, 0x87],
    [0x4c, 0x02, 0xa1],
    [0x7e, 0x03, 0xa8],
    [0xa9, 0x23, 0x95],
    [0xcc, 0x47, 0x78],
    [0xe5, 0x6b, 0x5d],
    [0xf8, 0x95, 0x40],
    [0xfd, 0xc3, 0x28],
    [0xf0, 0xf9, 0x21],
];

const INFERNO: [[u8; 3]; 9] = [
    [0x00, 0x00, 0x04],
    [0x1f, 0x0c, 0x48],
    [0x55, 0x0f, 0x6d],
    [0x88, 0x22, 0x6a],
    [0xba, 0x36, 0x55],
    [0xe3, 0x59, 0x33],
    [0xf9, 0x8e, 0x09],
    [0xf8, 0xc9, 0x32],
    [0xfc, 0xff, 0xa4],
];

const MAGMA: [[u8; 3]; 9] = [
    [0x00, 0x00, 0x04],
    [0x1c, 0x10, 0x44],
    [0x4f, 0x12, 0x7b],
    [0x81, 0x25, 0x81],
    [0xb5, 0x36, 0x7a],
    [0xe5, 0x50, 0x64],
    [0xfb, 0x87, 0x61],
    [0xfe, 0xc2, 0x87],
    [0xfc, 0xfd, 0xbf],
];

const CIVIDIS: [[u8; 3]; 5] = [
    [0x00, 0x22, 0x4e],
    [0x41, 0x4d, 0x6b],
    [0x7c, 0x7b, 0x78],
    [0xbc, 0xaf, 0x6f],
    [0xfe, 0xe8, 0x38],
];

impl Colormap {
    /// RGB stops from the low end of the map to the high end
    pub const fn stops(self) -> &'static [[u8; 3]] {
        match self {
            Self::Viridis => &VIRIDIS,
            Self::Plasma => &PLASMA,
            Self::Inferno => &INFERNO,
            Self::Magma => &MAGMA,
            Self::Cividis => &CIVIDIS,
        }
    }

    /// Opaque color at position `t` in `[0, 1]`
    pub fn sample(self, t: f64) -> Color {
        let [r, g, b] = sample_gradient(self.stops(), t);
        [r, g, b, 255]
    }
}

/// Evenly samples a colormap from one end to the other
#[derive(Debug, Clone, Copy)]
pub struct GradientPalette {
    /// Colormap to sample
    pub colormap: Colormap,
}

impl ColorSource for GradientPalette {
    fn colors(&self, count: usize, _rng: &mut dyn RngCore) -> Vec<Color> {
        sample_positions(count)
            .into_iter()
            .map(|t| self.colormap.sample(t))
            .collect()
    }
}

/// Reference colors used by the noisy palette
pub const REFERENCE_PALETTE: [Color; 6] = [
    [0xe6, 0x39, 0x46, 0xff],
    [0xf1, 0xfa, 0xee, 0xff],
    [0xa8, 0xda, 0xdc, 0xff],
    [0x45, 0x7b, 0x9d, 0xff],
    [0x1d, 0x35, 0x57, 0xff],
    [0xf4, 0xa2, 0x61, 0xff],
];

/// Picks reference colors at random and jitters each channel
#[derive(Debug, Clone)]
pub struct NoisyPalette {
    reference: Vec<Color>,
    noise: u8,
}

impl NoisyPalette {
    /// Create a palette around `reference` with offsets up to `noise`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the reference palette is empty
    pub fn new(reference: Vec<Color>, noise: u8) -> Result<Self> {
        if reference.is_empty() {
            return Err(invalid_parameter(
                "reference",
                &"[]",
                &"reference palette needs at least one color",
            ));
        }
        Ok(Self { reference, noise })
    }
}

impl ColorSource for NoisyPalette {
    fn colors(&self, count: usize, rng: &mut dyn RngCore) -> Vec<Color> {
        (0..count)
            .filter_map(|_| {
                let pick = rng.random_range(0..self.reference.len());
                let base = self.reference.get(pick).copied()?;
                Some(perturb(base, self.noise, &mut *rng))
            })
            .collect()
    }
}

/// Offset each RGB channel by a uniform amount in `[-noise, noise]`
///
/// Channels saturate at 0 and 255; alpha is left unchanged.
pub fn perturb<R: Rng + ?Sized>(color: Color, noise: u8, rng: &mut R) -> Color {
    if noise == 0 {
        return color;
    }

    let bound = i16::from(noise);
    let mut out = color;
    for channel in out.iter_mut().take(3) {
        let offset = rng.random_range(-bound..=bound);
        *channel = (i16::from(*channel) + offset).clamp(0, 255) as u8;
    }
    out
}
