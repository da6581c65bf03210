//! PNG rendering of colored tilings
//!
//! Canvas Y grows upward while image rows grow downward, so a rectangle with
//! bounds `[bottom, top)` occupies image rows `[height - top, height - bottom)`.

use clap::ValueEnum;
use image::{Rgba, RgbaImage};
use rand::RngCore;
use std::path::Path;

use crate::io::configuration::{MAX_IMAGE_DIMENSION, OUTLINE_COLOR};
use crate::io::error::{AlgorithmError, Result, ensure_parent_dir, invalid_parameter};
use crate::io::palette::perturb;
use crate::spatial::{Color, Rectangle, Tiling};

/// How rectangles are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderMode {
    /// One solid fill per rectangle
    Fill,
    /// Every unit cell gets its rectangle's color plus random noise
    Mosaic,
}

/// Rendering parameters
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Drawing technique
    pub mode: RenderMode,
    /// Pixels per canvas unit along each axis
    pub scale: u32,
    /// Largest per-channel offset for mosaic cells
    pub mosaic_noise: u8,
    /// Draw a one-pixel outline around each filled rectangle
    pub outline: bool,
}

/// Pixel size of the rendered image
///
/// # Errors
///
/// Returns `InvalidParameter` if `scale` is zero or either side would exceed
/// `MAX_IMAGE_DIMENSION`
pub fn image_dimensions(tiling: &Tiling, scale: u32) -> Result<(u32, u32)> {
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"must be at least 1"));
    }

    let width = tiling.canvas_width() as u64 * u64::from(scale);
    let height = tiling.canvas_height() as u64 * u64::from(scale);
    if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!(
                "{width}x{height} pixels exceeds the {MAX_IMAGE_DIMENSION} pixel limit per side"
            ),
        ));
    }
    Ok((width as u32, height as u32))
}

/// Render a colored tiling with the requested technique
///
/// # Errors
///
/// Returns an error if the image size is rejected, a rectangle has no
/// color, or (for mosaics) the rectangles do not tile the canvas
pub fn render(
    tiling: &Tiling,
    options: &RenderOptions,
    rng: &mut dyn RngCore,
) -> Result<RgbaImage> {
    match options.mode {
        RenderMode::Fill => render_fill(tiling, options.scale, options.outline),
        RenderMode::Mosaic => render_mosaic(tiling, options.scale, options.mosaic_noise, rng),
    }
}

/// Fill each rectangle with its color, optionally outlined in black
///
/// # Errors
///
/// Returns an error if the image size is rejected or a rectangle has no color
pub fn render_fill(tiling: &Tiling, scale: u32, outline: bool) -> Result<RgbaImage> {
    let (width, height) = image_dimensions(tiling, scale)?;
    let mut img = RgbaImage::new(width, height);

    for (index, rectangle) in tiling.iter().enumerate() {
        let color = rectangle_color(index, rectangle)?;
        let (x_range, y_range) = pixel_span(tiling, rectangle, scale);

        for y in y_range.clone() {
            for x in x_range.clone() {
                let on_edge = x == x_range.start
                    || x + 1 == x_range.end
                    || y == y_range.start
                    || y + 1 == y_range.end;
                let pixel = if outline && on_edge {
                    OUTLINE_COLOR
                } else {
                    color
                };
                img.put_pixel(x, y, Rgba(pixel));
            }
        }
    }

    Ok(img)
}

/// Render each unit cell separately with bounded per-channel noise
///
/// # Errors
///
/// Returns an error if the image size is rejected, a rectangle has no
/// color, or some unit cell is covered twice or not at all
pub fn render_mosaic(
    tiling: &Tiling,
    scale: u32,
    noise: u8,
    rng: &mut dyn RngCore,
) -> Result<RgbaImage> {
    let (width, height) = image_dimensions(tiling, scale)?;
    let colors = tiling
        .iter()
        .enumerate()
        .map(|(index, rectangle)| rectangle_color(index, rectangle))
        .collect::<Result<Vec<_>>>()?;
    let owners = tiling.cell_owners()?;

    let mut img = RgbaImage::new(width, height);
    for ((row, col), &owner) in owners.indexed_iter() {
        let base = colors
            .get(owner)
            .copied()
            .ok_or(AlgorithmError::InvalidRectangleIndex {
                index: owner,
                len: colors.len(),
            })?;
        let pixel = Rgba(perturb(base, noise, &mut *rng));

        let x0 = col as u32 * scale;
        let y0 = row as u32 * scale;
        for y in y0..y0 + scale {
            for x in x0..x0 + scale {
                img.put_pixel(x, y, pixel);
            }
        }
    }

    Ok(img)
}

/// Write a rendered image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be created or `ImageExport`
/// if encoding or writing fails
pub fn export_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;
    img.save(output_path).map_err(|e| AlgorithmError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %output_path.display(), "image written");
    Ok(())
}

fn rectangle_color(index: usize, rectangle: &Rectangle) -> Result<Color> {
    rectangle.color.ok_or_else(|| {
        invalid_parameter("color", &index, &"rectangle has no color assigned")
    })
}

// Pixel column and row ranges of a rectangle at the given scale
fn pixel_span(
    tiling: &Tiling,
    rectangle: &Rectangle,
    scale: u32,
) -> (std::ops::Range<u32>, std::ops::Range<u32>) {
    let (rows, cols) = tiling.cell_span(rectangle);
    let to_px = |v: usize| v as u32 * scale;
    (
        to_px(cols.start)..to_px(cols.end),
        to_px(rows.start)..to_px(rows.end),
    )
}
