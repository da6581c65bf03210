//! Frame capture and GIF generation replaying the subdivision

use std::path::Path;

use image::{Delay, Frame};

use crate::algorithm::SplitRecord;
use crate::algorithm::split::apply_split;
use crate::io::configuration::MAX_VISUALIZATION_FRAMES;
use crate::io::error::{
    AlgorithmError, Result, ensure_parent_dir, invalid_parameter, tiling_violation,
};
use crate::io::image::render_fill;
use crate::spatial::{Color, Tiling};

/// Captures splits for visualization
///
/// Records split events during generation so the finished, colored tiling
/// can later be replayed one split at a time as an animation.
pub struct VisualizationCapture {
    canvas_width: i64,
    canvas_height: i64,
    records: Vec<SplitRecord>,
}

impl VisualizationCapture {
    /// Start an empty capture for a canvas
    pub const fn new(canvas_width: i64, canvas_height: i64) -> Self {
        Self {
            canvas_width,
            canvas_height,
            records: Vec::new(),
        }
    }

    /// Record one applied split
    pub fn record(&mut self, record: &SplitRecord) {
        self.records.push(*record);
    }

    /// Returns the total number of captured splits
    pub const fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Replay the captured splits as an animated GIF
    ///
    /// Each frame shows the rectangles present at that point, colored with the
    /// colors they carry in `final_tiling`. Long runs are thinned so at most
    /// `MAX_VISUALIZATION_FRAMES` intermediate frames are encoded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No splits were captured
    /// - `final_tiling` is uncolored or was not produced by the captured splits
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        final_tiling: &Tiling,
        scale: u32,
        output_path: &Path,
        frame_delay_ms: u32,
    ) -> Result<()> {
        if self.records.is_empty() {
            return Err(invalid_parameter(
                "visualization",
                &0,
                &"no splits captured for visualization",
            ));
        }
        if final_tiling.len() != self.records.len() + 1 {
            return Err(tiling_violation(&format!(
                "{} captured splits cannot produce {} rectangles",
                self.records.len(),
                final_tiling.len()
            )));
        }

        let colors: Vec<Color> = final_tiling.iter().filter_map(|r| r.color).collect();
        if colors.len() != final_tiling.len() {
            return Err(AlgorithmError::PaletteMismatch {
                colors: colors.len(),
                rectangles: final_tiling.len(),
            });
        }

        let frames = self.generate_frames(&colors, scale, frame_delay_ms)?;

        ensure_parent_dir(output_path)?;
        let file = std::fs::File::create(output_path).map_err(|e| AlgorithmError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| AlgorithmError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        tracing::info!(path = %output_path.display(), "visualization written");
        Ok(())
    }

    fn generate_frames(&self, colors: &[Color], scale: u32, delay_ms: u32) -> Result<Vec<Frame>> {
        let skip_factor = self.records.len().div_ceil(MAX_VISUALIZATION_FRAMES).max(1);

        let mut tiling = Tiling::canvas(self.canvas_width, self.canvas_height)?;
        let mut frames = vec![Self::render_frame(&tiling, colors, scale, delay_ms)?];

        for (step, record) in self.records.iter().enumerate() {
            apply_split(&mut tiling, record)?;
            let is_last = step + 1 == self.records.len();
            if (step + 1) % skip_factor == 0 || is_last {
                frames.push(Self::render_frame(&tiling, colors, scale, delay_ms)?);
            }
        }

        // Final frame displays longer for better visibility
        if let Some(last) = frames.last().map(|f| f.buffer().clone()) {
            frames.push(Frame::from_parts(
                last,
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms.saturating_mul(10), 1),
            ));
        }

        Ok(frames)
    }

    fn render_frame(
        tiling: &Tiling,
        colors: &[Color],
        scale: u32,
        delay_ms: u32,
    ) -> Result<Frame> {
        let present = colors.get(..tiling.len()).map(<[Color]>::to_vec).unwrap_or_default();
        let colored = tiling.clone().assign_colors(present)?;
        let img = render_fill(&colored, scale, true)?;

        Ok(Frame::from_parts(
            img,
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        ))
    }
}
