//! Animated GIF recording of a simulation run

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use std::path::Path;

use crate::io::configuration::{MAX_PREALLOCATED_FRAMES, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, SimulationError};
use crate::spatial::Grid;

const ALIVE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const DEAD_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Captures one image per generation for later export
///
/// Each cell becomes a `scale` x `scale` block of pixels.
pub struct GenerationRecorder {
    frames: Vec<RgbaImage>,
    scale: u32,
}

impl GenerationRecorder {
    /// Create an empty recorder; a scale of 0 is treated as 1
    ///
    /// `expected_frames` is only a capacity hint and is capped at
    /// [`MAX_PREALLOCATED_FRAMES`].
    pub fn new(scale: u32, expected_frames: usize) -> Self {
        Self {
            frames: Vec::with_capacity(expected_frames.min(MAX_PREALLOCATED_FRAMES)),
            scale: scale.max(1),
        }
    }

    /// Capture the given grid as the next frame
    ///
    /// # Errors
    ///
    /// Returns an error if the scaled frame would not fit in an image
    pub fn record(&mut self, grid: &Grid) -> Result<()> {
        let (rows, cols) = grid.dim();
        let scale = self.scale;
        let too_large = || SimulationError::Configuration {
            reason: format!("a {rows}x{cols} grid at scale {scale} is too large to record"),
        };

        let scaled = |cells: usize| u32::try_from(cells).ok()?.checked_mul(scale);
        let (width, height) = scaled(cols).zip(scaled(rows)).ok_or_else(too_large)?;
        let buffer_len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4));
        if buffer_len.is_none_or(|bytes| isize::try_from(bytes).is_err()) {
            return Err(too_large());
        }

        let image = RgbaImage::from_fn(width, height, |x, y| {
            let cell = grid
                .get([(y / scale) as usize, (x / scale) as usize])
                .copied()
                .unwrap_or(0);
            if cell == 1 { ALIVE_COLOR } else { DEAD_COLOR }
        });
        self.frames.push(image);
        Ok(())
    }

    /// Number of captured frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Write every captured frame as an animated GIF
    ///
    /// Delays shorter than viewers reliably honor are raised to that minimum.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - The parent directory or file cannot be created
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(SimulationError::Configuration {
                reason: "no generations captured for recording".to_string(),
            });
        }

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SimulationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| SimulationError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let delay = Delay::from_numer_denom_ms(frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS), 1);
        let frames = self
            .frames
            .iter()
            .map(|image| Frame::from_parts(image.clone(), 0, 0, delay));

        let recording_error = |e| SimulationError::Recording {
            path: output_path.to_path_buf(),
            source: e,
        };

        let mut encoder = GifEncoder::new(file);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(recording_error)?;
        encoder.encode_frames(frames).map_err(recording_error)?;

        Ok(())
    }
}
