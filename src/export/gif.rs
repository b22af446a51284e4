use std::io::Write;
use std::path::Path;

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use tracing::{debug, info};

use crate::animation::timeline::{
    MAX_DURATION_SECS, MIN_DURATION_SECS, ReplayConfig, stroke_fractions,
};
use crate::export::bbox::content_bounds;
use crate::export::svg::{CROP_PADDING, CROP_PADDING_PX, svg_document};
use crate::foundation::core::{Canvas, Rgba8, Vec2};
use crate::foundation::error::{InkError, InkResult};
use crate::foundation::rng::Rng64;
use crate::model::drawing::Drawing;
use crate::path::reveal::Wobble;
use crate::render::cpu::{RenderParams, render_drawing};

/// Raster-sequence export settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GifConfig {
    /// Frames per second; each frame carries a fixed `1000/fps` ms delay.
    pub fps: u32,
    /// Opaque background to composite onto; `None` keeps alpha transparent.
    pub background: Option<Rgba8>,
    /// Seed for the replay wobble so repeated exports are identical.
    pub wobble_seed: u64,
}

impl Default for GifConfig {
    fn default() -> Self {
        Self {
            fps: crate::animation::timeline::DEFAULT_FPS,
            background: None,
            wobble_seed: 0,
        }
    }
}

/// Counters reported after a finished GIF export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GifStats {
    pub frames: u32,
    pub width: u32,
    pub height: u32,
}

pub fn ensure_parent_dir(path: &Path) -> InkResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Artifact producer for a drawing session.
///
/// Exports are serialized: one runs to completion before another may start,
/// enforced with a busy flag rather than a lock because all calls come from
/// the single interaction thread.
#[derive(Debug, Default)]
pub struct Exporter {
    busy: bool,
}

impl Exporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Write the full drawing as a cropped SVG document.
    pub fn export_svg(&mut self, drawing: &Drawing, out_path: &Path) -> InkResult<()> {
        self.begin()?;
        let result = self.write_svg(drawing, out_path);
        self.busy = false;
        result
    }

    /// Render and encode the stroke-reveal animation as a GIF.
    pub fn export_gif(
        &mut self,
        drawing: &Drawing,
        canvas: Canvas,
        replay: &ReplayConfig,
        cfg: &GifConfig,
        out_path: &Path,
    ) -> InkResult<GifStats> {
        self.begin()?;
        let result = self.write_gif(drawing, canvas, replay, cfg, out_path);
        self.busy = false;
        result
    }

    fn begin(&mut self) -> InkResult<()> {
        if self.busy {
            return Err(InkError::export("an export is already in progress"));
        }
        self.busy = true;
        Ok(())
    }

    fn write_svg(&self, drawing: &Drawing, out_path: &Path) -> InkResult<()> {
        let svg = svg_document(drawing)?;
        ensure_parent_dir(out_path)?;
        std::fs::write(out_path, svg)
            .with_context(|| format!("failed to write '{}'", out_path.display()))?;
        info!(path = %out_path.display(), "svg exported");
        Ok(())
    }

    fn write_gif(
        &self,
        drawing: &Drawing,
        canvas: Canvas,
        replay: &ReplayConfig,
        cfg: &GifConfig,
        out_path: &Path,
    ) -> InkResult<GifStats> {
        if drawing.is_empty() {
            return Err(InkError::validation("cannot export an empty drawing"));
        }
        ensure_parent_dir(out_path)?;
        let file = std::fs::File::create(out_path)
            .with_context(|| format!("failed to create '{}'", out_path.display()))?;
        let stats = encode_gif(drawing, canvas, replay, cfg, std::io::BufWriter::new(file))?;
        info!(
            path = %out_path.display(),
            frames = stats.frames,
            width = stats.width,
            height = stats.height,
            "gif exported"
        );
        Ok(stats)
    }
}

/// Encode the replay into `writer` frame by frame.
///
/// The crop rectangle comes from one wobble-free full-reveal render of the
/// drawing and stays fixed for every frame; per-frame fractions are derived by
/// the same allocation and easing rules as live replay ticks. Frames are
/// generated and appended strictly in order, and any render or encode failure
/// aborts the export so no artifact with missing frames is produced.
pub fn encode_gif<W: Write>(
    drawing: &Drawing,
    canvas: Canvas,
    replay: &ReplayConfig,
    cfg: &GifConfig,
    writer: W,
) -> InkResult<GifStats> {
    if drawing.is_empty() {
        return Err(InkError::validation("cannot export an empty drawing"));
    }
    if cfg.fps == 0 {
        return Err(InkError::validation("gif fps must be > 0"));
    }

    let full = render_drawing(drawing, &RenderParams::full(canvas), None)?;
    let bounds = content_bounds(&full)
        .ok_or_else(|| InkError::export("drawing produced no visible pixels"))?;

    let crop = Canvas {
        width: bounds.width() + 2 * CROP_PADDING_PX,
        height: bounds.height() + 2 * CROP_PADDING_PX,
    };
    let offset = Vec2::new(
        CROP_PADDING - f64::from(bounds.min_x),
        CROP_PADDING - f64::from(bounds.min_y),
    );

    // The public field can hold any value; frame counts only ever come from
    // the supported duration range.
    let duration = replay
        .duration_secs
        .clamp(MIN_DURATION_SECS, MAX_DURATION_SECS);
    let total_frames = (duration * f64::from(cfg.fps)).ceil().max(1.0) as u32;
    let delay = Delay::from_numer_denom_ms(1000, cfg.fps);
    debug!(
        total_frames,
        width = crop.width,
        height = crop.height,
        "gif frame generation start"
    );

    let mut wobble = (replay.jitter > 0.0)
        .then(|| Wobble::new(replay.jitter, Rng64::new(cfg.wobble_seed)));

    let mut encoder = GifEncoder::new_with_speed(writer, 10);
    encoder
        .set_repeat(Repeat::Infinite)
        .map_err(|e| InkError::export(format!("gif encoder setup failed: {e}")))?;

    for frame_idx in 0..=total_frames {
        let raw_progress = f64::from(frame_idx) / f64::from(total_frames);
        let fractions = stroke_fractions(drawing, replay, raw_progress);
        let params = RenderParams {
            canvas: crop,
            fractions: Some(&fractions),
            offset,
            background: cfg.background,
        };
        let rendered = render_drawing(drawing, &params, wobble.as_mut())?;
        let buffer = RgbaImage::from_raw(crop.width, crop.height, rendered.to_straight_rgba())
            .ok_or_else(|| InkError::export("frame buffer size mismatch"))?;
        encoder
            .encode_frame(Frame::from_parts(buffer, 0, 0, delay))
            .map_err(|e| InkError::export(format!("gif frame {frame_idx} failed: {e}")))?;
    }

    drop(encoder);
    Ok(GifStats {
        frames: total_frames + 1,
        width: crop.width,
        height: crop.height,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/export/gif.rs"]
mod tests;
