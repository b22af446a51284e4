//! Inkreel captures freehand strokes, replays them as a deterministic
//! stroke-reveal animation, and exports the result as a cropped SVG or an
//! animated GIF.
//!
//! # Pipeline overview
//!
//! 1. **Capture**: pointer samples → [`PointSampler`] → [`StrokeStore`]
//!    (snapshot undo/redo over a [`Drawing`])
//! 2. **Replay**: [`Timeline`] ticks map elapsed time to per-stroke reveal
//!    fractions ([`stroke_fractions`]), sequentially or simultaneously, with
//!    easing and optional wobble
//! 3. **Reconstruct**: [`reveal_path`] turns a stroke prefix into a smoothed
//!    `kurbo::BezPath`
//! 4. **Render**: [`render_drawing`] rasterizes to premultiplied RGBA8 on the
//!    `vello_cpu` backend
//! 5. **Export**: [`Exporter`] crops to content bounds and writes SVG or
//!    delay-tagged GIF frames
//!
//! Everything that consumes randomness goes through the seeded [`Rng64`], so
//! replays and exports are reproducible.
#![forbid(unsafe_code)]

mod animation;
mod capture;
mod export;
mod foundation;
mod model;
mod path;
mod render;

pub use animation::ease::Ease;
pub use animation::timeline::{
    DEFAULT_DURATION_SECS, DEFAULT_FPS, MAX_DURATION_SECS, MIN_DURATION_SECS, ReplayConfig,
    ReplayHandle, TickFrame, Timeline, sequential_intervals, stroke_fractions, zero_fractions,
};
pub use capture::sampler::{PointSampler, Viewport};
pub use capture::store::StrokeStore;
pub use export::bbox::{PixelBounds, content_bounds};
pub use export::gif::{Exporter, GifConfig, GifStats, encode_gif, ensure_parent_dir};
pub use export::svg::{CROP_PADDING, CROP_PADDING_PX, svg_document};
pub use foundation::core::{Canvas, Rgba8};
pub use foundation::error::{InkError, InkResult};
pub use foundation::rng::Rng64;
pub use model::drawing::{
    DEFAULT_COLOR, DEFAULT_STROKE_WIDTH, Drawing, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, Point,
    Stroke, clamp_stroke_width,
};
pub use path::reveal::{Wobble, full_path, reveal_path, visible_count};
pub use render::cpu::{FrameRgba, RenderParams, render_drawing};
