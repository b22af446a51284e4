use tracing::debug;

use crate::animation::ease::Ease;
use crate::model::drawing::Drawing;

/// Replay duration bounds in seconds; out-of-range requests are ignored.
pub const MIN_DURATION_SECS: f64 = 0.1;
pub const MAX_DURATION_SECS: f64 = 30.0;
/// Default replay duration.
pub const DEFAULT_DURATION_SECS: f64 = 5.0;
/// Frame rate used for raster-sequence export.
pub const DEFAULT_FPS: u32 = 30;

/// How a replay distributes progress across strokes over its duration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReplayConfig {
    /// Total replay duration in seconds. [`ReplayConfig::set_duration_secs`]
    /// keeps it within `[0.1, 30]`; consumers that derive frame counts clamp
    /// direct writes back into that range.
    pub duration_secs: f64,
    /// Reveal all strokes in lockstep instead of one after another.
    pub simultaneous: bool,
    /// Easing applied to global progress, and again to each stroke's local
    /// progress in sequential mode.
    pub ease: Ease,
    /// Replay wobble amplitude in pixels; 0 disables it.
    pub jitter: f64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            simultaneous: false,
            ease: Ease::default(),
            jitter: 0.0,
        }
    }
}

impl ReplayConfig {
    /// Accept a duration request. Values outside `[0.1, 30]` are ignored and
    /// the prior value retained; accepted values are rounded to one decimal.
    pub fn set_duration_secs(&mut self, secs: f64) {
        if (MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&secs) {
            self.duration_secs = (secs * 10.0).round() / 10.0;
        }
    }
}

/// The half-open `[start, end)` share of the progress axis each stroke owns in
/// sequential mode, proportional to its point count. Interval widths cover the
/// axis exactly: consecutive starts and ends telescope from 0 to 1.
pub fn sequential_intervals(drawing: &Drawing) -> Vec<(f64, f64)> {
    let total = drawing.total_points();
    if total == 0 {
        return Vec::new();
    }
    let total = total as f64;
    let mut cumulative = 0usize;
    drawing
        .strokes
        .iter()
        .map(|stroke| {
            let start = cumulative as f64 / total;
            cumulative += stroke.len();
            let end = cumulative as f64 / total;
            (start, end)
        })
        .collect()
}

/// Per-stroke reveal fractions for a raw (un-eased) progress value in `[0, 1]`.
///
/// The same mapping drives live replay ticks and GIF export frames. Global
/// progress is eased once; in sequential mode each stroke's local progress
/// within its interval is passed through the easing function a second time.
/// The two-level easing is intentional: collapsing it changes the visible
/// reveal curve.
pub fn stroke_fractions(drawing: &Drawing, cfg: &ReplayConfig, raw_progress: f64) -> Vec<f64> {
    let progress = cfg.ease.apply(raw_progress);
    if cfg.simultaneous {
        return vec![progress; drawing.len()];
    }
    sequential_intervals(drawing)
        .into_iter()
        .map(|(start, end)| {
            let width = end - start;
            if width <= 0.0 {
                // Zero-width allocation: fully revealed once progress passes it.
                return if progress >= start { 1.0 } else { 0.0 };
            }
            let local = ((progress - start) / width).clamp(0.0, 1.0);
            cfg.ease.apply(local)
        })
        .collect()
}

/// All-hidden fractions, used to reset the display before the first tick.
pub fn zero_fractions(drawing: &Drawing) -> Vec<f64> {
    vec![0.0; drawing.len()]
}

/// Token for the currently scheduled replay. Ticks presented with a stale
/// handle are ignored, so cancellation is "stop ticking with this handle".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayHandle {
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ReplayState {
    Idle,
    Running { started_at: f64 },
}

/// One tick's output: the raw clock progress and the per-stroke fractions to
/// hand to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct TickFrame {
    pub raw_progress: f64,
    pub fractions: Vec<f64>,
    pub completed: bool,
}

/// Replay clock: Idle → Running → (Completed | Cancelled).
///
/// The caller owns the clock; `now` is in seconds from any monotonic origin.
/// Each tick is expected to come from the platform's frame callback and never
/// blocks. Completion returns the state to Idle with the final frame left on
/// display; starting a new replay cancels the previous handle.
#[derive(Clone, Debug)]
pub struct Timeline {
    pub config: ReplayConfig,
    state: ReplayState,
    generation: u64,
}

impl Timeline {
    pub fn new(config: ReplayConfig) -> Self {
        Self {
            config,
            state: ReplayState::Idle,
            generation: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, ReplayState::Running { .. })
    }

    /// Begin a replay at `now`. Returns `None` (and stays Idle) for an empty
    /// drawing. The caller should render [`zero_fractions`] synchronously
    /// before the first tick.
    pub fn start(&mut self, drawing: &Drawing, now: f64) -> Option<ReplayHandle> {
        if drawing.is_empty() {
            return None;
        }
        self.generation += 1;
        self.state = ReplayState::Running { started_at: now };
        debug!(generation = self.generation, "replay started");
        Some(ReplayHandle {
            generation: self.generation,
        })
    }

    /// Halt the current replay immediately. Any outstanding handle goes stale;
    /// no further ticks produce frames. The display is not reset here.
    pub fn cancel(&mut self) {
        if self.is_running() {
            debug!(generation = self.generation, "replay cancelled");
        }
        self.generation += 1;
        self.state = ReplayState::Idle;
    }

    /// Advance the replay clock. Returns `None` for stale handles or when not
    /// running; otherwise the frame to render. `completed` marks the final
    /// frame, after which the timeline is Idle again.
    pub fn tick(&mut self, handle: ReplayHandle, drawing: &Drawing, now: f64) -> Option<TickFrame> {
        if handle.generation != self.generation {
            return None;
        }
        let ReplayState::Running { started_at } = self.state else {
            return None;
        };
        let elapsed = (now - started_at).max(0.0);
        let raw_progress = (elapsed / self.config.duration_secs).min(1.0);
        let fractions = stroke_fractions(drawing, &self.config, raw_progress);
        let completed = raw_progress >= 1.0;
        if completed {
            self.state = ReplayState::Idle;
            debug!(generation = self.generation, "replay completed");
        }
        Some(TickFrame {
            raw_progress,
            fractions,
            completed,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
