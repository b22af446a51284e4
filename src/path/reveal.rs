use crate::foundation::core::BezPath;
use crate::foundation::rng::Rng64;
use crate::model::drawing::Stroke;

/// Replay wobble: a smooth sinusoidal perturbation applied to the visible
/// prefix each frame, seeded so exports stay deterministic.
#[derive(Clone, Copy, Debug)]
pub struct Wobble {
    pub amplitude: f64,
    pub rng: Rng64,
}

impl Wobble {
    pub fn new(amplitude: f64, rng: Rng64) -> Self {
        Self { amplitude, rng }
    }
}

/// Reconstruct the renderable curve for a stroke revealed up to fraction `f`.
///
/// The visible prefix is `ceil(len * f)` points. The first point becomes a
/// move-to and the second a line-to; every further point is a quadratic
/// segment anchored on the midpoint of the two points before it, which smooths
/// the polyline without storing control points. A prefix of one point is a
/// bare move-to (the renderer decides whether that is a dot or nothing); a
/// prefix of zero points is an empty path. Monotonic in `f`: growing `f` only
/// appends segments.
pub fn reveal_path(stroke: &Stroke, f: f64, wobble: Option<&mut Wobble>) -> BezPath {
    let points = stroke.points();
    let visible = visible_count(points.len(), f);
    let mut path = BezPath::new();
    if visible == 0 {
        return path;
    }

    let positions = match wobble {
        Some(w) if w.amplitude > 0.0 => wobbled_positions(stroke, visible, w),
        _ => points[..visible].iter().map(|p| p.pos()).collect(),
    };

    path.move_to(positions[0]);
    if let Some(&second) = positions.get(1) {
        path.line_to(second);
    }
    for i in 2..positions.len() {
        let anchor = positions[i - 2].midpoint(positions[i - 1]);
        path.quad_to(anchor, positions[i]);
    }
    path
}

/// The full stroke curve (`f = 1`).
pub fn full_path(stroke: &Stroke) -> BezPath {
    reveal_path(stroke, 1.0, None)
}

/// `ceil(len * f)` clamped to `[0, len]`.
pub fn visible_count(len: usize, f: f64) -> usize {
    if len == 0 {
        return 0;
    }
    let raw = (len as f64 * f).ceil();
    (raw.max(0.0) as usize).min(len)
}

fn wobbled_positions(stroke: &Stroke, visible: usize, wobble: &mut Wobble) -> Vec<kurbo::Point> {
    let points = stroke.points();
    let span = (visible.saturating_sub(1)).max(1) as f64;
    (0..visible)
        .map(|i| {
            let phase = (std::f64::consts::TAU * i as f64 / span).sin();
            let p = points[i];
            kurbo::Point::new(
                p.x + phase * wobble.amplitude * wobble.rng.next_centered(),
                p.y + phase * wobble.amplitude * wobble.rng.next_centered(),
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/path/reveal.rs"]
mod tests;
