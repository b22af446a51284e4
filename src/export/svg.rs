use std::fmt::Write as _;

use kurbo::Shape as _;

use crate::foundation::core::Rect;
use crate::foundation::error::{InkError, InkResult};
use crate::model::drawing::Drawing;
use crate::path::reveal::full_path;

/// Padding added on every side of the cropped view rectangle, in pixels.
pub const CROP_PADDING_PX: u32 = 10;
/// [`CROP_PADDING_PX`] as the coordinate-space padding.
pub const CROP_PADDING: f64 = CROP_PADDING_PX as f64;

/// Serialize the full drawing as a self-contained SVG document, one `<path>`
/// per stroke with round caps/joins, cropped to the geometric bounds of all
/// stroke paths plus [`CROP_PADDING`] per side.
///
/// Geometric (not raster) bounds keep the view rectangle exact regardless of
/// stroke width: a straight stroke from (0,0) to (100,0) yields
/// `viewBox="-10 -10 120 20"`.
pub fn svg_document(drawing: &Drawing) -> InkResult<String> {
    if drawing.is_empty() {
        return Err(InkError::validation("cannot export an empty drawing"));
    }

    let paths: Vec<(kurbo::BezPath, &crate::model::drawing::Stroke)> = drawing
        .strokes
        .iter()
        .map(|stroke| (full_path(stroke), stroke))
        .collect();

    let bounds = paths
        .iter()
        .map(|(path, stroke)| {
            if stroke.is_dot() {
                // A bare move-to has no segments; bound the dot's center.
                let p = stroke.points()[0].pos();
                Rect::from_points(p, p)
            } else {
                path.bounding_box()
            }
        })
        .reduce(|a, b| a.union(b))
        .unwrap_or(Rect::ZERO);

    let view_x = bounds.x0 - CROP_PADDING;
    let view_y = bounds.y0 - CROP_PADDING;
    let view_w = bounds.width() + 2.0 * CROP_PADDING;
    let view_h = bounds.height() + 2.0 * CROP_PADDING;

    let mut svg = String::with_capacity(1024);
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{view_w}\" height=\"{view_h}\" viewBox=\"{view_x} {view_y} {view_w} {view_h}\">",
    );
    for (path, stroke) in &paths {
        let _ = write!(
            svg,
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
            path.to_svg(),
            stroke.color.to_hex(),
            stroke.width,
        );
    }
    svg.push_str("</svg>");
    Ok(svg)
}

#[cfg(test)]
#[path = "../../tests/unit/export/svg.rs"]
mod tests;
