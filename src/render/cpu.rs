use kurbo::Shape as _;

use crate::foundation::core::{Canvas, Rgba8, Vec2};
use crate::foundation::error::{InkError, InkResult};
use crate::model::drawing::Drawing;
use crate::path::reveal::{Wobble, reveal_path, visible_count};

/// Premultiplied RGBA8 pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRgba {
    /// Alpha of the pixel at `(x, y)`; 0 outside the frame.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        let idx = ((y as usize * self.width as usize) + x as usize) * 4;
        self.data[idx + 3]
    }

    /// Convert to straight (non-premultiplied) RGBA8 for encoders that expect
    /// it, such as the GIF and PNG writers.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let a = px[3] as u32;
            if a == 0 {
                out.extend_from_slice(&[0, 0, 0, 0]);
            } else {
                let un = |c: u8| (((c as u32) * 255 + a / 2) / a).min(255) as u8;
                out.extend_from_slice(&[un(px[0]), un(px[1]), un(px[2]), px[3]]);
            }
        }
        out
    }
}

/// Inputs for one render pass. The renderer is a pure function of these plus
/// the drawing; it holds no state between frames.
#[derive(Clone, Copy, Debug)]
pub struct RenderParams<'a> {
    /// Output surface dimensions.
    pub canvas: Canvas,
    /// Per-stroke reveal fractions in drawing order; `None` renders every
    /// stroke fully.
    pub fractions: Option<&'a [f64]>,
    /// Additive translation (viewport pan, or the export crop translation).
    pub offset: Vec2,
    /// Opaque background; `None` leaves the surface transparent.
    pub background: Option<Rgba8>,
}

impl<'a> RenderParams<'a> {
    pub fn full(canvas: Canvas) -> Self {
        Self {
            canvas,
            fractions: None,
            offset: Vec2::ZERO,
            background: None,
        }
    }
}

/// Rasterize the drawing (or its animated partial reveal) to premultiplied
/// RGBA8. Strokes draw in insertion order with round caps and joins; a
/// revealed prefix of one point renders as a dot of radius width/2.
pub fn render_drawing(
    drawing: &Drawing,
    params: &RenderParams<'_>,
    mut wobble: Option<&mut Wobble>,
) -> InkResult<FrameRgba> {
    let (width, height) = surface_dims_u16(params.canvas)?;
    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    if let Some(bg) = params.background {
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(params.canvas.width),
            f64::from(params.canvas.height),
        ));
    }

    let translate = vello_cpu::kurbo::Affine::translate(vello_cpu::kurbo::Vec2::new(
        params.offset.x,
        params.offset.y,
    ));
    ctx.set_transform(translate);

    for (i, stroke) in drawing.strokes.iter().enumerate() {
        let f = params
            .fractions
            .map(|fs| fs.get(i).copied().unwrap_or(0.0))
            .unwrap_or(1.0);
        let visible = visible_count(stroke.len(), f);
        if visible == 0 {
            continue;
        }

        let color = stroke.color;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));

        let outline = if visible == 1 {
            // Degenerate dot. Wobble is a no-op at index 0 (sin(0) phase).
            let center = stroke.points()[0].pos();
            kurbo::Circle::new(center, stroke.width / 2.0).to_path(0.1)
        } else {
            let path = reveal_path(stroke, f, wobble.as_deref_mut());
            let style = kurbo::Stroke::new(stroke.width)
                .with_caps(kurbo::Cap::Round)
                .with_join(kurbo::Join::Round);
            kurbo::stroke(
                path.elements().iter().copied(),
                &style,
                &kurbo::StrokeOpts::default(),
                0.25,
            )
        };
        ctx.fill_path(&bezpath_to_cpu(&outline));
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);

    Ok(FrameRgba {
        width: params.canvas.width,
        height: params.canvas.height,
        data: pixmap.data_as_u8_slice().to_vec(),
    })
}

fn surface_dims_u16(canvas: Canvas) -> InkResult<(u16, u16)> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(InkError::render("surface dimensions must be non-zero"));
    }
    let width: u16 = canvas
        .width
        .try_into()
        .map_err(|_| InkError::render("surface width exceeds u16"))?;
    let height: u16 = canvas
        .height
        .try_into()
        .map_err(|_| InkError::render("surface height exceeds u16"))?;
    Ok((width, height))
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
