use super::*;

use crate::foundation::rng::Rng64;
use crate::model::drawing::{Point, Stroke};

fn horizontal_stroke(y: f64, width: f64) -> Stroke {
    let points = (0..9)
        .map(|i| Point::new(4.0 + i as f64, y, 0.0))
        .collect();
    Stroke::from_points(Rgba8::opaque(255, 0, 0), width, points).unwrap()
}

fn one_stroke_drawing(stroke: Stroke) -> Drawing {
    Drawing {
        strokes: vec![stroke],
    }
}

#[test]
fn full_render_covers_the_stroke_and_nothing_else() {
    let drawing = one_stroke_drawing(horizontal_stroke(8.0, 4.0));
    let canvas = Canvas::new(16, 16).unwrap();
    let frame = render_drawing(&drawing, &RenderParams::full(canvas), None).unwrap();

    assert_eq!(frame.width, 16);
    assert_eq!(frame.height, 16);
    assert_eq!(frame.data.len(), 16 * 16 * 4);
    assert_eq!(frame.alpha_at(8, 8), 255);
    assert_eq!(frame.alpha_at(0, 0), 0);
    assert_eq!(frame.alpha_at(15, 15), 0);
}

#[test]
fn zero_fractions_render_nothing() {
    let drawing = one_stroke_drawing(horizontal_stroke(8.0, 4.0));
    let canvas = Canvas::new(16, 16).unwrap();
    let fractions = [0.0];
    let params = RenderParams {
        canvas,
        fractions: Some(&fractions),
        offset: Vec2::ZERO,
        background: None,
    };
    let frame = render_drawing(&drawing, &params, None).unwrap();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn partial_fraction_reveals_only_a_prefix() {
    let drawing = one_stroke_drawing(horizontal_stroke(8.0, 2.0));
    let canvas = Canvas::new(16, 16).unwrap();
    let fractions = [0.25];
    let params = RenderParams {
        canvas,
        fractions: Some(&fractions),
        offset: Vec2::ZERO,
        background: None,
    };
    let frame = render_drawing(&drawing, &params, None).unwrap();
    // ceil(9 * 0.25) = 3 points: x in [4, 6] plus a round cap.
    assert!(frame.alpha_at(5, 8) > 0);
    assert_eq!(frame.alpha_at(12, 8), 0);
}

#[test]
fn single_point_stroke_renders_a_dot() {
    let stroke = Stroke::new(Rgba8::BLACK, 6.0, Point::new(8.0, 8.0, 0.0)).unwrap();
    let drawing = one_stroke_drawing(stroke);
    let canvas = Canvas::new(16, 16).unwrap();
    let frame = render_drawing(&drawing, &RenderParams::full(canvas), None).unwrap();
    assert_eq!(frame.alpha_at(8, 8), 255);
    // Radius is width / 2 = 3, so (8, 3) is outside the dot.
    assert_eq!(frame.alpha_at(8, 3), 0);
}

#[test]
fn offset_translates_the_drawing() {
    let stroke = Stroke::new(Rgba8::BLACK, 4.0, Point::new(0.0, 0.0, 0.0)).unwrap();
    let drawing = one_stroke_drawing(stroke);
    let canvas = Canvas::new(16, 16).unwrap();
    let params = RenderParams {
        canvas,
        fractions: None,
        offset: Vec2::new(8.0, 8.0),
        background: None,
    };
    let frame = render_drawing(&drawing, &params, None).unwrap();
    assert_eq!(frame.alpha_at(8, 8), 255);
}

#[test]
fn background_fills_uncovered_pixels() {
    let drawing = one_stroke_drawing(horizontal_stroke(8.0, 2.0));
    let canvas = Canvas::new(16, 16).unwrap();
    let params = RenderParams {
        canvas,
        fractions: None,
        offset: Vec2::ZERO,
        background: Some(Rgba8::opaque(255, 255, 255)),
    };
    let frame = render_drawing(&drawing, &params, None).unwrap();
    assert_eq!(frame.alpha_at(0, 0), 255);
    let corner = &frame.data[..4];
    assert_eq!(corner, &[255, 255, 255, 255]);
}

#[test]
fn wobble_changes_pixels_deterministically() {
    let drawing = one_stroke_drawing(horizontal_stroke(8.0, 2.0));
    let canvas = Canvas::new(16, 16).unwrap();
    let params = RenderParams::full(canvas);

    let mut w1 = Wobble::new(2.0, Rng64::new(5));
    let mut w2 = Wobble::new(2.0, Rng64::new(5));
    let a = render_drawing(&drawing, &params, Some(&mut w1)).unwrap();
    let b = render_drawing(&drawing, &params, Some(&mut w2)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn oversized_surfaces_are_rejected() {
    let drawing = one_stroke_drawing(horizontal_stroke(8.0, 2.0));
    let canvas = Canvas {
        width: 70_000,
        height: 16,
    };
    assert!(render_drawing(&drawing, &RenderParams::full(canvas), None).is_err());
    let canvas = Canvas {
        width: 0,
        height: 16,
    };
    assert!(render_drawing(&drawing, &RenderParams::full(canvas), None).is_err());
}

#[test]
fn alpha_lookup_outside_the_frame_is_zero() {
    let frame = FrameRgba {
        width: 2,
        height: 2,
        data: vec![255; 16],
    };
    assert_eq!(frame.alpha_at(0, 0), 255);
    assert_eq!(frame.alpha_at(2, 0), 0);
    assert_eq!(frame.alpha_at(0, 2), 0);
}

#[test]
fn unpremultiply_restores_straight_channels() {
    let frame = FrameRgba {
        width: 2,
        height: 1,
        data: vec![128, 0, 50, 128, 0, 0, 0, 0],
    };
    let straight = frame.to_straight_rgba();
    assert_eq!(&straight[..4], &[255, 0, 100, 128]);
    assert_eq!(&straight[4..], &[0, 0, 0, 0]);
}
