use super::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y, 0.0)
}

#[test]
fn stroke_starts_with_one_point() {
    let stroke = Stroke::new(Rgba8::BLACK, 4.0, p(1.0, 2.0)).unwrap();
    assert_eq!(stroke.len(), 1);
    assert!(stroke.is_dot());
    assert_eq!(stroke.points()[0], p(1.0, 2.0));
}

#[test]
fn stroke_rejects_nonpositive_width() {
    assert!(Stroke::new(Rgba8::BLACK, 0.0, p(0.0, 0.0)).is_err());
    assert!(Stroke::new(Rgba8::BLACK, -1.0, p(0.0, 0.0)).is_err());
    assert!(Stroke::new(Rgba8::BLACK, f64::NAN, p(0.0, 0.0)).is_err());
}

#[test]
fn from_points_rejects_empty() {
    assert!(Stroke::from_points(Rgba8::BLACK, 4.0, Vec::new()).is_err());
    let stroke = Stroke::from_points(Rgba8::BLACK, 4.0, vec![p(0.0, 0.0), p(1.0, 1.0)]).unwrap();
    assert_eq!(stroke.len(), 2);
    assert!(!stroke.is_dot());
}

#[test]
fn pushing_grows_the_point_sequence() {
    let mut stroke = Stroke::new(Rgba8::BLACK, 4.0, p(0.0, 0.0)).unwrap();
    stroke.push(p(1.0, 0.0));
    stroke.push(p(2.0, 0.0));
    assert_eq!(stroke.len(), 3);
    assert!(!stroke.is_dot());
}

#[test]
fn drawing_counts_points_across_strokes() {
    let mut drawing = Drawing::new();
    assert!(drawing.is_empty());
    assert_eq!(drawing.total_points(), 0);

    drawing.strokes.push(
        Stroke::from_points(Rgba8::BLACK, 4.0, vec![p(0.0, 0.0); 10]).unwrap(),
    );
    drawing.strokes.push(
        Stroke::from_points(Rgba8::BLACK, 4.0, vec![p(0.0, 0.0); 30]).unwrap(),
    );
    assert_eq!(drawing.len(), 2);
    assert_eq!(drawing.total_points(), 40);
}

#[test]
fn width_clamps_to_supported_range() {
    assert_eq!(clamp_stroke_width(0.2), MIN_STROKE_WIDTH);
    assert_eq!(clamp_stroke_width(4.0), 4.0);
    assert_eq!(clamp_stroke_width(99.0), MAX_STROKE_WIDTH);
}

#[test]
fn default_color_parses() {
    assert_eq!(
        Rgba8::parse(DEFAULT_COLOR).unwrap(),
        Rgba8::opaque(0x1e, 0x00, 0xd2)
    );
}

#[test]
fn drawing_round_trips_through_json() {
    let mut drawing = Drawing::new();
    drawing.strokes.push(
        Stroke::from_points(
            Rgba8::parse(DEFAULT_COLOR).unwrap(),
            DEFAULT_STROKE_WIDTH,
            vec![Point::new(0.0, 0.0, 0.0), Point::new(10.0, 5.0, 0.016)],
        )
        .unwrap(),
    );
    let json = serde_json::to_string(&drawing).unwrap();
    let back: Drawing = serde_json::from_str(&json).unwrap();
    assert_eq!(back, drawing);
}
