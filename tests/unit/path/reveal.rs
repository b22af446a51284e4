use super::*;

use kurbo::PathEl;

use crate::foundation::core::Rgba8;
use crate::model::drawing::Point;

fn line_stroke(n: usize) -> Stroke {
    let points = (0..n)
        .map(|i| Point::new(i as f64 * 10.0, (i % 2) as f64 * 5.0, 0.0))
        .collect();
    Stroke::from_points(Rgba8::BLACK, 4.0, points).unwrap()
}

#[test]
fn visible_count_rounds_up() {
    assert_eq!(visible_count(0, 1.0), 0);
    assert_eq!(visible_count(10, 0.0), 0);
    assert_eq!(visible_count(10, 0.01), 1);
    assert_eq!(visible_count(10, 0.5), 5);
    assert_eq!(visible_count(10, 0.55), 6);
    assert_eq!(visible_count(10, 1.0), 10);
    assert_eq!(visible_count(3, 1.0), 3);
}

#[test]
fn zero_fraction_yields_empty_path() {
    let stroke = line_stroke(10);
    assert!(reveal_path(&stroke, 0.0, None).elements().is_empty());
}

#[test]
fn single_visible_point_is_a_bare_move() {
    let stroke = line_stroke(10);
    let path = reveal_path(&stroke, 0.05, None);
    assert_eq!(path.elements().len(), 1);
    assert!(matches!(path.elements()[0], PathEl::MoveTo(_)));
}

#[test]
fn two_points_become_move_and_line() {
    let stroke = line_stroke(2);
    let path = full_path(&stroke);
    assert_eq!(path.elements().len(), 2);
    assert!(matches!(path.elements()[0], PathEl::MoveTo(p) if p == kurbo::Point::new(0.0, 0.0)));
    assert!(matches!(path.elements()[1], PathEl::LineTo(p) if p == kurbo::Point::new(10.0, 5.0)));
}

#[test]
fn later_points_become_midpoint_anchored_quads() {
    let stroke = line_stroke(5);
    let path = full_path(&stroke);
    // move + line + one quad per remaining point
    assert_eq!(path.elements().len(), 5);
    let points = stroke.points();
    for (i, el) in path.elements().iter().enumerate().skip(2) {
        let PathEl::QuadTo(anchor, end) = *el else {
            panic!("element {i} is not a quad: {el:?}");
        };
        assert_eq!(anchor, points[i - 2].pos().midpoint(points[i - 1].pos()));
        assert_eq!(end, points[i].pos());
    }
}

#[test]
fn growing_fraction_only_appends_segments() {
    let stroke = line_stroke(12);
    let mut prev = reveal_path(&stroke, 0.0, None);
    for step in 1..=12 {
        let f = step as f64 / 12.0;
        let path = reveal_path(&stroke, f, None);
        assert!(path.elements().len() >= prev.elements().len());
        assert_eq!(&path.elements()[..prev.elements().len()], prev.elements());
        prev = path;
    }
}

#[test]
fn wobble_is_deterministic_for_a_seed() {
    let stroke = line_stroke(8);
    let mut a = Wobble::new(3.0, Rng64::new(123));
    let mut b = Wobble::new(3.0, Rng64::new(123));
    let pa = reveal_path(&stroke, 1.0, Some(&mut a));
    let pb = reveal_path(&stroke, 1.0, Some(&mut b));
    assert_eq!(pa.elements(), pb.elements());
}

#[test]
fn wobble_leaves_the_first_point_anchored() {
    // The sinusoidal phase is zero at index 0, so the start never moves.
    let stroke = line_stroke(8);
    let mut wobble = Wobble::new(5.0, Rng64::new(9));
    let path = reveal_path(&stroke, 1.0, Some(&mut wobble));
    let PathEl::MoveTo(start) = path.elements()[0] else {
        panic!("first element is not a move");
    };
    assert_eq!(start, stroke.points()[0].pos());
}

#[test]
fn zero_amplitude_wobble_is_a_passthrough() {
    let stroke = line_stroke(8);
    let mut wobble = Wobble::new(0.0, Rng64::new(4));
    let wobbled = reveal_path(&stroke, 1.0, Some(&mut wobble));
    assert_eq!(wobbled.elements(), full_path(&stroke).elements());
}
