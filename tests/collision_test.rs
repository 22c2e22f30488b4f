//! Collision properties on rotated and unrotated objects.

use harold_hoarder::core::{aabb_overlap, sat_overlap, GameObject, SatMode};
use harold_hoarder::types::Vector2D;

fn object(x: f32, y: f32, w: f32, h: f32, rotation: f32) -> GameObject {
    let mut o = GameObject::with_details(
        Vector2D::new(x, y),
        Vector2D::new(w, h),
        Vector2D::ZERO,
        "Probe",
        "",
    );
    o.set_rotation(rotation);
    o
}

#[test]
fn aabb_is_symmetric() {
    let cases = [
        ((0.0, 0.0, 10.0, 10.0), (5.0, 5.0, 10.0, 10.0)),
        ((0.0, 0.0, 10.0, 10.0), (10.0, 0.0, 10.0, 10.0)),
        ((0.0, 0.0, 50.0, 5.0), (20.0, -20.0, 5.0, 50.0)),
        ((-30.0, -30.0, 10.0, 10.0), (100.0, 100.0, 1.0, 1.0)),
    ];
    for ((ax, ay, aw, ah), (bx, by, bw, bh)) in cases {
        let a = object(ax, ay, aw, ah, 0.0);
        let b = object(bx, by, bw, bh, 0.0);
        assert_eq!(a.has_collision(&b), b.has_collision(&a));
    }
}

#[test]
fn aabb_touching_edges_do_not_overlap() {
    let size = Vector2D::new(10.0, 10.0);
    assert!(!aabb_overlap(Vector2D::ZERO, size, Vector2D::new(10.0, 0.0), size));
    assert!(!aabb_overlap(Vector2D::ZERO, size, Vector2D::new(0.0, 10.0), size));
    assert!(aabb_overlap(Vector2D::ZERO, size, Vector2D::new(9.5, 9.5), size));
}

#[test]
fn unrotated_corners_use_the_quarter_size_anchor() {
    let corners = object(10.0, 10.0, 20.0, 10.0, 0.0).corners();
    assert_eq!(
        corners,
        [
            Vector2D::new(5.0, 7.5),
            Vector2D::new(25.0, 7.5),
            Vector2D::new(5.0, 17.5),
            Vector2D::new(25.0, 17.5),
        ]
    );
}

#[test]
fn rotation_wraps_into_range() {
    let mut o = object(0.0, 0.0, 10.0, 10.0, 350.0);
    o.increase_rotation(20.0);
    assert!((o.rotation() - 10.0).abs() < 1e-4);

    o.decrease_rotation(30.0);
    assert!((o.rotation() - 340.0).abs() < 1e-4);

    o.set_rotation(360.0);
    assert_eq!(o.rotation(), 0.0);
}

#[test]
fn sat_unrotated_neighbours() {
    let a = object(0.0, 0.0, 10.0, 10.0, 0.0);
    let beside = object(20.0, 0.0, 10.0, 10.0, 0.0);
    let across = object(5.0, 5.0, 10.0, 10.0, 0.0);

    assert!(!a.has_corner_collision(&beside.corners()));
    assert!(!beside.has_corner_collision(&a.corners()));
    assert!(a.has_corner_collision(&across.corners()));
    assert!(across.has_corner_collision(&a.corners()));
}

#[test]
fn sat_separated_and_overlapping() {
    let a = object(0.0, 0.0, 10.0, 10.0, 0.0);
    let far = object(100.0, 100.0, 10.0, 10.0, 30.0);
    let near = object(4.0, 4.0, 10.0, 10.0, 30.0);

    for mode in [SatMode::TesterEdges, SatMode::Symmetric] {
        assert!(!sat_overlap(&a.corners(), &far.corners(), mode));
        assert!(!sat_overlap(&far.corners(), &a.corners(), mode));
        assert!(sat_overlap(&a.corners(), &near.corners(), mode));
        assert!(sat_overlap(&near.corners(), &a.corners(), mode));
    }
}

#[test]
fn tester_edges_can_disagree_with_argument_order() {
    let square = object(0.0, 0.0, 10.0, 10.0, 0.0);
    let diamond = object(11.5, 11.5, 10.0, 10.0, 45.0);

    // The square's axes never see the gap along the diagonal.
    assert!(square.has_corner_collision_with(&diamond.corners(), SatMode::TesterEdges));
    assert!(!diamond.has_corner_collision_with(&square.corners(), SatMode::TesterEdges));

    assert!(!square.has_corner_collision_with(&diamond.corners(), SatMode::Symmetric));
    assert!(!diamond.has_corner_collision_with(&square.corners(), SatMode::Symmetric));
}

#[test]
fn degenerate_shapes_never_separate_on_zero_axes() {
    let point = object(5.0, 5.0, 0.0, 0.0, 0.0);
    let a = object(0.0, 0.0, 10.0, 10.0, 0.0);
    assert!(sat_overlap(&point.corners(), &a.corners(), SatMode::TesterEdges));
}
