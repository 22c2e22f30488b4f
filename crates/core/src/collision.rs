//! Collision engine - pairwise overlap tests
//!
//! Two tests are provided:
//!
//! - [`aabb_overlap`]: axis-aligned box test on `[position, position + size]`.
//!   Cheap, ignores rotation. Used for containment-style queries against
//!   unrotated regions (checkpoints, rooms, walls vs. the character).
//! - [`sat_overlap`]: oriented-rectangle test using the Separating Axis Theorem
//!   on the four corners produced by [`GameObject::corners`](crate::GameObject::corners).
//!
//! # SAT modes
//!
//! By default only the *tester's* edges are used as candidate axes
//! ([`SatMode::TesterEdges`]). For two rectangles this can report an overlap
//! that a full test would reject (a rotated shape whose own edge separates the
//! pair). [`SatMode::Symmetric`] also walks the other shape's edges and is exact
//! for convex quads.
//!
//! Corners are stored top-left, top-right, bottom-left, bottom-right; edges are
//! walked around the perimeter (TL→TR→BR→BL) so every axis is an edge normal
//! rather than a diagonal.

use crate::types::Vector2D;

/// Four rotated-rectangle vertices: top-left, top-right, bottom-left, bottom-right
pub type Corners = [Vector2D; 4];

/// Corner indices in perimeter order
const PERIMETER: [usize; 4] = [0, 1, 3, 2];

/// Which edges the SAT test draws its candidate axes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SatMode {
    /// Only the tester's own four edges
    #[default]
    TesterEdges,
    /// Edges of both shapes
    Symmetric,
}

/// Axis-aligned overlap of `[a_pos, a_pos + a_size]` and `[b_pos, b_pos + b_size]`.
///
/// Touching edges do not count as overlap.
pub fn aabb_overlap(a_pos: Vector2D, a_size: Vector2D, b_pos: Vector2D, b_size: Vector2D) -> bool {
    let left_a = a_pos.x;
    let right_a = a_pos.x + a_size.x;
    let top_a = a_pos.y;
    let bottom_a = a_pos.y + a_size.y;

    let left_b = b_pos.x;
    let right_b = b_pos.x + b_size.x;
    let top_b = b_pos.y;
    let bottom_b = b_pos.y + b_size.y;

    if bottom_a <= top_b {
        return false;
    }
    if top_a >= bottom_b {
        return false;
    }
    if right_a <= left_b {
        return false;
    }
    if left_a >= right_b {
        return false;
    }
    true
}

/// Inclusive point-in-box test, ignoring rotation.
pub fn point_in_box(x: f32, y: f32, position: Vector2D, size: Vector2D) -> bool {
    let in_x = x <= position.x + size.x && x >= position.x;
    let in_y = y <= position.y + size.y && y >= position.y;
    in_x && in_y
}

/// Candidate separating axes of a quad: one normal per perimeter edge.
///
/// Axes are not normalised; SAT only compares projections on the same axis.
pub fn edge_normals(corners: &Corners) -> [Vector2D; 4] {
    let mut axes = [Vector2D::ZERO; 4];
    for (i, axis) in axes.iter_mut().enumerate() {
        let current = corners[PERIMETER[i]];
        let next = corners[PERIMETER[(i + 1) % 4]];
        *axis = (next - current).perpendicular();
    }
    axes
}

/// Projection interval `(min, max)` of a quad onto an axis.
pub fn project(corners: &Corners, axis: Vector2D) -> (f32, f32) {
    corners
        .iter()
        .map(|c| c.dot(axis))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p), hi.max(p))
        })
}

/// Whether `axis` separates the two quads.
///
/// A zero axis (degenerate edge) projects both shapes onto a single point and
/// never separates.
pub fn separated_on(axis: Vector2D, a: &Corners, b: &Corners) -> bool {
    let (min_a, max_a) = project(a, axis);
    let (min_b, max_b) = project(b, axis);
    max_a < min_b || max_b < min_a
}

/// SAT overlap test with `a` as the tester.
pub fn sat_overlap(a: &Corners, b: &Corners, mode: SatMode) -> bool {
    if edge_normals(a).iter().any(|&axis| separated_on(axis, a, b)) {
        return false;
    }
    if mode == SatMode::Symmetric && edge_normals(b).iter().any(|&axis| separated_on(axis, a, b)) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32, side: f32) -> Corners {
        [
            Vector2D::new(x, y),
            Vector2D::new(x + side, y),
            Vector2D::new(x, y + side),
            Vector2D::new(x + side, y + side),
        ]
    }

    #[test]
    fn aabb_touching_edges_do_not_overlap() {
        let size = Vector2D::new(10.0, 10.0);
        assert!(!aabb_overlap(Vector2D::ZERO, size, Vector2D::new(10.0, 0.0), size));
        assert!(!aabb_overlap(Vector2D::ZERO, size, Vector2D::new(0.0, 10.0), size));
        assert!(aabb_overlap(Vector2D::ZERO, size, Vector2D::new(9.5, 9.5), size));
    }

    #[test]
    fn point_in_box_is_inclusive() {
        let pos = Vector2D::new(10.0, 10.0);
        let size = Vector2D::new(5.0, 5.0);
        assert!(point_in_box(10.0, 10.0, pos, size));
        assert!(point_in_box(15.0, 15.0, pos, size));
        assert!(!point_in_box(15.1, 12.0, pos, size));
        assert!(!point_in_box(12.0, 9.9, pos, size));
    }

    #[test]
    fn edge_normals_are_axis_aligned_for_unrotated_quads() {
        let normals = edge_normals(&square(0.0, 0.0, 4.0));
        for n in normals {
            assert!(n.x == 0.0 || n.y == 0.0, "diagonal axis {n}");
            assert!(!n.is_zero());
        }
    }

    #[test]
    fn projection_interval() {
        let (lo, hi) = project(&square(2.0, 3.0, 4.0), Vector2D::new(1.0, 0.0));
        assert_eq!((lo, hi), (2.0, 6.0));
    }

    #[test]
    fn sat_separated_and_overlapping_squares() {
        let a = square(0.0, 0.0, 10.0);
        assert!(!sat_overlap(&a, &square(20.0, 0.0, 10.0), SatMode::TesterEdges));
        assert!(sat_overlap(&a, &square(5.0, 5.0, 10.0), SatMode::TesterEdges));
        assert!(sat_overlap(&a, &square(5.0, 5.0, 10.0), SatMode::Symmetric));
    }

    #[test]
    fn degenerate_tester_never_separates_on_its_own_axes() {
        let point = [Vector2D::new(50.0, 50.0); 4];
        let far = square(0.0, 0.0, 10.0);
        // Every tester axis is zero, so the tester-only test cannot reject.
        assert!(sat_overlap(&point, &far, SatMode::TesterEdges));
        // The other shape's axes do separate them.
        assert!(!sat_overlap(&point, &far, SatMode::Symmetric));
    }
}
