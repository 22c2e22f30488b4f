//! GameObject - base entity with geometry, movement and hit-testing
//!
//! Position is the top-left of the unrotated box. Rotation is in degrees and
//! always normalised into `[0, 360)`.
//!
//! # Corner anchor
//!
//! [`GameObject::corners`] rotates the half-extents about
//! `position + half_size / 2` (a quarter of the size in from the top-left),
//! not about the geometric centre. Drawn sprites rotate about their true
//! centre, so the debug corner markers sit up-left of the sprite; existing
//! collision tuning depends on this anchor.

use tracing::warn;

use crate::collision::{aabb_overlap, point_in_box, sat_overlap, Corners, SatMode};
use crate::interaction;
use crate::render::{Renderer, Sprite, Texture, TextureLoader};
use crate::rng::SimpleRng;
use crate::types::{Flip, InputEvent, InteractionState, Vector2D, NAME_LENGTH};

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameObject {
    position: Vector2D,
    size: Vector2D,
    velocity: Vector2D,
    rotation: f32,
    name: String,
    texture_path: String,
    texture: Option<Texture>,
    state: InteractionState,
    toggle: bool,
    dragging: bool,
}

impl GameObject {
    /// Object at `position` with an explicit size and a random name
    pub fn new(position: Vector2D, size: Vector2D, rng: &mut SimpleRng) -> Self {
        Self::with_details(position, size, Vector2D::ZERO, rng.name(NAME_LENGTH), "")
    }

    /// Object spanning `top_left..bottom_right`
    pub fn from_bounds(
        top_left: Vector2D,
        bottom_right: Vector2D,
        texture_path: &str,
        rng: &mut SimpleRng,
    ) -> Self {
        Self::with_details(
            top_left,
            bottom_right - top_left,
            Vector2D::ZERO,
            rng.name(NAME_LENGTH),
            texture_path,
        )
    }

    pub fn with_details(
        position: Vector2D,
        size: Vector2D,
        velocity: Vector2D,
        name: impl Into<String>,
        texture_path: impl Into<String>,
    ) -> Self {
        Self {
            position,
            size: Vector2D::new(size.x.max(0.0), size.y.max(0.0)),
            velocity,
            rotation: 0.0,
            name: name.into(),
            texture_path: texture_path.into(),
            texture: None,
            state: InteractionState::MouseOut,
            toggle: false,
            dragging: false,
        }
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn set_position(&mut self, position: Vector2D) {
        self.position = position;
    }

    pub fn size(&self) -> Vector2D {
        self.size
    }

    /// Explicit resize; negative extents are clamped to zero.
    pub fn set_size(&mut self, size: Vector2D) {
        self.size = Vector2D::new(size.x.max(0.0), size.y.max(0.0));
    }

    pub fn velocity(&self) -> Vector2D {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vector2D) {
        self.velocity = velocity;
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = normalize_degrees(degrees);
    }

    pub fn increase_rotation(&mut self, amount: f32) {
        self.rotation = normalize_degrees(self.rotation + amount);
    }

    pub fn decrease_rotation(&mut self, amount: f32) {
        self.rotation = normalize_degrees(self.rotation - amount);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn texture_path(&self) -> &str {
        &self.texture_path
    }

    pub fn set_texture_path(&mut self, path: impl Into<String>) {
        self.texture_path = path.into();
    }

    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    pub fn current_state(&self) -> InteractionState {
        self.state
    }

    pub fn set_current_state(&mut self, state: InteractionState) {
        self.state = state;
    }

    pub fn is_toggled(&self) -> bool {
        self.toggle
    }

    pub fn set_toggle(&mut self, toggle: bool) {
        self.toggle = toggle;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn is_moving(&self) -> bool {
        !self.velocity.is_zero()
    }

    /// Geometric centre of the unrotated box
    pub fn center(&self) -> Vector2D {
        self.position + self.size / 2.0
    }

    /// Integrate position by velocity (one frame)
    pub fn apply_velocity(&mut self) {
        self.position += self.velocity;
    }

    /// Load the object's texture and take its dimensions as the object size.
    ///
    /// On failure the explicit size is kept and `false` is returned.
    pub fn load_texture(&mut self, loader: &mut dyn TextureLoader) -> bool {
        if self.texture_path.is_empty() {
            return false;
        }
        match loader.load(&self.texture_path) {
            Ok(texture) => {
                self.set_size(texture.size());
                self.texture = Some(texture);
                true
            }
            Err(err) => {
                warn!(object = %self.name, path = %self.texture_path, error = %err, "texture load failed");
                false
            }
        }
    }

    /// The four rotated corners: top-left, top-right, bottom-left, bottom-right.
    ///
    /// Recomputed on every call from position, size and rotation.
    pub fn corners(&self) -> Corners {
        let half_width = self.size.x / 2.0;
        let half_height = self.size.y / 2.0;

        let radians = self.rotation.to_radians();
        let cosine = radians.cos();
        let sine = radians.sin();

        let anchor = self.position + Vector2D::new(half_width / 2.0, half_height / 2.0);

        let top_left = Vector2D::new(
            -half_width * cosine + half_height * sine,
            -half_width * sine - half_height * cosine,
        );
        let top_right = Vector2D::new(
            half_width * cosine + half_height * sine,
            half_width * sine - half_height * cosine,
        );
        let bottom_left = Vector2D::new(
            -half_width * cosine - half_height * sine,
            -half_width * sine + half_height * cosine,
        );
        let bottom_right = Vector2D::new(
            half_width * cosine - half_height * sine,
            half_width * sine + half_height * cosine,
        );

        [
            anchor + top_left,
            anchor + top_right,
            anchor + bottom_left,
            anchor + bottom_right,
        ]
    }

    /// Axis-aligned overlap with another object, ignoring rotation
    pub fn has_collision(&self, other: &GameObject) -> bool {
        aabb_overlap(self.position, self.size, other.position, other.size)
    }

    /// Oriented overlap with another quad, testing this object's edges only
    pub fn has_corner_collision(&self, other: &Corners) -> bool {
        self.has_corner_collision_with(other, SatMode::TesterEdges)
    }

    pub fn has_corner_collision_with(&self, other: &Corners, mode: SatMode) -> bool {
        sat_overlap(&self.corners(), other, mode)
    }

    /// Point-in-box test on the unrotated bounds
    pub fn is_inside(&self, x: f32, y: f32) -> bool {
        point_in_box(x, y, self.position, self.size)
    }

    /// Reclassify the pointer state from an input event.
    ///
    /// Events without pointer meaning leave the state untouched.
    pub fn handle_pointer_event(&mut self, event: &InputEvent) -> InteractionState {
        if let Some(state) = interaction::classify(self, event) {
            self.state = state;
        }
        self.state
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.render_flipped(renderer, Flip::None);
    }

    pub fn render_flipped(&self, renderer: &mut dyn Renderer, flip: Flip) {
        if let Some(texture) = &self.texture {
            renderer.draw_sprite(&Sprite {
                texture,
                position: self.position,
                size: self.size,
                rotation: self.rotation,
                flip,
            });
        }

        if renderer.debug_overlay() {
            for corner in self.corners() {
                renderer.draw_marker(corner);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{FixedSizeLoader, RecordingRenderer};
    use anyhow::anyhow;

    fn object(x: f32, y: f32, w: f32, h: f32) -> GameObject {
        GameObject::with_details(
            Vector2D::new(x, y),
            Vector2D::new(w, h),
            Vector2D::ZERO,
            "obj",
            "./resources/box.png",
        )
    }

    fn assert_close(a: Vector2D, b: Vector2D) {
        assert!(
            (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3,
            "{a} != {b}"
        );
    }

    #[test]
    fn unrotated_corners_use_quarter_anchor() {
        let o = object(10.0, 10.0, 20.0, 10.0);
        let [tl, tr, bl, br] = o.corners();
        // Anchor is position + half_size / 2 = (15, 12.5).
        assert_close(tl, Vector2D::new(5.0, 7.5));
        assert_close(tr, Vector2D::new(25.0, 7.5));
        assert_close(bl, Vector2D::new(5.0, 17.5));
        assert_close(br, Vector2D::new(25.0, 17.5));

        assert!((tr.x - tl.x - 20.0).abs() < 1e-3);
        assert!((bl.y - tl.y - 10.0).abs() < 1e-3);
        assert_close((tl + br) / 2.0, Vector2D::new(15.0, 12.5));
    }

    #[test]
    fn corners_follow_rotation_immediately() {
        let mut o = object(0.0, 0.0, 20.0, 10.0);
        o.set_rotation(90.0);
        let [tl, tr, _, _] = o.corners();
        // Width now runs along y.
        assert!((tr.x - tl.x).abs() < 1e-3);
        assert!(((tr.y - tl.y).abs() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn rotation_wraps_both_ways() {
        let mut o = object(0.0, 0.0, 1.0, 1.0);
        o.set_rotation(350.0);
        o.increase_rotation(20.0);
        assert!((o.rotation() - 10.0).abs() < 1e-4);

        o.decrease_rotation(30.0);
        assert!((o.rotation() - 340.0).abs() < 1e-4);

        o.increase_rotation(20.0);
        assert!(o.rotation() >= 0.0 && o.rotation() < 360.0);
        assert_eq!(normalize_degrees(-1e-9), 0.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
    }

    #[test]
    fn zero_size_degenerates_to_point() {
        let o = object(4.0, 6.0, 0.0, 0.0);
        for c in o.corners() {
            assert_close(c, Vector2D::new(4.0, 6.0));
        }
    }

    #[test]
    fn negative_size_is_clamped() {
        let mut o = object(0.0, 0.0, -5.0, 3.0);
        assert_eq!(o.size(), Vector2D::new(0.0, 3.0));
        o.set_size(Vector2D::new(2.0, -1.0));
        assert_eq!(o.size(), Vector2D::new(2.0, 0.0));
    }

    #[test]
    fn load_texture_takes_texture_size() {
        let mut o = object(0.0, 0.0, 1.0, 1.0);
        let mut loader = FixedSizeLoader {
            size: Vector2D::new(64.0, 32.0),
        };
        assert!(o.load_texture(&mut loader));
        assert_eq!(o.size(), Vector2D::new(64.0, 32.0));
        assert_eq!(o.texture().map(|t| t.path.as_str()), Some("./resources/box.png"));
    }

    struct FailingLoader;

    impl TextureLoader for FailingLoader {
        fn load(&mut self, path: &str) -> anyhow::Result<Texture> {
            Err(anyhow!("missing {path}"))
        }
    }

    #[test]
    fn failed_texture_keeps_explicit_size() {
        let mut o = object(0.0, 0.0, 7.0, 9.0);
        assert!(!o.load_texture(&mut FailingLoader));
        assert_eq!(o.size(), Vector2D::new(7.0, 9.0));
        assert!(o.texture().is_none());
    }

    #[test]
    fn debug_render_marks_every_corner() {
        let mut o = object(0.0, 0.0, 8.0, 8.0);
        o.load_texture(&mut FixedSizeLoader {
            size: Vector2D::new(8.0, 8.0),
        });

        let mut plain = RecordingRenderer::new(false);
        o.render(&mut plain);
        assert_eq!(plain.markers().count(), 0);
        assert_eq!(plain.sprite_paths().count(), 1);

        let mut debug = RecordingRenderer::new(true);
        o.render(&mut debug);
        let markers: Vec<_> = debug.markers().collect();
        assert_eq!(markers, o.corners().to_vec());
    }

    #[test]
    fn movement_integrates_velocity() {
        let mut o = object(1.0, 1.0, 2.0, 2.0);
        assert!(!o.is_moving());
        o.set_velocity(Vector2D::new(2.0, -1.0));
        assert!(o.is_moving());
        o.apply_velocity();
        o.apply_velocity();
        assert_eq!(o.position(), Vector2D::new(5.0, -1.0));
    }

    #[test]
    fn random_names_have_fixed_length() {
        let mut rng = SimpleRng::new(9);
        let o = GameObject::new(Vector2D::ZERO, Vector2D::new(1.0, 1.0), &mut rng);
        assert_eq!(o.name().len(), NAME_LENGTH);
    }

    #[test]
    fn from_bounds_sizes_by_difference() {
        let mut rng = SimpleRng::new(1);
        let o = GameObject::from_bounds(
            Vector2D::new(10.0, 20.0),
            Vector2D::new(30.0, 25.0),
            "./resources/black.png",
            &mut rng,
        );
        assert_eq!(o.size(), Vector2D::new(20.0, 5.0));
        assert_eq!(o.texture_path(), "./resources/black.png");
    }
}
