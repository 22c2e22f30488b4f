//! Game orchestration - ownership of every object and the per-frame flow
//!
//! Each piece of furniture lives in exactly one place at a time:
//!
//! - **boxes**: still packed, waiting in the yard
//! - **held**: the single unpacked item following the pointer
//! - **placed**: dropped in the house, possibly a checkpoint target
//!
//! Transfers between them are moves. A box is only unpacked when nothing is
//! held, so two items can never be picked up at once.
//!
//! # Frame flow
//!
//! [`Game::handle_event`] runs once per input event and reclassifies pointer
//! state. [`Game::update`] runs once per frame: drag, move, rotate, collide,
//! then the checkpoint route. Hover feedback is recomputed from object states
//! in both, never carried over.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use harold_core::interaction::{can_rotate, wheel_rotation};
use harold_core::types::{
    InputEvent, InteractionState, Key, RoomTint, Vector2D, CHECKPOINT_SIZE, HAROLD_SPAWN,
    PLACEMENT_REWARD, SPIN_SPEED, WORLD_HEIGHT, WORLD_WIDTH,
};
use harold_core::{
    Behaviour, Cursor, Furniture, FurnitureBox, GameObject, Harold, Renderer, Scene, SimpleRng,
    Spin, SpinDirection,
};

use crate::catalog::{self, AssetCatalog, CHECKPOINT_TEXTURE};
use crate::config::GameConfig;
use crate::house::House;
use crate::scoreboard::Scoreboard;

pub const FURNISHING_HINT: &str =
    "Press [E] to place furniture. Use [Mouse Wheel] or hold [ / ] to rotate furniture.";
pub const ROUTING_HINT: &str = "Walk Harold to every ring with [WASD] or the arrow keys.";
pub const MENU_TITLE: &str = "HAROLD THE HOARDER";
pub const MENU_HINT: &str = "Press [P] to start";
pub const GAME_OVER_HINT: &str = "Press [R] to play again";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Menu,
    Furnishing,
    Routing,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::Furnishing => "furnishing",
            Phase::Routing => "routing",
            Phase::GameOver => "game_over",
        }
    }

    fn is_playing(self) -> bool {
        matches!(self, Phase::Furnishing | Phase::Routing)
    }
}

/// Where a placed item landed and what it earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Accepted,
    Rejected,
    Outside,
}

pub struct Game {
    config: GameConfig,
    rng: SimpleRng,
    assets: AssetCatalog,
    phase: Phase,
    house: House,
    boxes: Vec<FurnitureBox>,
    held: Option<Furniture>,
    placed: Scene,
    furniture_total: usize,
    cursor: Cursor,
    harold: Harold,
    checkpoint: Option<GameObject>,
    /// Indices into `placed`, visited front to back
    route: VecDeque<usize>,
    score: i32,
    pointer: Vector2D,
    scoreboard: Scoreboard,
}

impl Game {
    /// A fresh game with boxes drawn from the furniture catalog.
    pub fn new(config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => SimpleRng::new(seed),
            None => SimpleRng::from_time(),
        };
        let boxes = catalog::spawn_boxes(&mut rng, config.sat_mode);
        Self::assemble(config, rng, boxes)
    }

    /// A game with a fixed set of boxes instead of a catalog draw.
    pub fn with_boxes(config: GameConfig, boxes: Vec<FurnitureBox>) -> Self {
        let rng = SimpleRng::new(config.seed.unwrap_or(1));
        Self::assemble(config, rng, boxes)
    }

    fn assemble(config: GameConfig, mut rng: SimpleRng, boxes: Vec<FurnitureBox>) -> Self {
        let scoreboard = match &config.scoreboard_path {
            Some(path) => Scoreboard::with_path(path),
            None => Scoreboard::in_memory(),
        };
        let house = House::generate(&mut rng);

        let mut game = Self {
            config,
            rng,
            assets: AssetCatalog,
            phase: Phase::Menu,
            house,
            furniture_total: boxes.len(),
            boxes,
            held: None,
            placed: Scene::new(),
            cursor: Cursor::new(),
            harold: Harold::new(HAROLD_SPAWN),
            checkpoint: None,
            route: VecDeque::new(),
            score: 0,
            pointer: Vector2D::ZERO,
            scoreboard,
        };
        game.load_media();
        info!(boxes = game.furniture_total, "new game");
        game
    }

    fn load_media(&mut self) {
        self.house.load_textures(&mut self.assets);
        for b in &mut self.boxes {
            b.load_textures(&mut self.assets);
        }
        self.cursor.load_textures(&mut self.assets);
        self.harold.object_mut().load_texture(&mut self.assets);
    }

    /// Back to the menu with a new house and new boxes. High scores are kept.
    pub fn reset(&mut self) {
        self.house = House::generate(&mut self.rng);
        self.boxes = catalog::spawn_boxes(&mut self.rng, self.config.sat_mode);
        self.furniture_total = self.boxes.len();
        self.held = None;
        self.placed.clear();
        self.cursor = Cursor::new();
        self.harold = Harold::new(HAROLD_SPAWN);
        self.checkpoint = None;
        self.route.clear();
        self.score = 0;
        self.phase = Phase::Menu;
        self.load_media();
        info!(boxes = self.furniture_total, "game reset");
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn boxes(&self) -> &[FurnitureBox] {
        &self.boxes
    }

    pub fn held(&self) -> Option<&Furniture> {
        self.held.as_ref()
    }

    pub fn held_mut(&mut self) -> Option<&mut Furniture> {
        self.held.as_mut()
    }

    pub fn placed(&self) -> &Scene {
        &self.placed
    }

    pub fn furniture_total(&self) -> usize {
        self.furniture_total
    }

    pub fn house(&self) -> &House {
        &self.house
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn harold(&self) -> &Harold {
        &self.harold
    }

    pub fn checkpoint(&self) -> Option<&GameObject> {
        self.checkpoint.as_ref()
    }

    pub fn route(&self) -> impl Iterator<Item = usize> + '_ {
        self.route.iter().copied()
    }

    pub fn pointer(&self) -> Vector2D {
        self.pointer
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Leave the menu.
    pub fn start(&mut self) {
        if self.phase == Phase::Menu {
            self.phase = Phase::Furnishing;
            info!(sound = "theme", "game started");
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        if let Some(position) = event.pointer() {
            self.pointer = position;
        }
        self.cursor.handle_event(event);

        match self.phase {
            Phase::Menu => {
                if *event == InputEvent::KeyDown(Key::Char('p')) {
                    self.start();
                }
            }
            Phase::GameOver => {
                if *event == InputEvent::KeyDown(Key::Char('r')) {
                    self.reset();
                }
            }
            Phase::Furnishing | Phase::Routing => self.handle_play_event(event),
        }

        self.refresh_hover();
    }

    fn handle_play_event(&mut self, event: &InputEvent) {
        let mut clicked = None;
        for (index, b) in self.boxes.iter_mut().enumerate() {
            if b.handle_event(event) == InteractionState::MouseDown && self.held.is_none() {
                // Later boxes draw on top, so the last hit wins.
                clicked = Some(index);
            }
        }

        if let Some(index) = clicked {
            let furniture = self.boxes.remove(index).unpack();
            info!(
                furniture = furniture.name(),
                remaining = self.boxes.len(),
                "box unpacked"
            );
            self.held = Some(furniture);
        }

        if let Some(held) = self.held.as_mut() {
            let state = held.handle_event(event);
            if state == InteractionState::MouseDown {
                held.object_mut().set_dragging(true);
            }
            if let InputEvent::MouseWheel { delta } = *event {
                if can_rotate(state, held.object().is_dragging()) {
                    held.object_mut().increase_rotation(wheel_rotation(delta));
                    held.cancel_spin();
                }
            }
        }

        self.harold.handle_event(event);

        match *event {
            InputEvent::MouseButtonUp { .. } => {
                if let Some(held) = self.held.as_mut() {
                    held.object_mut().set_dragging(false);
                }
            }
            InputEvent::KeyDown(Key::Char('e')) => {
                self.place_furniture();
            }
            InputEvent::KeyDown(Key::Char('[')) => {
                self.set_held_spin(SpinDirection::CounterClockwise)
            }
            InputEvent::KeyDown(Key::Char(']')) => self.set_held_spin(SpinDirection::Clockwise),
            InputEvent::KeyUp(Key::Char('[')) => {
                self.release_held_spin(SpinDirection::CounterClockwise)
            }
            InputEvent::KeyUp(Key::Char(']')) => {
                self.release_held_spin(SpinDirection::Clockwise)
            }
            _ => {}
        }
    }

    fn set_held_spin(&mut self, direction: SpinDirection) {
        if let Some(held) = self.held.as_mut() {
            held.set_spin(Spin::new(direction, SPIN_SPEED));
        }
    }

    fn release_held_spin(&mut self, direction: SpinDirection) {
        if let Some(held) = self.held.as_mut() {
            if held.spin().direction == direction {
                held.cancel_spin();
            }
        }
    }

    /// Hover feedback from current object states only.
    fn refresh_hover(&mut self) {
        self.cursor.hovering = match &self.held {
            Some(held) => held.object().current_state() != InteractionState::MouseOut,
            None => self
                .boxes
                .iter()
                .any(|b| b.object().current_state() != InteractionState::MouseOut),
        };
    }

    /// Drop the held furniture where it is and score it against the room
    /// under its position. Does nothing when nothing is held.
    pub fn place_furniture(&mut self) -> Option<Placement> {
        let mut furniture = self.held.take()?;
        furniture.object_mut().set_dragging(false);
        furniture.object_mut().set_velocity(Vector2D::ZERO);
        furniture.cancel_spin();

        let position = furniture.object().position();
        let placement = match self.house.room_at_mut(position) {
            Some(room) if furniture.compatible_with(room.kind()) => {
                room.set_tint(RoomTint::Accepted);
                Placement::Accepted
            }
            Some(room) => {
                room.set_tint(RoomTint::Rejected);
                Placement::Rejected
            }
            None => Placement::Outside,
        };

        match placement {
            Placement::Accepted => {
                self.score += PLACEMENT_REWARD;
                info!(
                    furniture = furniture.name(),
                    score = self.score,
                    sound = "correct_placement",
                    "furniture placed"
                );
            }
            Placement::Rejected | Placement::Outside => {
                self.score -= PLACEMENT_REWARD;
                info!(
                    furniture = furniture.name(),
                    score = self.score,
                    outside = placement == Placement::Outside,
                    sound = "wrong_placement",
                    "furniture misplaced"
                );
            }
        }

        self.placed.push(furniture);

        if self.boxes.is_empty() && self.phase == Phase::Furnishing {
            self.furnish();
        }
        Some(placement)
    }

    /// Every box is placed: sample half the furniture as Harold's route.
    fn furnish(&mut self) {
        let amount = self.placed.len() / 2;
        self.route = self.rng.sample_indices(self.placed.len(), amount).into();
        self.harold.set_can_control(true);
        self.phase = Phase::Routing;

        if self.route.is_empty() {
            self.checkpoint = None;
        } else {
            let mut ring = GameObject::with_details(
                Vector2D::ZERO,
                Vector2D::new(CHECKPOINT_SIZE, CHECKPOINT_SIZE),
                Vector2D::ZERO,
                "checkpoint",
                CHECKPOINT_TEXTURE,
            );
            ring.load_texture(&mut self.assets);
            self.checkpoint = Some(ring);
            self.aim_checkpoint();
        }
        info!(checkpoints = self.route.len(), "house furnished");
    }

    /// Centre the checkpoint on the current route target.
    fn aim_checkpoint(&mut self) {
        let target = self
            .route
            .front()
            .and_then(|&i| self.placed.get(i))
            .map(|e| e.object().center());
        if let (Some(center), Some(ring)) = (target, self.checkpoint.as_mut()) {
            ring.set_position(center - ring.size() / 2.0);
        }
    }

    pub fn update(&mut self, avg_fps: f32) {
        self.refresh_hover();

        if self.phase.is_playing() {
            self.update_furniture(avg_fps);
        }

        match self.held.as_ref() {
            Some(held) if held.object().is_dragging() => {
                let center = held.object().center();
                self.cursor.center_on(center);
            }
            _ => self.cursor.center_on(self.pointer),
        }

        if self.phase.is_playing() {
            self.harold.advance();
        }
        if self.phase == Phase::Routing {
            self.update_route();
        }
    }

    fn update_furniture(&mut self, avg_fps: f32) {
        let walls = self.house.walls.corners();
        let mut wall_hit = false;

        if let Some(held) = self.held.as_mut() {
            if held.object().is_dragging() {
                held.drag_toward(self.pointer, avg_fps);
            }
            held.advance();
            held.rotate();

            let mut others = self.placed.corners();
            others.extend_from_slice(&walls);
            held.handle_collisions(&others);

            let mode = self.config.sat_mode;
            wall_hit = walls
                .iter()
                .any(|c| held.object().has_corner_collision_with(c, mode));
        }

        if wall_hit {
            debug!("held furniture touched a wall");
            self.place_furniture();
        }

        let mut obstacles = walls;
        if let Some(held) = &self.held {
            obstacles.push(held.object().corners());
        }
        self.placed.step(&obstacles);
    }

    fn update_route(&mut self) {
        if self.route.is_empty() {
            self.game_over();
            return;
        }

        if self.house.walls.any_aabb_collision(self.harold.object()) {
            self.harold.reset_to_spawn();
            info!(sound = "wrong_placement", "harold bumped into a wall");
        }

        self.aim_checkpoint();
        let feet = self.harold.object().position();
        let reached = self
            .checkpoint
            .as_ref()
            .is_some_and(|ring| ring.is_inside(feet.x, feet.y));
        if reached {
            self.route.pop_front();
            info!(
                remaining = self.route.len(),
                sound = "correct_placement",
                "checkpoint reached"
            );
            self.aim_checkpoint();
        }
    }

    fn game_over(&mut self) {
        self.phase = Phase::GameOver;
        self.harold.set_can_control(false);
        if let Err(err) = self.scoreboard.record(self.score) {
            warn!(error = %err, "scoreboard not saved");
        }
        info!(score = self.score, "game over");
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        if self.phase == Phase::Menu {
            let title = Vector2D::new(WORLD_WIDTH / 2.0 - 120.0, WORLD_HEIGHT / 3.0);
            renderer.draw_text(title, MENU_TITLE);
            let hint = Vector2D::new(WORLD_WIDTH / 2.0 - 80.0, WORLD_HEIGHT / 2.0);
            renderer.draw_text(hint, MENU_HINT);
            self.cursor.render(renderer);
            return;
        }

        self.house.render(renderer);
        for b in &self.boxes {
            b.render(renderer);
        }
        if let Some(held) = &self.held {
            held.render(renderer);
            let label = held.object().position() - Vector2D::new(0.0, held.object().size().y);
            renderer.draw_text(label, held.name());
        }
        self.placed.render(renderer);
        if let Some(ring) = &self.checkpoint {
            ring.render(renderer);
        }
        self.harold.render(renderer);

        renderer.draw_text(
            Vector2D::new(0.0, 0.0),
            &format!("Placed:{}/{}", self.placed.len(), self.furniture_total),
        );
        renderer.draw_text(Vector2D::new(0.0, 48.0), &format!("Score:{}", self.score));
        let hint = if self.phase == Phase::Furnishing {
            FURNISHING_HINT
        } else {
            ROUTING_HINT
        };
        renderer.draw_text(Vector2D::new(WORLD_WIDTH / 4.0, WORLD_HEIGHT - 28.0), hint);

        if self.phase == Phase::GameOver {
            renderer.draw_text(Vector2D::new(WORLD_WIDTH / 2.0 - 60.0, 0.0), "GAME OVER");
            for (i, row) in self.scoreboard.rows().iter().enumerate() {
                let y = 28.0 * (i as f32 + 1.0);
                renderer.draw_text(Vector2D::new(WORLD_WIDTH / 2.0, y), row);
            }
            let again = Vector2D::new(WORLD_WIDTH / 2.0 - 80.0, WORLD_HEIGHT - 56.0);
            renderer.draw_text(again, GAME_OVER_HINT);
        }

        self.cursor.render(renderer);
    }
}
