use criterion::{black_box, criterion_group, criterion_main, Criterion};
use harold_hoarder::core::{sat_overlap, GameObject, SatMode};
use harold_hoarder::engine::{Game, GameConfig};
use harold_hoarder::types::{InputEvent, Key, Vector2D};

fn object(x: f32, y: f32, rotation: f32) -> GameObject {
    let mut o = GameObject::with_details(
        Vector2D::new(x, y),
        Vector2D::new(64.0, 32.0),
        Vector2D::ZERO,
        "Bench",
        "",
    );
    o.set_rotation(rotation);
    o
}

fn bench_sat(c: &mut Criterion) {
    let a = object(100.0, 100.0, 30.0).corners();
    let b = object(130.0, 110.0, 75.0).corners();

    c.bench_function("sat_tester_edges", |bench| {
        bench.iter(|| sat_overlap(black_box(&a), black_box(&b), SatMode::TesterEdges))
    });
    c.bench_function("sat_symmetric", |bench| {
        bench.iter(|| sat_overlap(black_box(&a), black_box(&b), SatMode::Symmetric))
    });
}

fn bench_corners(c: &mut Criterion) {
    let o = object(100.0, 100.0, 33.0);
    c.bench_function("corners_rotated", |bench| bench.iter(|| black_box(&o).corners()));
}

fn bench_aabb(c: &mut Criterion) {
    let a = object(100.0, 100.0, 0.0);
    let b = object(150.0, 120.0, 0.0);
    c.bench_function("aabb_overlap", |bench| {
        bench.iter(|| black_box(&a).has_collision(black_box(&b)))
    });
}

fn bench_frame(c: &mut Criterion) {
    let config = GameConfig {
        seed: Some(12345),
        scoreboard_path: None,
        ..GameConfig::default()
    };
    let mut game = Game::new(config);
    game.handle_event(&InputEvent::KeyDown(Key::Char('p')));

    c.bench_function("game_update_frame", |bench| {
        bench.iter(|| game.update(black_box(60.0)))
    });
}

criterion_group!(benches, bench_sat, bench_corners, bench_aabb, bench_frame);
criterion_main!(benches);
