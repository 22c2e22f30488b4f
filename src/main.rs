//! Terminal runner (default binary).
//!
//! Reads `HAROLD_*` configuration, runs the fixed-rate frame loop and always
//! restores the terminal on the way out. Logs go to `HAROLD_LOG_PATH` only;
//! stdout belongs to the game.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use harold_hoarder::engine::{FrameClock, Game, GameConfig};
use harold_hoarder::input::{map_event, KeyReleaseTracker};
use harold_hoarder::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use harold_hoarder::types::{InputEvent, TICK_MS};

fn init_tracing(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .compact()
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_tracing(&config)?;
    info!(seed = ?config.seed, sat_mode = ?config.sat_mode, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut game = Game::new(config);
    let view = GameView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut keys = KeyReleaseTracker::new();

    let started = Instant::now();
    let now_ms = || started.elapsed().as_millis() as u64;
    let mut clock = FrameClock::new(now_ms());
    let mut last_update = Instant::now();

    loop {
        clock.begin_frame(now_ms());
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let projection = view.projection(viewport);

        // Drain everything that is already queued.
        while event::poll(Duration::ZERO)? {
            let raw = event::read()?;
            if let Event::Resize(..) = raw {
                term.invalidate();
                continue;
            }
            for mapped in map_event(&raw, projection) {
                if mapped == InputEvent::Quit {
                    info!(frames = clock.frames(), "quit");
                    return Ok(());
                }
                keys.observe(&mapped);
                game.handle_event(&mapped);
            }
        }

        // Terminals without release reporting only repeat presses; synthesise
        // the key-up once repeats stop.
        let elapsed = last_update.elapsed().as_millis() as u32;
        last_update = Instant::now();
        if !term.reports_key_release() {
            for released in keys.update(elapsed) {
                game.handle_event(&released);
            }
        }

        let fps = clock.average_fps(now_ms());
        game.update(fps);
        view.render_into(&game, fps, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        let sleep_ms = clock.end_frame(now_ms());
        if sleep_ms > 0 {
            std::thread::sleep(Duration::from_millis(sleep_ms.min(u64::from(TICK_MS))));
        }
    }
}
