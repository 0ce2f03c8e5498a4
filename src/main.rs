//! Terminal Blockfall runner.
//!
//! Reads configuration from the environment, opens the JSON store, then runs
//! a fixed-tick loop: poll keys until the next tick, advance gravity by the
//! real elapsed time, draw.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::{debug, info};

use blockfall::core::{GameConfig, GameSnapshot, GameState, UniformSource};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::store::JsonStore;
use blockfall::term::{FrameBuffer, GameView, TerminalBell, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    blockfall::logging::init()?;

    let config = GameConfig::from_env();
    let store = JsonStore::from_env();
    info!(
        "starting with seed {} and store {}",
        config.seed,
        store.path().display()
    );

    let game = GameState::with_ports(
        config,
        Box::new(UniformSource::new(config.seed)),
        Box::new(TerminalBell::new()),
        Box::new(store),
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let applied = game.apply_action(action);
                        debug!("{} -> {applied}", action.as_str());
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            last_tick = Instant::now();
            game.update(elapsed.as_secs_f64() * 1000.0);
        }

        if let Some(event) = game.take_last_event() {
            debug!(
                "locked: {} line(s), +{}, game over: {}",
                event.lines_cleared, event.score_delta, event.game_over
            );
        }
    }
}
