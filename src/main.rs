//! Chase Runner entry point
//!
//! Runs the game loop headless against an in-memory sprite batch. Each line on
//! stdin is a tap; `p` pauses, `r` resumes, `q` quits.
//!
//! Usage: `chase-runner [settings.json]`

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use glam::Vec2;

use chase_runner::renderer::SpriteBatch;
use chase_runner::{GameLoop, InputEvent, LoopState, Session, Settings, SpriteAtlas};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Chase Runner (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(&path),
        None => Settings::default(),
    };
    log::info!(
        "Screen {}x{}, {} obstacles, {} fps",
        settings.screen.width,
        settings.screen.height,
        settings.max_obstacles,
        settings.target_fps
    );

    let atlas = SpriteAtlas::from_settings(&settings);
    let session = Session::new(&settings, &atlas);
    let mut game = GameLoop::new(session, SpriteBatch::new(), settings.target_fps);
    let input = game.input_handler();
    let tap = InputEvent::PointerDown {
        pos: Vec2::new(
            settings.screen.width as f32 / 2.0,
            settings.screen.height as f32 / 2.0,
        ),
    };

    game.resume().context("starting game loop")?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        match line.trim() {
            "q" => break,
            "p" => {
                game.pause().context("pausing game loop")?;
                if let Some(session) = game.session() {
                    println!(
                        "Paused at tick {}: score {}, high score {}",
                        session.ticks,
                        session.score(),
                        session.high_score()
                    );
                }
            }
            "r" => game.resume().context("resuming game loop")?,
            _ if game.state() == LoopState::Running => {
                input.handle(&tap);
            }
            _ => log::debug!("Tap ignored while paused"),
        }
    }

    let (session, surface) = game.into_parts().context("stopping game loop")?;
    println!(
        "Ran {} ticks ({} frames drawn). High score: {}",
        session.ticks,
        surface.frames_presented(),
        session.high_score()
    );
    Ok(())
}
