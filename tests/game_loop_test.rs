//! Threaded loop lifecycle: resume, pause, input hand-off

use std::thread;
use std::time::Duration;

use chase_runner::renderer::SpriteBatch;
use chase_runner::{GameLoop, InputEvent, LoopState, Session, Settings, SpriteAtlas};
use glam::Vec2;

fn new_loop(surface: SpriteBatch) -> GameLoop<SpriteBatch> {
    let mut settings = Settings::default();
    // Run fast so tests stay short
    settings.target_fps = 500;
    let session = Session::new(&settings, &SpriteAtlas::from_settings(&settings));
    GameLoop::new(session, surface, settings.target_fps)
}

#[test]
fn test_pause_joins_and_returns_state() {
    let mut game = new_loop(SpriteBatch::new());
    assert_eq!(game.state(), LoopState::Paused);

    game.resume().expect("resume");
    assert_eq!(game.state(), LoopState::Running);
    assert!(game.session().is_none());

    thread::sleep(Duration::from_millis(50));
    game.pause().expect("pause");
    assert_eq!(game.state(), LoopState::Paused);

    let ticks = game.session().map(|s| s.ticks).unwrap_or(0);
    assert!(ticks > 0);
    // One draw per tick while the surface is valid
    let frames = game.surface().map(|s| s.frames_presented()).unwrap_or(0);
    assert_eq!(frames, ticks);
}

#[test]
fn test_resume_continues_same_session() {
    let mut game = new_loop(SpriteBatch::new());
    game.resume().expect("resume");
    thread::sleep(Duration::from_millis(20));
    game.pause().expect("pause");
    let first = game.session().map(|s| s.ticks).unwrap_or(0);

    // Paused state does not advance
    thread::sleep(Duration::from_millis(20));
    assert_eq!(game.session().map(|s| s.ticks), Some(first));

    game.resume().expect("resume");
    game.resume().expect("second resume is a no-op");
    thread::sleep(Duration::from_millis(20));
    let (session, _) = game.into_parts().expect("stop");
    assert!(session.ticks > first);
}

#[test]
fn test_invalid_surface_still_ticks() {
    let mut surface = SpriteBatch::new();
    surface.set_valid(false);
    let mut game = new_loop(surface);

    game.resume().expect("resume");
    thread::sleep(Duration::from_millis(30));
    let (session, surface) = game.into_parts().expect("stop");

    assert!(session.ticks > 0);
    assert_eq!(surface.frames_presented(), 0);
}

#[test]
fn test_taps_are_consumed_by_loop() {
    let mut game = new_loop(SpriteBatch::new());
    let input = game.input_handler();
    game.resume().expect("resume");

    let consumed = input.handle(&InputEvent::PointerDown {
        pos: Vec2::new(1.0, 1.0),
    });
    assert!(consumed);
    assert!(!input.handle(&InputEvent::PointerUp {
        pos: Vec2::new(1.0, 1.0)
    }));

    thread::sleep(Duration::from_millis(20));
    game.pause().expect("pause");
    assert!(game.session().is_some());
}

#[test]
fn test_drop_while_running_stops_thread() {
    let mut game = new_loop(SpriteBatch::new());
    game.resume().expect("resume");
    thread::sleep(Duration::from_millis(10));
    drop(game);
}
