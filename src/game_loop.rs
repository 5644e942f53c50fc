//! Loop thread and frame pacing
//!
//! `GameLoop` runs a `Session` on its own thread: apply pending input, tick,
//! draw, then sleep out the rest of the frame budget. The session and surface
//! move into the thread on `resume` and come back on `pause`, so nothing else
//! touches them while the loop runs.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::input::{InputHandler, JumpSignal};
use crate::renderer::Surface;
use crate::sim::Session;

/// Lifecycle of the loop thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Paused,
}

#[derive(Debug)]
pub enum LoopError {
    /// The loop thread panicked; session state is lost
    ThreadPanicked,
    /// No session to run or return; an earlier panic consumed it
    StateLost,
}

impl fmt::Display for LoopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopError::ThreadPanicked => write!(f, "game loop thread panicked"),
            LoopError::StateLost => write!(f, "game session state was lost"),
        }
    }
}

impl std::error::Error for LoopError {}

/// Sleeps out whatever is left of the frame budget.
///
/// Slow frames are not compensated for; the next frame simply starts late.
#[derive(Debug)]
pub struct FramePacer {
    budget: Duration,
    last_frame: Instant,
    last_frame_time: Duration,
    overruns: u64,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        Self {
            budget: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
            last_frame: Instant::now(),
            last_frame_time: Duration::ZERO,
            overruns: 0,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Work time of the most recent frame, before any sleep
    pub fn last_frame_time(&self) -> Duration {
        self.last_frame_time
    }

    /// Frames that took longer than the budget
    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    /// Call once per frame after drawing
    pub fn pace(&mut self) {
        let frame_time = self.last_frame.elapsed();
        self.last_frame_time = frame_time;

        if frame_time < self.budget {
            thread::sleep(self.budget - frame_time);
        } else {
            self.overruns += 1;
            log::trace!(
                "Frame took {:.1}ms, budget {:.1}ms",
                frame_time.as_secs_f64() * 1000.0,
                self.budget.as_secs_f64() * 1000.0
            );
        }
        self.last_frame = Instant::now();
    }
}

fn run_loop<S: Surface>(
    mut session: Session,
    mut surface: S,
    playing: Arc<AtomicBool>,
    jump: JumpSignal,
    target_fps: u32,
) -> (Session, S) {
    log::info!("Game loop started at tick {}", session.ticks);
    let mut pacer = FramePacer::new(target_fps);

    while playing.load(Ordering::Acquire) {
        if jump.take() {
            session.on_tap();
        }
        session.tick();
        session.draw(&mut surface);
        pacer.pace();
    }

    log::info!(
        "Game loop stopped at tick {} ({} slow frames)",
        session.ticks,
        pacer.overruns()
    );
    (session, surface)
}

/// Owns the loop thread and the state it runs on
pub struct GameLoop<S: Surface + Send + 'static> {
    playing: Arc<AtomicBool>,
    jump: JumpSignal,
    target_fps: u32,
    parked: Option<(Session, S)>,
    thread: Option<JoinHandle<(Session, S)>>,
}

impl<S: Surface + Send + 'static> GameLoop<S> {
    pub fn new(session: Session, surface: S, target_fps: u32) -> Self {
        Self {
            playing: Arc::new(AtomicBool::new(false)),
            jump: JumpSignal::new(),
            target_fps,
            parked: Some((session, surface)),
            thread: None,
        }
    }

    pub fn state(&self) -> LoopState {
        if self.thread.is_some() {
            LoopState::Running
        } else {
            LoopState::Paused
        }
    }

    /// Handler for the platform's input thread
    pub fn input_handler(&self) -> InputHandler {
        InputHandler::new(self.jump.clone())
    }

    /// Start the loop thread. No-op if already running.
    pub fn resume(&mut self) -> Result<(), LoopError> {
        if self.thread.is_some() {
            log::debug!("resume() while running, ignoring");
            return Ok(());
        }
        let (session, surface) = self.parked.take().ok_or(LoopError::StateLost)?;

        self.playing.store(true, Ordering::Release);
        let playing = Arc::clone(&self.playing);
        let jump = self.jump.clone();
        let target_fps = self.target_fps;
        self.thread = Some(thread::spawn(move || {
            run_loop(session, surface, playing, jump, target_fps)
        }));
        Ok(())
    }

    /// Stop the loop thread and wait for it to exit.
    ///
    /// Once this returns no tick or draw is in flight.
    pub fn pause(&mut self) -> Result<(), LoopError> {
        self.playing.store(false, Ordering::Release);
        if let Some(handle) = self.thread.take() {
            match handle.join() {
                Ok(parts) => self.parked = Some(parts),
                Err(_) => {
                    log::error!("Game loop thread panicked");
                    return Err(LoopError::ThreadPanicked);
                }
            }
        }
        Ok(())
    }

    /// Session while paused
    pub fn session(&self) -> Option<&Session> {
        self.parked.as_ref().map(|(session, _)| session)
    }

    /// Surface while paused
    pub fn surface(&self) -> Option<&S> {
        self.parked.as_ref().map(|(_, surface)| surface)
    }

    /// Stop the loop and hand back its state
    pub fn into_parts(mut self) -> Result<(Session, S), LoopError> {
        self.pause()?;
        self.parked.take().ok_or(LoopError::StateLost)
    }
}

impl<S: Surface + Send + 'static> Drop for GameLoop<S> {
    fn drop(&mut self) {
        if self.thread.is_some() {
            let _ = self.pause();
        }
    }
}
