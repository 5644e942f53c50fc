//! Input translation
//!
//! Only a pointer-down (tap or click) means anything: it requests a jump.
//! Everything else is left for the platform's default handling.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use glam::Vec2;

/// Raw pointer gesture from the platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { pos: Vec2 },
    PointerMove { pos: Vec2 },
    PointerUp { pos: Vec2 },
    Cancel,
}

/// Pending jump request shared between the input thread and the loop thread.
///
/// Multiple requests before the next tick collapse into one.
#[derive(Debug, Clone, Default)]
pub struct JumpSignal(Arc<AtomicBool>);

impl JumpSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Consume the pending request, if any
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }

    pub fn is_pending(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Maps platform gestures to game commands
#[derive(Debug, Clone)]
pub struct InputHandler {
    jump: JumpSignal,
}

impl InputHandler {
    pub fn new(jump: JumpSignal) -> Self {
        Self { jump }
    }

    /// Returns true if the event was consumed
    pub fn handle(&self, event: &InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { .. } => {
                self.jump.request();
                true
            }
            _ => false,
        }
    }
}
