//! Chase Runner - a single-screen auto-runner
//!
//! Core modules:
//! - `sim`: Game logic (entities, collisions, scoring, per-tick update)
//! - `renderer`: Render surface contract and a quad-batching surface
//! - `game_loop`: Loop thread controller and frame pacing
//! - `input`: Tap gesture translation
//! - `assets`: Sprite metadata provider
//! - `settings`: Data-driven configuration

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{AssetProvider, Sprite, SpriteAtlas, SpriteId};
pub use game_loop::{FramePacer, GameLoop, LoopError, LoopState};
pub use input::{InputEvent, InputHandler, JumpSignal};
pub use settings::{ScreenSize, Settings, SettingsError};
pub use sim::{GameEvent, GameOverCause, Session};

/// Default tuning constants
pub mod consts {
    /// Number of obstacles alive at any time
    pub const MAX_OBSTACLES: usize = 5;
    /// Target loop rate
    pub const TARGET_FPS: u32 = 60;

    /// Player vertical velocity applied by a jump (negative is up)
    pub const JUMP_IMPULSE: f32 = -30.0;
    /// Gravity per tick
    pub const GRAVITY: f32 = 1.5;
    /// Gravity per tick once the player has been slowed
    pub const SLOWED_GRAVITY: f32 = 0.5;
    /// Frames in the player sprite sheet (laid out horizontally)
    pub const PLAYER_FRAME_COUNT: u32 = 5;

    /// Leftward speeds in pixels per tick
    pub const CHASER_SPEED: f32 = 10.0;
    pub const OBSTACLE_SPEED: f32 = 10.0;

    /// Default screen size (portrait phone)
    pub const SCREEN_WIDTH: u32 = 1080;
    pub const SCREEN_HEIGHT: u32 = 1920;
}
