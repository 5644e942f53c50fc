//! Game settings and tuning
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl ScreenSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width_f(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn height_f(&self) -> f32 {
        self.height as f32
    }
}

/// Pixel dimensions of one bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSize {
    pub width: u32,
    pub height: u32,
}

impl SpriteSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Bitmap dimensions for every sprite the game draws
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSizes {
    pub background: SpriteSize,
    /// Whole sheet; frames are laid out horizontally
    pub player: SpriteSize,
    pub chaser: SpriteSize,
    pub obstacle: SpriteSize,
}

impl Default for SpriteSizes {
    fn default() -> Self {
        Self {
            background: SpriteSize::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            player: SpriteSize::new(500, 120),
            chaser: SpriteSize::new(100, 100),
            obstacle: SpriteSize::new(80, 80),
        }
    }
}

/// Score text placement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HudLayout {
    pub text_size: f32,
    pub score_pos: (f32, f32),
    pub high_score_pos: (f32, f32),
}

impl Default for HudLayout {
    fn default() -> Self {
        Self {
            text_size: 30.0,
            score_pos: (50.0, 50.0),
            high_score_pos: (50.0, 100.0),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen: ScreenSize,
    pub target_fps: u32,

    // === Tuning ===
    pub max_obstacles: usize,
    pub player_frame_count: u32,
    pub jump_impulse: f32,
    pub gravity: f32,
    pub slowed_gravity: f32,
    pub chaser_speed: f32,
    pub obstacle_speed: f32,

    // === Presentation ===
    pub sprites: SpriteSizes,
    pub hud: HudLayout,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen: ScreenSize::default(),
            target_fps: TARGET_FPS,

            max_obstacles: MAX_OBSTACLES,
            player_frame_count: PLAYER_FRAME_COUNT,
            jump_impulse: JUMP_IMPULSE,
            gravity: GRAVITY,
            slowed_gravity: SLOWED_GRAVITY,
            chaser_speed: CHASER_SPEED,
            obstacle_speed: OBSTACLE_SPEED,

            sprites: SpriteSizes::default(),
            hud: HudLayout::default(),
        }
    }
}

/// Failure to load a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings: {e}"),
            SettingsError::Parse(e) => write!(f, "malformed settings: {e}"),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(SettingsError::Invalid("screen dimensions must be non-zero".into()));
        }
        if self.target_fps == 0 {
            return Err(SettingsError::Invalid("target_fps must be non-zero".into()));
        }
        if self.max_obstacles == 0 {
            return Err(SettingsError::Invalid("max_obstacles must be non-zero".into()));
        }
        if self.player_frame_count == 0 {
            return Err(SettingsError::Invalid("player_frame_count must be non-zero".into()));
        }
        let sprites = [
            ("background", self.sprites.background),
            ("player", self.sprites.player),
            ("chaser", self.sprites.chaser),
            ("obstacle", self.sprites.obstacle),
        ];
        for (name, size) in sprites {
            if size.width == 0 || size.height == 0 {
                return Err(SettingsError::Invalid(format!("{name} sprite has zero size")));
            }
        }
        Ok(())
    }

    /// Horizontal gap between consecutive obstacle spawns
    pub fn obstacle_spacing(&self) -> f32 {
        (self.screen.width as usize / self.max_obstacles) as f32
    }
}
