//! The auto-running player

use glam::Vec2;

use super::entity::Entity;
use super::rect::Rect;
use crate::assets::Sprite;
use crate::renderer::Surface;
use crate::settings::{ScreenSize, Settings};

/// Jump and gravity tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTuning {
    pub jump_impulse: f32,
    pub gravity: f32,
    pub slowed_gravity: f32,
    pub frame_count: u32,
}

impl PlayerTuning {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            jump_impulse: settings.jump_impulse,
            gravity: settings.gravity,
            slowed_gravity: settings.slowed_gravity,
            frame_count: settings.player_frame_count.max(1),
        }
    }
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// The player: falls under gravity, jumps from the ground, cycles its
/// sprite-sheet frame every tick.
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner of the current frame
    pub pos: Vec2,
    /// Positive is down
    pub vertical_velocity: f32,
    gravity: f32,
    slowed: bool,
    frame: u32,
    frame_width: u32,
    frame_height: u32,
    tuning: PlayerTuning,
    screen: ScreenSize,
    sheet: Sprite,
    bounds: Rect,
}

impl Player {
    pub fn new(sheet: Sprite, screen: ScreenSize, tuning: PlayerTuning) -> Self {
        let frame_width = sheet.width / tuning.frame_count;
        let frame_height = sheet.height;
        Self {
            pos: Self::start_position(screen, frame_width, frame_height),
            vertical_velocity: 0.0,
            gravity: tuning.gravity,
            slowed: false,
            frame: 0,
            frame_width,
            frame_height,
            tuning,
            screen,
            sheet,
            bounds: Rect::default(),
        }
    }

    fn start_position(screen: ScreenSize, frame_width: u32, frame_height: u32) -> Vec2 {
        Vec2::new(
            screen.width_f() / 2.0 - frame_width as f32 / 2.0,
            screen.height_f() / 2.0 - frame_height as f32 / 2.0,
        )
    }

    /// Resting height: bottom of the frame on the bottom of the screen
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.screen.height_f() - self.frame_height as f32
    }

    #[inline]
    pub fn is_on_ground(&self) -> bool {
        self.pos.y >= self.ground_y()
    }

    /// Above the ground or still rising
    #[inline]
    pub fn is_airborne(&self) -> bool {
        self.pos.y < self.ground_y() || self.vertical_velocity < 0.0
    }

    /// Start a jump. Ignored unless resting on the ground.
    pub fn jump(&mut self) {
        if self.is_on_ground() {
            self.vertical_velocity = self.tuning.jump_impulse;
        }
    }

    /// Apply the first-hit penalty: lighter gravity until reset
    pub fn slow_down(&mut self) {
        self.slowed = true;
        self.gravity = self.tuning.slowed_gravity;
    }

    pub fn is_slowed_down(&self) -> bool {
        self.slowed
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Back to the spawn point with normal gravity.
    ///
    /// Velocity and animation frame are left as they were.
    pub fn reset(&mut self) {
        self.slowed = false;
        self.gravity = self.tuning.gravity;
        self.pos = Self::start_position(self.screen, self.frame_width, self.frame_height);
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn frame_size(&self) -> (u32, u32) {
        (self.frame_width, self.frame_height)
    }

    /// Sprite-sheet region of the current animation frame
    pub fn source_rect(&self) -> Rect {
        let w = self.frame_width as i32;
        let f = self.frame as i32;
        Rect::new(f * w, 0, (f + 1) * w, self.frame_height as i32)
    }

    fn rect(&self) -> Rect {
        Rect::from_pos_size(
            self.pos,
            self.frame_width as f32,
            self.frame_height as f32,
        )
    }
}

impl Entity for Player {
    fn update(&mut self) {
        if self.is_airborne() {
            self.vertical_velocity += self.gravity;
            self.pos.y += self.vertical_velocity;

            // Land exactly on the ground line
            let ground = self.ground_y();
            if self.pos.y >= ground && self.vertical_velocity >= 0.0 {
                self.pos.y = ground;
                self.vertical_velocity = 0.0;
            }
        }
        self.frame = (self.frame + 1) % self.tuning.frame_count;
        self.bounds = self.rect();
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_sprite(self.sheet, Some(self.source_rect()), self.rect());
    }

    fn bounding_box(&self) -> Rect {
        self.bounds
    }
}
