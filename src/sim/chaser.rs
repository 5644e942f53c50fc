//! The chasing enemy

use glam::Vec2;

use super::entity::Entity;
use super::rect::Rect;
use crate::assets::Sprite;
use crate::renderer::Surface;
use crate::settings::ScreenSize;

/// Enemy drifting left at constant speed. Contact ends the run.
///
/// There is no bounds check: once past the left edge it keeps going.
#[derive(Debug, Clone)]
pub struct Chaser {
    pub pos: Vec2,
    pub speed: f32,
    sprite: Sprite,
    bounds: Rect,
}

impl Chaser {
    pub fn new(sprite: Sprite, screen: ScreenSize, speed: f32) -> Self {
        Self {
            pos: Self::start_position(screen),
            speed,
            sprite,
            bounds: Rect::default(),
        }
    }

    /// Spawn point: screen center (top-left corner of the sprite)
    pub fn start_position(screen: ScreenSize) -> Vec2 {
        Vec2::new(screen.width_f() / 2.0, screen.height_f() / 2.0)
    }
}

impl Entity for Chaser {
    fn update(&mut self) {
        self.pos.x -= self.speed;
        self.bounds = Rect::from_pos_size(
            self.pos,
            self.sprite.width as f32,
            self.sprite.height as f32,
        );
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let dst = Rect::from_pos_size(
            self.pos,
            self.sprite.width as f32,
            self.sprite.height as f32,
        );
        surface.draw_sprite(self.sprite, None, dst);
    }

    fn bounding_box(&self) -> Rect {
        self.bounds
    }
}
