//! Scrolling obstacles

use glam::Vec2;

use super::entity::Entity;
use super::rect::Rect;
use crate::assets::Sprite;
use crate::renderer::Surface;
use crate::settings::ScreenSize;

/// Block sitting on the ground line, scrolling left
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Left edge; set by the session when spawning
    pub x: f32,
    /// Width used for the off-screen test; defaults to the sprite width
    pub width: u32,
    pub speed: f32,
    y: f32,
    sprite: Sprite,
    bounds: Rect,
}

impl Obstacle {
    pub fn new(sprite: Sprite, x: f32, screen: ScreenSize, speed: f32) -> Self {
        let mut obstacle = Self {
            x,
            width: sprite.width,
            speed,
            y: screen.height_f() - sprite.height as f32,
            sprite,
            bounds: Rect::default(),
        };
        obstacle.bounds = obstacle.rect();
        obstacle
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.x + self.width as f32
    }

    /// Fully past the left edge of the screen
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.right_edge() < 0.0
    }

    fn rect(&self) -> Rect {
        Rect::from_pos_size(
            Vec2::new(self.x, self.y),
            self.sprite.width as f32,
            self.sprite.height as f32,
        )
    }
}

impl Entity for Obstacle {
    fn update(&mut self) {
        self.x -= self.speed;
        self.bounds = self.rect();
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_sprite(self.sprite, None, self.rect());
    }

    fn bounding_box(&self) -> Rect {
        self.bounds
    }
}
