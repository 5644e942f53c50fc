//! Sprite metadata
//!
//! Bitmap decoding lives outside this crate. The game only needs to know which
//! sprite to draw and how large it is, so a provider hands out `Sprite` handles.

use crate::settings::{Settings, SpriteSize};

/// Fixed set of bitmaps the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Background,
    Player,
    Chaser,
    Obstacle,
}

impl SpriteId {
    pub const ALL: [SpriteId; 4] = [
        SpriteId::Background,
        SpriteId::Player,
        SpriteId::Chaser,
        SpriteId::Obstacle,
    ];
}

/// A decoded bitmap as seen by the game: identity plus pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub id: SpriteId,
    pub width: u32,
    pub height: u32,
}

impl Sprite {
    pub const fn new(id: SpriteId, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }
}

/// Supplies sprites by identifier. Lookups never fail.
pub trait AssetProvider {
    fn sprite(&self, id: SpriteId) -> Sprite;
}

/// Provider backed by the sprite sizes in `Settings`
#[derive(Debug, Clone)]
pub struct SpriteAtlas {
    background: SpriteSize,
    player: SpriteSize,
    chaser: SpriteSize,
    obstacle: SpriteSize,
}

impl SpriteAtlas {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            background: settings.sprites.background,
            player: settings.sprites.player,
            chaser: settings.sprites.chaser,
            obstacle: settings.sprites.obstacle,
        }
    }
}

impl AssetProvider for SpriteAtlas {
    fn sprite(&self, id: SpriteId) -> Sprite {
        let size = match id {
            SpriteId::Background => self.background,
            SpriteId::Player => self.player,
            SpriteId::Chaser => self.chaser,
            SpriteId::Obstacle => self.obstacle,
        };
        Sprite::new(id, size.width, size.height)
    }
}
