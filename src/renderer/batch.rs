//! Sprite batching surface
//!
//! Records each frame as textured quads (two triangles per sprite) plus text
//! runs. A GPU backend uploads `Frame::vertex_bytes` and draws one quad range
//! per sprite texture; text is rasterized separately.

use glam::Vec2;

use super::surface::{Color, Surface, colors};
use super::vertex::Vertex;
use crate::assets::{Sprite, SpriteId};
use crate::sim::Rect;

/// One sprite draw: the texture to bind and its six vertices
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteQuad {
    pub sprite: SpriteId,
    pub vertices: [Vertex; 6],
}

/// One line of HUD text
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
}

/// Everything drawn between two presents
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub clear_color: Option<Color>,
    pub quads: Vec<SpriteQuad>,
    pub texts: Vec<TextRun>,
}

impl Frame {
    /// Vertices of all quads in draw order
    pub fn vertices(&self) -> Vec<Vertex> {
        self.quads.iter().flat_map(|q| q.vertices).collect()
    }

    /// Vertex data ready for a buffer upload
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice::<Vertex, u8>(&self.vertices()).to_vec()
    }

    /// Quads drawn with a given sprite
    pub fn quads_of(&self, sprite: SpriteId) -> impl Iterator<Item = &SpriteQuad> {
        self.quads.iter().filter(move |q| q.sprite == sprite)
    }
}

/// Generate the two triangles covering `dst`, sampling `src` of `sprite`
pub fn sprite_quad(sprite: Sprite, src: Option<Rect>, dst: Rect, tint: Color) -> SpriteQuad {
    let src = src.unwrap_or(Rect::new(0, 0, sprite.width as i32, sprite.height as i32));
    let tex_w = sprite.width.max(1) as f32;
    let tex_h = sprite.height.max(1) as f32;

    let (u0, v0) = (src.left as f32 / tex_w, src.top as f32 / tex_h);
    let (u1, v1) = (src.right as f32 / tex_w, src.bottom as f32 / tex_h);
    let (x0, y0) = (dst.left as f32, dst.top as f32);
    let (x1, y1) = (dst.right as f32, dst.bottom as f32);

    SpriteQuad {
        sprite: sprite.id,
        vertices: [
            Vertex::new(x0, y0, u0, v0, tint),
            Vertex::new(x0, y1, u0, v1, tint),
            Vertex::new(x1, y0, u1, v0, tint),
            Vertex::new(x1, y0, u1, v0, tint),
            Vertex::new(x0, y1, u0, v1, tint),
            Vertex::new(x1, y1, u1, v1, tint),
        ],
    }
}

/// A `Surface` that batches frames in memory
#[derive(Debug, Default)]
pub struct SpriteBatch {
    valid: bool,
    current: Frame,
    last_presented: Option<Frame>,
    frames_presented: u64,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self {
            valid: true,
            ..Default::default()
        }
    }

    /// Mark the surface lost or restored
    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }

    /// Most recently presented frame
    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_presented.as_ref()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Surface for SpriteBatch {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn clear(&mut self, color: Color) {
        self.current.quads.clear();
        self.current.texts.clear();
        self.current.clear_color = Some(color);
    }

    fn draw_sprite(&mut self, sprite: Sprite, src: Option<Rect>, dst: Rect) {
        self.current
            .quads
            .push(sprite_quad(sprite, src, dst, colors::SPRITE_TINT));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.current.texts.push(TextRun {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }

    fn present(&mut self) {
        self.last_presented = Some(std::mem::take(&mut self.current));
        self.frames_presented += 1;
    }
}
