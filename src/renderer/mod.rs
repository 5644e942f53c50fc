//! Rendering
//!
//! `Surface` is the contract the draw pass targets; `SpriteBatch` is a
//! surface that turns a frame into vertex data for a GPU backend.

pub mod batch;
pub mod surface;
pub mod vertex;

pub use batch::{Frame, SpriteBatch, SpriteQuad, TextRun};
pub use surface::{Color, Surface, colors};
pub use vertex::Vertex;
