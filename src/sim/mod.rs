//! Game simulation
//!
//! All gameplay logic lives here: entities, collisions, scoring. Nothing in
//! this module touches threads or the platform; drawing goes through the
//! `Surface` trait.

pub mod chaser;
pub mod entity;
pub mod obstacle;
pub mod obstacle_queue;
pub mod player;
pub mod rect;
pub mod score;
pub mod session;

pub use chaser::Chaser;
pub use entity::Entity;
pub use obstacle::Obstacle;
pub use obstacle_queue::ObstacleQueue;
pub use player::{Player, PlayerTuning};
pub use rect::Rect;
pub use score::{RunSummary, ScoreBoard};
pub use session::{GameEvent, GameOverCause, Session};
