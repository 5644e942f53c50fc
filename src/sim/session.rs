//! Per-tick game update
//!
//! A `Session` owns every entity plus the score. Each tick runs update,
//! collision checks and obstacle recycling; drawing is a separate pass so a
//! lost surface never stalls the simulation.

use glam::Vec2;

use super::chaser::Chaser;
use super::entity::Entity;
use super::obstacle::Obstacle;
use super::obstacle_queue::ObstacleQueue;
use super::player::{Player, PlayerTuning};
use super::rect::Rect;
use super::score::{RunSummary, ScoreBoard};
use crate::assets::{AssetProvider, Sprite, SpriteId};
use crate::renderer::{Surface, colors};
use crate::settings::{HudLayout, ScreenSize, Settings};

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// Second obstacle hit while slowed
    Obstacle,
    /// Touched the chaser
    Chaser,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// First obstacle hit; the player is now slowed
    Slowed,
    /// Leading obstacle left the screen and was replaced
    ObstacleCleared { score: u32 },
    /// Run ended and everything except the chaser was reset
    GameOver {
        cause: GameOverCause,
        score: u32,
        high_score: u32,
    },
}

/// Obstacle spawn parameters, fixed for the life of a session
#[derive(Debug, Clone, Copy)]
struct ObstacleSpawner {
    sprite: Sprite,
    screen: ScreenSize,
    speed: f32,
    count: usize,
    spacing: f32,
}

impl ObstacleSpawner {
    /// Initial layout: one screen to the right, evenly spaced
    fn initial(&self, index: usize) -> Obstacle {
        let width = self.screen.width as usize;
        let x = width + index * width / self.count;
        Obstacle::new(self.sprite, x as f32, self.screen, self.speed)
    }

    fn at(&self, x: f32) -> Obstacle {
        Obstacle::new(self.sprite, x, self.screen, self.speed)
    }

}

/// One game: player, chaser, obstacles and score
#[derive(Debug, Clone)]
pub struct Session {
    pub player: Player,
    pub chaser: Chaser,
    pub obstacles: ObstacleQueue,
    pub scores: ScoreBoard,
    /// Ticks run since the session was created
    pub ticks: u64,
    screen: ScreenSize,
    background: Sprite,
    hud: HudLayout,
    spawner: ObstacleSpawner,
}

impl Session {
    pub fn new(settings: &Settings, assets: &dyn AssetProvider) -> Self {
        let screen = settings.screen;
        let spawner = ObstacleSpawner {
            sprite: assets.sprite(SpriteId::Obstacle),
            screen,
            speed: settings.obstacle_speed,
            count: settings.max_obstacles.max(1),
            spacing: settings.obstacle_spacing(),
        };

        Self {
            player: Player::new(
                assets.sprite(SpriteId::Player),
                screen,
                PlayerTuning::from_settings(settings),
            ),
            chaser: Chaser::new(assets.sprite(SpriteId::Chaser), screen, settings.chaser_speed),
            obstacles: ObstacleQueue::filled(spawner.count, |i| spawner.initial(i)),
            scores: ScoreBoard::new(),
            ticks: 0,
            screen,
            background: assets.sprite(SpriteId::Background),
            hud: settings.hud.clone(),
            spawner,
        }
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn high_score(&self) -> u32 {
        self.scores.high_score()
    }

    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    /// Tap gesture: jump if on the ground
    pub fn on_tap(&mut self) {
        self.player.jump();
    }

    /// Advance the game by one tick
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.ticks += 1;

        self.player.update();
        self.chaser.update();

        // Obstacles: first hit slows, a hit while slowed ends the run
        for i in 0..self.obstacles.len() {
            let hit = match self.obstacles.get_mut(i) {
                Some(obstacle) => {
                    obstacle.update();
                    self.player
                        .bounding_box()
                        .intersects(&obstacle.bounding_box())
                }
                None => false,
            };
            if !hit {
                continue;
            }
            if !self.player.is_slowed_down() {
                log::debug!("Obstacle hit, player slowed");
                self.player.slow_down();
                events.push(GameEvent::Slowed);
            } else {
                events.push(self.game_over(GameOverCause::Obstacle));
                // The obstacle set was just replaced
                break;
            }
        }

        if self
            .player
            .bounding_box()
            .intersects(&self.chaser.bounding_box())
        {
            events.push(self.game_over(GameOverCause::Chaser));
        }

        // Only the leading obstacle is checked, so at most one recycle per tick
        let cleared = self.obstacles.front().is_some_and(Obstacle::is_off_screen);
        if cleared {
            let x = self.obstacles.back().map_or(0.0, |o| o.x) + self.spawner.spacing;
            self.obstacles.recycle_front(self.spawner.at(x));
            let score = self.scores.increment();
            log::trace!("Obstacle cleared, respawned at x={x}, score {score}");
            events.push(GameEvent::ObstacleCleared { score });
        }

        events
    }

    /// End the current run: reconcile scores, reset the player and respawn
    /// obstacles. The chaser keeps its position.
    pub fn game_over(&mut self, cause: GameOverCause) -> GameEvent {
        let RunSummary {
            score,
            high_score,
            new_high_score,
        } = self.scores.close_run();

        if new_high_score {
            log::info!("New high score: {high_score}");
        }
        log::info!("Game over ({cause:?}): score {score}, high score {high_score}");

        self.player.reset();
        let spawner = self.spawner;
        self.obstacles.respawn(|i| spawner.initial(i));

        GameEvent::GameOver {
            cause,
            score,
            high_score,
        }
    }

    /// Draw the current frame. Returns false if the surface was not ready.
    pub fn draw(&self, surface: &mut dyn Surface) -> bool {
        if !surface.is_valid() {
            log::trace!("Surface not valid, skipping draw");
            return false;
        }

        surface.clear(colors::WHITE);
        surface.draw_sprite(
            self.background,
            None,
            Rect::new(0, 0, self.screen.width as i32, self.screen.height as i32),
        );

        let (sx, sy) = self.hud.score_pos;
        surface.draw_text(
            &format!("Score: {}", self.score()),
            Vec2::new(sx, sy),
            self.hud.text_size,
            colors::BLACK,
        );
        let (hx, hy) = self.hud.high_score_pos;
        surface.draw_text(
            &format!("High Score: {}", self.high_score()),
            Vec2::new(hx, hy),
            self.hud.text_size,
            colors::BLACK,
        );

        self.player.draw(surface);
        self.chaser.draw(surface);
        for obstacle in self.obstacles.iter() {
            obstacle.draw(surface);
        }

        surface.present();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::SpriteAtlas;
    use crate::renderer::SpriteBatch;
    use proptest::prelude::*;

    fn session() -> Session {
        let settings = Settings::default();
        Session::new(&settings, &SpriteAtlas::from_settings(&settings))
    }

    /// Session with the chaser parked far away so only obstacles matter
    fn session_without_chaser() -> Session {
        let mut session = session();
        session.chaser.pos = Vec2::new(-100_000.0, -100_000.0);
        session
    }

    fn obstacle_xs(session: &Session) -> Vec<f32> {
        session.obstacles.iter().map(|o| o.x).collect()
    }

    #[test]
    fn test_initial_obstacle_layout() {
        let session = session();
        assert_eq!(
            obstacle_xs(&session),
            vec![1080.0, 1296.0, 1512.0, 1728.0, 1944.0]
        );
    }

    #[test]
    fn test_first_hit_slows_second_ends_run() {
        let mut session = session_without_chaser();
        session.player.pos.y = session.player.ground_y();
        session.player.vertical_velocity = 0.0;

        // Park the leading obstacle on top of the player
        let player_x = session.player.pos.x;
        if let Some(o) = session.obstacles.get_mut(0) {
            o.x = player_x + 10.0;
        }

        let events = session.tick();
        assert_eq!(events, vec![GameEvent::Slowed]);
        assert!(session.player.is_slowed_down());

        let events = session.tick();
        assert_eq!(
            events,
            vec![GameEvent::GameOver {
                cause: GameOverCause::Obstacle,
                score: 0,
                high_score: 0,
            }]
        );
        assert!(!session.player.is_slowed_down());
        assert_eq!(obstacle_xs(&session)[0], 1080.0);
    }

    #[test]
    fn test_chaser_contact_ends_run_even_when_not_slowed() {
        let mut session = session();
        // Default layout puts the chaser over the player on the first tick
        let events = session.tick();
        assert!(events.contains(&GameEvent::GameOver {
            cause: GameOverCause::Chaser,
            score: 0,
            high_score: 0,
        }));
    }

    #[test]
    fn test_chaser_contact_ends_run_when_slowed() {
        let mut session = session();
        session.player.slow_down();
        let events = session.tick();
        assert!(matches!(
            events.last(),
            Some(GameEvent::GameOver {
                cause: GameOverCause::Chaser,
                ..
            })
        ));
        assert!(!session.player.is_slowed_down());
    }

    #[test]
    fn test_game_over_leaves_chaser_in_place() {
        let mut session = session();
        session.tick();
        let chaser_pos = session.chaser.pos;
        session.game_over(GameOverCause::Chaser);
        assert_eq!(session.chaser.pos, chaser_pos);
    }

    #[test]
    fn test_off_screen_obstacle_is_recycled_and_scored() {
        let mut session = session_without_chaser();
        if let Some(o) = session.obstacles.get_mut(0) {
            o.x = -75.0;
        }

        let events = session.tick();
        assert_eq!(events, vec![GameEvent::ObstacleCleared { score: 1 }]);
        assert_eq!(session.score(), 1);
        assert_eq!(session.obstacles.len(), 5);

        // Newest obstacle sits one spacing past the previous newest (already moved this tick)
        let xs = obstacle_xs(&session);
        assert_eq!(xs, vec![1286.0, 1502.0, 1718.0, 1934.0, 2150.0]);
    }

    #[test]
    fn test_recycled_obstacle_uses_configured_spacing() {
        let mut settings = Settings::default();
        settings.screen.width = 1001;
        let mut session = Session::new(&settings, &SpriteAtlas::from_settings(&settings));
        session.chaser.pos = Vec2::new(-100_000.0, -100_000.0);
        if let Some(o) = session.obstacles.get_mut(0) {
            o.x = -500.0;
        }

        session.tick();
        let xs = obstacle_xs(&session);
        assert_eq!(xs[4] - xs[3], settings.obstacle_spacing());
        assert_eq!(settings.obstacle_spacing(), 200.0);
    }

    #[test]
    fn test_only_one_obstacle_recycled_per_tick() {
        let mut session = session_without_chaser();
        for i in 0..3 {
            if let Some(o) = session.obstacles.get_mut(i) {
                o.x = -500.0;
            }
        }
        let events = session.tick();
        assert_eq!(events, vec![GameEvent::ObstacleCleared { score: 1 }]);
        let events = session.tick();
        assert_eq!(events, vec![GameEvent::ObstacleCleared { score: 2 }]);
    }

    #[test]
    fn test_game_over_updates_high_score_once() {
        let mut session = session_without_chaser();
        for _ in 0..3 {
            session.scores.increment();
        }
        let first = session.game_over(GameOverCause::Obstacle);
        assert_eq!(
            first,
            GameEvent::GameOver {
                cause: GameOverCause::Obstacle,
                score: 3,
                high_score: 3,
            }
        );
        let second = session.game_over(GameOverCause::Obstacle);
        assert_eq!(
            second,
            GameEvent::GameOver {
                cause: GameOverCause::Obstacle,
                score: 0,
                high_score: 3,
            }
        );
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_tap_jumps_only_from_ground() {
        let mut session = session_without_chaser();
        session.on_tap();
        assert_eq!(session.player.vertical_velocity, 0.0);

        session.player.pos.y = session.player.ground_y();
        session.on_tap();
        assert_eq!(session.player.vertical_velocity, -30.0);
    }

    #[test]
    fn test_draw_emits_hud_and_entities() {
        let mut session = session_without_chaser();
        session.tick();
        let mut batch = SpriteBatch::new();
        assert!(session.draw(&mut batch));

        let frame = batch.last_frame().expect("frame presented");
        assert_eq!(frame.clear_color, Some(colors::WHITE));
        assert_eq!(frame.texts[0].text, "Score: 0");
        assert_eq!(frame.texts[1].text, "High Score: 0");
        assert_eq!(frame.quads_of(SpriteId::Background).count(), 1);
        assert_eq!(frame.quads_of(SpriteId::Player).count(), 1);
        assert_eq!(frame.quads_of(SpriteId::Chaser).count(), 1);
        assert_eq!(frame.quads_of(SpriteId::Obstacle).count(), 5);
        // Background, score, high score, then player, chaser, obstacles
        assert_eq!(frame.quads[0].sprite, SpriteId::Background);
        assert_eq!(frame.quads[1].sprite, SpriteId::Player);
        assert_eq!(frame.quads[2].sprite, SpriteId::Chaser);
    }

    #[test]
    fn test_invalid_surface_skips_draw() {
        let mut session = session();
        let mut batch = SpriteBatch::new();
        batch.set_valid(false);
        session.tick();
        assert!(!session.draw(&mut batch));
        assert_eq!(batch.frames_presented(), 0);
    }

    proptest! {
        #[test]
        fn obstacle_count_and_boxes_hold(taps in proptest::collection::vec(any::<bool>(), 1..400)) {
            let mut session = session();
            for tap in taps {
                if tap {
                    session.on_tap();
                }
                session.tick();
                prop_assert_eq!(session.obstacles.len(), 5);
                for obstacle in session.obstacles.iter() {
                    let bounds = obstacle.bounding_box();
                    prop_assert_eq!(bounds.left, obstacle.x as i32);
                    prop_assert_eq!(bounds.right, (obstacle.x + 80.0) as i32);
                    prop_assert_eq!(bounds.bottom, (obstacle.y() + 80.0) as i32);
                }
                let chaser = session.chaser.bounding_box();
                prop_assert_eq!(chaser.right, (session.chaser.pos.x + 100.0) as i32);
            }
        }
    }
}
