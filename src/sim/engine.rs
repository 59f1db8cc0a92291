//! Game orchestration: the per-tick update, scoring, pause gating, and
//! the AI control policy.
//!
//! The engine is driven by an external fixed-rate scheduler (nominally
//! 60 Hz). Each `update` call is one tick; nothing inside blocks or spans
//! ticks.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::{Paddle, Side};
use crate::config::GameConfig;

/// Per-side control signal for one tick, produced by the perception layer.
/// `target_y` is a fraction of board height; the engine does no smoothing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SideInput {
    pub detected: bool,
    pub target_y: Option<f32>,
}

/// Match score. `left` is player 1, `right` is player 2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

/// What one `update` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResult {
    pub scored: bool,
    pub scorer: Option<Side>,
    pub score: Score,
}

/// Ball state for rendering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed: f32,
}

/// Paddle state for rendering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaddleSnapshot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub hand_controlled: bool,
}

/// Read-only view of the whole game, consumed by the presentation layer
/// once per tick (or at its own display cadence).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub ball: BallSnapshot,
    pub left_paddle: PaddleSnapshot,
    pub right_paddle: PaddleSnapshot,
    pub score: Score,
    pub paused: bool,
}

/// The game engine: one ball, two paddles, score, pause state, and a
/// seeded RNG stream feeding ball launches and the AI reaction roll.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub config: GameConfig,
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub score: Score,
    pub paused: bool,
    seed: u64,
    rng: Pcg32,
}

impl GameEngine {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::new(&config, &mut rng);
        Self {
            ball,
            left_paddle: Paddle::new(Side::Left, &config),
            right_paddle: Paddle::new(Side::Right, &config),
            score: Score::default(),
            paused: false,
            seed,
            rng,
            config,
        }
    }

    /// Seed this engine was constructed with, for reproducing a match.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Full round reset: score cleared, ball relaunched, unpaused.
    pub fn reset(&mut self) {
        self.score = Score::default();
        self.ball.reset(&self.config, &mut self.rng);
        self.paused = false;
    }

    /// Relaunch the ball without touching the score.
    pub fn reset_ball(&mut self) {
        self.ball.reset(&self.config, &mut self.rng);
    }

    /// Flip the pause state and return the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::info!("game {}", if self.paused { "paused" } else { "resumed" });
        self.paused
    }

    pub fn set_pause(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance the game by one tick.
    ///
    /// Order per tick: pause gate, paddle control (hand input wins over
    /// AI), ball motion, wall constraint, paddle collisions (left first),
    /// then the score check. At most one side can score per tick; scoring
    /// relaunches the ball immediately at the initial speed.
    pub fn update(&mut self, left: &SideInput, right: &SideInput) -> UpdateResult {
        if self.paused {
            return UpdateResult {
                scored: false,
                scorer: None,
                score: self.score,
            };
        }

        self.left_paddle.hand_controlled = false;
        self.right_paddle.hand_controlled = false;

        let ball_y = self.ball.pos.y;
        Self::drive_paddle(&mut self.left_paddle, left, ball_y, &mut self.rng, &self.config);
        Self::drive_paddle(&mut self.right_paddle, right, ball_y, &mut self.rng, &self.config);

        self.ball.advance();
        self.ball.constrain_to_bounds(&self.config);

        if self.left_paddle.collides_with_ball(&self.ball) {
            self.left_paddle.push_ball_clear(&mut self.ball);
            self.ball.bounce_off_paddle(&self.left_paddle, &self.config);
        }
        if self.right_paddle.collides_with_ball(&self.ball) {
            self.right_paddle.push_ball_clear(&mut self.ball);
            self.ball.bounce_off_paddle(&self.right_paddle, &self.config);
        }

        let scorer = if self.ball.is_out_left() {
            self.score.right += 1;
            Some(Side::Right)
        } else if self.ball.is_out_right(&self.config) {
            self.score.left += 1;
            Some(Side::Left)
        } else {
            None
        };

        if let Some(side) = scorer {
            log::info!(
                "{:?} player scores, {} - {}",
                side,
                self.score.left,
                self.score.right
            );
            self.ball.reset(&self.config, &mut self.rng);
        }

        UpdateResult {
            scored: scorer.is_some(),
            scorer,
            score: self.score,
        }
    }

    /// Hand input wins when a target is present; otherwise the AI reacts
    /// with probability `ai_difficulty`, modeling imperfect reaction time
    /// rather than continuous skill.
    fn drive_paddle(
        paddle: &mut Paddle,
        input: &SideInput,
        ball_y: f32,
        rng: &mut Pcg32,
        cfg: &GameConfig,
    ) {
        match (input.detected, input.target_y) {
            (true, Some(target)) => {
                paddle.set_position_normalized(target, cfg);
                paddle.hand_controlled = true;
            }
            _ => {
                if rng.random_bool(f64::from(cfg.ai_difficulty).clamp(0.0, 1.0)) {
                    paddle.move_toward_target(ball_y, cfg.ai_speed, cfg.ai_error_margin, cfg);
                }
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let paddle_snapshot = |p: &Paddle| PaddleSnapshot {
            x: p.x,
            y: p.y,
            width: p.width,
            height: p.height,
            hand_controlled: p.hand_controlled,
        };

        GameSnapshot {
            ball: BallSnapshot {
                x: self.ball.pos.x,
                y: self.ball.pos.y,
                radius: self.ball.radius,
                speed: self.ball.speed(),
            },
            left_paddle: paddle_snapshot(&self.left_paddle),
            right_paddle: paddle_snapshot(&self.right_paddle),
            score: self.score,
            paused: self.paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn engine() -> GameEngine {
        GameEngine::new(GameConfig::default(), 42)
    }

    /// Config with the AI pinned off, so paddle motion is fully scripted.
    fn engine_no_ai() -> GameEngine {
        let cfg = GameConfig {
            ai_difficulty: 0.0,
            ..GameConfig::default()
        };
        GameEngine::new(cfg, 42)
    }

    fn hand(target_y: f32) -> SideInput {
        SideInput {
            detected: true,
            target_y: Some(target_y),
        }
    }

    #[test]
    fn paused_update_mutates_nothing() {
        let mut engine = engine();
        engine.toggle_pause();

        let ball_pos = engine.ball.pos;
        let left_y = engine.left_paddle.y;
        let right_y = engine.right_paddle.y;

        for _ in 0..10 {
            let result = engine.update(&hand(0.1), &hand(0.9));
            assert!(!result.scored);
            assert_eq!(result.scorer, None);
        }

        assert_eq!(engine.ball.pos, ball_pos);
        assert_eq!(engine.left_paddle.y, left_y);
        assert_eq!(engine.right_paddle.y, right_y);
        assert_eq!(engine.score, Score::default());
    }

    #[test]
    fn double_toggle_returns_to_running() {
        let mut engine = engine();
        assert!(!engine.is_paused());
        assert!(engine.toggle_pause());
        assert!(!engine.toggle_pause());

        // And the engine behaves as if never paused
        engine.ball.vel = Vec2::new(2.0, 0.0);
        let x_before = engine.ball.pos.x;
        engine.update(&SideInput::default(), &SideInput::default());
        assert_eq!(engine.ball.pos.x, x_before + 2.0);
    }

    #[test]
    fn hand_input_positions_paddle_and_sets_flag() {
        let mut engine = engine_no_ai();

        engine.update(&hand(0.25), &SideInput::default());
        // 0.25 * 400 = 100, centered: 100 - 40 = 60
        assert_eq!(engine.left_paddle.y, 60.0);
        assert!(engine.left_paddle.hand_controlled);
        assert!(!engine.right_paddle.hand_controlled);
    }

    #[test]
    fn hand_flag_clears_when_hand_disappears() {
        let mut engine = engine_no_ai();

        engine.update(&hand(0.5), &SideInput::default());
        assert!(engine.left_paddle.hand_controlled);

        engine.update(&SideInput::default(), &SideInput::default());
        assert!(!engine.left_paddle.hand_controlled);
    }

    #[test]
    fn detected_without_target_falls_back_to_ai() {
        let cfg = GameConfig {
            ai_difficulty: 1.0,
            ..GameConfig::default()
        };
        let mut engine = GameEngine::new(cfg, 42);
        engine.ball.pos = Vec2::new(300.0, 390.0);
        engine.ball.vel = Vec2::ZERO;

        let detected_only = SideInput {
            detected: true,
            target_y: None,
        };
        let y_before = engine.left_paddle.y;
        engine.update(&detected_only, &SideInput::default());

        assert!(!engine.left_paddle.hand_controlled);
        assert!(engine.left_paddle.y > y_before);
    }

    #[test]
    fn ai_at_full_difficulty_tracks_ball_every_tick() {
        let cfg = GameConfig {
            ai_difficulty: 1.0,
            ..GameConfig::default()
        };
        let mut engine = GameEngine::new(cfg, 42);
        engine.ball.pos = Vec2::new(300.0, 40.0);
        engine.ball.vel = Vec2::ZERO;

        let idle = SideInput::default();
        for _ in 0..5 {
            engine.update(&idle, &idle);
        }
        // 5 ticks upward at ai_speed 4
        assert_eq!(engine.left_paddle.y, 140.0);
        assert_eq!(engine.right_paddle.y, 140.0);
    }

    #[test]
    fn ai_at_zero_difficulty_never_moves() {
        let mut engine = engine_no_ai();
        engine.ball.pos = Vec2::new(300.0, 40.0);
        engine.ball.vel = Vec2::ZERO;

        let idle = SideInput::default();
        for _ in 0..20 {
            engine.update(&idle, &idle);
        }
        assert_eq!(engine.left_paddle.y, 160.0);
        assert_eq!(engine.right_paddle.y, 160.0);
    }

    #[test]
    fn scoring_resets_ball_but_not_score() {
        let mut engine = engine_no_ai();
        engine.ball.pos = Vec2::new(2.0, 200.0);
        engine.ball.vel = Vec2::new(-5.0, 0.0);
        // Keep the left paddle out of the ball's path
        engine.left_paddle.y = 0.0;

        let idle = SideInput::default();
        let result = engine.update(&idle, &idle);

        assert!(result.scored);
        assert_eq!(result.scorer, Some(Side::Right));
        assert_eq!(result.score, Score { left: 0, right: 1 });
        assert_eq!(engine.ball.pos, Vec2::new(300.0, 200.0));
        assert!((engine.ball.speed() - engine.config.ball_initial_speed).abs() < 1e-4);
    }

    #[test]
    fn full_reset_clears_score_and_unpauses() {
        let mut engine = engine_no_ai();
        engine.score = Score { left: 3, right: 7 };
        engine.set_pause(true);

        engine.reset();

        assert_eq!(engine.score, Score::default());
        assert!(!engine.is_paused());
        assert_eq!(engine.ball.pos, Vec2::new(300.0, 200.0));
    }

    #[test]
    fn same_seed_replays_the_same_match() {
        let idle = SideInput::default();
        let run = |seed: u64| {
            let mut engine = GameEngine::new(GameConfig::default(), seed);
            for _ in 0..2000 {
                engine.update(&idle, &idle);
            }
            (engine.ball.pos, engine.score)
        };

        assert_eq!(run(7), run(7));
    }

    #[test]
    fn snapshot_reflects_engine_state() {
        let mut engine = engine_no_ai();
        engine.update(&hand(0.25), &SideInput::default());

        let snap = engine.snapshot();
        assert_eq!(snap.ball.x, engine.ball.pos.x);
        assert_eq!(snap.left_paddle.y, 60.0);
        assert!(snap.left_paddle.hand_controlled);
        assert!(!snap.right_paddle.hand_controlled);
        assert!(!snap.paused);

        // Snapshot is the wire format toward the presentation layer
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"hand_controlled\":true"));
    }
}
