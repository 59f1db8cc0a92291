//! Ball entity and motion math

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::Vec2;
use rand::Rng;

use super::paddle::{Paddle, Side};
use crate::config::GameConfig;

/// The ball. Position is in board pixels, velocity in pixels per tick.
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(cfg: &GameConfig, rng: &mut impl Rng) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: cfg.ball_radius,
        };
        ball.reset(cfg, rng);
        ball
    }

    /// Recenter the ball and relaunch it in a fresh random direction:
    /// a launch angle within ±45° of horizontal, aimed left or right
    /// with equal probability, at the configured initial speed.
    pub fn reset(&mut self, cfg: &GameConfig, rng: &mut impl Rng) {
        self.pos = Vec2::new(cfg.board_width / 2.0, cfg.board_height / 2.0);

        let angle = rng.random_range(-FRAC_PI_4..FRAC_PI_4);
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let speed = cfg.ball_initial_speed;

        self.vel = Vec2::new(speed * angle.cos() * direction, speed * angle.sin());
    }

    /// Advance one tick.
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Elastic bounce off the top and bottom walls: clamp to the edge and
    /// invert the vertical component. No horizontal effect.
    pub fn constrain_to_bounds(&mut self, cfg: &GameConfig) {
        if self.pos.y <= self.radius {
            self.pos.y = self.radius;
            self.vel.y = -self.vel.y;
        } else if self.pos.y >= cfg.board_height - self.radius {
            self.pos.y = cfg.board_height - self.radius;
            self.vel.y = -self.vel.y;
        }
    }

    /// Recompute velocity after a paddle hit.
    ///
    /// Where the ball struck the paddle picks the reflection angle: dead
    /// center leaves horizontally, the extreme edges deflect up to ±45°.
    /// `hit_pos` may land slightly outside [0, 1] on grazing contact.
    /// Each hit also multiplies the speed, capped at the configured max,
    /// and the horizontal sign is forced away from the paddle's side.
    pub fn bounce_off_paddle(&mut self, paddle: &Paddle, cfg: &GameConfig) {
        let hit_pos = (self.pos.y - paddle.y) / paddle.height;
        let angle = (hit_pos - 0.5) * FRAC_PI_2;

        let new_speed = (self.speed() * cfg.ball_speed_increase).min(cfg.ball_max_speed);

        self.vel.x = match paddle.side {
            Side::Left => (new_speed * angle.cos()).abs(),
            Side::Right => -(new_speed * angle.cos()).abs(),
        };
        self.vel.y = new_speed * angle.sin();
    }

    /// Ball center has crossed past the left edge.
    pub fn is_out_left(&self) -> bool {
        self.pos.x < 0.0
    }

    /// Ball center has crossed past the right edge.
    pub fn is_out_right(&self, cfg: &GameConfig) -> bool {
        self.pos.x > cfg.board_width
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Gesture-driven speed nudge. Direction is preserved by scaling both
    /// components; no-op at the upper bound.
    pub fn increase_speed(&mut self, cfg: &GameConfig) {
        self.rescale_speed(self.speed() + cfg.ball_speed_step, cfg);
    }

    /// Gesture-driven speed nudge downward; no-op at the lower bound.
    pub fn decrease_speed(&mut self, cfg: &GameConfig) {
        self.rescale_speed(self.speed() - cfg.ball_speed_step, cfg);
    }

    fn rescale_speed(&mut self, target: f32, cfg: &GameConfig) {
        let current = self.speed();
        // Direction is undefined at zero speed
        if current == 0.0 {
            return;
        }
        let clamped = target.clamp(cfg.ball_min_speed, cfg.ball_max_speed);
        self.vel *= clamped / current;
    }
}
