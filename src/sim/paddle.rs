//! Paddle entity, hand positioning, and the AI steering helper

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use crate::config::GameConfig;

/// Which edge of the board a paddle defends. Decides its x anchor, which
/// face the ball can hit, and which way a bounce is forced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// A paddle. `x` is fixed per side at construction; `y` is the top edge
/// and always stays within `[0, board_height - height]`.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub side: Side,
    /// True when this tick's position came from hand tracking, not the AI
    pub hand_controlled: bool,
    /// Last position accepted through the hand deadzone
    last_hand_y: Option<f32>,
}

impl Paddle {
    pub fn new(side: Side, cfg: &GameConfig) -> Self {
        let x = match side {
            Side::Left => cfg.left_paddle_x,
            Side::Right => cfg.right_paddle_x,
        };
        Self {
            x,
            y: (cfg.board_height - cfg.paddle_height) / 2.0,
            width: cfg.paddle_width,
            height: cfg.paddle_height,
            side,
            hand_controlled: false,
            last_hand_y: None,
        }
    }

    fn max_y(&self, cfg: &GameConfig) -> f32 {
        cfg.board_height - self.height
    }

    pub fn move_up(&mut self, speed: f32, cfg: &GameConfig) {
        self.y = (self.y - speed).clamp(0.0, self.max_y(cfg));
    }

    pub fn move_down(&mut self, speed: f32, cfg: &GameConfig) {
        self.y = (self.y + speed).clamp(0.0, self.max_y(cfg));
    }

    /// Map a normalized hand height onto the board, center the paddle on
    /// it, and clamp into bounds. Out-of-range input is clamped, never
    /// rejected.
    ///
    /// With a deadzone configured, a move smaller than the threshold is
    /// dropped outright: the paddle keeps its position and the deadzone
    /// reference stays at the last accepted value.
    pub fn set_position_normalized(&mut self, y_norm: f32, cfg: &GameConfig) {
        let target = y_norm * cfg.board_height;
        let clamped = (target - self.height / 2.0).clamp(0.0, self.max_y(cfg));

        if cfg.hand_deadzone > 0.0
            && let Some(last) = self.last_hand_y
            && (clamped - last).abs() < cfg.hand_deadzone * cfg.board_height
        {
            return;
        }

        self.y = clamped;
        self.last_hand_y = Some(clamped);
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Dead-band steering toward a target y: step down when the center is
    /// above the band, up when below, hold inside it. The band keeps the
    /// AI from oscillating on the spot.
    pub fn move_toward_target(&mut self, target_y: f32, speed: f32, error_margin: f32, cfg: &GameConfig) {
        let center = self.center_y();
        if center < target_y - error_margin {
            self.move_down(speed, cfg);
        } else if center > target_y + error_margin {
            self.move_up(speed, cfg);
        }
    }

    /// Edge-vs-circle collision test with a directional guard: only a ball
    /// still moving toward this paddle counts, which stops a resolved
    /// bounce from re-triggering while the ball is on its way out.
    pub fn collides_with_ball(&self, ball: &Ball) -> bool {
        let x_hit = match self.side {
            Side::Left => {
                ball.pos.x - ball.radius <= self.x + self.width
                    && ball.pos.x >= self.x
                    && ball.vel.x < 0.0
            }
            Side::Right => {
                ball.pos.x + ball.radius >= self.x
                    && ball.pos.x <= self.x + self.width
                    && ball.vel.x > 0.0
            }
        };

        x_hit && ball.pos.y >= self.y && ball.pos.y <= self.y + self.height
    }

    /// Snap the ball just clear of the facing edge so it cannot lodge
    /// inside the paddle before the bounce velocity is applied.
    pub fn push_ball_clear(&self, ball: &mut Ball) {
        ball.pos.x = match self.side {
            Side::Left => self.x + self.width + ball.radius,
            Side::Right => self.x - ball.radius,
        };
    }
}
