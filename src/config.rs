//! Game configuration
//!
//! Every tunable lives in one value object handed to the engine at
//! construction, so independent engine instances never share state.
//! Serde-derived so a front end can load overrides from JSON; missing
//! fields fall back to the defaults below.

use serde::{Deserialize, Serialize};

/// All simulation tunables. Units are pixels and pixels per tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board dimensions
    pub board_width: f32,
    pub board_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_initial_speed: f32,
    pub ball_min_speed: f32,
    pub ball_max_speed: f32,
    /// Speed multiplier applied on every paddle hit (capped at max speed)
    pub ball_speed_increase: f32,
    /// Step used by the gesture-driven speed nudges
    pub ball_speed_step: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Movement per tick for manual up/down control
    pub paddle_speed: f32,
    pub left_paddle_x: f32,
    pub right_paddle_x: f32,
    /// Hand-position deadzone as a fraction of board height (0 disables).
    /// Position updates that would move the paddle less than this are
    /// dropped, cutting jitter from noisy tracking.
    pub hand_deadzone: f32,

    // === AI ===
    /// Probability per tick that the AI paddle reacts at all
    pub ai_difficulty: f32,
    pub ai_speed: f32,
    /// Dead-band around the target, in pixels
    pub ai_error_margin: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 600.0,
            board_height: 400.0,

            ball_radius: 8.0,
            ball_initial_speed: 5.0,
            ball_min_speed: 2.0,
            ball_max_speed: 12.0,
            ball_speed_increase: 1.05,
            ball_speed_step: 1.0,

            paddle_width: 10.0,
            paddle_height: 80.0,
            paddle_speed: 6.0,
            left_paddle_x: 10.0,
            right_paddle_x: 580.0,
            hand_deadzone: 0.0,

            ai_difficulty: 0.7,
            ai_speed: 4.0,
            ai_error_margin: 20.0,
        }
    }
}
