//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick-driven only, one `update` per frame interval
//! - Seeded RNG only
//! - No I/O, rendering, or platform dependencies

pub mod ball;
pub mod engine;
pub mod paddle;

pub use ball::Ball;
pub use engine::{
    BallSnapshot, GameEngine, GameSnapshot, PaddleSnapshot, Score, SideInput, UpdateResult,
};
pub use paddle::{Paddle, Side};
