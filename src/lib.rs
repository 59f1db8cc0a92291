//! Hand Pong - a two-paddle ball game engine driven by hand tracking
//!
//! This crate is the game-state core only: ball and paddle physics,
//! collision response, scoring, pause gating, and the AI fallback that
//! takes over a side with no hand in view. Perception (turning camera
//! frames into normalized paddle targets) and presentation (rendering,
//! windowing) are external collaborators that talk to the engine through
//! [`SideInput`] and [`GameSnapshot`].
//!
//! Core modules:
//! - `config`: every tunable as one value object passed in at construction
//! - `sim`: deterministic tick-driven simulation (ball, paddles, engine)

pub mod config;
pub mod sim;

pub use config::GameConfig;
pub use sim::{Ball, GameEngine, GameSnapshot, Paddle, Score, Side, SideInput, UpdateResult};
