//! Headless demo: an AI-vs-AI match
//!
//! Stands in for the desktop front end. Drives the engine the same way a
//! perception/presentation pair would - one update per tick, snapshot out
//! the other side - minus the camera and the rendering.
//!
//! Usage: `hand-pong [config.json] [seed]`

use hand_pong::{GameConfig, GameEngine, SideInput};

/// 60 Hz for 60 seconds
const MATCH_TICKS: u32 = 60 * 60;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_config(&path),
        None => GameConfig::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5EED_CAFE);

    log::info!("starting AI-vs-AI match, seed {seed}");
    let mut engine = GameEngine::new(config, seed);

    // No hands in view on either side: both paddles fall to the AI
    let idle = SideInput::default();
    for _ in 0..MATCH_TICKS {
        engine.update(&idle, &idle);
    }

    let score = engine.score;
    log::info!(
        "match over: {} - {} after {} ticks",
        score.left,
        score.right,
        MATCH_TICKS
    );

    match serde_json::to_string_pretty(&engine.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize final snapshot: {err}"),
    }
}

fn load_config(path: &str) -> GameConfig {
    let loaded = std::fs::read_to_string(path)
        .map_err(|err| err.to_string())
        .and_then(|json| serde_json::from_str(&json).map_err(|err| err.to_string()));

    match loaded {
        Ok(config) => {
            log::info!("loaded config from {path}");
            config
        }
        Err(err) => {
            log::warn!("could not load config from {path} ({err}), using defaults");
            GameConfig::default()
        }
    }
}
