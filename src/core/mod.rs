//! Core types: seats and teams, turn phases, RNG, configuration.

pub mod config;
pub mod phase;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use phase::GamePhase;
pub use player::{Player, PlayerId, PlayerMap, Team, TeamId, TeamMap};
pub use rng::GameRng;
