//! # canasta-engine
//!
//! Rules engine for four-player partnership Canasta.
//!
//! ## Design Principles
//!
//! 1. **Validate, then apply**: every move is checked against the current
//!    position before it touches any card. A refused move changes nothing.
//!
//! 2. **One owner per card**: a card is always in exactly one place (deck,
//!    discard stack, side pile, a hand, or a laid-down series).
//!
//! 3. **Agents decide, the engine referees**: decisions come from
//!    `PlayerAgent`s; the engine only enumerates, validates, and applies.
//!
//! ## Architecture
//!
//! - **Phase machine**: the board holds the current `GamePhase`. Each
//!   executed action reports the phase that follows; the orchestrator sets
//!   it and rotates turns on end-turn phases.
//!
//! - **Persistent Data Structures**: `im` collections make a board clone
//!   O(1), so every step can hand agents a snapshot and log one.
//!
//! - **Deterministic**: deals and automated agents run off seeded ChaCha8.
//!
//! ## Modules
//!
//! - `core`: Seats, teams, phases, RNG, configuration
//! - `cards`: Cards, series, deck, discard stack, hands
//! - `board`: Shared table state and the hand-clear rule
//! - `actions`: The move kinds and their validation
//! - `rules`: Move enumeration, scoring, termination
//! - `game`: Dealing, the step loop, snapshots, history, match registry
//! - `agents`: Random, greedy, and externally driven players

pub mod actions;
pub mod agents;
pub mod board;
pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameConfig, GamePhase, GameRng, Player, PlayerId, PlayerMap, Team, TeamId, TeamMap};

pub use crate::cards::{Card, CardSeries, Deck, Hand, Rank, Stack, Suit};

pub use crate::board::{Board, BoardView, TeamArea};

pub use crate::actions::{Action, ActionRecord, Move};

pub use crate::rules::{legal_actions, FinishReason, GameResult};

pub use crate::game::{
    Game, GameHistory, GameState, HistoryEntry, Match, MatchId, MatchRegistry, MatchSetup, PlayerView,
    StepOutcome,
};

pub use crate::agents::{GreedyAgent, PlayerAgent, QueuedAgent, RandomAgent};

pub use crate::error::{EngineError, Rejected, Rejection};
