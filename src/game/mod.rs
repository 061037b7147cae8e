//! Match orchestration: dealing, the step loop, snapshots, history, and
//! the registry of running matches.

#[allow(clippy::module_inception)]
pub mod game;
pub mod history;
pub mod registry;
pub mod state;

pub use game::{Game, MatchSetup, StepOutcome};
pub use history::{GameHistory, HistoryEntry};
pub use registry::{Match, MatchId, MatchRegistry};
pub use state::{GameState, PlayerView};
